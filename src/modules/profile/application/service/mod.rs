mod profile_service;

pub use profile_service::{
    CreateProfileService, DeleteProfileService, GetProfileService, PatchProfileService,
};
