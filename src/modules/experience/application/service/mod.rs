mod experience_service;

pub use experience_service::{
    CreateExperienceService, DeleteExperienceService, GetExperiencesService,
    PatchExperienceService,
};
