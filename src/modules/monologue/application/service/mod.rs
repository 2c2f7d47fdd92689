pub mod monologue_command_service;
pub mod monologue_query_service;

pub use monologue_command_service::{
    CreateMonologueService, DeleteMonologueService, PatchMonologueService,
    PublishMonologueService, UnpublishMonologueService,
};
pub use monologue_query_service::{GetMonologueService, GetMonologuesService};
