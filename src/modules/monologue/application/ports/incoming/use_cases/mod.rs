mod create_monologue;
mod delete_monologue;
mod get_monologues;
mod monologue_error;
mod patch_monologue;
mod publish_monologue;

pub use create_monologue::CreateMonologueUseCase;
pub use delete_monologue::DeleteMonologueUseCase;
pub use get_monologues::{GetMonologueUseCase, GetMonologuesUseCase};
pub use monologue_error::MonologueError;
pub use patch_monologue::PatchMonologueUseCase;
pub use publish_monologue::{PublishMonologueUseCase, UnpublishMonologueUseCase};
