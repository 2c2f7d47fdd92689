mod create_experience;
mod delete_experience;
mod experience_error;
mod get_experiences;
mod patch_experience;

pub use create_experience::CreateExperienceUseCase;
pub use delete_experience::DeleteExperienceUseCase;
pub use experience_error::ExperienceError;
pub use get_experiences::GetExperiencesUseCase;
pub use patch_experience::PatchExperienceUseCase;
