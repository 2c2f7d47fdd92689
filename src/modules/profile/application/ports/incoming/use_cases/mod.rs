mod create_profile;
mod delete_profile;
mod get_profile;
mod patch_profile;
mod profile_error;

pub use create_profile::CreateProfileUseCase;
pub use delete_profile::DeleteProfileUseCase;
pub use get_profile::GetProfileUseCase;
pub use patch_profile::PatchProfileUseCase;
pub use profile_error::ProfileError;
