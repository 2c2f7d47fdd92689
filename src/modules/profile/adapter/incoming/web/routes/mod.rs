mod create_profile;
mod delete_profile;
mod error_response;
mod get_profile;
mod patch_profile;

pub use create_profile::create_profile_handler;
pub use delete_profile::delete_profile_handler;
pub use get_profile::get_profile_handler;
pub use patch_profile::patch_profile_handler;
