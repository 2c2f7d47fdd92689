mod create_experience;
mod delete_experience;
mod error_response;
mod get_experiences;
mod patch_experience;

pub use create_experience::create_experience_handler;
pub use delete_experience::delete_experience_handler;
pub use get_experiences::get_experiences_handler;
pub use patch_experience::patch_experience_handler;
