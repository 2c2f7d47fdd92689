mod create_skill;
mod delete_skill;
mod error_response;
mod get_skills;
mod patch_skill;

pub use create_skill::create_skill_handler;
pub use delete_skill::delete_skill_handler;
pub use get_skills::{get_skills_by_category_handler, get_skills_handler};
pub use patch_skill::patch_skill_handler;
