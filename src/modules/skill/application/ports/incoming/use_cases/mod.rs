mod create_skill;
mod delete_skill;
mod get_skills;
mod patch_skill;
mod skill_error;

pub use create_skill::CreateSkillUseCase;
pub use delete_skill::DeleteSkillUseCase;
pub use get_skills::{GetSkillsByCategoryUseCase, GetSkillsUseCase};
pub use patch_skill::PatchSkillUseCase;
pub use skill_error::SkillError;
