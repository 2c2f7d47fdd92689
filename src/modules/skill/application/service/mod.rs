mod skill_service;

pub use skill_service::{
    CreateSkillService, DeleteSkillService, GetSkillsByCategoryService, GetSkillsService,
    PatchSkillService,
};
