mod code_category_service;

pub use code_category_service::{
    CreateCodeCategoryService, DeleteCodeCategoryService, GetCodeCategoriesService,
    GetCodeCategoryHierarchyService, PatchCodeCategoryService,
};
