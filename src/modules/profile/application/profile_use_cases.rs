use std::sync::Arc;

use crate::profile::application::ports::incoming::use_cases::{
    CreateProfileUseCase, DeleteProfileUseCase, GetProfileUseCase, PatchProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get_default: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub create: Arc<dyn CreateProfileUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchProfileUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProfileUseCase + Send + Sync>,
}
