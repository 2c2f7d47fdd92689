use async_trait::async_trait;
use uuid::Uuid;

use crate::profile::application::domain::entities::{
    CreateProfileData, NewProfile, PatchProfileData, Profile, ProfileChanges,
};
use crate::profile::application::ports::incoming::use_cases::{
    CreateProfileUseCase, DeleteProfileUseCase, GetProfileUseCase, PatchProfileUseCase,
    ProfileError,
};
use crate::profile::application::ports::outgoing::ProfileRepository;

pub struct GetProfileService<R: ProfileRepository> {
    repository: R,
}

impl<R: ProfileRepository> GetProfileService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetProfileUseCase for GetProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Profile, ProfileError> {
        Ok(self.repository.find_default().await?)
    }
}

pub struct CreateProfileService<R: ProfileRepository> {
    repository: R,
}

impl<R: ProfileRepository> CreateProfileService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateProfileUseCase for CreateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, data: CreateProfileData) -> Result<Profile, ProfileError> {
        let new = NewProfile::try_from(data)?;
        Ok(self.repository.create(new).await?)
    }
}

pub struct PatchProfileService<R: ProfileRepository> {
    repository: R,
}

impl<R: ProfileRepository> PatchProfileService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchProfileUseCase for PatchProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, data: PatchProfileData) -> Result<Profile, ProfileError> {
        let changes = ProfileChanges::try_from(data)?;
        Ok(self.repository.update(id, changes).await?)
    }
}

pub struct DeleteProfileService<R: ProfileRepository> {
    repository: R,
}

impl<R: ProfileRepository> DeleteProfileService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteProfileUseCase for DeleteProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), ProfileError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ProfileError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::application::domain::entities::SocialLink;
    use crate::profile::application::ports::outgoing::ProfileRepositoryError;
    use crate::shared::patch::PatchField;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub ProfileRepo {}
        #[async_trait]
        impl ProfileRepository for ProfileRepo {
            async fn find_default(&self) -> Result<Profile, ProfileRepositoryError>;
            async fn create(&self, data: NewProfile) -> Result<Profile, ProfileRepositoryError>;
            async fn update(&self, id: Uuid, changes: ProfileChanges) -> Result<Profile, ProfileRepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<bool, ProfileRepositoryError>;
        }
    }

    fn profile() -> Profile {
        Profile {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            title: Some("Engineer".to_string()),
            bio: None,
            avatar_url: None,
            social_links: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_no_profile_is_not_found() {
        let mut repo = MockProfileRepo::new();
        repo.expect_find_default()
            .returning(|| Err(ProfileRepositoryError::NotFound));

        let result = GetProfileService::new(repo).execute().await;

        assert_eq!(result.unwrap_err(), ProfileError::NotFound);
    }

    #[tokio::test]
    async fn test_create_passes_links_through() {
        let mut repo = MockProfileRepo::new();
        repo.expect_create()
            .withf(|new| new.social_links.len() == 1 && new.name == "Ada")
            .returning(|_| Ok(profile()));

        let result = CreateProfileService::new(repo)
            .execute(CreateProfileData {
                name: " Ada ".to_string(),
                social_links: vec![SocialLink {
                    platform: "github".to_string(),
                    url: "https://github.com/ada".to_string(),
                    icon: Some("gh".to_string()),
                }],
                ..Default::default()
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_patch_null_name_rejected() {
        let mut repo = MockProfileRepo::new();
        repo.expect_update().times(0);

        let result = PatchProfileService::new(repo)
            .execute(
                Uuid::new_v4(),
                PatchProfileData {
                    name: PatchField::Null,
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(ProfileError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut repo = MockProfileRepo::new();
        repo.expect_delete().returning(|_| Ok(false));

        let result = DeleteProfileService::new(repo)
            .execute(Uuid::new_v4())
            .await;

        assert_eq!(result.unwrap_err(), ProfileError::NotFound);
    }
}
