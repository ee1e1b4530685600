//! Mock repository for isolating services in tests.

use mockall::mock;
use uuid::Uuid;

use crate::domain::campaign::Campaign;
use crate::pagination::Paginated;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CampaignListQuery, CampaignReader, CampaignWriter};

mock! {
    pub Repository {}

    impl CampaignReader for Repository {
        fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<Campaign>>;
        fn get_by_name(&self, name: &str) -> RepositoryResult<Option<Campaign>>;
        fn exists(&self, id: Uuid) -> RepositoryResult<bool>;
        fn list(&self, query: CampaignListQuery) -> RepositoryResult<Paginated<Campaign>>;
    }

    impl CampaignWriter for Repository {
        fn insert(&self, campaign: &Campaign) -> RepositoryResult<Campaign>;
        fn update(&self, campaign: &Campaign) -> RepositoryResult<Campaign>;
    }
}
