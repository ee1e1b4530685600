use uuid::Uuid;

use crate::domain::campaign::Campaign;
use crate::dto::campaign::{
    CampaignsQuery, CampaignsResponse, CreateCampaignRequest, UpdateCampaignRequest,
};
use crate::pagination::PaginationCursor;
use crate::repository::{
    CampaignListQuery, CampaignReader, CampaignSortKey, CampaignWriter, DEFAULT_PAGE_SIZE,
};
use crate::services::{ServiceError, ServiceResult};

/// Fetches a campaign by id. Missing and soft-deleted rows are both `None`.
pub fn get_campaign_by_id<R>(repo: &R, id: Uuid) -> ServiceResult<Option<Campaign>>
where
    R: CampaignReader + ?Sized,
{
    let campaign = repo.get_by_id(id)?;
    Ok(campaign.filter(|c| !c.is_deleted))
}

/// Returns one page of active campaigns for the given filters.
///
/// A continuation token that fails to decode degrades to "no cursor"; sort
/// keys outside the known set fall back to the default newest-first order.
pub fn list_campaigns<R>(repo: &R, params: CampaignsQuery) -> ServiceResult<CampaignsResponse>
where
    R: CampaignReader + ?Sized,
{
    let mut query = CampaignListQuery::new(params.page_size.unwrap_or(DEFAULT_PAGE_SIZE));

    if let Some(term) = params
        .name
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    {
        query = query.name(term);
    }

    if let Some(status) = params.status {
        query = query.status(status);
    }

    if let Some(key) = params.sort_by.as_deref().and_then(CampaignSortKey::parse) {
        query = query.sort(key, params.sort_descending);
    }

    if let Some(cursor) = params
        .continuation_token
        .as_deref()
        .and_then(PaginationCursor::decode)
    {
        query = query.cursor(cursor);
    }

    let page = repo.list(query)?;

    Ok(CampaignsResponse {
        total: page.total,
        next_token: page.next_token,
        campaigns: page.items.into_iter().map(Into::into).collect(),
    })
}

/// Creates a campaign owned by `created_by`.
///
/// The `get_by_name` check is a fast path for a better error message; the
/// storage-level unique index still catches the check-then-insert race and
/// surfaces as the same `Conflict`.
pub fn create_campaign<R>(
    repo: &R,
    form: CreateCampaignRequest,
    created_by: &str,
) -> ServiceResult<Campaign>
where
    R: CampaignReader + CampaignWriter + ?Sized,
{
    if repo.get_by_name(&form.name)?.is_some() {
        return Err(ServiceError::Conflict(format!(
            "a campaign with the name '{}' already exists",
            form.name
        )));
    }

    let campaign = Campaign::create(
        form.name,
        form.description,
        form.start_date,
        form.end_date,
        form.budget,
        created_by.to_string(),
    )?;

    Ok(repo.insert(&campaign)?)
}

/// Merge-patches a campaign: present fields override, absent fields keep
/// their stored values, and the whole row is re-validated before persisting.
/// Returns `None` for missing or soft-deleted ids.
pub fn update_campaign<R>(
    repo: &R,
    id: Uuid,
    patch: UpdateCampaignRequest,
) -> ServiceResult<Option<Campaign>>
where
    R: CampaignReader + CampaignWriter + ?Sized,
{
    let Some(mut campaign) = repo.get_by_id(id)? else {
        return Ok(None);
    };
    if campaign.is_deleted {
        return Ok(None);
    }

    if let Some(new_name) = patch.name.as_ref()
        && *new_name != campaign.name
        && let Some(existing) = repo.get_by_name(new_name)?
        && existing.id != id
    {
        return Err(ServiceError::Conflict(format!(
            "a campaign with the name '{new_name}' already exists"
        )));
    }

    campaign.update(
        patch.name.unwrap_or(campaign.name.clone()),
        patch.description.unwrap_or(campaign.description.clone()),
        patch.start_date.unwrap_or(campaign.start_date),
        patch.end_date.unwrap_or(campaign.end_date),
        patch.budget.unwrap_or(campaign.budget),
        patch.status.unwrap_or(campaign.status),
    )?;

    Ok(Some(repo.update(&campaign)?))
}

/// Soft-deletes a campaign. Returns `false` for missing or already-deleted
/// ids; repeating a successful delete is therefore safe for callers.
pub fn delete_campaign<R>(repo: &R, id: Uuid) -> ServiceResult<bool>
where
    R: CampaignReader + CampaignWriter + ?Sized,
{
    let Some(mut campaign) = repo.get_by_id(id)? else {
        return Ok(false);
    };
    if campaign.is_deleted {
        return Ok(false);
    }

    campaign.soft_delete();
    repo.update(&campaign)?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::domain::campaign::{CampaignStatus, DomainError};
    use crate::domain::types::Patch;
    use crate::pagination::Paginated;
    use crate::repository::mock::MockRepository;

    fn existing_campaign() -> Campaign {
        Campaign::create(
            "Spring Sale".to_string(),
            "Seasonal discount push".to_string(),
            Utc::now().naive_utc() - Duration::days(1),
            Utc::now().naive_utc() + Duration::days(30),
            5000.0,
            "alice".to_string(),
        )
        .unwrap()
    }

    fn create_form(name: &str) -> CreateCampaignRequest {
        CreateCampaignRequest {
            name: name.to_string(),
            description: "desc".to_string(),
            start_date: Utc::now().naive_utc() - Duration::days(1),
            end_date: Utc::now().naive_utc() + Duration::days(1),
            budget: 100.0,
        }
    }

    #[test]
    fn get_treats_soft_deleted_as_missing() {
        let mut deleted = existing_campaign();
        deleted.soft_delete();
        let id = deleted.id;

        let mut repo = MockRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(deleted.clone())));

        assert!(get_campaign_by_id(&repo, id).unwrap().is_none());
    }

    #[test]
    fn create_rejects_duplicate_active_name() {
        let mut repo = MockRepository::new();
        repo.expect_get_by_name()
            .returning(|_| Ok(Some(existing_campaign())));
        repo.expect_insert().never();

        let err = create_campaign(&repo, create_form("Spring Sale"), "alice").unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[test]
    fn create_persists_a_draft_owned_by_the_caller() {
        let mut repo = MockRepository::new();
        repo.expect_get_by_name().returning(|_| Ok(None));
        repo.expect_insert().returning(|c| Ok(c.clone()));

        let created = create_campaign(&repo, create_form("Autumn Push"), "bob").unwrap();
        assert_eq!(created.status, CampaignStatus::Draft);
        assert_eq!(created.created_by, "bob");
        assert_eq!(created.created_at, created.updated_at);
    }

    #[test]
    fn update_with_only_name_preserves_every_other_field() {
        let current = existing_campaign();
        let id = current.id;
        let snapshot = current.clone();

        let mut repo = MockRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(current.clone())));
        repo.expect_get_by_name().returning(|_| Ok(None));
        repo.expect_update().returning(|c| Ok(c.clone()));

        let patch = UpdateCampaignRequest {
            name: Patch::Set("Spring Sale 2".to_string()),
            ..Default::default()
        };
        let updated = update_campaign(&repo, id, patch).unwrap().unwrap();

        assert_eq!(updated.name, "Spring Sale 2");
        assert_eq!(updated.description, snapshot.description);
        assert_eq!(updated.start_date, snapshot.start_date);
        assert_eq!(updated.end_date, snapshot.end_date);
        assert_eq!(updated.budget, snapshot.budget);
        assert_eq!(updated.status, snapshot.status);
        assert_eq!(updated.created_by, snapshot.created_by);
        assert_eq!(updated.created_at, snapshot.created_at);
    }

    #[test]
    fn update_checks_uniqueness_only_when_the_name_changes() {
        let current = existing_campaign();
        let id = current.id;

        let mut repo = MockRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(current.clone())));
        // Same name: no uniqueness lookup must happen.
        repo.expect_get_by_name().never();
        repo.expect_update().returning(|c| Ok(c.clone()));

        let patch = UpdateCampaignRequest {
            name: Patch::Set("Spring Sale".to_string()),
            budget: Patch::Set(7000.0),
            ..Default::default()
        };
        let updated = update_campaign(&repo, id, patch).unwrap().unwrap();
        assert_eq!(updated.budget, 7000.0);
    }

    #[test]
    fn update_conflicts_when_the_new_name_belongs_to_another_campaign() {
        let current = existing_campaign();
        let id = current.id;
        let other = existing_campaign();

        let mut repo = MockRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(current.clone())));
        repo.expect_get_by_name()
            .returning(move |_| Ok(Some(other.clone())));
        repo.expect_update().never();

        let patch = UpdateCampaignRequest {
            name: Patch::Set("Taken".to_string()),
            ..Default::default()
        };
        let err = update_campaign(&repo, id, patch).unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[test]
    fn update_rejects_activation_before_the_start_date() {
        let current = existing_campaign();
        let id = current.id;

        let mut repo = MockRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(current.clone())));
        repo.expect_update().never();

        let patch = UpdateCampaignRequest {
            start_date: Patch::Set(Utc::now().naive_utc() + Duration::days(5)),
            end_date: Patch::Set(Utc::now().naive_utc() + Duration::days(10)),
            status: Patch::Set(CampaignStatus::Active),
            ..Default::default()
        };
        let err = update_campaign(&repo, id, patch).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Domain(DomainError::InvalidStateTransition(_))
        ));
    }

    #[test]
    fn update_and_delete_report_missing_ids_without_writes() {
        let mut repo = MockRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let id = Uuid::new_v4();
        assert!(
            update_campaign(&repo, id, UpdateCampaignRequest::default())
                .unwrap()
                .is_none()
        );
        assert!(!delete_campaign(&repo, id).unwrap());
    }

    #[test]
    fn delete_soft_deletes_and_reports_true() {
        let current = existing_campaign();
        let id = current.id;

        let mut repo = MockRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(current.clone())));
        repo.expect_update()
            .withf(|c| c.is_deleted)
            .returning(|c| Ok(c.clone()));

        assert!(delete_campaign(&repo, id).unwrap());
    }

    #[test]
    fn garbage_continuation_tokens_degrade_to_the_first_page() {
        let mut repo = MockRepository::new();
        repo.expect_list()
            .withf(|query| query.cursor.is_none() && query.is_default_order())
            .returning(|_| {
                Ok(Paginated {
                    items: vec![],
                    total: 0,
                    next_token: None,
                })
            });

        let params = CampaignsQuery {
            continuation_token: Some("!!! not a token !!!".to_string()),
            ..Default::default()
        };
        let response = list_campaigns(&repo, params).unwrap();
        assert_eq!(response.total, 0);
        assert!(response.next_token.is_none());
    }

    #[test]
    fn unrecognized_sort_keys_fall_back_to_newest_first() {
        let mut repo = MockRepository::new();
        repo.expect_list()
            .withf(|query| query.is_default_order() && query.page_size == 50)
            .returning(|_| {
                Ok(Paginated {
                    items: vec![existing_campaign()],
                    total: 1,
                    next_token: None,
                })
            });

        let params = CampaignsQuery {
            page_size: Some(50),
            sort_by: Some("relevance".to_string()),
            sort_descending: false,
            ..Default::default()
        };
        let response = list_campaigns(&repo, params).unwrap();
        assert_eq!(response.campaigns.len(), 1);
        assert_eq!(response.total, 1);
    }

    #[test]
    fn blank_name_filters_are_dropped() {
        let mut repo = MockRepository::new();
        repo.expect_list()
            .withf(|query| query.name.is_none())
            .returning(|_| {
                Ok(Paginated {
                    items: vec![],
                    total: 0,
                    next_token: None,
                })
            });

        let params = CampaignsQuery {
            name: Some("   ".to_string()),
            ..Default::default()
        };
        list_campaigns(&repo, params).unwrap();
    }
}
