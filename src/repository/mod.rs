//! Storage traits consumed by the service layer.
//!
//! Implementations persist whatever the domain hands them and apply no
//! business rules; soft-deletion filtering for reads is the one exception
//! spelled out on each method.

use uuid::Uuid;

use crate::domain::campaign::{Campaign, CampaignStatus};
use crate::pagination::{Paginated, PaginationCursor};
use crate::repository::errors::RepositoryResult;

pub mod campaign;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Hard cap on the number of rows a single page may return.
pub const MAX_PAGE_SIZE: i64 = 100;
/// Page size used when the caller supplies none.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Sortable columns for campaign listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CampaignSortKey {
    Name,
    Budget,
    StartDate,
    EndDate,
    CreatedAt,
}

impl CampaignSortKey {
    /// Parses a query-string sort key; `None` for anything unrecognized so
    /// callers can fall back to the default ordering.
    pub fn parse(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "name" => Some(CampaignSortKey::Name),
            "budget" => Some(CampaignSortKey::Budget),
            "startdate" => Some(CampaignSortKey::StartDate),
            "enddate" => Some(CampaignSortKey::EndDate),
            "createdat" => Some(CampaignSortKey::CreatedAt),
            _ => None,
        }
    }
}

/// Filter, sort and window parameters for one listing request.
#[derive(Debug, Clone)]
pub struct CampaignListQuery {
    pub page_size: i64,
    pub name: Option<String>,
    pub status: Option<CampaignStatus>,
    pub sort_by: CampaignSortKey,
    pub descending: bool,
    pub cursor: Option<PaginationCursor>,
}

impl CampaignListQuery {
    /// Starts a query with the default ordering (newest first). The page size
    /// is clamped into `1..=MAX_PAGE_SIZE`.
    pub fn new(page_size: i64) -> Self {
        Self {
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            name: None,
            status: None,
            sort_by: CampaignSortKey::CreatedAt,
            descending: true,
            cursor: None,
        }
    }

    /// Case-insensitive substring filter on the campaign name.
    pub fn name(mut self, term: impl Into<String>) -> Self {
        self.name = Some(term.into());
        self
    }

    pub fn status(mut self, status: CampaignStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn sort(mut self, sort_by: CampaignSortKey, descending: bool) -> Self {
        self.sort_by = sort_by;
        self.descending = descending;
        self
    }

    pub fn cursor(mut self, cursor: PaginationCursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Whether this query uses the default `created_at` descending order.
    ///
    /// The keyset predicate is only correct under that ordering, so cursors
    /// are honored and continuation tokens produced exclusively for it; any
    /// other sort ignores a supplied cursor.
    pub fn is_default_order(&self) -> bool {
        self.sort_by == CampaignSortKey::CreatedAt && self.descending
    }
}

pub trait CampaignReader {
    /// Fetches a row by id regardless of its deletion flag; not-found
    /// semantics for deleted rows live in the service layer.
    fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<Campaign>>;

    /// Exact-name lookup among active (non-deleted) campaigns.
    fn get_by_name(&self, name: &str) -> RepositoryResult<Option<Campaign>>;

    fn exists(&self, id: Uuid) -> RepositoryResult<bool>;

    /// Filtered, sorted, cursor-windowed listing of active campaigns.
    fn list(&self, query: CampaignListQuery) -> RepositoryResult<Paginated<Campaign>>;
}

pub trait CampaignWriter {
    fn insert(&self, campaign: &Campaign) -> RepositoryResult<Campaign>;

    /// Overwrites the full row identified by `campaign.id`.
    fn update(&self, campaign: &Campaign) -> RepositoryResult<Campaign>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_is_clamped_into_bounds() {
        assert_eq!(CampaignListQuery::new(0).page_size, 1);
        assert_eq!(CampaignListQuery::new(-5).page_size, 1);
        assert_eq!(CampaignListQuery::new(20).page_size, 20);
        assert_eq!(CampaignListQuery::new(250).page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn sort_key_parsing_is_case_insensitive_with_fallback() {
        assert_eq!(CampaignSortKey::parse("Name"), Some(CampaignSortKey::Name));
        assert_eq!(
            CampaignSortKey::parse("STARTDATE"),
            Some(CampaignSortKey::StartDate)
        );
        assert_eq!(
            CampaignSortKey::parse("createdAt"),
            Some(CampaignSortKey::CreatedAt)
        );
        assert_eq!(CampaignSortKey::parse("priority"), None);
    }

    #[test]
    fn only_the_default_order_supports_cursors() {
        assert!(CampaignListQuery::new(10).is_default_order());
        assert!(
            !CampaignListQuery::new(10)
                .sort(CampaignSortKey::Budget, true)
                .is_default_order()
        );
        assert!(
            !CampaignListQuery::new(10)
                .sort(CampaignSortKey::CreatedAt, false)
                .is_default_order()
        );
    }
}
