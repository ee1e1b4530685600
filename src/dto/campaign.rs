use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::campaign::{Campaign, CampaignStatus};
use crate::domain::types::Patch;

/// Body of `POST /api/v1/campaigns`.
///
/// The derive rules are a boundary fast path; the domain layer re-checks
/// everything and remains the authority.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    #[validate(range(exclusive_min = 0.0, max = 100_000_000.0))]
    pub budget: f64,
}

/// Merge-patch body of `PUT /api/v1/campaigns/{id}`. Absent fields keep
/// their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCampaignRequest {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub start_date: Patch<NaiveDateTime>,
    #[serde(default)]
    pub end_date: Patch<NaiveDateTime>,
    #[serde(default)]
    pub budget: Patch<f64>,
    #[serde(default)]
    pub status: Patch<CampaignStatus>,
}

/// Query parameters accepted by the campaign listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignsQuery {
    pub page_size: Option<i64>,
    pub continuation_token: Option<String>,
    /// Case-insensitive substring filter on the name.
    pub name: Option<String>,
    pub status: Option<CampaignStatus>,
    pub sort_by: Option<String>,
    pub sort_descending: bool,
}

/// Campaign as exposed to API callers. Deleted rows never reach this shape.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub budget: f64,
    pub status: CampaignStatus,
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Campaign> for CampaignResponse {
    fn from(campaign: Campaign) -> Self {
        Self {
            id: campaign.id,
            name: campaign.name,
            description: campaign.description,
            start_date: campaign.start_date,
            end_date: campaign.end_date,
            budget: campaign.budget,
            status: campaign.status,
            created_by: campaign.created_by,
            created_at: campaign.created_at,
            updated_at: campaign.updated_at,
        }
    }
}

/// Result payload returned by [`crate::services::campaign::list_campaigns`].
#[derive(Debug)]
pub struct CampaignsResponse {
    /// Total number of campaigns matching the filter, ignoring the window.
    pub total: usize,
    /// Page of campaigns requested by the caller.
    pub campaigns: Vec<CampaignResponse>,
    /// Continuation token for the next page, when one exists.
    pub next_token: Option<String>,
}

/// Paged envelope returned by the listing endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse {
    pub data: Vec<CampaignResponse>,
    pub total_count: usize,
    pub page_size: i64,
    pub continuation_token: Option<String>,
    pub has_more: bool,
}
