use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::campaign::{
    Campaign as DomainCampaign, CampaignStatus, DomainError,
};

/// Diesel row for [`crate::domain::campaign::Campaign`]. Identity and status
/// are stored as text.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::campaigns)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub budget: f64,
    pub status: String,
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub is_deleted: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::campaigns)]
/// Insertable form of [`Campaign`].
pub struct NewCampaign<'a> {
    pub id: String,
    pub name: &'a str,
    pub description: &'a str,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub budget: f64,
    pub status: String,
    pub created_by: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub is_deleted: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::campaigns)]
/// Full-row overwrite used when persisting a mutated [`Campaign`].
pub struct UpdateCampaign<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub budget: f64,
    pub status: String,
    pub updated_at: NaiveDateTime,
    pub is_deleted: bool,
}

impl TryFrom<Campaign> for DomainCampaign {
    type Error = DomainError;

    fn try_from(row: Campaign) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|_| DomainError::InvalidArgument(format!("invalid campaign id: {}", row.id)))?;
        let status = CampaignStatus::from_str(&row.status)?;

        Ok(Self {
            id,
            name: row.name,
            description: row.description,
            start_date: row.start_date,
            end_date: row.end_date,
            budget: row.budget,
            status,
            created_by: row.created_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
            is_deleted: row.is_deleted,
        })
    }
}

impl<'a> From<&'a DomainCampaign> for NewCampaign<'a> {
    fn from(campaign: &'a DomainCampaign) -> Self {
        Self {
            id: campaign.id.to_string(),
            name: campaign.name.as_str(),
            description: campaign.description.as_str(),
            start_date: campaign.start_date,
            end_date: campaign.end_date,
            budget: campaign.budget,
            status: campaign.status.to_string(),
            created_by: campaign.created_by.as_str(),
            created_at: campaign.created_at,
            updated_at: campaign.updated_at,
            is_deleted: campaign.is_deleted,
        }
    }
}

impl<'a> From<&'a DomainCampaign> for UpdateCampaign<'a> {
    fn from(campaign: &'a DomainCampaign) -> Self {
        Self {
            name: campaign.name.as_str(),
            description: campaign.description.as_str(),
            start_date: campaign.start_date,
            end_date: campaign.end_date,
            budget: campaign.budget,
            status: campaign.status.to_string(),
            updated_at: campaign.updated_at,
            is_deleted: campaign.is_deleted,
        }
    }
}
