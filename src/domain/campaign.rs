//! The campaign aggregate and its business rules.
//!
//! All mutation goes through [`Campaign::create`], [`Campaign::update`] and
//! [`Campaign::soft_delete`]; the storage layer persists whatever state these
//! produce and never applies rules of its own.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 1000;
pub const MAX_BUDGET: f64 = 100_000_000.0;

/// Errors produced when a campaign rule is violated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A field is malformed or out of range; the caller can fix the input.
    #[error("{0}")]
    InvalidArgument(String),

    /// A status change violates a temporal rule.
    #[error("{0}")]
    InvalidStateTransition(String),
}

/// Lifecycle status of a campaign. New campaigns always start as `Draft`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CampaignStatus {
    Draft,
    Active,
    Paused,
    Completed,
    Cancelled,
}

impl Display for CampaignStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CampaignStatus::Draft => "Draft",
            CampaignStatus::Active => "Active",
            CampaignStatus::Paused => "Paused",
            CampaignStatus::Completed => "Completed",
            CampaignStatus::Cancelled => "Cancelled",
        };
        f.write_str(s)
    }
}

impl FromStr for CampaignStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Draft" => Ok(CampaignStatus::Draft),
            "Active" => Ok(CampaignStatus::Active),
            "Paused" => Ok(CampaignStatus::Paused),
            "Completed" => Ok(CampaignStatus::Completed),
            "Cancelled" => Ok(CampaignStatus::Cancelled),
            other => Err(DomainError::InvalidArgument(format!(
                "unknown campaign status: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub budget: f64,
    pub status: CampaignStatus,
    pub created_by: String,
    /// UTC instant the record was created.
    pub created_at: NaiveDateTime,
    /// UTC instant of the last mutation, including soft deletion.
    pub updated_at: NaiveDateTime,
    pub is_deleted: bool,
}

impl Campaign {
    /// Validated factory. Assigns a fresh identity, `Draft` status and a
    /// single timestamp snapshot for both `created_at` and `updated_at`.
    pub fn create(
        name: String,
        description: String,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
        budget: f64,
        created_by: String,
    ) -> Result<Self, DomainError> {
        validate_name(&name)?;
        validate_description(&description)?;
        validate_dates(start_date, end_date)?;
        validate_budget(budget)?;

        let now = Utc::now().naive_utc();

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            description,
            start_date,
            end_date,
            budget,
            status: CampaignStatus::Draft,
            created_by,
            created_at: now,
            updated_at: now,
            is_deleted: false,
        })
    }

    /// Applies a full set of replacement values after re-running every
    /// creation rule plus the activation guard. All-or-nothing: no field is
    /// written unless every check passes.
    pub fn update(
        &mut self,
        name: String,
        description: String,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
        budget: f64,
        new_status: CampaignStatus,
    ) -> Result<(), DomainError> {
        validate_name(&name)?;
        validate_description(&description)?;
        validate_dates(start_date, end_date)?;
        validate_budget(budget)?;
        validate_status_change(new_status, start_date)?;

        self.name = name;
        self.description = description;
        self.start_date = start_date;
        self.end_date = end_date;
        self.budget = budget;
        self.status = new_status;
        self.updated_at = Utc::now().naive_utc();

        Ok(())
    }

    /// Marks the campaign deleted. Safe to repeat; always bumps `updated_at`.
    pub fn soft_delete(&mut self) {
        self.is_deleted = true;
        self.updated_at = Utc::now().naive_utc();
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidArgument(
            "campaign name is required".to_string(),
        ));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(DomainError::InvalidArgument(format!(
            "campaign name must not exceed {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), DomainError> {
    if description.trim().is_empty() {
        return Err(DomainError::InvalidArgument(
            "campaign description is required".to_string(),
        ));
    }
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(DomainError::InvalidArgument(format!(
            "campaign description must not exceed {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_dates(start_date: NaiveDateTime, end_date: NaiveDateTime) -> Result<(), DomainError> {
    if end_date <= start_date {
        return Err(DomainError::InvalidArgument(
            "end date must be after start date".to_string(),
        ));
    }
    Ok(())
}

fn validate_budget(budget: f64) -> Result<(), DomainError> {
    if budget <= 0.0 {
        return Err(DomainError::InvalidArgument(
            "budget must be greater than zero".to_string(),
        ));
    }
    if budget > MAX_BUDGET {
        return Err(DomainError::InvalidArgument(
            "budget cannot exceed 100,000,000".to_string(),
        ));
    }
    Ok(())
}

fn validate_status_change(
    new_status: CampaignStatus,
    start_date: NaiveDateTime,
) -> Result<(), DomainError> {
    if new_status == CampaignStatus::Active && start_date > Utc::now().naive_utc() {
        return Err(DomainError::InvalidStateTransition(
            "campaign cannot be activated before its start date".to_string(),
        ));
    }
    Ok(())
}
