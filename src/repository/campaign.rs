use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::DbPool,
    domain::campaign::Campaign,
    pagination::{Paginated, PaginationCursor},
    repository::{CampaignListQuery, CampaignReader, CampaignWriter, errors::RepositoryResult},
};

/// Diesel implementation of [`CampaignReader`] and [`CampaignWriter`].
pub struct DieselCampaignRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselCampaignRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl CampaignReader for DieselCampaignRepository<'_> {
    fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<Campaign>> {
        use crate::models::campaign::Campaign as DbCampaign;
        use crate::schema::campaigns;

        let mut conn = self.pool.get()?;
        let campaign = campaigns::table
            .find(id.to_string())
            .first::<DbCampaign>(&mut conn)
            .optional()?;

        campaign.map(Campaign::try_from).transpose().map_err(Into::into)
    }

    fn get_by_name(&self, name: &str) -> RepositoryResult<Option<Campaign>> {
        use crate::models::campaign::Campaign as DbCampaign;
        use crate::schema::campaigns;

        let mut conn = self.pool.get()?;
        let campaign = campaigns::table
            .filter(campaigns::name.eq(name))
            .filter(campaigns::is_deleted.eq(false))
            .first::<DbCampaign>(&mut conn)
            .optional()?;

        campaign.map(Campaign::try_from).transpose().map_err(Into::into)
    }

    fn exists(&self, id: Uuid) -> RepositoryResult<bool> {
        use crate::schema::campaigns;

        let mut conn = self.pool.get()?;
        let found = diesel::select(diesel::dsl::exists(
            campaigns::table.find(id.to_string()),
        ))
        .get_result::<bool>(&mut conn)?;

        Ok(found)
    }

    fn list(&self, query: CampaignListQuery) -> RepositoryResult<Paginated<Campaign>> {
        use crate::models::campaign::Campaign as DbCampaign;
        use crate::repository::CampaignSortKey;
        use crate::schema::campaigns;

        let mut conn = self.pool.get()?;

        let name_pattern = query.name.as_ref().map(|term| format!("%{term}%"));
        let status_value = query.status.map(|s| s.to_string());

        // The same filter set feeds both the count and the page query;
        // the total must reflect the filter, never the window.
        let filtered = || {
            let mut q = campaigns::table
                .filter(campaigns::is_deleted.eq(false))
                .into_boxed();
            if let Some(pattern) = &name_pattern {
                // SQLite LIKE matches ASCII case-insensitively.
                q = q.filter(campaigns::name.like(pattern.clone()));
            }
            if let Some(status) = &status_value {
                q = q.filter(campaigns::status.eq(status.clone()));
            }
            q
        };

        let total: i64 = filtered().count().get_result(&mut conn)?;

        let mut page_query = match (query.sort_by, query.descending) {
            (CampaignSortKey::Name, false) => filtered().order(campaigns::name.asc()),
            (CampaignSortKey::Name, true) => filtered().order(campaigns::name.desc()),
            (CampaignSortKey::Budget, false) => filtered().order(campaigns::budget.asc()),
            (CampaignSortKey::Budget, true) => filtered().order(campaigns::budget.desc()),
            (CampaignSortKey::StartDate, false) => filtered().order(campaigns::start_date.asc()),
            (CampaignSortKey::StartDate, true) => filtered().order(campaigns::start_date.desc()),
            (CampaignSortKey::EndDate, false) => filtered().order(campaigns::end_date.asc()),
            (CampaignSortKey::EndDate, true) => filtered().order(campaigns::end_date.desc()),
            (CampaignSortKey::CreatedAt, false) => filtered().order(campaigns::created_at.asc()),
            (CampaignSortKey::CreatedAt, true) => filtered()
                .order(campaigns::created_at.desc())
                .then_order_by(campaigns::id.desc()),
        };

        // Keyset predicate; only meaningful under the default ordering.
        if query.is_default_order()
            && let Some(cursor) = &query.cursor
        {
            page_query = page_query.filter(
                campaigns::created_at.lt(cursor.last_created_at).or(
                    campaigns::created_at
                        .eq(cursor.last_created_at)
                        .and(campaigns::id.ne(cursor.last_id.to_string())),
                ),
            );
        }

        // One extra row tells us whether another page exists.
        let rows = page_query
            .limit(query.page_size + 1)
            .load::<DbCampaign>(&mut conn)?;

        let mut items = rows
            .into_iter()
            .map(Campaign::try_from)
            .collect::<Result<Vec<Campaign>, _>>()?;

        let page_size = query.page_size as usize;
        let has_more = items.len() > page_size;
        items.truncate(page_size);

        // The token marks the last row actually handed out, not the probe row.
        let next_token = if has_more && query.is_default_order() {
            items
                .last()
                .map(|c| PaginationCursor::new(c.id, c.created_at).encode())
        } else {
            None
        };

        Ok(Paginated {
            items,
            total: total as usize,
            next_token,
        })
    }
}

impl CampaignWriter for DieselCampaignRepository<'_> {
    fn insert(&self, campaign: &Campaign) -> RepositoryResult<Campaign> {
        use crate::models::campaign::{Campaign as DbCampaign, NewCampaign as DbNewCampaign};
        use crate::schema::campaigns;

        let mut conn = self.pool.get()?;
        let insertable: DbNewCampaign = campaign.into();
        let inserted = diesel::insert_into(campaigns::table)
            .values(&insertable)
            .get_result::<DbCampaign>(&mut conn)?;

        Ok(inserted.try_into()?)
    }

    fn update(&self, campaign: &Campaign) -> RepositoryResult<Campaign> {
        use crate::models::campaign::{Campaign as DbCampaign, UpdateCampaign as DbUpdateCampaign};
        use crate::schema::campaigns;

        let mut conn = self.pool.get()?;
        let changeset: DbUpdateCampaign = campaign.into();
        let updated = diesel::update(campaigns::table.find(campaign.id.to_string()))
            .set(&changeset)
            .get_result::<DbCampaign>(&mut conn)?;

        Ok(updated.try_into()?)
    }
}
