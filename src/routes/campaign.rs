use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::db::DbPool;
use crate::dto::campaign::{
    CampaignResponse, CampaignsQuery, CreateCampaignRequest, PaginatedResponse,
    UpdateCampaignRequest,
};
use crate::models::auth::AuthenticatedUser;
use crate::repository::campaign::DieselCampaignRepository;
use crate::repository::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::routes::error_response;
use crate::services;

#[get("/campaigns")]
pub async fn list_campaigns(
    params: web::Query<CampaignsQuery>,
    _user: AuthenticatedUser,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselCampaignRepository::new(&pool);
    let page_size = params
        .page_size
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);

    match services::campaign::list_campaigns(&repo, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(PaginatedResponse {
            data: page.campaigns,
            total_count: page.total,
            page_size,
            has_more: page.next_token.is_some(),
            continuation_token: page.next_token,
        }),
        Err(e) => error_response(e),
    }
}

#[get("/campaigns/{id}")]
pub async fn get_campaign(
    id: web::Path<Uuid>,
    _user: AuthenticatedUser,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselCampaignRepository::new(&pool);

    match services::campaign::get_campaign_by_id(&repo, *id) {
        Ok(Some(campaign)) => HttpResponse::Ok().json(CampaignResponse::from(campaign)),
        Ok(None) => not_found(*id),
        Err(e) => error_response(e),
    }
}

#[post("/campaigns")]
pub async fn create_campaign(
    form: web::Json<CreateCampaignRequest>,
    user: AuthenticatedUser,
    pool: web::Data<DbPool>,
) -> impl Responder {
    if let Err(errors) = form.validate() {
        return HttpResponse::BadRequest().json(json!({ "message": errors.to_string() }));
    }

    let repo = DieselCampaignRepository::new(&pool);

    match services::campaign::create_campaign(&repo, form.into_inner(), user.identity()) {
        Ok(campaign) => HttpResponse::Created()
            .insert_header(("Location", format!("/api/v1/campaigns/{}", campaign.id)))
            .json(CampaignResponse::from(campaign)),
        Err(e) => error_response(e),
    }
}

#[put("/campaigns/{id}")]
pub async fn update_campaign(
    id: web::Path<Uuid>,
    patch: web::Json<UpdateCampaignRequest>,
    _user: AuthenticatedUser,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselCampaignRepository::new(&pool);

    match services::campaign::update_campaign(&repo, *id, patch.into_inner()) {
        Ok(Some(campaign)) => HttpResponse::Ok().json(CampaignResponse::from(campaign)),
        Ok(None) => not_found(*id),
        Err(e) => error_response(e),
    }
}

#[delete("/campaigns/{id}")]
pub async fn delete_campaign(
    id: web::Path<Uuid>,
    _user: AuthenticatedUser,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselCampaignRepository::new(&pool);

    match services::campaign::delete_campaign(&repo, *id) {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => not_found(*id),
        Err(e) => error_response(e),
    }
}

fn not_found(id: Uuid) -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "message": format!("campaign with id {id} not found"),
    }))
}
