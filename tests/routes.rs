use actix_web::http::StatusCode;
use campaigns_api::domain::campaign::DomainError;
use campaigns_api::routes::error_response;
use campaigns_api::services::ServiceError;

#[test]
fn test_service_error_status_mappings() {
    let cases = [
        (
            ServiceError::Domain(DomainError::InvalidArgument("bad budget".to_string())),
            StatusCode::BAD_REQUEST,
        ),
        (
            ServiceError::Domain(DomainError::InvalidStateTransition(
                "not yet started".to_string(),
            )),
            StatusCode::BAD_REQUEST,
        ),
        (
            ServiceError::Conflict("duplicate name".to_string()),
            StatusCode::CONFLICT,
        ),
        (ServiceError::NotFound, StatusCode::NOT_FOUND),
        (
            ServiceError::Internal("pool exhausted".to_string()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (err, expected) in cases {
        assert_eq!(error_response(err).status(), expected);
    }
}
