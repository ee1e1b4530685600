//! Bearer-token authentication plumbing.
//!
//! The API treats authentication as an opaque capability: a valid token
//! yields a caller identity string and nothing else. Token issuance lives
//! elsewhere.

use std::future::{Ready, ready};

use actix_web::error::{ErrorInternalServerError, ErrorUnauthorized};
use actix_web::http::header;
use actix_web::{Error, FromRequest, HttpRequest, dev::Payload, web};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::models::config::ServerConfig;

/// Sentinel identity used when a valid token carries no subject claim.
pub const SYSTEM_IDENTITY: &str = "system";

/// Claims extracted from a validated HS256 bearer token.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    #[serde(default)]
    pub sub: String,
    pub exp: usize,
}

impl AuthenticatedUser {
    /// The caller identity recorded on created campaigns.
    pub fn identity(&self) -> &str {
        if self.sub.trim().is_empty() {
            SYSTEM_IDENTITY
        } else {
            &self.sub
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = (|| {
            let config = req
                .app_data::<web::Data<ServerConfig>>()
                .ok_or_else(|| ErrorInternalServerError("server configuration missing"))?;

            let token = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.strip_prefix("Bearer "))
                .ok_or_else(|| ErrorUnauthorized("missing bearer token"))?;

            let data = decode::<AuthenticatedUser>(
                token,
                &DecodingKey::from_secret(config.secret.as_bytes()),
                &Validation::default(),
            )
            .map_err(|_| ErrorUnauthorized("invalid bearer token"))?;

            Ok(data.claims)
        })();

        ready(result)
    }
}
