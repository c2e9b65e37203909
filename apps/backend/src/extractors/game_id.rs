use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Positive game id taken from the `{id}` path segment.
///
/// Only the shape is checked here; whether the game exists is the
/// service's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameId(pub i64);

impl GameId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let id = raw.trim().parse::<i64>().map_err(|_| {
            AppError::invalid(ErrorCode::InvalidGameId, format!("Invalid game id: {raw}"))
        })?;
        Self::validate(id)
    }

    pub fn validate(id: i64) -> Result<Self, AppError> {
        if id <= 0 {
            return Err(AppError::invalid(
                ErrorCode::InvalidGameId,
                format!("Game id must be positive, got: {id}"),
            ));
        }
        Ok(GameId(id))
    }
}

impl FromRequest for GameId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(match req.match_info().get("id") {
            Some(raw) => GameId::parse(raw),
            None => Err(AppError::invalid(
                ErrorCode::InvalidGameId,
                "Missing game id parameter",
            )),
        })
    }
}
