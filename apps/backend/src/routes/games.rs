//! Game session HTTP routes under `/gamestates`.

use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use tracing::debug;

use crate::domain::mode::GameMode;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::extractors::{GameId, JsonOrDefault, ValidatedJson};
use crate::protocol::{GameEnvelope, GameView};
use crate::services::{GameService, NewGame};
use crate::state::app_state::AppState;

/// Body of `POST /gamestates`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    pub max_tries: Option<i64>,
    pub word_size: Option<i64>,
    pub mode: Option<GameMode>,
}

impl CreateGameRequest {
    fn into_new_game(self) -> Result<NewGame, DomainError> {
        Ok(NewGame {
            mode: self.mode.unwrap_or_default(),
            max_guesses: narrow(self.max_tries, ValidationKind::MaxGuesses, "maxTries")?,
            word_length: narrow(self.word_size, ValidationKind::WordLength, "wordSize")?,
        })
    }
}

fn narrow(value: Option<i64>, kind: ValidationKind, field: &str) -> Result<Option<u8>, DomainError> {
    value
        .map(|v| {
            u8::try_from(v).map_err(|_| {
                DomainError::validation(kind.clone(), format!("{field} is out of range: {v}"))
            })
        })
        .transpose()
}

/// Body of `PUT /gamestates`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    pub id: Option<i64>,
    pub guess_word: Option<String>,
}

/// POST /gamestates
async fn create_game(
    body: JsonOrDefault<CreateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner().into_new_game()?;
    let session = GameService::new()
        .create(app_state.store(), app_state.words(), request)
        .await?;

    Ok(HttpResponse::Created().json(GameEnvelope::new(
        "Game state created successfully",
        &session,
    )))
}

/// GET /gamestates
async fn list_games(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let sessions = GameService::new().find_all(app_state.store()).await?;
    let views: Vec<GameView> = sessions.iter().map(GameView::from).collect();
    debug!(count = views.len(), "Listing games");
    Ok(HttpResponse::Ok().json(views))
}

/// GET /gamestates/{id}
async fn get_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session = GameService::new().find(app_state.store(), game_id.0).await?;
    Ok(HttpResponse::Ok().json(GameView::from(&session)))
}

/// PUT /gamestates
async fn submit_guess(
    body: ValidatedJson<GuessRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let GuessRequest { id, guess_word } = body.into_inner();

    let id = id.ok_or_else(|| {
        DomainError::validation(ValidationKind::InvalidGameId, "id is required")
    })?;
    let id = GameId::validate(id)?.0;

    let guess_word = guess_word
        .filter(|w| !w.trim().is_empty())
        .ok_or_else(|| {
            DomainError::validation(ValidationKind::Other("GuessWord".into()), "guessWord is required")
        })?;

    let session = GameService::new()
        .submit_guess(app_state.store(), app_state.words(), id, &guess_word)
        .await?;

    Ok(HttpResponse::Ok().json(GameEnvelope::new(
        "Game state updated successfully",
        &session,
    )))
}

/// PUT /gamestates/{id}
async fn forfeit_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session = GameService::new().forfeit(app_state.store(), game_id.0).await?;
    Ok(HttpResponse::Ok().json(GameEnvelope::new(
        "Game state status set to lost successfully",
        &session,
    )))
}

/// PUT /gamestates/{id}/timeout
async fn timeout_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session = GameService::new().timeout(app_state.store(), game_id.0).await?;
    Ok(HttpResponse::Ok().json(GameEnvelope::new(
        "Game state status set to timeout successfully",
        &session,
    )))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_game))
            .route(web::get().to(list_games))
            .route(web::put().to(submit_guess)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_game))
            .route(web::put().to(forfeit_game)),
    )
    .service(web::resource("/{id}/timeout").route(web::put().to(timeout_game)));
}
