use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use scribe_core::{EditorView, MoveToken, PlyIndex};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::store::{Session, SessionId, SessionStore};

#[derive(Deserialize, Default)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub pgn: Option<String>,
}

#[derive(Deserialize)]
pub struct EditMoveRequest {
    pub ply: PlyIndex,
    pub token: String,
}

#[derive(Deserialize)]
pub struct ImportRequest {
    pub pgn: String,
}

#[derive(Deserialize)]
pub struct OptionsQuery {
    pub ply: PlyIndex,
    pub q: Option<String>,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub id: SessionId,
    #[serde(flatten)]
    pub view: EditorView,
    /// Why the last import left the game unchanged, if it did.
    pub import_error: Option<String>,
}

#[derive(Serialize)]
pub struct OptionsResponse {
    pub ply: PlyIndex,
    pub options: Vec<MoveToken>,
}

fn respond(
    id: SessionId,
    session: &Session,
    import_error: Option<String>,
) -> Result<Json<SessionResponse>, AppError> {
    Ok(Json(SessionResponse {
        id,
        view: session.view()?,
        import_error,
    }))
}

/// POST /api/sessions
/// Open a new editing session, optionally seeded from PGN text.
pub async fn create_session(
    Extension(store): Extension<SessionStore>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let (id, import_error) = store.create(|session| {
        req.pgn
            .as_deref()
            .and_then(|text| session.import(text).err())
            .map(|e| e.to_string())
    })?;

    store.read(id, |session| respond(id, session, import_error))?
}

/// GET /api/sessions/{id}
pub async fn get_session(
    Extension(store): Extension<SessionStore>,
    Path(id): Path<SessionId>,
) -> Result<Json<SessionResponse>, AppError> {
    store.read(id, |session| respond(id, session, None))?
}

/// DELETE /api/sessions/{id}
pub async fn delete_session(
    Extension(store): Extension<SessionStore>,
    Path(id): Path<SessionId>,
) -> Result<StatusCode, AppError> {
    store.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/sessions/{id}/moves
/// Set one ply and reconcile the rest of the line.
pub async fn edit_move(
    Extension(store): Extension<SessionStore>,
    Path(id): Path<SessionId>,
    Json(req): Json<EditMoveRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    store.update(id, |session| {
        session.edit(req.ply, &req.token);
        respond(id, session, None)
    })?
}

/// PUT /api/sessions/{id}/pgn
/// Replace the game with pasted PGN. Malformed text keeps the previous moves.
pub async fn import_pgn(
    Extension(store): Extension<SessionStore>,
    Path(id): Path<SessionId>,
    Json(req): Json<ImportRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    store.update(id, |session| {
        let import_error = session.import(&req.pgn).err().map(|e| e.to_string());
        respond(id, session, import_error)
    })?
}

/// GET /api/sessions/{id}/options?ply=N&q=Nf
/// Autocomplete candidates for one slot.
pub async fn get_options(
    Extension(store): Extension<SessionStore>,
    Path(id): Path<SessionId>,
    Query(q): Query<OptionsQuery>,
) -> Result<Json<OptionsResponse>, AppError> {
    let query = q.q.unwrap_or_default();
    let options = store.read(id, |session| session.suggest(q.ply, &query))??;

    Ok(Json(OptionsResponse { ply: q.ply, options }))
}
