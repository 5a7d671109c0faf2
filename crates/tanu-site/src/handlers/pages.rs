//! Page Handlers
//!
//! Each page request replays a nav click: a fresh router starts on the home
//! page and switches to the requested one.

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
};

use crate::{error::SiteError, page::PageId, state::AppState, templates::NotFoundTemplate};

fn show(state: &AppState, page: PageId) -> Result<Html<String>, SiteError> {
    let mut router = state.page_router()?;
    router.switch_page(page)?;
    Ok(Html(router.render_document()?))
}

/// Handler for the landing page.
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, SiteError> {
    show(&state, PageId::Home)
}

/// Handler for /portfolio.
pub async fn portfolio(State(state): State<AppState>) -> Result<Html<String>, SiteError> {
    show(&state, PageId::Portfolio)
}

/// Handler for /contact.
pub async fn contact(State(state): State<AppState>) -> Result<Html<String>, SiteError> {
    show(&state, PageId::Contact)
}

/// Handler for /portfolio/watch/{id} - portfolio with the player open.
///
/// Ids that are not numbers or not in the catalog render the plain portfolio.
pub async fn watch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, SiteError> {
    let mut router = state.page_router()?;
    router.switch_page(PageId::Portfolio)?;

    if let Ok(video_id) = id.parse::<u32>() {
        router.open_video(video_id)?;
    } else {
        tracing::debug!(%id, "ignoring non-numeric video id");
    }

    Ok(Html(router.render_document()?))
}

/// Fallback for unmatched paths.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NotFoundTemplate::new(uri.path()))
}
