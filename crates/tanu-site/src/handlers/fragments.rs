//! Fragment Handlers
//!
//! Serve just the armed content of a page, for clients that swap the
//! container in place instead of loading a whole document.

use axum::{
    extract::{Path, State},
    http::Uri,
    response::{Html, IntoResponse, Response},
};

use crate::{error::SiteError, handlers::pages, page::PageId, state::AppState};

/// Handler for /fragments/{page}. Unknown slugs get the 404 page.
pub async fn fragment(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    uri: Uri,
) -> Result<Response, SiteError> {
    let Ok(page) = slug.parse::<PageId>() else {
        return Ok(pages::not_found(uri).await.into_response());
    };
    let mut router = state.page_router()?;
    router.switch_page(page)?;
    Ok(Html(router.viewport().html().to_string()).into_response())
}
