//! Page and script for the table editors.

use crate::error::AppError;
use crate::ui::{default_editors, IndexTemplate, EDITOR_SCRIPT};
use askama::Template;
use axum::{
    http::header,
    response::{Html, IntoResponse},
};

pub const PAGE_TITLE: &str = "Two editable tables";

pub async fn index() -> Result<Html<String>, AppError> {
    let editors = default_editors();
    let page = IndexTemplate {
        title: PAGE_TITLE,
        editors: &editors,
    };
    Ok(Html(page.render()?))
}

pub async fn editor_script() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        EDITOR_SCRIPT,
    )
}
