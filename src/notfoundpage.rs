use axum::http::StatusCode;
use maud::Markup;
use maud::html;

use crate::theme;

pub async fn not_found_page() -> (StatusCode, Markup) {
    (
        StatusCode::NOT_FOUND,
        theme::page(None, html! {
            p {
                "Page not found"
            }
        }),
    )
}
