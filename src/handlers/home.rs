//! Home page handler

use axum::response::Html;

use crate::features::TimeFeatures;
use crate::views::{self, FormDefaults};

/// Render the input form, time fields pre-filled from the server clock
pub async fn index() -> Html<String> {
    let defaults = FormDefaults::at(TimeFeatures::now());
    Html(views::render_index(&defaults))
}
