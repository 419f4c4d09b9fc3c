use leptos::prelude::*;

use crate::models::{PortfolioImage, Testimonial};
use crate::services::catalog::Loaded;

/// Portfolio images, or the built-in list if the data service has none
#[server]
pub async fn get_portfolio_images() -> Result<Loaded<PortfolioImage>, ServerFnError> {
    use crate::state::AppState;
    use axum::Extension;
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(state.catalog.portfolio().await)
}

/// Published testimonials, or the built-in list
#[server]
pub async fn get_testimonials() -> Result<Loaded<Testimonial>, ServerFnError> {
    use crate::state::AppState;
    use axum::Extension;
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(state.catalog.testimonials().await)
}

/// Calendar scheduling page to embed in the booking section
#[server]
pub async fn get_booking_embed_url() -> Result<String, ServerFnError> {
    use crate::state::AppState;
    use axum::Extension;
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(state.booking_embed_url)
}
