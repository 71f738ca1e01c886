//! Fallback page for routes that match no navigation entry.

use http::status::StatusCode;
use leptos::prelude::*;
use leptos_meta::Title;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Renders the error page for `error`. During server rendering this also sets
/// the response status.
pub fn component(error: AppError) -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let Some(response) = use_context::<ResponseOptions>() {
            response.set_status(error.status_code());
        }
        tracing::debug!(%error, "rendering error page");
    }

    let status = error.status_code();

    view! {
        <Title text=format!("{} | {}", status.as_u16(), error)/>
        <div class="grid place-content-center px-4 py-24 text-center antialiased">
            <h1 class="text-xl tracking-widest text-gray-500 uppercase dark:text-gray-400">
                {format!("{} | {}", status.as_u16(), error)}
            </h1>
            <a
                href="/"
                class="mt-6 text-gray-600 hover:text-gray-900 hover:underline dark:text-gray-300 dark:hover:text-white"
            >
                "Go back home"
            </a>
        </div>
    }
}

pub fn not_found() -> impl IntoView {
    component(AppError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotFound.to_string(), "Not Found");
    }
}
