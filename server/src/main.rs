mod redirect;

use app::{component, config::navigation, shell};
use axum::{Router, http::StatusCode, middleware, response::Json, routing::get};
use dotenvy::dotenv;
use leptos::config::LeptosOptions;
use leptos::logging;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use leptos_config::get_configuration;
use redirect::redirect_trailing_slash;
use serde_json::json;

use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::compression::predicate::SizeAbove;
use tower_http::trace::TraceLayer;

// Health check handler
async fn health_handler() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "portfolio",
        "version": env!("CARGO_PKG_VERSION")
    })))
}

fn tracing_level() -> tracing::Level {
    if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

/// The rendered site plus `/health`, with every request (the file and error
/// fallback included) passing through the middleware stack.
fn site_router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(component);
    tracing::debug!(routes = routes.len(), "generated route list");

    let site = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .route("/health", get(health_handler))
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    with_middleware(site)
}

/// Layers only wrap routes and fallbacks that already exist, so this must be
/// applied to a finished router.
fn with_middleware(router: Router) -> Router {
    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(redirect_trailing_slash)),
        )
        .layer(CompressionLayer::new().compress_when(SizeAbove::new(1024)))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level())
        .init();

    if dotenv().is_err() {
        logging::warn!("There is no corresponding .env file");
    }

    if let Err(err) = navigation().validate() {
        tracing::error!(%err, "Invalid site navigation configuration");
        return;
    }

    let Ok(conf) = get_configuration(Some("Cargo.toml")) else {
        logging::error!("Failed to get configuration");
        return;
    };

    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let app = site_router(leptos_options);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(list) => list,
        Err(err) => {
            logging::error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    logging::log!("Listening on http://{}", &addr);

    match axum::serve(listener, app.into_make_service()).await {
        Ok(()) => logging::log!("Server shutdown gracefully"),
        Err(err) => logging::error!("Failed to serve app: {:?}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::header::LOCATION};
    use tower::ServiceExt as _;

    fn unrouted_fallback_router() -> Router {
        with_middleware(
            Router::new()
                .route("/works", get(|| async { "works" }))
                .route("/health", get(health_handler))
                .fallback(|| async { StatusCode::NOT_FOUND }),
        )
    }

    async fn get_response(router: Router, uri: &str) -> axum::response::Response {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[test]
    fn test_tracing_level_follows_build_profile() {
        let expected = if cfg!(debug_assertions) {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };
        assert_eq!(tracing_level(), expected);
    }

    #[test]
    fn test_site_configuration_is_valid() {
        assert!(navigation().validate().is_ok());
    }

    #[test]
    fn test_health_handler_structure() {
        tokio_test::block_on(async {
            let result = health_handler().await;
            assert!(result.is_ok());

            let Json(json_value) = result.unwrap();
            assert_eq!(json_value["status"], "healthy");
            assert_eq!(json_value["service"], "portfolio");
            assert!(json_value.get("timestamp").is_some());
            assert_eq!(json_value["version"], env!("CARGO_PKG_VERSION"));
        });
    }

    #[tokio::test]
    async fn test_trailing_slash_reaching_the_fallback_is_redirected() {
        let response = get_response(unrouted_fallback_router(), "/works/?page=2").await;

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.headers()[LOCATION], "/works?page=2");
    }

    #[tokio::test]
    async fn test_protocol_relative_path_redirects_on_site() {
        let response = get_response(unrouted_fallback_router(), "//evil.example/").await;

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.headers()[LOCATION], "/evil.example");
    }

    #[tokio::test]
    async fn test_canonical_paths_pass_through() {
        let works = get_response(unrouted_fallback_router(), "/works").await;
        assert_eq!(works.status(), StatusCode::OK);
        assert!(works.headers().get(LOCATION).is_none());

        let missing = get_response(unrouted_fallback_router(), "/missing").await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let health = get_response(unrouted_fallback_router(), "/health").await;
        assert_eq!(health.status(), StatusCode::OK);
    }
}
