#![allow(non_snake_case)]

#[cfg_attr(not(feature = "ssr"), allow(dead_code))]
mod config;

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use clap::Parser;
    use home_api::AppState;
    use home_client::ApiClient;
    use home_ui::{shell, App};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = config::Args::parse();
    let appConfig = config::load(&args.config);
    tracing::info!(
        "loaded config from {}: api={} bind={}:{}",
        args.config,
        appConfig.api.base_url,
        appConfig.server.bind,
        appConfig.server.port
    );

    let apiClient = ApiClient::new(&appConfig.api.base_url, appConfig.api.timeout())
        .unwrap_or_else(|e| panic!("failed to build HTTP client: {e}"));
    let cookieSettings = appConfig.session.clone();

    let appState = AppState {
        cookie: cookieSettings.clone(),
    };

    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let leptosOptions = conf.leptos_options;
    let addr = appConfig.server.addr().unwrap_or_else(|| {
        tracing::warn!(
            "invalid bind address {}:{}, using {}",
            appConfig.server.bind,
            appConfig.server.port,
            leptosOptions.site_addr
        );
        leptosOptions.site_addr
    });

    let routes = generate_route_list(App);

    let sessionLayer =
        axum::middleware::from_fn_with_state(appState, home_api::require_session);

    // Server functions and pages share the API client and cookie settings via context.
    let app = Router::new()
        .leptos_routes_with_context(
            &leptosOptions,
            routes,
            {
                let apiClient = apiClient.clone();
                let cookieSettings = cookieSettings.clone();
                move || {
                    provide_context(apiClient.clone());
                    provide_context(cookieSettings.clone());
                }
            },
            {
                let leptosOptions = leptosOptions.clone();
                move || shell(leptosOptions.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .layer(sessionLayer)
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
