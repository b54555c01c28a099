#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use axum_server as _; // to use rustls over openssl bc alpine linux

mod cache;
mod config;
mod error;
mod fetch;
mod menu;
mod parse;

use std::{sync::Arc, time::Instant};

use axum::{
    extract::State,
    http::Method,
    routing::{get, on, MethodFilter},
    Extension, Json, Router,
};

use crate::{cache::Multithreaded, config::Config, fetch::Http, menu::Menu};
use juniper::{graphql_object, EmptyMutation, EmptySubscription, FieldResult, RootNode};
use juniper_axum::{graphiql, graphql, playground, ws};
use juniper_graphql_ws::ConnectionConfig;
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tower_http::{compression::CompressionLayer, cors::Any};

pub use error::Result;

type MenuService = Multithreaded<Http>;

#[derive(Clone, Debug)]
pub struct Query(Arc<MenuService>);

#[graphql_object]
impl Query {
    /// Today's menu of the bistro.
    async fn menu(&self) -> FieldResult<Menu> {
        Ok(self.0.get().await?)
    }
}

type Schema = RootNode<'static, Query, EmptyMutation, EmptySubscription>;

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

async fn get_menu(State(service): State<Arc<MenuService>>) -> Result<Json<Menu>> {
    service.get().await.map(Json).map_err(|e| {
        log::warn!("menu request failed: {e}");
        e
    })
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        log::error!("failed to listen for ctrl-c: {e}");
    }
    log::info!("shutting down");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let config = Config::from_env()?;
    log::info!("{config:?}");
    let client = fetch::make_client()?;
    let service = Arc::new(Multithreaded::new(Http::new(
        client,
        config.menu_url.clone(),
    )));
    let schema = Schema::new(
        Query(Arc::clone(&service)),
        EmptyMutation::new(),
        EmptySubscription::new(),
    );
    let compression_layer: CompressionLayer = CompressionLayer::new()
        .br(true)
        .deflate(true)
        .gzip(true)
        .zstd(true);
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any);

    let app = Router::new()
        .route("/menu", get(get_menu))
        .route(
            "/graphql",
            on(
                MethodFilter::GET.or(MethodFilter::POST),
                graphql::<Arc<Schema>>,
            ),
        )
        .route(
            "/subscriptions",
            get(ws::<Arc<Schema>>(ConnectionConfig::new(()))),
        )
        .route("/graphiql", get(graphiql("/graphql", "/subscriptions")))
        .route("/playground", get(playground("/graphql", "/subscriptions")))
        .with_state(Arc::clone(&service))
        .layer(cors_layer)
        .layer(Extension(Arc::new(schema)))
        .layer(compression_layer);

    let warm = Arc::clone(&service);
    tokio::spawn(async move {
        log::info!("Warming menu cache");
        let start = Instant::now();
        match warm.get().await {
            Ok(menu) => log::info!(
                "Menu for {} cached, took {:?}",
                menu.date,
                start.elapsed()
            ),
            Err(e) => log::warn!("Could not warm menu cache: {e}"),
        }
    });

    let listener = TcpListener::bind(config.addr).await?;
    log::info!("listening on http://{}", config.addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
