use crate::{modules, types::Context, utils::database};
use axum::{
    http::{header, Method},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors, trace};

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

pub fn router(ctx: Arc<Context>) -> Router {
    Router::new()
        .merge(modules::get_router(&ctx.app.base_path))
        .with_state(ctx)
        .layer(trace::TraceLayer::new_for_http())
        .layer(
            cors::CorsLayer::new()
                .allow_methods([Method::OPTIONS, Method::GET])
                .allow_headers([header::CONTENT_TYPE])
                .allow_origin(cors::Any),
        )
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = router(ctx.clone());

        Self { ctx, router }
    }

    pub async fn serve(self) -> std::io::Result<()> {
        let address = format!("{}:{}", self.ctx.app.host, self.ctx.app.port);
        let listener = TcpListener::bind(&address).await?;

        tracing::info!(
            "App is running on {} ({:?}), public url {}",
            address,
            self.ctx.app.environment,
            self.ctx.app.url
        );

        let result = axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await;

        database::close(&self.ctx.db_conn).await;

        result
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        return;
    }

    tracing::info!("Shutting down");
}
