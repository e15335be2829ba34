use crate::{modules, types::Context};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    Router,
};
use std::{future::Future, io, sync::Arc};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors, trace};

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = modules::get_router()
            .with_state(ctx.clone())
            .layer(
                ServiceBuilder::new()
                    .layer(trace::TraceLayer::new_for_http())
                    .layer(
                        cors::CorsLayer::new()
                            .allow_methods([
                                Method::OPTIONS,
                                Method::GET,
                                Method::POST,
                                Method::PUT,
                                Method::DELETE,
                            ])
                            .allow_headers([header::CONTENT_TYPE])
                            .allow_origin(cors::Any),
                    )
                    .layer(DefaultBodyLimit::max(1024 * 1024)),
            );

        Self { ctx, router }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub async fn serve(self) -> io::Result<()> {
        let listener =
            TcpListener::bind(format!("{}:{}", self.ctx.app.host, self.ctx.app.port)).await?;

        self.serve_with(listener, shutdown_signal()).await
    }

    /// Serves until `shutdown` resolves, then closes the store.
    pub async fn serve_with(
        self,
        listener: TcpListener,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> io::Result<()> {
        tracing::info!(
            "App is running on {} ({}) in {} mode",
            listener.local_addr()?,
            self.ctx.app.url,
            self.ctx.app.environment
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        self.ctx.db_conn.close().await;
        tracing::info!("App has shut down");

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
}
