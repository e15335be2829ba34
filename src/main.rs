use grubdash_backend_rs::{
    app::App,
    types::{Config, Context, ToContext},
};
use std::{process::ExitCode, sync::Arc};
use tracing_subscriber::prelude::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let ctx: Arc<Context> = match config.to_context().await {
        Ok(ctx) => Arc::new(ctx),
        Err(err) => {
            tracing::error!("Failed to prepare the store: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match App::new(ctx).serve().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Server error: {}", err);
            ExitCode::FAILURE
        }
    }
}
