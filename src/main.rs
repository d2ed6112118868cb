use anyhow::{Context, Result};

use star_size_predictor::{build_router, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let addr = config.bind_addr();
    let state = AppState::new(config);

    let coefficients = state.predictor.coefficients();
    log::info!(
        "Star Size Predictor starting (slope {}, intercept {}, metric {})",
        coefficients.slope,
        coefficients.intercept,
        state.visualizer.metric()
    );

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    log::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await.context("serving HTTP")?;
    Ok(())
}
