use dotenvy::dotenv;
use tracing::info;

use peanutlabs_callback::infra::{
    app::create_app,
    config::AppConfig,
    error::InfraError,
    setup::{init_app_state, init_tracing},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(config.log_file.as_deref())?;

    let app_state = init_app_state(config)?;

    let bind_addr = app_state.config.bind_addr;
    let callback_path = app_state.config.callback_path.clone();

    let app = create_app(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(InfraError::TcpBind)?;

    info!(
        callback_path = %callback_path,
        "Callback receiver listening at {}",
        &listener.local_addr().map_err(InfraError::TcpBind)?
    );

    axum::serve(listener, app).await.map_err(InfraError::Server)?;

    Ok(())
}
