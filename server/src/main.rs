use axum::serve;
use devopsstack_server::{db, init_tracing, router, AppConfig, AppState};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    // Schema creation and seeding happen once here, never inside a handler.
    let db = match config.database_url.as_deref() {
        Some(url) => {
            let pool = db::init_pool(url).await?;
            info!("pipeline log store initialized");
            Some(pool)
        }
        None => {
            info!("no database configured, pipeline log store disabled");
            None
        }
    };

    let state = AppState::new(config.clone(), db);
    let app = router(Arc::clone(&state));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!(%local_addr, "starting DevOpsStack API service");

    serve(listener, app).await?;
    Ok(())
}
