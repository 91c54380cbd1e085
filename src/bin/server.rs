//! Mewati HTTP 服务入口

use anyhow::Result;
use mewati::core::lookup::Corpus;
use mewati::server::config::ServerConfig;
use mewati::server::{self, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!("启动 Mewati 服务, 监听 {}", config.socket_addr());

    let state = AppState::new(Corpus::shared());
    let listener = tokio::net::TcpListener::bind(config.socket_addr())
        .await
        .map_err(|e| anyhow::anyhow!("无法绑定 {}: {}", config.socket_addr(), e))?;

    server::serve(listener, state).await
}
