//! HTTP 服务模块
//!
//! 路由：
//! - `GET /` / `POST /`：表单页面（评分与句子分析）
//! - `GET /health`：存活探针
//! - `GET /process`、`GET /run-first`：外部任务挂钩
//! - `POST /api/analyze`、`POST /api/score`：JSON 接口

pub mod config;
pub mod hooks;
pub mod pages;
pub mod routes;

#[cfg(test)]
mod sim_http_tests;

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use routes::AppState;

/// 构建路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index).post(routes::submit))
        .route("/health", get(routes::health))
        .route("/process", get(routes::process))
        .route("/run-first", get(routes::run_first))
        .route("/api/analyze", post(routes::analyze))
        .route("/api/score", post(routes::score_text))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 在给定监听器上运行，直到 `shutdown` 完成
pub async fn serve_with_shutdown<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::info!("HTTP 服务已启动: {}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    tracing::info!("HTTP 服务已停止");
    Ok(())
}

/// 运行直到收到 Ctrl+C
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    serve_with_shutdown(listener, state, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("无法监听退出信号: {}", e);
            std::future::pending::<()>().await;
        }
    })
    .await
}
