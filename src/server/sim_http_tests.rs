use crate::core::lookup::Corpus;
use crate::server::hooks::EntryPoint;
use crate::server::{serve_with_shutdown, AppState};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// 记录调用次数的入口
#[derive(Clone, Default)]
struct CountingEntryPoint(Arc<AtomicUsize>);

impl EntryPoint for CountingEntryPoint {
    fn run(&self) -> anyhow::Result<()> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct RunningServer {
    addr: SocketAddr,
    stop: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<anyhow::Result<()>>,
}

impl RunningServer {
    async fn start(state: AppState) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop, stopped) = oneshot::channel::<()>();
        let handle = tokio::spawn(serve_with_shutdown(listener, state, async {
            let _ = stopped.await;
        }));
        Self {
            addr,
            stop: Some(stop),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn shutdown(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        self.handle.await.unwrap().unwrap();
    }
}

#[tokio::test]
async fn sim_form_round_trip_over_real_socket() {
    let server = RunningServer::start(AppState::new(Corpus::shared())).await;
    let client = reqwest::Client::new();

    let health = client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(health.status(), 200);
    assert_eq!(health.text().await.unwrap(), "OK");

    let page = client
        .post(server.url("/"))
        .form(&[("form_id", "beauty"), ("text", "bbbbbbbbbbb")])
        .send()
        .await
        .unwrap();
    assert_eq!(page.status(), 200);
    assert!(page.text().await.unwrap().contains("Beauty Score for your text: 1.0"));

    // 规范化后命中形态表
    let page = client
        .post(server.url("/"))
        .form(&[
            ("form_id", "mewati"),
            ("mewati_text", "  جب ہماری کلاس لگے کرے ای۔ "),
            ("analysis", "morphology"),
        ])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("<h2>Morphological Features</h2>"));
    assert!(page.contains("<td>Subordinating Conjunction (Temporal)</td>"));

    drop(client);
    server.shutdown().await;
}

#[tokio::test]
async fn sim_json_api_matches_render_instruction() {
    let server = RunningServer::start(AppState::new(Corpus::shared())).await;
    let client = reqwest::Client::new();

    let body: Value = client
        .post(server.url("/api/analyze"))
        .json(&json!({ "action": "morphology", "sentence": "کپڑا کی لوگڑی۔" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["kind"], "table");
    assert_eq!(body["title"], "Morphological Features");
    assert_eq!(body["rows"].as_array().unwrap().len(), 3);
    assert_eq!(body["rows"][1][4], "Gender shift.");

    let body: Value = client
        .post(server.url("/api/analyze"))
        .json(&json!({ "action": "gloss", "sentence": "کپڑا کی لوگڑی۔" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["kind"], "error");
    assert_eq!(body["message"], "No Leipzig glossing for:\nکپڑا کی لوگڑی");

    let body: Value = client
        .post(server.url("/api/analyze"))
        .json(&json!({ "action": "syntax_tree", "sentence": " ؟ " }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["kind"], "prompt");

    let body: Value = client
        .post(server.url("/api/analyze"))
        .json(&json!({ "action": "syntax_tree", "sentence": "کپڑا کی لوگڑی۔" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["kind"], "tree");
    assert_eq!(body["display"]["source"], "fallback");
    assert_eq!(body["display"]["tree"]["kind"], "rich");

    let body: Value = client
        .post(server.url("/api/score"))
        .json(&json!({ "text": "aeiou" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["message"], "Beauty Score for your text: 10.0");

    drop(client);
    server.shutdown().await;
}

#[tokio::test]
async fn sim_run_first_invokes_entry_point_each_time() {
    let entry = CountingEntryPoint::default();
    let calls = entry.0.clone();
    let server = RunningServer::start(AppState::new(Corpus::shared()).with_entry_point(entry)).await;
    let client = reqwest::Client::new();

    for _ in 0..2 {
        let response = client.get(server.url("/run-first")).send().await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.text().await.unwrap(), "First script executed!");
    }
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    drop(client);
    server.shutdown().await;
}
