//! HTTP 路由处理器
//!
//! 查询未命中和空输入都在本地转成面向用户的消息；
//! 只有挂钩返回的意外错误才会变成 500。

use crate::core::lookup::Corpus;
use crate::core::render::{render_submission, Action, RenderInstruction};
use crate::core::scoring::score;
use crate::server::hooks::{EntryPoint, NoopEntryPoint, NoopProcessor, Processor};
use crate::server::pages::{render_page, Page, PageResult};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// `/process` 成功时的响应
pub const PROCESS_DONE: &str = "Processing done!";
/// `/run-first` 成功时的响应
pub const FIRST_RUN_DONE: &str = "First script executed!";

/// 共享状态
#[derive(Clone)]
pub struct AppState {
    pub corpus: Arc<Corpus>,
    pub processor: Arc<dyn Processor>,
    pub entry_point: Arc<dyn EntryPoint>,
}

impl AppState {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self {
            corpus,
            processor: Arc::new(NoopProcessor),
            entry_point: Arc::new(NoopEntryPoint),
        }
    }

    pub fn with_processor(mut self, processor: impl Processor + 'static) -> Self {
        self.processor = Arc::new(processor);
        self
    }

    pub fn with_entry_point(mut self, entry_point: impl EntryPoint + 'static) -> Self {
        self.entry_point = Arc::new(entry_point);
        self
    }
}

/// 处理器边界上的错误，统一转为 500
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("请求处理失败: {:#}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", self.0)).into_response()
    }
}

/// 表单提交
#[derive(Debug, Default, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub text: String,
    pub form_id: Option<String>,
    #[serde(default)]
    pub mewati_text: String,
    pub analysis: Option<String>,
}

/// 根据表单内容生成页面
pub fn handle_submission(corpus: &Corpus, form: SubmitForm) -> Page {
    let analysis = form.analysis.unwrap_or_else(|| "morphology".to_string());

    let result = match form.form_id.as_deref().map(str::trim) {
        None | Some("") | Some("beauty") => PageResult::Score(score(&form.text)),
        Some("mewati") => {
            let action = match analysis.parse::<Action>() {
                Ok(Action::ClearInput) | Err(_) => Action::Morphology,
                Ok(action) => action,
            };
            PageResult::Analysis(render_submission(corpus, action, &form.mewati_text))
        }
        Some(other) => {
            tracing::warn!("未知表单: {}", other);
            PageResult::UnknownForm(other.to_string())
        }
    };

    Page {
        text: form.text,
        mewati_text: form.mewati_text,
        analysis,
        result,
    }
}

/// GET /
pub async fn index() -> Html<String> {
    Html(render_page(&Page {
        analysis: "morphology".to_string(),
        ..Page::default()
    }))
}

/// POST /
pub async fn submit(State(state): State<AppState>, Form(form): Form<SubmitForm>) -> Html<String> {
    let page = handle_submission(&state.corpus, form);
    Html(render_page(&page))
}

/// GET /health
///
/// 存活探针，不依赖语料或任何外部资源
pub async fn health() -> &'static str {
    "OK"
}

/// GET /process
pub async fn process(State(state): State<AppState>) -> Result<&'static str, AppError> {
    let processor = state.processor.clone();
    tokio::task::spawn_blocking(move || processor.process()).await??;
    Ok(PROCESS_DONE)
}

/// GET /run-first
pub async fn run_first(State(state): State<AppState>) -> Result<&'static str, AppError> {
    let entry_point = state.entry_point.clone();
    tokio::task::spawn_blocking(move || entry_point.run()).await??;
    tracing::info!("外部脚本已执行");
    Ok(FIRST_RUN_DONE)
}

/// 分析请求
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub action: Action,
    #[serde(default)]
    pub sentence: String,
}

/// POST /api/analyze
pub async fn analyze(State(state): State<AppState>, Json(request): Json<AnalyzeRequest>) -> Json<RenderInstruction> {
    Json(render_submission(&state.corpus, request.action, &request.sentence))
}

/// 评分请求
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub message: String,
}

/// POST /api/score
pub async fn score_text(Json(request): Json<ScoreRequest>) -> Json<ScoreResponse> {
    Json(ScoreResponse {
        message: score(&request.text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::router;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use tower::ServiceExt;

    struct FailingProcessor;

    impl Processor for FailingProcessor {
        fn process(&self) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("No module named 'pandas'"))
        }
    }

    fn app() -> axum::Router {
        router(AppState::new(Corpus::shared()))
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_request(body: &str) -> Request<Body> {
        Request::post("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "OK");
    }

    #[tokio::test]
    async fn test_health_ignores_failing_hooks() {
        let state = AppState::new(Corpus::shared()).with_processor(FailingProcessor);
        let response = router(state)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_index_renders_form() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Mewati Language Model"));
        assert!(html.contains("<form"));
    }

    #[tokio::test]
    async fn test_process_ok() {
        let response = app()
            .oneshot(Request::get("/process").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Processing done!");
    }

    #[tokio::test]
    async fn test_process_failure_is_500_with_message() {
        let state = AppState::new(Corpus::shared()).with_processor(FailingProcessor);
        let response = router(state)
            .oneshot(Request::get("/process").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "Error: No module named 'pandas'");
    }

    #[tokio::test]
    async fn test_run_first() {
        let response = app()
            .oneshot(Request::get("/run-first").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, FIRST_RUN_DONE);
    }

    #[tokio::test]
    async fn test_post_score_without_form_id() {
        let response = app().oneshot(form_request("text=aeiou")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Beauty Score for your text: 10.0"));
    }

    #[tokio::test]
    async fn test_post_empty_text_prompts() {
        let response = app().oneshot(form_request("form_id=beauty&text=+++")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Please enter some text."));
    }

    #[tokio::test]
    async fn test_post_mewati_lookup_miss_is_200() {
        let response = app()
            .oneshot(form_request("form_id=mewati&mewati_text=abc"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("No morphological features for:\nabc"));
    }

    #[tokio::test]
    async fn test_post_mewati_blank_sentence_prompts() {
        let response = app()
            .oneshot(form_request("form_id=mewati&mewati_text=+++&analysis=gloss"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Please enter some text."));
        assert!(!html.contains("Not Found"));
    }

    #[tokio::test]
    async fn test_api_analyze_blank_sentence_prompts() {
        let request = Request::post("/api/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"action":"morphology","sentence":"  ۔ "}"#))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["kind"], "prompt");
        assert_eq!(body["message"], "Please enter some text.");
    }

    #[test]
    fn test_handle_submission_blank_sentence() {
        let corpus = Corpus::builtin();
        let page = handle_submission(
            &corpus,
            SubmitForm {
                form_id: Some("mewati".to_string()),
                mewati_text: "   ".to_string(),
                ..SubmitForm::default()
            },
        );
        assert_eq!(
            page.result,
            PageResult::Analysis(RenderInstruction::Prompt {
                message: "Please enter some text."
            })
        );
    }

    #[test]
    fn test_handle_submission_mewati() {
        let corpus = Corpus::builtin();
        let page = handle_submission(
            &corpus,
            SubmitForm {
                form_id: Some("mewati".to_string()),
                mewati_text: "ای جاڑان کی بات ای۔".to_string(),
                analysis: Some("dependency".to_string()),
                ..SubmitForm::default()
            },
        );
        let PageResult::Analysis(RenderInstruction::Table { title, rows, .. }) = page.result else {
            panic!("expected table");
        };
        assert_eq!(title, "SpaCy Features");
        assert_eq!(rows.len(), 4);
        assert_eq!(page.analysis, "dependency");
    }

    #[test]
    fn test_handle_submission_unknown_form() {
        let corpus = Corpus::builtin();
        let page = handle_submission(
            &corpus,
            SubmitForm {
                form_id: Some("other".to_string()),
                ..SubmitForm::default()
            },
        );
        assert_eq!(page.result, PageResult::UnknownForm("other".to_string()));
    }
}
