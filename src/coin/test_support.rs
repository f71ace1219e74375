//! 测试用的进程内币种服务
//!
//! 在 127.0.0.1 随机端口启动 axum 服务，记录收到的请求并按需返回响应

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use parking_lot::Mutex;
use tokio::net::TcpListener;

use super::client::ADMIN_USER_ID_HEADER;

/// 上游收到的一次调用
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub admin_user_id: Option<String>,
    pub body: String,
}

/// 上游的响应
pub struct UpstreamReply {
    status: u16,
    headers: Vec<(&'static str, String)>,
    body: String,
}

impl UpstreamReply {
    pub fn json(value: serde_json::Value) -> Self {
        Self {
            status: 200,
            headers: vec![("content-type", "application/json".to_string())],
            body: value.to_string(),
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self::raw(status, "")
    }

    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }
}

impl IntoResponse for UpstreamReply {
    fn into_response(self) -> Response {
        let mut builder = Response::builder()
            .status(StatusCode::from_u16(self.status).expect("valid status code"));
        for (name, value) in &self.headers {
            builder = builder.header(*name, value.as_str());
        }
        let has_content_type = self
            .headers
            .iter()
            .any(|(name, _)| *name == CONTENT_TYPE.as_str());
        if !has_content_type && !self.body.is_empty() {
            builder = builder.header(CONTENT_TYPE, "text/plain");
        }
        builder
            .body(Body::from(self.body))
            .expect("valid upstream reply")
    }
}

type Responder = Arc<dyn Fn(&str, &str) -> UpstreamReply + Send + Sync>;

#[derive(Clone)]
struct UpstreamState {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    responder: Responder,
}

/// 进程内模拟的币种服务
pub struct MockUpstream {
    base_url: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockUpstream {
    /// 启动模拟服务，`responder` 接收 (method, path) 返回响应
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&str, &str) -> UpstreamReply + Send + Sync + 'static,
    {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let state = UpstreamState {
            calls: calls.clone(),
            responder: Arc::new(responder),
        };
        let app = Router::new().fallback(handle).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock upstream");
        let addr = listener.local_addr().expect("mock upstream addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{}", addr),
            calls,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }
}

async fn handle(
    State(state): State<UpstreamState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let call = RecordedCall {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(|q| q.to_string()),
        admin_user_id: headers
            .get(ADMIN_USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string()),
        body,
    };
    let reply = (state.responder)(&call.method, &call.path);
    state.calls.lock().push(call);
    reply.into_response()
}
