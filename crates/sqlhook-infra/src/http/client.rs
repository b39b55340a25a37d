//! ReqwestTransport -- concrete [`HttpTransport`] implementation.
//!
//! One `reqwest::Client` serves both calls of a run. Timeouts are fixed:
//! 10s to connect, 30s per read.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use sqlhook_core::flow::transport::{HttpReply, HttpTransport, JsonPost};
use sqlhook_types::error::TransportError;

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const READ_TIMEOUT: Duration = Duration::from_secs(30);

/// reqwest-backed transport.
///
/// The `Authorization` value is passed through untouched (no `Bearer `
/// prefix); the hiring API expects the raw token.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeouts(CONNECT_TIMEOUT, READ_TIMEOUT)
    }

    fn with_timeouts(connect: Duration, read: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("sqlhook/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(connect)
            .read_timeout(read)
            .build()
            .map_err(|e| TransportError::Setup(describe(&e)))?;

        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, request: JsonPost<'_>) -> Result<HttpReply, TransportError> {
        let mut builder = self
            .client
            .post(request.url)
            .header(CONTENT_TYPE, "application/json")
            .body(request.body.to_string());

        if let Some(token) = request.authorization {
            builder = builder.header(AUTHORIZATION, token);
        }

        debug!(url = %request.url, bytes = request.body.len(), "POST");

        let response = builder.send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify)?;

        debug!(status, bytes = body.len(), "HTTP reply received");

        Ok(HttpReply { status, body })
    }
}

/// Map a reqwest error onto the transport taxonomy, keeping its cause chain.
fn classify(err: reqwest::Error) -> TransportError {
    let message = describe(&err);
    if err.is_timeout() {
        TransportError::Timeout(message)
    } else if err.is_connect() {
        TransportError::Connect(message)
    } else if err.is_body() || err.is_decode() {
        TransportError::Body(message)
    } else {
        TransportError::Other(message)
    }
}

fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::Router;
    use axum::extract::State;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;

    use sqlhook_core::flow::runner::WebhookFlowRunner;
    use sqlhook_types::config::FlowConfig;
    use sqlhook_types::error::{FlowError, FlowStage};
    use sqlhook_types::solution::FINAL_QUERY;

    #[derive(Debug, Clone)]
    struct Captured {
        path: String,
        authorization: Option<String>,
        content_type: Option<String>,
        body: String,
    }

    #[derive(Clone, Default)]
    struct Recorder {
        requests: Arc<Mutex<Vec<Captured>>>,
    }

    impl Recorder {
        fn record(&self, path: &str, headers: &HeaderMap, body: String) {
            let header = |name: reqwest::header::HeaderName| {
                headers
                    .get(name)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string)
            };
            self.requests.lock().unwrap().push(Captured {
                path: path.to_string(),
                authorization: header(AUTHORIZATION),
                content_type: header(CONTENT_TYPE),
                body,
            });
        }

        fn requests(&self) -> Vec<Captured> {
            self.requests.lock().unwrap().clone()
        }
    }

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// Hiring API stand-in: `/generate` hands out a token, `/submit` records
    /// the answer.
    fn hiring_api(
        recorder: Recorder,
        generate_status: StatusCode,
        submit_status: StatusCode,
    ) -> Router {
        Router::new()
            .route(
                "/generate",
                post(
                    move |State(recorder): State<Recorder>, headers: HeaderMap, body: String| async move {
                        recorder.record("/generate", &headers, body);
                        (
                            generate_status,
                            r#"{"webhook":"https://example/x","accessToken":"abc123"}"#,
                        )
                    },
                ),
            )
            .route(
                "/submit",
                post(
                    move |State(recorder): State<Recorder>, headers: HeaderMap, body: String| async move {
                        recorder.record("/submit", &headers, body);
                        (submit_status, "graded")
                    },
                ),
            )
            .with_state(recorder)
    }

    fn local_config(base: &str) -> FlowConfig {
        FlowConfig {
            generate_url: format!("{base}/generate"),
            submit_url: format!("{base}/submit"),
            ..FlowConfig::default()
        }
    }

    #[tokio::test]
    async fn post_json_sends_raw_authorization_and_json_content_type() {
        let recorder = Recorder::default();
        let base =
            spawn_server(hiring_api(recorder.clone(), StatusCode::OK, StatusCode::OK)).await;
        let transport = ReqwestTransport::new().unwrap();

        let reply = transport
            .post_json(JsonPost {
                url: &format!("{base}/submit"),
                authorization: Some("abc123"),
                body: r#"{"finalQuery":"SELECT 1;"}"#,
            })
            .await
            .unwrap();

        assert_eq!(reply.status, 200);
        assert_eq!(reply.body, "graded");

        let requests = recorder.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].authorization.as_deref(), Some("abc123"));
        assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
        assert_eq!(requests[0].body, r#"{"finalQuery":"SELECT 1;"}"#);
    }

    #[tokio::test]
    async fn post_json_without_token_sends_no_authorization() {
        let recorder = Recorder::default();
        let base =
            spawn_server(hiring_api(recorder.clone(), StatusCode::OK, StatusCode::OK)).await;
        let transport = ReqwestTransport::new().unwrap();

        transport
            .post_json(JsonPost {
                url: &format!("{base}/generate"),
                authorization: None,
                body: "{}",
            })
            .await
            .unwrap();

        assert_eq!(recorder.requests()[0].authorization, None);
    }

    #[tokio::test]
    async fn error_status_is_returned_as_reply() {
        let recorder = Recorder::default();
        let base = spawn_server(hiring_api(
            recorder.clone(),
            StatusCode::OK,
            StatusCode::BAD_REQUEST,
        ))
        .await;
        let transport = ReqwestTransport::new().unwrap();

        let reply = transport
            .post_json(JsonPost {
                url: &format!("{base}/submit"),
                authorization: Some("abc123"),
                body: "{}",
            })
            .await
            .unwrap();

        assert_eq!(reply.status, 400);
        assert_eq!(reply.body, "graded");
    }

    #[tokio::test]
    async fn refused_connection_is_connect_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = ReqwestTransport::new().unwrap();
        let result = transport
            .post_json(JsonPost {
                url: &format!("http://{addr}/generate"),
                authorization: None,
                body: "{}",
            })
            .await;

        assert!(matches!(result, Err(TransportError::Connect(_))), "{result:?}");
    }

    #[tokio::test]
    async fn slow_server_hits_read_timeout() {
        let router = Router::new().route(
            "/generate",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "too late"
            }),
        );
        let base = spawn_server(router).await;
        let transport =
            ReqwestTransport::with_timeouts(Duration::from_secs(1), Duration::from_millis(200))
                .unwrap();

        let result = transport
            .post_json(JsonPost {
                url: &format!("{base}/generate"),
                authorization: None,
                body: "{}",
            })
            .await;

        assert!(matches!(result, Err(TransportError::Timeout(_))), "{result:?}");
    }

    #[tokio::test]
    async fn relative_url_is_other_error() {
        let transport = ReqwestTransport::new().unwrap();
        let result = transport
            .post_json(JsonPost {
                url: "/hiring/generateWebhook/JAVA",
                authorization: None,
                body: "{}",
            })
            .await;

        assert!(matches!(result, Err(TransportError::Other(_))), "{result:?}");
    }

    #[tokio::test]
    async fn runner_completes_over_http() {
        let recorder = Recorder::default();
        let base = spawn_server(hiring_api(
            recorder.clone(),
            StatusCode::OK,
            StatusCode::BAD_REQUEST,
        ))
        .await;
        let transport = ReqwestTransport::new().unwrap();
        let config = local_config(&base);

        let outcome = WebhookFlowRunner::new(&transport, &config)
            .run()
            .await
            .unwrap();

        assert_eq!(outcome.webhook, "https://example/x");
        assert_eq!(outcome.submission.status_code, 400);
        assert_eq!(outcome.submission.body, "graded");

        let requests = recorder.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].path, "/generate");
        assert_eq!(requests[1].path, "/submit");
        assert_eq!(requests[1].authorization.as_deref(), Some("abc123"));

        let submitted: serde_json::Value = serde_json::from_str(&requests[1].body).unwrap();
        assert_eq!(submitted["finalQuery"].as_str(), Some(FINAL_QUERY));
    }

    #[tokio::test]
    async fn runner_stops_on_generation_server_error() {
        let recorder = Recorder::default();
        let base = spawn_server(hiring_api(
            recorder.clone(),
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::OK,
        ))
        .await;
        let transport = ReqwestTransport::new().unwrap();
        let config = local_config(&base);

        let err = WebhookFlowRunner::new(&transport, &config)
            .run()
            .await
            .unwrap_err();

        assert!(matches!(err, FlowError::Generation { status: 500, .. }));
        assert_eq!(err.stage(), FlowStage::Generate);

        let requests = recorder.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/generate");
    }

    #[test]
    fn describe_includes_source_chain() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset by peer");
        let outer = std::io::Error::other(inner);
        assert!(describe(&outer).contains("reset by peer"));
    }
}
