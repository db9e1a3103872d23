#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex, MutexGuard};

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;

    type RouteKey = (Method, String);

    /// In-process stand-in for the approvals API. Each `(method, path)` pair
    /// answers with the most recently registered response.
    #[derive(Clone)]
    pub struct MockServer {
        base: String,
        log: Arc<Mutex<RequestLog>>,
    }

    #[derive(Default)]
    struct RequestLog {
        routes: HashMap<RouteKey, MockResponse>,
        received: Vec<ReceivedRequest>,
    }

    #[derive(Clone, Debug)]
    pub struct ReceivedRequest {
        pub method: Method,
        pub path: String,
        pub body: Option<Value>,
        pub authorization: Option<String>,
    }

    impl ReceivedRequest {
        fn capture(request: &reqwest::Request) -> Self {
            Self {
                method: request.method().clone(),
                path: request.url().path().to_string(),
                body: request
                    .body()
                    .and_then(|body| body.as_bytes())
                    .and_then(|bytes| serde_json::from_slice(bytes).ok()),
                authorization: request
                    .headers()
                    .get(reqwest::header::AUTHORIZATION)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_owned),
            }
        }
    }

    impl MockServer {
        pub async fn start_async() -> Self {
            Self::start()
        }

        pub fn start() -> Self {
            static SERVERS: AtomicUsize = AtomicUsize::new(0);
            Self {
                base: format!("http://approvals-mock-{}", SERVERS.fetch_add(1, Ordering::Relaxed)),
                log: Arc::default(),
            }
        }

        /// Base URL for an `ApiClient`; requests under it are routed here.
        pub fn url(&self, path: &str) -> String {
            let url = format!("{}{}", self.base, path);
            register_mock(url.clone(), Arc::new(self.clone()));
            url
        }

        pub fn mock<F>(&self, configure: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            configure(&mut when, &mut then);

            let key = when.key().expect("mock needs a method and a path");
            self.lock().routes.insert(key, then.response());
        }

        pub fn hits(&self, method: Method, path: &str) -> usize {
            self.lock()
                .received
                .iter()
                .filter(|request| request.method == method && request.path == path)
                .count()
        }

        pub fn received(&self) -> Vec<ReceivedRequest> {
            self.lock().received.clone()
        }

        fn lock(&self) -> MutexGuard<'_, RequestLog> {
            self.log.lock().expect("mock server lock")
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let captured = ReceivedRequest::capture(request);
            let key = (captured.method.clone(), captured.path.clone());
            let mut log = self
                .log
                .lock()
                .map_err(|_| ApiError::unknown("mock server lock poisoned"))?;
            log.received.push(captured);
            log.routes.get(&key).cloned().ok_or_else(|| {
                ApiError::request_failed(format!("No mock for {} {}", key.0, key.1))
            })
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }

        fn key(&self) -> Option<RouteKey> {
            Some((self.method.clone()?, self.path.clone()?))
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        fn response(&self) -> MockResponse {
            MockResponse::json(
                self.status.unwrap_or(200),
                self.body.clone().unwrap_or_else(|| json!({})),
            )
        }
    }
}
