//! In-memory transport for tests: records every request and answers from a
//! table of canned replies keyed by method and path.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;

use super::{ApiError, ApiRequest, ApiResponse, Method, Transport};

pub const BASE_URL: &str = "http://api.test";

#[derive(Clone)]
enum Reply {
    Respond(ApiResponse),
    Fail,
}

#[derive(Default)]
pub struct MockTransport {
    replies: RefCell<HashMap<(Method, String), Reply>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every later `method path` request with `status` and `body`.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: &str) {
        self.replies.borrow_mut().insert(
            (method, path.to_string()),
            Reply::Respond(ApiResponse::new(status, body)),
        );
    }

    /// Makes every later `method path` request fail at the transport level.
    pub fn fail(&self, method: Method, path: &str) {
        self.replies
            .borrow_mut()
            .insert((method, path.to_string()), Reply::Fail);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// `"METHOD /path"` for each recorded request, in order.
    pub fn calls(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|r| format!("{} {}", r.method, path_of(&r.url)))
            .collect()
    }

    pub fn clear(&self) {
        self.requests.borrow_mut().clear();
    }
}

fn path_of(url: &str) -> &str {
    url.strip_prefix(BASE_URL).unwrap_or(url)
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let key = (request.method, path_of(&request.url).to_string());
        self.requests.borrow_mut().push(request);
        match self.replies.borrow().get(&key).cloned() {
            Some(Reply::Respond(response)) => Ok(response),
            Some(Reply::Fail) => Err(ApiError::Network("connection refused".to_string())),
            None => Err(ApiError::Network(format!("no route for {} {}", key.0, key.1))),
        }
    }
}
