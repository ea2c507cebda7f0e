//! Browser transport backed by `gloo-net` (the Fetch API).

use async_trait::async_trait;
use crud_common::api::{ApiError, ApiRequest, ApiResponse, Method, Transport};
use gloo_net::http::{Request, RequestBuilder};
use web_sys::RequestCache;

/// Sends every request with the `no-store` cache mode so the browser never
/// answers from its HTTP cache.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let builder = builder_for(request.method, &request.url).cache(RequestCache::NoStore);

        let response = match request.body {
            Some(body) => {
                builder
                    .header("Content-Type", "application/json")
                    .body(body)
                    .map_err(network)?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(network)?;

        let status = response.status();
        let body = response.text().await.map_err(network)?;
        Ok(ApiResponse { status, body })
    }
}

fn builder_for(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    }
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}
