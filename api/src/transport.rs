use serde::Serialize;

use crate::ApiError;

/// Status code and raw body of a settled HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The I/O seam under [`crate::DataClient`].
///
/// Implementations only move bytes; status and body interpretation
/// happens in the client. The futures are not required to be `Send`:
/// in the browser they run on the single-threaded event loop.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<RawResponse, ApiError>;

    async fn post_json<B>(&self, url: &str, body: &B) -> Result<RawResponse, ApiError>
    where
        B: Serialize + ?Sized;
}

/// `reqwest`-backed transport (browser `fetch` on wasm, hyper natively).
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, ApiError> {
        let response = self.client.get(url).send().await?;
        read_response(response).await
    }

    async fn post_json<B>(&self, url: &str, body: &B) -> Result<RawResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.client.post(url).json(body).send().await?;
        read_response(response).await
    }
}

async fn read_response(response: reqwest::Response) -> Result<RawResponse, ApiError> {
    let status = response.status().as_u16();
    let body = response.text().await?;
    Ok(RawResponse { status, body })
}
