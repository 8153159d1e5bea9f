use std::time::Duration;

use operacoes_core::{ErrorDetail, OperandsQuery, Operator, OperationResult, Welcome};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the operations service.
///
/// One instance is built per program and reused for every call.
#[derive(Debug, Clone)]
pub struct OperationClient {
    base_url: Url,
    http: Client,
}

impl OperationClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Performs `operator` on the service and returns only the numeric result.
    pub async fn invoke(&self, operator: Operator, operand1: f64, operand2: f64) -> Result<f64> {
        Ok(self.call(operator, operand1, operand2).await?.resultado)
    }

    /// Performs `operator` on the service and returns the full result record.
    pub async fn call(&self, operator: Operator, operand1: f64, operand2: f64) -> Result<OperationResult> {
        let url = self.endpoint(operator.route())?;
        let query = OperandsQuery {
            numero1: operand1,
            numero2: operand2,
        };
        debug!(%url, %operator, operand1, operand2, "calling operation");

        let response = self.http.get(url).query(&query).send().await?;
        read_body(response).await
    }

    /// Fetches the greeting served at the root path.
    pub async fn welcome(&self) -> Result<Welcome> {
        let response = self.http.get(self.base_url.clone()).send().await?;
        read_body(response).await
    }

    fn endpoint(&self, route: &str) -> Result<Url> {
        self.base_url
            .join(route)
            .map_err(|e| ClientError::InvalidUrl(format!("{}{route}: {e}", self.base_url)))
    }
}

async fn read_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;
    debug!(%status, "response received");
    interpret(status, &body)
}

fn interpret<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    if status.is_success() {
        return serde_json::from_str(body).map_err(|e| ClientError::MalformedResponse(e.to_string()));
    }

    match serde_json::from_str::<ErrorDetail>(body) {
        Ok(error) => Err(ClientError::Service {
            status: status.as_u16(),
            message: error.detail,
        }),
        Err(_) => Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
            body: body.to_string(),
        }),
    }
}
