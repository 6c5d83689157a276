use crate::error::{EdgexError, EdgexResult, ErrorKind};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

/// Injects authentication data into every outgoing request
#[async_trait::async_trait]
pub trait AuthenticationInjector: Send + Sync {
    /// Add authentication headers to the request
    async fn add_authentication_data(&self, headers: &mut HeaderMap) -> EdgexResult<()>;
}

/// Bearer token (JWT) authentication, as used by secured EdgeX deployments
#[derive(Debug, Clone)]
pub struct BearerAuth {
    token: String,
}

impl BearerAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait::async_trait]
impl AuthenticationInjector for BearerAuth {
    async fn add_authentication_data(&self, headers: &mut HeaderMap) -> EdgexResult<()> {
        let value = HeaderValue::from_str(&format!("Bearer {}", self.token)).map_err(|e| {
            EdgexError::with_source(
                ErrorKind::ContractInvalid,
                "invalid authorization header",
                e,
            )
        })?;
        headers.insert(AUTHORIZATION, value);

        Ok(())
    }
}

/// No authentication
#[derive(Debug, Clone)]
pub struct NoAuth;

#[async_trait::async_trait]
impl AuthenticationInjector for NoAuth {
    async fn add_authentication_data(&self, _headers: &mut HeaderMap) -> EdgexResult<()> {
        Ok(())
    }
}
