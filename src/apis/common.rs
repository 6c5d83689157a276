use crate::{
    client::EdgexClient,
    dtos::common::{BaseResponse, ConfigResponse, PingResponse, SecretRequest, VersionResponse},
    error::EdgexResult,
    routes,
    validation::Validator,
};
use log::info;
use reqwest::Method;
use tokio_util::sync::CancellationToken;

/// Common API operations: health, version, configuration and secrets
pub struct CommonClient<'a> {
    client: &'a EdgexClient,
}

impl<'a> CommonClient<'a> {
    pub fn new(client: &'a EdgexClient) -> Self {
        Self { client }
    }

    pub async fn configuration(&self, ctx: &CancellationToken) -> EdgexResult<ConfigResponse> {
        let req = self
            .client
            .request(Method::GET, routes::API_CONFIG_ROUTE)
            .await?;

        self.client.execute(ctx, req).await
    }

    /// Check that the service is reachable
    pub async fn ping(&self, ctx: &CancellationToken) -> EdgexResult<PingResponse> {
        let req = self
            .client
            .request(Method::GET, routes::API_PING_ROUTE)
            .await?;

        self.client.execute(ctx, req).await
    }

    pub async fn version(&self, ctx: &CancellationToken) -> EdgexResult<VersionResponse> {
        let req = self
            .client
            .request(Method::GET, routes::API_VERSION_ROUTE)
            .await?;

        self.client.execute(ctx, req).await
    }

    /// Store a secret in the service's secret store
    pub async fn add_secret(
        &self,
        ctx: &CancellationToken,
        request: &SecretRequest,
    ) -> EdgexResult<BaseResponse> {
        info!("Adding secret: {}", request.secret_name);
        request.validate()?;
        let req = self
            .client
            .request(Method::POST, routes::API_SECRET_ROUTE)
            .await?
            .json(request);

        self.client.execute(ctx, req).await
    }
}
