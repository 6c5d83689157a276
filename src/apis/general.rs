use crate::{client::EdgexClient, dtos::common::ConfigResponse, error::EdgexResult, routes};
use reqwest::Method;
use tokio_util::sync::CancellationToken;

/// General API operations shared by every EdgeX service
pub struct GeneralClient<'a> {
    client: &'a EdgexClient,
}

impl<'a> GeneralClient<'a> {
    pub fn new(client: &'a EdgexClient) -> Self {
        Self { client }
    }

    /// Fetch the running configuration of the service
    pub async fn fetch_configuration(&self, ctx: &CancellationToken) -> EdgexResult<ConfigResponse> {
        let req = self
            .client
            .request(Method::GET, routes::API_CONFIG_ROUTE)
            .await?;

        self.client.execute(ctx, req).await
    }
}
