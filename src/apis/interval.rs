use crate::{
    client::EdgexClient,
    dtos::{
        common::{BaseResponse, BaseWithIdResponse},
        requests::{AddIntervalRequest, UpdateIntervalRequest},
        responses::{IntervalResponse, MultiIntervalsResponse},
    },
    error::EdgexResult,
    routes,
    validation,
};
use log::info;
use reqwest::Method;
use tokio_util::sync::CancellationToken;

/// Interval API operations of the support scheduler
pub struct IntervalClient<'a> {
    client: &'a EdgexClient,
}

impl<'a> IntervalClient<'a> {
    pub fn new(client: &'a EdgexClient) -> Self {
        Self { client }
    }

    pub async fn add(
        &self,
        ctx: &CancellationToken,
        reqs: &[AddIntervalRequest],
    ) -> EdgexResult<Vec<BaseWithIdResponse>> {
        info!("Adding {} interval(s)", reqs.len());
        validation::validate_all(reqs)?;
        let req = self
            .client
            .request(Method::POST, routes::API_INTERVAL_ROUTE)
            .await?
            .json(reqs);

        self.client.execute(ctx, req).await
    }

    pub async fn update(
        &self,
        ctx: &CancellationToken,
        reqs: &[UpdateIntervalRequest],
    ) -> EdgexResult<Vec<BaseResponse>> {
        info!("Updating {} interval(s)", reqs.len());
        validation::validate_all(reqs)?;
        let req = self
            .client
            .request(Method::PATCH, routes::API_INTERVAL_ROUTE)
            .await?
            .json(reqs);

        self.client.execute(ctx, req).await
    }

    pub async fn all_intervals(
        &self,
        ctx: &CancellationToken,
        offset: i32,
        limit: i32,
    ) -> EdgexResult<MultiIntervalsResponse> {
        let mut req = self
            .client
            .request(Method::GET, routes::API_ALL_INTERVAL_ROUTE)
            .await?;
        req = EdgexClient::with_pagination(req, offset, limit);

        self.client.execute(ctx, req).await
    }

    pub async fn interval_by_name(
        &self,
        ctx: &CancellationToken,
        name: &str,
    ) -> EdgexResult<IntervalResponse> {
        let path = routes::join_path(routes::API_INTERVAL_ROUTE, &[routes::NAME, name]);
        let req = self.client.request(Method::GET, &path).await?;

        self.client.execute(ctx, req).await
    }

    pub async fn delete_interval_by_name(
        &self,
        ctx: &CancellationToken,
        name: &str,
    ) -> EdgexResult<BaseResponse> {
        info!("Deleting interval: {}", name);
        let path = routes::join_path(routes::API_INTERVAL_ROUTE, &[routes::NAME, name]);
        let req = self.client.request(Method::DELETE, &path).await?;

        self.client.execute(ctx, req).await
    }
}
