use crate::{
    client::EdgexClient,
    dtos::{
        common::{BaseResponse, BaseWithIdResponse},
        requests::{AddDeviceRequest, UpdateDeviceRequest},
        responses::{DeviceResponse, MultiDevicesResponse},
    },
    error::EdgexResult,
    routes,
    validation,
};
use log::info;
use reqwest::Method;
use tokio_util::sync::CancellationToken;

/// Device API operations of core metadata
pub struct DeviceClient<'a> {
    client: &'a EdgexClient,
}

impl<'a> DeviceClient<'a> {
    pub fn new(client: &'a EdgexClient) -> Self {
        Self { client }
    }

    /// Add devices in one batch. Each request gets its own response, so a
    /// failure of one device does not fail the call.
    pub async fn add(
        &self,
        ctx: &CancellationToken,
        reqs: &[AddDeviceRequest],
    ) -> EdgexResult<Vec<BaseWithIdResponse>> {
        info!("Adding {} device(s)", reqs.len());
        validation::validate_all(reqs)?;
        let req = self
            .client
            .request(Method::POST, routes::API_DEVICE_ROUTE)
            .await?
            .json(reqs);

        self.client.execute(ctx, req).await
    }

    /// Patch devices in one batch
    pub async fn update(
        &self,
        ctx: &CancellationToken,
        reqs: &[UpdateDeviceRequest],
    ) -> EdgexResult<Vec<BaseResponse>> {
        info!("Updating {} device(s)", reqs.len());
        validation::validate_all(reqs)?;
        let req = self
            .client
            .request(Method::PATCH, routes::API_DEVICE_ROUTE)
            .await?
            .json(reqs);

        self.client.execute(ctx, req).await
    }

    /// List all devices, optionally restricted to those carrying all `labels`
    pub async fn all_devices(
        &self,
        ctx: &CancellationToken,
        labels: &[String],
        offset: i32,
        limit: i32,
    ) -> EdgexResult<MultiDevicesResponse> {
        let mut req = self
            .client
            .request(Method::GET, routes::API_ALL_DEVICE_ROUTE)
            .await?;
        req = EdgexClient::with_pagination(req, offset, limit);
        req = EdgexClient::with_list(req, routes::LABELS, labels);

        self.client.execute(ctx, req).await
    }

    /// Check whether a device with this name exists. A missing device is
    /// reported as an `EntityDoesNotExist` error.
    pub async fn device_name_exists(
        &self,
        ctx: &CancellationToken,
        name: &str,
    ) -> EdgexResult<BaseResponse> {
        let path = routes::join_path(routes::API_DEVICE_ROUTE, &[routes::CHECK, routes::NAME, name]);
        let req = self.client.request(Method::GET, &path).await?;

        self.client.execute(ctx, req).await
    }

    pub async fn device_by_name(
        &self,
        ctx: &CancellationToken,
        name: &str,
    ) -> EdgexResult<DeviceResponse> {
        let path = routes::join_path(routes::API_DEVICE_ROUTE, &[routes::NAME, name]);
        let req = self.client.request(Method::GET, &path).await?;

        self.client.execute(ctx, req).await
    }

    pub async fn delete_device_by_name(
        &self,
        ctx: &CancellationToken,
        name: &str,
    ) -> EdgexResult<BaseResponse> {
        info!("Deleting device: {}", name);
        let path = routes::join_path(routes::API_DEVICE_ROUTE, &[routes::NAME, name]);
        let req = self.client.request(Method::DELETE, &path).await?;

        self.client.execute(ctx, req).await
    }

    /// List the devices created from the given device profile
    pub async fn devices_by_profile_name(
        &self,
        ctx: &CancellationToken,
        name: &str,
        offset: i32,
        limit: i32,
    ) -> EdgexResult<MultiDevicesResponse> {
        let path = routes::join_path(
            routes::API_DEVICE_ROUTE,
            &[routes::PROFILE, routes::NAME, name],
        );
        let mut req = self.client.request(Method::GET, &path).await?;
        req = EdgexClient::with_pagination(req, offset, limit);

        self.client.execute(ctx, req).await
    }

    /// List the devices owned by the given device service
    pub async fn devices_by_service_name(
        &self,
        ctx: &CancellationToken,
        name: &str,
        offset: i32,
        limit: i32,
    ) -> EdgexResult<MultiDevicesResponse> {
        let path = routes::join_path(
            routes::API_DEVICE_ROUTE,
            &[routes::SERVICE, routes::NAME, name],
        );
        let mut req = self.client.request(Method::GET, &path).await?;
        req = EdgexClient::with_pagination(req, offset, limit);

        self.client.execute(ctx, req).await
    }
}
