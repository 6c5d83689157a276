use crate::{
    client::EdgexClient,
    dtos::{
        common::BaseResponse,
        requests::{
            AddDeviceRequest, AddProvisionWatcherRequest, DeviceProfileRequest,
            UpdateDeviceRequest, UpdateDeviceServiceRequest, UpdateProvisionWatcherRequest,
        },
    },
    error::EdgexResult,
    routes,
    validation::Validator,
};
use log::info;
use reqwest::Method;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

/// Callbacks core metadata sends to a device service when the entities the
/// service owns change
pub struct DeviceServiceCallbackClient<'a> {
    client: &'a EdgexClient,
}

impl<'a> DeviceServiceCallbackClient<'a> {
    pub fn new(client: &'a EdgexClient) -> Self {
        Self { client }
    }

    async fn send<T>(
        &self,
        ctx: &CancellationToken,
        method: Method,
        path: &str,
        request: &T,
    ) -> EdgexResult<BaseResponse>
    where
        T: Serialize + Validator,
    {
        request.validate()?;
        let req = self.client.request(method, path).await?.json(request);

        self.client.execute(ctx, req).await
    }

    async fn delete(&self, ctx: &CancellationToken, route: &str, name: &str) -> EdgexResult<BaseResponse> {
        let path = routes::join_path(route, &[routes::NAME, name]);
        let req = self.client.request(Method::DELETE, &path).await?;

        self.client.execute(ctx, req).await
    }

    pub async fn add_device_callback(
        &self,
        ctx: &CancellationToken,
        request: &AddDeviceRequest,
    ) -> EdgexResult<BaseResponse> {
        info!("Device added callback: {}", request.device.name);
        self.send(ctx, Method::POST, routes::API_DEVICE_CALLBACK_ROUTE, request)
            .await
    }

    /// Ask the device service whether it accepts the device before it is added
    pub async fn validate_device_callback(
        &self,
        ctx: &CancellationToken,
        request: &AddDeviceRequest,
    ) -> EdgexResult<BaseResponse> {
        info!("Device validation callback: {}", request.device.name);
        self.send(ctx, Method::POST, routes::API_DEVICE_VALIDATION_ROUTE, request)
            .await
    }

    pub async fn update_device_callback(
        &self,
        ctx: &CancellationToken,
        request: &UpdateDeviceRequest,
    ) -> EdgexResult<BaseResponse> {
        info!("Device updated callback");
        self.send(ctx, Method::PUT, routes::API_DEVICE_CALLBACK_ROUTE, request)
            .await
    }

    pub async fn delete_device_callback(
        &self,
        ctx: &CancellationToken,
        name: &str,
    ) -> EdgexResult<BaseResponse> {
        info!("Device deleted callback: {}", name);
        self.delete(ctx, routes::API_DEVICE_CALLBACK_ROUTE, name).await
    }

    pub async fn update_device_profile_callback(
        &self,
        ctx: &CancellationToken,
        request: &DeviceProfileRequest,
    ) -> EdgexResult<BaseResponse> {
        info!("Device profile updated callback: {}", request.profile.basic_info.name);
        self.send(ctx, Method::PUT, routes::API_PROFILE_CALLBACK_ROUTE, request)
            .await
    }

    pub async fn add_provision_watcher_callback(
        &self,
        ctx: &CancellationToken,
        request: &AddProvisionWatcherRequest,
    ) -> EdgexResult<BaseResponse> {
        info!(
            "Provision watcher added callback: {}",
            request.provision_watcher.name
        );
        self.send(ctx, Method::POST, routes::API_WATCHER_CALLBACK_ROUTE, request)
            .await
    }

    pub async fn update_provision_watcher_callback(
        &self,
        ctx: &CancellationToken,
        request: &UpdateProvisionWatcherRequest,
    ) -> EdgexResult<BaseResponse> {
        info!("Provision watcher updated callback");
        self.send(ctx, Method::PUT, routes::API_WATCHER_CALLBACK_ROUTE, request)
            .await
    }

    pub async fn delete_provision_watcher_callback(
        &self,
        ctx: &CancellationToken,
        name: &str,
    ) -> EdgexResult<BaseResponse> {
        info!("Provision watcher deleted callback: {}", name);
        self.delete(ctx, routes::API_WATCHER_CALLBACK_ROUTE, name)
            .await
    }

    pub async fn update_device_service_callback(
        &self,
        ctx: &CancellationToken,
        request: &UpdateDeviceServiceRequest,
    ) -> EdgexResult<BaseResponse> {
        info!("Device service updated callback");
        self.send(ctx, Method::PUT, routes::API_SERVICE_CALLBACK_ROUTE, request)
            .await
    }
}
