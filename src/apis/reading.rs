use crate::{
    client::EdgexClient,
    dtos::{common::CountResponse, responses::MultiReadingsResponse},
    error::EdgexResult,
    routes,
};
use log::debug;
use reqwest::Method;
use tokio_util::sync::CancellationToken;

/// Reading API operations of core data.
///
/// Time ranges are given as `start`/`end` timestamps in the unit the
/// readings' `origin` uses (nanoseconds since the epoch by default).
pub struct ReadingClient<'a> {
    client: &'a EdgexClient,
}

impl<'a> ReadingClient<'a> {
    pub fn new(client: &'a EdgexClient) -> Self {
        Self { client }
    }

    async fn readings(
        &self,
        ctx: &CancellationToken,
        path: &str,
        resource_names: &[String],
        offset: i32,
        limit: i32,
    ) -> EdgexResult<MultiReadingsResponse> {
        let mut req = self.client.request(Method::GET, path).await?;
        req = EdgexClient::with_pagination(req, offset, limit);
        req = EdgexClient::with_list(req, routes::RESOURCE_NAMES, resource_names);

        self.client.execute(ctx, req).await
    }

    pub async fn all_readings(
        &self,
        ctx: &CancellationToken,
        offset: i32,
        limit: i32,
    ) -> EdgexResult<MultiReadingsResponse> {
        self.readings(ctx, routes::API_ALL_READING_ROUTE, &[], offset, limit)
            .await
    }

    /// Count of all readings held by core data
    pub async fn reading_count(&self, ctx: &CancellationToken) -> EdgexResult<CountResponse> {
        let req = self
            .client
            .request(Method::GET, routes::API_READING_COUNT_ROUTE)
            .await?;

        self.client.execute(ctx, req).await
    }

    pub async fn reading_count_by_device_name(
        &self,
        ctx: &CancellationToken,
        name: &str,
    ) -> EdgexResult<CountResponse> {
        let path = routes::join_path(
            routes::API_READING_COUNT_ROUTE,
            &[routes::DEVICE, routes::NAME, name],
        );
        let req = self.client.request(Method::GET, &path).await?;

        self.client.execute(ctx, req).await
    }

    pub async fn readings_by_device_name(
        &self,
        ctx: &CancellationToken,
        name: &str,
        offset: i32,
        limit: i32,
    ) -> EdgexResult<MultiReadingsResponse> {
        let path = routes::join_path(routes::API_READING_ROUTE, &[routes::DEVICE, routes::NAME, name]);
        self.readings(ctx, &path, &[], offset, limit).await
    }

    pub async fn readings_by_resource_name(
        &self,
        ctx: &CancellationToken,
        resource_name: &str,
        offset: i32,
        limit: i32,
    ) -> EdgexResult<MultiReadingsResponse> {
        let path = routes::join_path(
            routes::API_READING_ROUTE,
            &[routes::RESOURCE_NAME, resource_name],
        );
        self.readings(ctx, &path, &[], offset, limit).await
    }

    pub async fn readings_by_time_range(
        &self,
        ctx: &CancellationToken,
        start: i64,
        end: i64,
        offset: i32,
        limit: i32,
    ) -> EdgexResult<MultiReadingsResponse> {
        let (start, end) = (start.to_string(), end.to_string());
        let path = routes::join_path(
            routes::API_READING_ROUTE,
            &[routes::START, &start, routes::END, &end],
        );
        self.readings(ctx, &path, &[], offset, limit).await
    }

    pub async fn readings_by_resource_name_and_time_range(
        &self,
        ctx: &CancellationToken,
        resource_name: &str,
        start: i64,
        end: i64,
        offset: i32,
        limit: i32,
    ) -> EdgexResult<MultiReadingsResponse> {
        let (start, end) = (start.to_string(), end.to_string());
        let path = routes::join_path(
            routes::API_READING_ROUTE,
            &[
                routes::RESOURCE_NAME,
                resource_name,
                routes::START,
                &start,
                routes::END,
                &end,
            ],
        );
        self.readings(ctx, &path, &[], offset, limit).await
    }

    pub async fn readings_by_device_name_and_resource_name(
        &self,
        ctx: &CancellationToken,
        device_name: &str,
        resource_name: &str,
        offset: i32,
        limit: i32,
    ) -> EdgexResult<MultiReadingsResponse> {
        let path = routes::join_path(
            routes::API_READING_ROUTE,
            &[
                routes::DEVICE,
                routes::NAME,
                device_name,
                routes::RESOURCE_NAME,
                resource_name,
            ],
        );
        self.readings(ctx, &path, &[], offset, limit).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn readings_by_device_name_and_resource_name_and_time_range(
        &self,
        ctx: &CancellationToken,
        device_name: &str,
        resource_name: &str,
        start: i64,
        end: i64,
        offset: i32,
        limit: i32,
    ) -> EdgexResult<MultiReadingsResponse> {
        let (start, end) = (start.to_string(), end.to_string());
        let path = routes::join_path(
            routes::API_READING_ROUTE,
            &[
                routes::DEVICE,
                routes::NAME,
                device_name,
                routes::RESOURCE_NAME,
                resource_name,
                routes::START,
                &start,
                routes::END,
                &end,
            ],
        );
        self.readings(ctx, &path, &[], offset, limit).await
    }

    pub async fn readings_by_device_name_and_time_range(
        &self,
        ctx: &CancellationToken,
        device_name: &str,
        start: i64,
        end: i64,
        offset: i32,
        limit: i32,
    ) -> EdgexResult<MultiReadingsResponse> {
        let (start, end) = (start.to_string(), end.to_string());
        let path = routes::join_path(
            routes::API_READING_ROUTE,
            &[
                routes::DEVICE,
                routes::NAME,
                device_name,
                routes::START,
                &start,
                routes::END,
                &end,
            ],
        );
        self.readings(ctx, &path, &[], offset, limit).await
    }

    /// Readings of a device within a time range, restricted to the given
    /// resources. An empty `resource_names` matches every resource.
    #[allow(clippy::too_many_arguments)]
    pub async fn readings_by_device_name_and_resource_names_and_time_range(
        &self,
        ctx: &CancellationToken,
        device_name: &str,
        resource_names: &[String],
        start: i64,
        end: i64,
        offset: i32,
        limit: i32,
    ) -> EdgexResult<MultiReadingsResponse> {
        debug!(
            "Querying {} resource(s) of device {}",
            resource_names.len(),
            device_name
        );
        let (start, end) = (start.to_string(), end.to_string());
        let path = routes::join_path(
            routes::API_READING_ROUTE,
            &[
                routes::DEVICE,
                routes::NAME,
                device_name,
                routes::START,
                &start,
                routes::END,
                &end,
            ],
        );
        self.readings(ctx, &path, resource_names, offset, limit).await
    }
}
