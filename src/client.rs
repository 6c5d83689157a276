use crate::{
    apis::{
        CommonClient, DeviceClient, DeviceServiceCallbackClient, GeneralClient, IntervalClient,
        ReadingClient,
    },
    auth::AuthenticationInjector,
    config::ClientInfo,
    dtos::common::BaseResponse,
    error::{EdgexError, EdgexResult, ErrorKind},
    routes,
};
use log::{debug, warn};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::{fmt, sync::Arc};
use tokio_util::sync::CancellationToken;
use url::Url;

/// Root client for an EdgeX service.
///
/// Holds only immutable state, so a single instance (or its clones) can be
/// shared between tasks. Resource clients borrow it.
#[derive(Clone)]
pub struct EdgexClient {
    client: Client,
    base_url: Url,
    auth: Arc<dyn AuthenticationInjector>,
}

impl fmt::Debug for EdgexClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgexClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl EdgexClient {
    /// Create a new client for the service at `base_url`
    pub fn new(
        base_url: impl AsRef<str>,
        auth: impl AuthenticationInjector + 'static,
    ) -> EdgexResult<Self> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Self::with_client(client, base_url, auth)
    }

    /// Create a new client with a custom reqwest client (timeouts, TLS, proxies)
    pub fn with_client(
        client: Client,
        base_url: impl AsRef<str>,
        auth: impl AuthenticationInjector + 'static,
    ) -> EdgexResult<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        if base_url.cannot_be_a_base() {
            return Err(EdgexError::new(
                ErrorKind::ContractInvalid,
                format!("base URL {} cannot carry a path", base_url),
            ));
        }

        Ok(Self {
            client,
            base_url,
            auth: Arc::new(auth),
        })
    }

    /// Create a new client from a service's client configuration section
    pub fn from_client_info(
        info: &ClientInfo,
        auth: impl AuthenticationInjector + 'static,
    ) -> EdgexResult<Self> {
        Self::new(info.url(), auth)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get Device API
    pub fn devices(&self) -> DeviceClient<'_> {
        DeviceClient::new(self)
    }

    /// Get Interval API
    pub fn intervals(&self) -> IntervalClient<'_> {
        IntervalClient::new(self)
    }

    /// Get Reading API
    pub fn readings(&self) -> ReadingClient<'_> {
        ReadingClient::new(self)
    }

    /// Get General API
    pub fn general(&self) -> GeneralClient<'_> {
        GeneralClient::new(self)
    }

    /// Get Common API
    pub fn common(&self) -> CommonClient<'_> {
        CommonClient::new(self)
    }

    /// Get device service callback API
    pub fn callbacks(&self) -> DeviceServiceCallbackClient<'_> {
        DeviceServiceCallbackClient::new(self)
    }

    /// Full URL of a route. The route is appended to the base URL's path, so
    /// a prefix such as `/core-metadata` is kept.
    pub fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let full = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url.set_path(&full);
        url
    }

    /// Build a request to the given path with authentication
    pub async fn request(&self, method: Method, path: &str) -> EdgexResult<RequestBuilder> {
        let url = self.endpoint(path);
        debug!("HTTP {} {}", method, url);
        let mut request = self.client.request(method, url);

        let mut headers = reqwest::header::HeaderMap::new();
        self.auth.add_authentication_data(&mut headers).await?;
        request = request.headers(headers);

        Ok(request)
    }

    /// Execute a request and decode the JSON response into `T`.
    ///
    /// The request is abandoned as soon as `ctx` is cancelled. A token that is
    /// already cancelled prevents the request from being sent at all.
    pub async fn execute<T>(&self, ctx: &CancellationToken, request: RequestBuilder) -> EdgexResult<T>
    where
        T: DeserializeOwned,
    {
        if ctx.is_cancelled() {
            return Err(Self::cancelled());
        }

        tokio::select! {
            biased;
            _ = ctx.cancelled() => Err(Self::cancelled()),
            result = self.send(request) => result,
        }
    }

    async fn send<T>(&self, request: RequestBuilder) -> EdgexResult<T>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await?;
        self.handle_response(response).await
    }

    fn cancelled() -> EdgexError {
        EdgexError::new(ErrorKind::CommunicationError, "request cancelled by caller")
    }

    /// Handle response and deserialize JSON
    async fn handle_response<T>(&self, response: Response) -> EdgexResult<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            serde_json::from_slice(&body).map_err(|e| {
                EdgexError::with_source(
                    ErrorKind::ContractInvalid,
                    "failed to parse response body",
                    e,
                )
            })
        } else {
            self.handle_error_response(status, response).await
        }
    }

    /// Handle error responses
    async fn handle_error_response<T>(
        &self,
        status: StatusCode,
        response: Response,
    ) -> EdgexResult<T> {
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                debug!("failed to read error body for status {}: {}", status, e);
                Default::default()
            }
        };
        let message = Self::error_message(&body).unwrap_or_else(|| format!("HTTP {}", status));
        warn!("request failed with status {}: {}", status, message);

        Err(EdgexError::from_status(status.as_u16(), message))
    }

    /// Extract the message of an error body, which is either a single base
    /// response or, for batch writes, a sequence of them
    fn error_message(body: &[u8]) -> Option<String> {
        if let Ok(res) = serde_json::from_slice::<BaseResponse>(body) {
            return res.message_text();
        }
        if let Ok(items) = serde_json::from_slice::<Vec<BaseResponse>>(body) {
            let messages: Vec<String> = items.iter().filter_map(BaseResponse::message_text).collect();
            if !messages.is_empty() {
                return Some(messages.join("; "));
            }
        }
        let text = String::from_utf8_lossy(body).trim().to_string();
        (!text.is_empty()).then_some(text)
    }

    /// Add pagination parameters to request
    pub fn with_pagination(request: RequestBuilder, offset: i32, limit: i32) -> RequestBuilder {
        request.query(&[
            (routes::OFFSET, offset.to_string()),
            (routes::LIMIT, limit.to_string()),
        ])
    }

    /// Add a comma-joined list parameter to request, omitted when the list is empty
    pub fn with_list(request: RequestBuilder, key: &str, values: &[String]) -> RequestBuilder {
        if values.is_empty() {
            return request;
        }
        request.query(&[(key, values.join(routes::COMMA_SEPARATOR))])
    }
}
