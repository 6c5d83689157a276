//! EdgeX Foundry REST client: typed resource clients for the core metadata,
//! core data, support scheduler and device service APIs, with the DTOs,
//! validation rules and model mappings they exchange.

// Internal modules
mod auth;
mod client;
mod config;
mod error;

pub mod apis;
pub mod dtos;
pub mod models;
pub mod routes;
pub mod validation;

// Re-export public types and interfaces
pub use apis::*;
pub use auth::{AuthenticationInjector, BearerAuth, NoAuth};
pub use client::EdgexClient;
pub use config::ClientInfo;
pub use error::{EdgexError, EdgexResult, ErrorKind};
pub use tokio_util::sync::CancellationToken;
pub use validation::Validator;

// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        dtos::{
            common::{BaseRequest, BaseResponse, BaseWithIdResponse, CountResponse},
            requests::{
                AddDeviceRequest, AddIntervalRequest, UpdateDeviceRequest, UpdateIntervalRequest,
            },
            responses::{DeviceResponse, MultiDevicesResponse, MultiReadingsResponse},
        },
        AuthenticationInjector, BearerAuth, CancellationToken, ClientInfo, EdgexClient,
        EdgexError, EdgexResult, ErrorKind, NoAuth, Validator,
    };
}
