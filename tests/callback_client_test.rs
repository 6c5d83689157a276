use edgex_client::{
    dtos::{
        requests::{
            AddDeviceRequest, AddProvisionWatcherRequest, DeviceProfileRequest,
            UpdateDeviceRequest, UpdateDeviceServiceRequest, UpdateProvisionWatcherRequest,
        },
        DeviceProfile, ProvisionWatcher, UpdateDevice, UpdateDeviceService,
        UpdateProvisionWatcher,
    },
    models::AdminState,
    CancellationToken, EdgexClient, ErrorKind, NoAuth,
};
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

async fn setup() -> (MockServer, EdgexClient) {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    let client = EdgexClient::new(server.uri(), NoAuth).expect("Failed to create client");
    (server, client)
}

async fn mount_ok(server: &MockServer, verb: &str, route: &str) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apiVersion": "v3",
            "statusCode": 200
        })))
        .expect(1)
        .mount(server)
        .await;
}

fn add_device_request() -> AddDeviceRequest {
    AddDeviceRequest::new(
        serde_json::from_value(json!({
            "name": "device-a",
            "serviceName": "device-virtual",
            "profileName": "Random-Integer-Device",
            "adminState": "UNLOCKED",
            "operatingState": "UP",
            "protocols": {"other": {"Address": "a"}}
        }))
        .unwrap(),
    )
}

fn profile() -> DeviceProfile {
    serde_json::from_value(json!({
        "name": "Random-Integer-Device",
        "manufacturer": "IOTech",
        "deviceResources": [{
            "name": "Int8",
            "properties": {"valueType": "Int8", "readWrite": "RW"}
        }]
    }))
    .unwrap()
}

fn watcher() -> ProvisionWatcher {
    serde_json::from_value(json!({
        "name": "Simple-Watcher",
        "serviceName": "device-simple",
        "identifiers": {"Address": "simple-[0-9]+"},
        "adminState": "UNLOCKED",
        "discoveredDevice": {"profileName": "Simple-Device", "adminState": "LOCKED"}
    }))
    .unwrap()
}

#[tokio::test]
async fn test_device_callbacks() {
    let (server, client) = setup().await;
    mount_ok(&server, "POST", "/api/v3/callback/device").await;
    mount_ok(&server, "POST", "/api/v3/validate/device").await;
    mount_ok(&server, "PUT", "/api/v3/callback/device").await;
    mount_ok(&server, "DELETE", "/api/v3/callback/device/name/device-a").await;

    let ctx = CancellationToken::new();
    let callbacks = client.callbacks();
    let add = add_device_request();
    assert!(callbacks.add_device_callback(&ctx, &add).await.unwrap().is_success());
    assert!(callbacks
        .validate_device_callback(&ctx, &add)
        .await
        .unwrap()
        .is_success());

    let update = UpdateDeviceRequest::new(UpdateDevice {
        name: Some("device-a".to_string()),
        admin_state: Some(AdminState::Locked),
        ..Default::default()
    });
    callbacks.update_device_callback(&ctx, &update).await.unwrap();
    callbacks.delete_device_callback(&ctx, "device-a").await.unwrap();
}

#[tokio::test]
async fn test_profile_and_service_callbacks() {
    let (server, client) = setup().await;
    mount_ok(&server, "PUT", "/api/v3/callback/profile").await;
    mount_ok(&server, "PUT", "/api/v3/callback/service").await;

    let ctx = CancellationToken::new();
    let callbacks = client.callbacks();
    callbacks
        .update_device_profile_callback(&ctx, &DeviceProfileRequest::new(profile()))
        .await
        .unwrap();

    let service = UpdateDeviceServiceRequest::new(UpdateDeviceService {
        name: Some("device-virtual".to_string()),
        admin_state: Some(AdminState::Locked),
        ..Default::default()
    });
    callbacks
        .update_device_service_callback(&ctx, &service)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_provision_watcher_callbacks() {
    let (server, client) = setup().await;
    mount_ok(&server, "POST", "/api/v3/callback/watcher").await;
    mount_ok(&server, "PUT", "/api/v3/callback/watcher").await;
    mount_ok(&server, "DELETE", "/api/v3/callback/watcher/name/Simple-Watcher").await;

    let ctx = CancellationToken::new();
    let callbacks = client.callbacks();
    callbacks
        .add_provision_watcher_callback(&ctx, &AddProvisionWatcherRequest::new(watcher()))
        .await
        .unwrap();

    let update = UpdateProvisionWatcherRequest::new(UpdateProvisionWatcher {
        name: Some("Simple-Watcher".to_string()),
        admin_state: Some(AdminState::Locked),
        ..Default::default()
    });
    callbacks
        .update_provision_watcher_callback(&ctx, &update)
        .await
        .unwrap();
    callbacks
        .delete_provision_watcher_callback(&ctx, "Simple-Watcher")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_invalid_callback_request_is_not_sent() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/api/v3/callback/service"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let anonymous = UpdateDeviceServiceRequest::new(UpdateDeviceService {
        description: Some("no identifier".to_string()),
        ..Default::default()
    });
    let err = client
        .callbacks()
        .update_device_service_callback(&CancellationToken::new(), &anonymous)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ContractInvalid);
}

#[tokio::test]
async fn test_locked_device_service_rejects_callback() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/callback/device"))
        .respond_with(ResponseTemplate::new(423).set_body_json(json!({
            "apiVersion": "v3",
            "statusCode": 423,
            "message": "service device-virtual is locked"
        })))
        .mount(&server)
        .await;

    let err = client
        .callbacks()
        .add_device_callback(&CancellationToken::new(), &add_device_request())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ServiceLocked);
    assert_eq!(err.code(), 423);
}
