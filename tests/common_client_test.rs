use edgex_client::{
    dtos::common::{SecretDataKeyValue, SecretRequest},
    BearerAuth, CancellationToken, EdgexClient, ErrorKind, NoAuth,
};
use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

async fn setup() -> (MockServer, EdgexClient) {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    let client = EdgexClient::new(server.uri(), NoAuth).expect("Failed to create client");
    (server, client)
}

#[tokio::test]
async fn test_ping_and_version() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apiVersion": "v3",
            "timestamp": "Mon, 02 Jan 2024 15:04:05 UTC",
            "serviceName": "core-metadata"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apiVersion": "v3",
            "version": "3.1.0",
            "serviceName": "core-metadata"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let ping = client.common().ping(&ctx).await.unwrap();
    assert_eq!(ping.service_name, "core-metadata");

    let version = client.common().version(&ctx).await.unwrap();
    assert_eq!(version.version, "3.1.0");
}

#[tokio::test]
async fn test_configuration_from_common_and_general_clients() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apiVersion": "v3",
            "serviceName": "core-data",
            "config": {"Writable": {"LogLevel": "INFO"}}
        })))
        .expect(2)
        .mount(&server)
        .await;

    let ctx = CancellationToken::new();
    let common = client.common().configuration(&ctx).await.unwrap();
    let general = client.general().fetch_configuration(&ctx).await.unwrap();

    assert_eq!(common, general);
    assert_eq!(common.config["Writable"]["LogLevel"], "INFO");
}

#[tokio::test]
async fn test_add_secret() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/secret"))
        .and(body_partial_json(json!({
            "secretName": "mqtt",
            "secretData": [{"key": "username", "value": "edgex"}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "apiVersion": "v3",
            "statusCode": 201
        })))
        .expect(1)
        .mount(&server)
        .await;

    let req = SecretRequest::new(
        "mqtt",
        vec![SecretDataKeyValue {
            key: "username".to_string(),
            value: "edgex".to_string(),
        }],
    );
    let res = client
        .common()
        .add_secret(&CancellationToken::new(), &req)
        .await
        .unwrap();
    assert_eq!(res.status_code, 201);
}

#[tokio::test]
async fn test_add_secret_without_data_is_rejected() {
    let (_server, client) = setup().await;
    let err = client
        .common()
        .add_secret(&CancellationToken::new(), &SecretRequest::new("mqtt", vec![]))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ContractInvalid);
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .and(header("authorization", "Bearer secret-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apiVersion": "v3",
            "timestamp": "now",
            "serviceName": "core-data"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = EdgexClient::new(server.uri(), BearerAuth::new("secret-jwt")).unwrap();
    client.common().ping(&CancellationToken::new()).await.unwrap();
}
