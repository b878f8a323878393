//! Shared mock-server fixtures for session and handle tests

use mockito::{Mock, ServerGuard};

use super::client::OutlineClient;

pub const SERVER_INFO_BODY: &str = r#"{
    "name": "My Server",
    "serverId": "7fda0079-5317-4e5a-bb41-5a431dddae21",
    "metricsEnabled": true,
    "createdTimestampMs": 1536613192052,
    "version": "1.0.0",
    "portForNewAccessKeys": 1234,
    "hostnameForAccessKeys": "example.com"
}"#;

pub const KEYS_BODY: &str = r#"{
    "accessKeys": [
        {
            "id": "1",
            "name": "Admin",
            "password": "Y2hhY2hh",
            "port": 1234,
            "method": "chacha20-ietf-poly1305",
            "accessUrl": "ss://Y2hhY2hh@example.com:1234/?outline=1",
            "dataLimit": {"bytes": 5000000}
        },
        {
            "id": "2",
            "name": "Phone",
            "password": "cGhvbmU",
            "port": 1234,
            "method": "chacha20-ietf-poly1305",
            "accessUrl": "ss://cGhvbmU@example.com:1234/?outline=1"
        },
        {
            "id": "3",
            "name": "",
            "password": "dGhyZWU",
            "port": 1234,
            "method": "aes-192-gcm",
            "accessUrl": "ss://dGhyZWU@example.com:1234/?outline=1"
        }
    ]
}"#;

pub fn mock_server_info(server: &mut ServerGuard) -> Mock {
    server
        .mock("GET", "/server")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SERVER_INFO_BODY)
        .create()
}

pub fn mock_keys(server: &mut ServerGuard) -> Mock {
    server
        .mock("GET", "/access-keys")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(KEYS_BODY)
        .create()
}

pub fn connect(server: &ServerGuard) -> OutlineClient {
    OutlineClient::new(server.url()).unwrap()
}
