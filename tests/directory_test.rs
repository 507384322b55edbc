//! Integration tests for the packaging service directory client, using a
//! mock HTTP server.

use std::sync::Arc;

use mockito::Server;

use feedauth::domain::errors::{DomainError, DomainResult};
use feedauth::domain::models::ProtocolType;
use feedauth::domain::ports::{AccessTokenProvider, ServiceDirectory};
use feedauth::infrastructure::{LocationServiceClient, LocationServiceConfig};

struct StaticToken(&'static str);

impl AccessTokenProvider for StaticToken {
    fn access_token(&self) -> DomainResult<String> {
        Ok(self.0.to_string())
    }
}

fn client(base_url: String) -> LocationServiceClient {
    LocationServiceClient::new(
        LocationServiceConfig { base_url, timeout_secs: 5 },
        Arc::new(StaticToken("test-token")),
    )
    .expect("failed to create client")
}

#[tokio::test]
async fn lookup_parses_service_info() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/_apis/packaging/serviceinfo?protocol=NuGet")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "AuthenticatedUser": {
                    "providerDisplayName": "Build Service",
                    "customDisplayName": "Jamie"
                },
                "UriPrefixes": [
                    {"UriPrefix": "https://org/", "IsPublic": true},
                    {"UriPrefix": "https://org2/", "IsPublic": false}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let info = client(server.url())
        .packaging_service_info(ProtocolType::NuGet)
        .await
        .expect("lookup failed");

    assert_eq!(info.authenticated_user.display_name(), "Jamie");
    assert_eq!(info.uri_prefixes.len(), 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn authorization_failure_propagates_as_lookup_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/_apis/packaging/serviceinfo?protocol=NuGet")
        .with_status(401)
        .with_body("unauthorized")
        .create_async()
        .await;

    let err = client(server.url())
        .packaging_service_info(ProtocolType::NuGet)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::LookupFailed(_)));
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn malformed_response_propagates_as_lookup_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/_apis/packaging/serviceinfo?protocol=NuGet")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{\"unexpected\": true}")
        .create_async()
        .await;

    let err = client(server.url())
        .packaging_service_info(ProtocolType::NuGet)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::LookupFailed(_)));
}
