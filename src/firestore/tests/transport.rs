// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Exercises the transport against a local HTTP server.

use auth::credentials::{CacheableResource, CredentialsProvider, EntityTag};
use firestore_client::client::Firestore;
use gax::error::rpc::Code;
use http::{Extensions, HeaderMap};
use httptest::{Expectation, Server, matchers::*, responders::*};
use serde_json::json;

type Result = anyhow::Result<()>;

const PARENT: &str = "projects/test-project/databases/(default)/documents";
const PATH: &str = "/v1/projects/test-project/databases/(default)/documents:listCollectionIds";

#[derive(Debug)]
struct TestCredentialsProvider {
    token: String,
}

impl CredentialsProvider for TestCredentialsProvider {
    fn headers(
        &self,
        _extensions: Extensions,
    ) -> impl std::future::Future<
        Output = std::result::Result<CacheableResource<HeaderMap>, auth::errors::CredentialsError>,
    > + Send {
        let token = self.token.clone();
        async move {
            let mut headers = HeaderMap::new();
            headers.insert(
                http::header::AUTHORIZATION,
                format!("Bearer {}", token)
                    .parse()
                    .map_err(|e| auth::errors::CredentialsError::from_source(false, e))?,
            );
            Ok(CacheableResource::New {
                entity_tag: EntityTag::new(),
                data: headers,
            })
        }
    }

    fn universe_domain(&self) -> impl std::future::Future<Output = Option<String>> + Send {
        async { None }
    }
}

async fn create_test_client(server: &Server) -> anyhow::Result<Firestore> {
    Ok(Firestore::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .with_credentials(auth::credentials::Credentials::from(
            TestCredentialsProvider {
                token: "test-token".to_string(),
            },
        ))
        .build()
        .await?)
}

#[tokio::test]
async fn single_page_with_auth_headers() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", PATH),
            request::headers(contains(("authorization", "Bearer test-token"))),
            request::body(json_decoded(eq(json!({})))),
        ])
        .respond_with(json_encoded(json!({
            "collectionIds": ["users", "orders"],
        }))),
    );

    let client = create_test_client(&server).await?;
    let ids = client.list_collection_ids(PARENT).all_ids().await?;
    assert_eq!(ids, vec!["users", "orders"]);
    Ok(())
}

#[tokio::test]
async fn follows_page_tokens() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", PATH),
            request::body(json_decoded(eq(json!({"pageSize": 1})))),
        ])
        .respond_with(json_encoded(json!({
            "collectionIds": ["users"],
            "nextPageToken": "token-1",
        }))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", PATH),
            request::body(json_decoded(eq(json!({"pageSize": 1, "pageToken": "token-1"})))),
        ])
        .respond_with(json_encoded(json!({
            "collectionIds": ["orders"],
        }))),
    );

    let client = create_test_client(&server).await?;
    let ids = client
        .list_collection_ids(PARENT)
        .set_page_size(1)
        .all_ids()
        .await?;
    assert_eq!(ids, vec!["users", "orders"]);
    Ok(())
}

#[tokio::test]
async fn empty_database() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("POST", PATH))
            .respond_with(json_encoded(json!({}))),
    );

    let client = create_test_client(&server).await?;
    let ids = client.list_collection_ids(PARENT).all_ids().await?;
    assert!(ids.is_empty(), "{ids:?}");
    Ok(())
}

#[tokio::test]
async fn surfaces_service_errors() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("POST", PATH)).respond_with(
            status_code(403).body(
                json!({"error": {
                    "code": 403,
                    "message": "The caller does not have permission",
                    "status": "PERMISSION_DENIED",
                }})
                .to_string(),
            ),
        ),
    );

    let client = create_test_client(&server).await?;
    let err = client
        .list_collection_ids(PARENT)
        .all_ids()
        .await
        .unwrap_err();
    assert_eq!(err.http_status_code(), Some(403));
    assert_eq!(err.status().map(|s| s.code), Some(Code::PermissionDenied));
    Ok(())
}

#[tokio::test]
async fn surfaces_opaque_http_errors() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("POST", PATH))
            .respond_with(status_code(502).body("bad gateway")),
    );

    let client = create_test_client(&server).await?;
    let err = client
        .list_collection_ids(PARENT)
        .all_ids()
        .await
        .unwrap_err();
    assert_eq!(err.http_status_code(), Some(502));
    assert!(err.status().is_none(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn surfaces_credential_faults() -> Result {
    #[derive(Debug)]
    struct BrokenCredentialsProvider;

    impl CredentialsProvider for BrokenCredentialsProvider {
        fn headers(
            &self,
            _extensions: Extensions,
        ) -> impl std::future::Future<
            Output = std::result::Result<
                CacheableResource<HeaderMap>,
                auth::errors::CredentialsError,
            >,
        > + Send {
            async { Err(auth::errors::CredentialsError::from_msg(false, "revoked")) }
        }

        fn universe_domain(&self) -> impl std::future::Future<Output = Option<String>> + Send {
            async { None }
        }
    }

    let server = Server::run();
    let client = Firestore::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .with_credentials(auth::credentials::Credentials::from(
            BrokenCredentialsProvider,
        ))
        .build()
        .await?;

    let err = client
        .list_collection_ids(PARENT)
        .all_ids()
        .await
        .unwrap_err();
    assert!(err.is_authentication(), "{err:?}");
    Ok(())
}
