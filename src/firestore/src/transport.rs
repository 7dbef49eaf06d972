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

use crate::Result;
use crate::model::{ListCollectionIdsRequest, ListCollectionIdsResponse};
use auth::credentials::{CacheableResource, Credentials};
use gax::error::Error;
use http::Extensions;

/// The reqwest-based implementation of [crate::stub::Firestore].
///
/// Requests are sent once, with no retry or polling policies: each fault
/// surfaces to the caller immediately.
#[derive(Debug)]
pub(crate) struct Transport {
    client: reqwest::Client,
    cred: Credentials,
    endpoint: String,
}

impl Transport {
    pub(crate) fn new(client: reqwest::Client, cred: Credentials, endpoint: String) -> Self {
        Self {
            client,
            cred,
            endpoint,
        }
    }

    async fn apply_auth_headers(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder> {
        let cached_auth_headers = self
            .cred
            .headers(Extensions::new())
            .await
            .map_err(Error::authentication)?;

        let auth_headers = match cached_auth_headers {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => {
                unreachable!("headers are not cached");
            }
        };

        Ok(builder.headers(auth_headers))
    }
}

impl crate::stub::Firestore for Transport {
    async fn list_collection_ids(
        &self,
        req: ListCollectionIdsRequest,
    ) -> Result<ListCollectionIdsResponse> {
        tracing::debug!("listing collection ids under {}", req.parent);
        let builder = self
            .client
            .post(format!("{}/v1/{}:listCollectionIds", self.endpoint, req.parent))
            .json(&req);
        let builder = self.apply_auth_headers(builder).await?;
        let response = builder.send().await.map_err(map_send_error)?;
        if !response.status().is_success() {
            return to_http_error(response).await;
        }
        to_http_response(response).await
    }
}

fn map_send_error(err: reqwest::Error) -> Error {
    match err {
        e if e.is_timeout() => Error::timeout(e),
        e => Error::io(e),
    }
}

async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(Error::io)?;

    let error = match gax::error::rpc::Status::try_from(&body) {
        Ok(status) => Error::service_with_http_metadata(status, Some(status_code), Some(headers)),
        Err(_) => Error::http(status_code, headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<O> {
    let body = response.bytes().await.map_err(Error::io)?;
    serde_json::from_slice::<O>(&body).map_err(Error::deser)
}
