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
use std::sync::Arc;

/// The request builder for
/// [Firestore::list_collection_ids][crate::client::Firestore::list_collection_ids].
#[derive(Clone, Debug)]
pub struct ListCollectionIds {
    stub: Arc<dyn crate::stub::dynamic::Firestore>,
    request: ListCollectionIdsRequest,
}

impl ListCollectionIds {
    pub(crate) fn new<T: Into<String>>(
        stub: Arc<dyn crate::stub::dynamic::Firestore>,
        parent: T,
    ) -> Self {
        Self {
            stub,
            request: ListCollectionIdsRequest::new().set_parent(parent),
        }
    }

    /// Sets the value of [page_size][ListCollectionIdsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.request = self.request.set_page_size(v);
        self
    }

    /// Sets the value of [page_token][ListCollectionIdsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.request = self.request.set_page_token(v);
        self
    }

    /// Sends the request, returning a single page of results.
    pub async fn send(self) -> Result<ListCollectionIdsResponse> {
        self.stub.list_collection_ids(self.request).await
    }

    /// Sends the request as many times as needed to drain all pages, and
    /// returns the flattened list of collection ids.
    ///
    /// The ids are returned in the order produced by the service. The first
    /// fault aborts the enumeration.
    pub async fn all_ids(mut self) -> Result<Vec<String>> {
        let mut ids = Vec::new();
        loop {
            let response = self.stub.list_collection_ids(self.request.clone()).await?;
            ids.extend(response.collection_ids);
            if response.next_page_token.is_empty() {
                return Ok(ids);
            }
            self.request.page_token = response.next_page_token;
        }
    }
}
