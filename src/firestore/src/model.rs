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

//! The messages used by the `documents:listCollectionIds` operation.

/// The request for [Firestore::list_collection_ids][crate::client::Firestore::list_collection_ids].
///
/// `parent` is a path parameter and is not part of the request body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListCollectionIdsRequest {
    /// The parent document or database resource name. For the top-level
    /// collections of a database this is
    /// `projects/{project_id}/databases/{database_id}/documents`.
    #[serde(skip)]
    pub parent: String,

    /// The maximum number of results to return in a single page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,

    /// A page token, as returned in
    /// [ListCollectionIdsResponse::next_page_token].
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page_token: String,
}

impl ListCollectionIdsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [parent][ListCollectionIdsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][ListCollectionIdsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = Some(v.into());
        self
    }

    /// Sets the value of [page_token][ListCollectionIdsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

/// One page of collection ids.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListCollectionIdsResponse {
    /// The collection ids, in the order produced by the service.
    pub collection_ids: Vec<String>,

    /// The token to retrieve the next page, empty on the last page.
    pub next_page_token: String,
}

impl ListCollectionIdsResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [collection_ids][ListCollectionIdsResponse::collection_ids].
    pub fn set_collection_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.collection_ids = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListCollectionIdsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}
