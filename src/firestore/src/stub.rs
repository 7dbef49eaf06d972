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

/// Defines the trait used to implement [crate::client::Firestore].
///
/// Application developers may need to implement this trait to mock
/// `client::Firestore`, typically via
/// [from_stub][crate::client::Firestore::from_stub]. In other use-cases,
/// application developers only use `client::Firestore` and need not be
/// concerned with this trait or its implementations.
pub trait Firestore: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::Firestore::list_collection_ids].
    fn list_collection_ids(
        &self,
        req: ListCollectionIdsRequest,
    ) -> impl std::future::Future<Output = Result<ListCollectionIdsResponse>> + Send;
}

/// A dyn-compatible version of [Firestore], used by the client to hold the
/// transport (or a test stub) behind a pointer.
pub(crate) mod dynamic {
    use super::{ListCollectionIdsRequest, ListCollectionIdsResponse, Result};
    use futures::future::BoxFuture;

    pub trait Firestore: std::fmt::Debug + Send + Sync {
        fn list_collection_ids(
            &self,
            req: ListCollectionIdsRequest,
        ) -> BoxFuture<'_, Result<ListCollectionIdsResponse>>;
    }

    impl<T: super::Firestore> Firestore for T {
        fn list_collection_ids(
            &self,
            req: ListCollectionIdsRequest,
        ) -> BoxFuture<'_, Result<ListCollectionIdsResponse>> {
            Box::pin(super::Firestore::list_collection_ids(self, req))
        }
    }
}
