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

//! A minimal client for Cloud Firestore collection enumeration.
//!
//! This crate implements the one [Cloud Firestore] operation needed to
//! enumerate the top-level collections of a database:
//! `documents:listCollectionIds` over the v1 REST surface. Applications use
//! [Firestore][client::Firestore], constructed via its builder:
//!
//! ```
//! # use firestore_client::client::Firestore;
//! # async fn sample() -> anyhow::Result<()> {
//! let client = Firestore::builder().build().await?;
//! let ids = client
//!     .list_collection_ids("projects/my-project/databases/(default)/documents")
//!     .all_ids()
//!     .await?;
//! println!("found {} collections", ids.len());
//! # Ok(()) }
//! ```
//!
//! Authentication is delegated to [google-cloud-auth]; by default the client
//! uses [Application Default Credentials]. Errors use the
//! [google-cloud-gax] taxonomy.
//!
//! [Cloud Firestore]: https://cloud.google.com/firestore
//! [google-cloud-auth]: https://docs.rs/google-cloud-auth
//! [google-cloud-gax]: https://docs.rs/google-cloud-gax
//! [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc

pub use gax::Result;
pub use gax::error::Error;

/// Request builders.
pub mod builder;
/// The client to interact with Cloud Firestore.
pub mod client;
/// The messages that are part of this client library.
pub mod model;
/// The trait implemented by the transport and by test doubles.
pub mod stub;

mod transport;
