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

use crate::builder::ListCollectionIds;
use crate::transport::Transport;
use std::sync::Arc;

/// The default host used by the service.
const DEFAULT_HOST: &str = "https://firestore.googleapis.com";

/// Implements a client for collection enumeration on Cloud Firestore.
///
/// # Example
/// ```
/// # use firestore_client::client::Firestore;
/// # async fn sample() -> anyhow::Result<()> {
/// let client = Firestore::builder().build().await?;
/// // use `client` to make requests to Cloud Firestore.
/// # Ok(()) }
/// ```
///
/// # Configuration
///
/// To configure `Firestore` use the `with_*` methods in the type returned by
/// [builder()][Firestore::builder]. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default
///   endpoint (`https://firestore.googleapis.com`). Applications targeting
///   the Firestore emulator or restricted networks may want to override this
///   default.
/// * [with_credentials()]: by default this client uses [Application Default
///   Credentials]. Applications using custom authentication, such as a
///   service account key file, need to override this default.
///
/// # Pooling and Cloning
///
/// `Firestore` holds a connection pool internally, it is advised to create
/// one and then reuse it. You do not need to wrap `Firestore` in an
/// [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
///
/// [with_endpoint()]: ClientBuilder::with_endpoint
/// [with_credentials()]: ClientBuilder::with_credentials
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
#[derive(Clone, Debug)]
pub struct Firestore {
    inner: Arc<dyn crate::stub::dynamic::Firestore>,
}

impl Firestore {
    /// Returns a builder for [Firestore].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: crate::stub::Firestore + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    /// Lists all the collection ids underneath a document or database.
    ///
    /// # Parameters
    /// * `parent` - the parent resource name. For the top-level collections
    ///   of a database use
    ///   `projects/{project_id}/databases/{database_id}/documents`.
    ///
    /// # Example
    /// ```
    /// # use firestore_client::client::Firestore;
    /// # async fn sample(client: &Firestore) -> anyhow::Result<()> {
    /// let ids = client
    ///     .list_collection_ids("projects/my-project/databases/(default)/documents")
    ///     .all_ids()
    ///     .await?;
    /// for id in ids {
    ///     println!("- {id}");
    /// }
    /// # Ok(()) }
    /// ```
    pub fn list_collection_ids<T: Into<String>>(&self, parent: T) -> ListCollectionIds {
        ListCollectionIds::new(self.inner.clone(), parent)
    }
}

/// A builder for [Firestore].
///
/// ```
/// # use firestore_client::client::Firestore;
/// # async fn sample() -> anyhow::Result<()> {
/// let client = Firestore::builder()
///     .with_endpoint("https://private.googleapis.com")
///     .build()
///     .await?;
/// # Ok(()) }
/// ```
pub struct ClientBuilder {
    endpoint: Option<String>,
    credentials: Option<auth::credentials::Credentials>,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        Self {
            endpoint: None,
            credentials: None,
        }
    }

    /// Creates a new client.
    ///
    /// When no credentials are configured the client uses [Application
    /// Default Credentials].
    ///
    /// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
    pub async fn build(self) -> gax::client_builder::Result<Firestore> {
        use gax::client_builder::Error;
        let client = reqwest::Client::builder()
            .build()
            .map_err(Error::transport)?;
        let cred = match self.credentials {
            Some(c) => c,
            None => auth::credentials::Builder::default()
                .build()
                .map_err(Error::cred)?,
        };
        let endpoint = self
            .endpoint
            .unwrap_or_else(|| self::DEFAULT_HOST.to_string());
        Ok(Firestore {
            inner: Arc::new(Transport::new(client, cred, endpoint)),
        })
    }

    /// Sets the endpoint.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    /// Configures the authentication credentials.
    ///
    /// More information about valid credentials types can be found in the
    /// [google-cloud-auth] crate documentation.
    ///
    /// [google-cloud-auth]: https://docs.rs/google-cloud-auth
    pub fn with_credentials<V: Into<auth::credentials::Credentials>>(mut self, v: V) -> Self {
        self.credentials = Some(v.into());
        self
    }
}
