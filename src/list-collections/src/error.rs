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

//! The errors produced by this tool.

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The closed set of failures the tool distinguishes.
///
/// Each variant carries its underlying cause, so callers and tests can
/// distinguish cases without matching on message strings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured service account key file does not exist.
    ///
    /// Detected locally, before any credential parsing or network activity.
    #[error("service account file not found at {}", .path.display())]
    MissingCredentialFile { path: std::path::PathBuf },

    /// Reading the key file, constructing credentials, or building the
    /// client failed.
    #[error("cannot authenticate with the service account key")]
    Authentication(#[source] BoxError),

    /// The collection enumeration failed.
    #[error("cannot list the collections in the database")]
    Enumeration(#[source] BoxError),

    /// Writing the report failed.
    #[error("cannot write the report")]
    Output(#[from] std::io::Error),
}

impl Error {
    pub fn authentication<T: Into<BoxError>>(source: T) -> Self {
        Self::Authentication(source.into())
    }

    pub fn enumeration<T: Into<BoxError>>(source: T) -> Self {
        Self::Enumeration(source.into())
    }

    pub fn missing_project_id() -> Self {
        Self::Authentication(
            "the key file does not record a `project_id` and no --project option was given".into(),
        )
    }
}

/// Formats `error` with its full source chain, e.g.
/// `cannot list the collections in the database: the database does not exist`.
pub fn describe(error: &Error) -> String {
    use std::error::Error as _;
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
