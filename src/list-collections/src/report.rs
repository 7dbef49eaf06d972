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

//! Prints the collection report.

use crate::error::Error;
use firestore_client::client::Firestore;
use std::io::Write;

/// Enumerates the top-level collections under `parent` and writes the report
/// to `out`.
///
/// The report is the console contract of this tool: a `Fetching
/// collections...` header, one `- <id>` line per collection in the order
/// produced by the service, and a fallback line when the database has no
/// top-level collections.
pub async fn collections<W: Write>(
    client: &Firestore,
    parent: &str,
    out: &mut W,
) -> Result<(), Error> {
    writeln!(out, "Fetching collections...")?;
    writeln!(out)?;
    writeln!(out, "Firestore Collections:")?;
    let ids = client
        .list_collection_ids(parent)
        .all_ids()
        .await
        .map_err(Error::enumeration)?;
    for id in &ids {
        writeln!(out, "- {id}")?;
    }
    if ids.is_empty() {
        writeln!(out, "No top-level collections found.")?;
    }
    Ok(())
}
