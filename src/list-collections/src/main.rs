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

//! Lists the top-level collections in a Cloud Firestore database.

mod credentials;
mod error;
mod report;

use clap::Parser;
use error::Error;
use firestore_client::client::Firestore;
use std::process::ExitCode;

/// Lists the top-level collections in a Cloud Firestore database.
///
/// Authenticates with a service account key file and prints one line per
/// collection to stdout. Diagnostics and logs go to stderr.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the service account key file used to authenticate.
    #[arg(long, env = "GOOGLE_APPLICATION_CREDENTIALS")]
    credentials_file: std::path::PathBuf,

    /// The project owning the database.
    ///
    /// Defaults to the `project_id` recorded in the key file.
    #[arg(long)]
    project: Option<String>,

    /// The database to enumerate.
    #[arg(long, default_value = "(default)")]
    database: String,

    /// Overrides the Firestore endpoint. Useful with the emulator.
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _guard = enable_tracing();
    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Error> {
    let key = credentials::from_file(&args.credentials_file)?;
    let project = args
        .project
        .or(key.project_id)
        .ok_or_else(Error::missing_project_id)?;
    let parent = format!("projects/{project}/databases/{}/documents", args.database);
    tracing::debug!("listing collections under {parent}");

    let mut builder = Firestore::builder().with_credentials(key.credentials);
    if let Some(endpoint) = args.endpoint {
        builder = builder.with_endpoint(endpoint);
    }
    let client = builder.build().await.map_err(Error::authentication)?;

    report::collections(&client, &parent, &mut std::io::stdout()).await
}

/// Maps an error to the line printed on stdout.
///
/// The missing-file case keeps its dedicated diagnostic; everything else gets
/// the generic prefix with the full cause chain. Both cases exit with a
/// failure status.
fn failure_message(error: &Error) -> String {
    match error {
        Error::MissingCredentialFile { path } => {
            format!("Error: Service account file not found at {}", path.display())
        }
        _ => format!("An error occurred: {}", error::describe(error)),
    }
}

fn enable_tracing() -> tracing::dispatcher::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_default(subscriber)
}
