include!("../../lib.rs");
use std::path::Path;
use tokio::io::{stdin, stdout, BufReader};
use crate::catalog::controller::CatalogShell;
use crate::core::controller::AppState;
use crate::core::library::LibraryError;
use crate::core::repository::RepositoryStore;
use crate::utils::logs::setup_tracing;

// the data file lives in the working directory
const DATA_FILE: &str = "books.csv";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), LibraryError> {
    let state = AppState::new(Path::new(DATA_FILE), RepositoryStore::CsvFile);
    setup_tracing(state.config.log_level.as_str());

    let mut shell = CatalogShell::new(&state, BufReader::new(stdin()), stdout());
    shell.start().await?;
    shell.run().await
}
