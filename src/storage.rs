use crate::datasets::Dataset;
use crate::errors::AppError;
use crate::table::Table;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{debug, error};

pub fn resolve_data_dir() -> PathBuf {
    if let Ok(path) = env::var("EURO_DATA_DIR") {
        return PathBuf::from(path);
    }

    PathBuf::from("data")
}

// Files are read on every call; nothing is cached.
pub async fn load_table(dir: &Path, dataset: Dataset) -> Result<Table, AppError> {
    let path = dir.join(dataset.file_name());
    let bytes = fs::read(&path)
        .await
        .inspect_err(|err| error!("failed to read {}: {err}", path.display()))?;

    let table = Table::from_csv_with_text_columns(&bytes[..], dataset.text_columns())
        .and_then(|table| {
            table.require_columns(dataset.required_columns())?;
            Ok(table)
        })
        .map_err(|err| {
            error!("failed to load {}: {err}", path.display());
            AppError::from(err)
        })?;

    debug!(rows = table.len(), "loaded {}", path.display());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    #[tokio::test]
    async fn shipped_datasets_load_with_their_columns() {
        for dataset in [
            Dataset::TeamRecords,
            Dataset::TeamMedals,
            Dataset::HostCountries,
            Dataset::PenaltyCards,
        ] {
            let table = load_table(&data_dir(), dataset).await.unwrap();
            assert!(!table.is_empty(), "{dataset:?} is empty");
        }
    }

    #[tokio::test]
    async fn missing_file_is_an_internal_error() {
        let dir = std::env::temp_dir().join("euro_stats_missing_dir");
        let err = load_table(&dir, Dataset::TeamRecords).await.unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message.is_empty());
    }
}
