use crate::datasets::Dataset;
use crate::errors::AppError;
use crate::storage::load_table;
use crate::table::Table;
use std::{path::PathBuf, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub data_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir: Arc::new(data_dir),
        }
    }

    pub async fn load(&self, dataset: Dataset) -> Result<Table, AppError> {
        load_table(&self.data_dir, dataset).await
    }
}
