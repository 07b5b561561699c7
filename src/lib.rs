pub mod app;
pub mod chart;
pub mod datasets;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod state;
pub mod storage;
pub mod table;
pub mod ui;
pub mod views;

pub use app::router;
pub use pipeline::{rank, LimitPolicy};
pub use state::AppState;
pub use storage::{load_table, resolve_data_dir};
pub use table::{Table, TableError, Value};
