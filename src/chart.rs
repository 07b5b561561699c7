use crate::table::{Table, TableError};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    StackedBar,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub color: Option<String>,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: String,
    pub kind: ChartKind,
    pub series: Vec<Series>,
    pub show_values: bool,
}

// Panels are laid out row-major.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub title: String,
    pub rows: u8,
    pub cols: u8,
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn single(panel: Panel) -> Self {
        Self {
            title: panel.title.clone(),
            rows: 1,
            cols: 1,
            panels: vec![panel],
        }
    }
}

// Non-numeric cells plot as zero.
pub fn series(
    table: &Table,
    label_column: &str,
    value_column: &str,
    name: &str,
    color: Option<&str>,
) -> Result<Series, TableError> {
    let labels = table
        .values(label_column)?
        .into_iter()
        .map(|value| value.to_string())
        .collect();
    let values = table
        .values(value_column)?
        .into_iter()
        .map(|value| value.as_f64().unwrap_or(0.0))
        .collect();

    Ok(Series {
        name: name.to_string(),
        color: color.map(str::to_string),
        labels,
        values,
    })
}

pub fn pie(
    table: &Table,
    names_column: &str,
    values_column: &str,
    title: &str,
) -> Result<Panel, TableError> {
    Ok(Panel {
        title: title.to_string(),
        kind: ChartKind::Pie,
        series: vec![series(table, names_column, values_column, values_column, None)?],
        show_values: true,
    })
}
