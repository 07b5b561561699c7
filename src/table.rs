use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("ColumnNotFoundError: column '{0}' not found")]
    ColumnNotFound(String),
    #[error("malformed table: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Null,
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(value) => Some(*value as f64),
            Value::Float(value) => Some(*value),
            Value::Text(_) | Value::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn cmp_desc(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Null, _) => Ordering::Greater,
            (_, Value::Null) => Ordering::Less,
            (Value::Text(a), Value::Text(b)) => b.cmp(a),
            (Value::Text(_), _) => Ordering::Greater,
            (_, Value::Text(_)) => Ordering::Less,
            (a, b) => {
                let a = a.as_f64().unwrap_or(f64::NAN);
                let b = b.as_f64().unwrap_or(f64::NAN);
                match (a.is_nan(), b.is_nan()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => b.total_cmp(&a),
                }
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Text(value) => f.write_str(value),
            Value::Null => Ok(()),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Int,
    Float,
    Text,
}

// Every operation returns a new table; the source is never modified.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == columns.len()));
        Self { columns, rows }
    }

    pub fn from_csv<R: Read>(reader: R) -> Result<Self, TableError> {
        Self::from_csv_with_text_columns(reader, &[])
    }

    // Columns in `text_columns` stay text even when every cell looks numeric.
    pub fn from_csv_with_text_columns<R: Read>(
        reader: R,
        text_columns: &[&str],
    ) -> Result<Self, TableError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let mut raw = Vec::new();
        for record in reader.records() {
            raw.push(record?);
        }

        let kinds: Vec<ColumnKind> = columns
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                if text_columns.contains(&name.as_str()) {
                    ColumnKind::Text
                } else {
                    infer_kind(raw.iter().map(|record| record.get(idx).unwrap_or("")))
                }
            })
            .collect();

        let rows = raw
            .iter()
            .map(|record| {
                kinds
                    .iter()
                    .enumerate()
                    .map(|(idx, kind)| parse_cell(record.get(idx).unwrap_or(""), *kind))
                    .collect()
            })
            .collect();

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<Value>> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Result<usize, TableError> {
        self.columns
            .iter()
            .position(|column| column == name)
            .ok_or_else(|| TableError::ColumnNotFound(name.to_string()))
    }

    pub fn require_columns(&self, names: &[&str]) -> Result<(), TableError> {
        for name in names {
            self.column_index(name)?;
        }
        Ok(())
    }

    pub fn values(&self, name: &str) -> Result<Vec<&Value>, TableError> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| &row[idx]).collect())
    }

    pub fn get(&self, row: usize, name: &str) -> Option<&Value> {
        let idx = self.column_index(name).ok()?;
        self.rows.get(row).map(|row| &row[idx])
    }

    pub fn select(&self, names: &[&str]) -> Result<Table, TableError> {
        let indices = names
            .iter()
            .map(|name| self.column_index(name))
            .collect::<Result<Vec<_>, _>>()?;
        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&idx| row[idx].clone()).collect())
            .collect();
        Ok(Table::from_rows(
            names.iter().map(|name| name.to_string()).collect(),
            rows,
        ))
    }

    pub fn with_first_column(&self, name: &str) -> Result<Table, TableError> {
        self.column_index(name)?;
        let mut order: Vec<&str> = vec![name];
        order.extend(
            self.columns
                .iter()
                .map(String::as_str)
                .filter(|column| *column != name),
        );
        self.select(&order)
    }

    pub fn map_column<F>(&self, name: &str, f: F) -> Result<Table, TableError>
    where
        F: Fn(&Value) -> Value,
    {
        let idx = self.column_index(name)?;
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row[idx] = f(&row[idx]);
                row
            })
            .collect();
        Ok(Table::from_rows(self.columns.clone(), rows))
    }

    pub(crate) fn with_rows(&self, rows: Vec<Vec<Value>>) -> Table {
        Table::from_rows(self.columns.clone(), rows)
    }
}

// Placeholders that spreadsheet exports write for missing cells.
const NA_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing(cell: &str) -> bool {
    cell.is_empty() || NA_TOKENS.contains(&cell)
}

fn infer_kind<'a>(cells: impl Iterator<Item = &'a str>) -> ColumnKind {
    let mut kind = ColumnKind::Int;
    for cell in cells.filter(|cell| !is_missing(cell)) {
        if cell.parse::<i64>().is_ok() {
            continue;
        }
        if cell.parse::<f64>().is_ok() {
            kind = ColumnKind::Float;
        } else {
            return ColumnKind::Text;
        }
    }
    kind
}

fn parse_cell(cell: &str, kind: ColumnKind) -> Value {
    if is_missing(cell) {
        return Value::Null;
    }
    match kind {
        ColumnKind::Int => cell.parse().map(Value::Int).unwrap_or(Value::Null),
        ColumnKind::Float => match cell.parse::<f64>() {
            Ok(value) if !value.is_nan() => Value::Float(value),
            _ => Value::Null,
        },
        ColumnKind::Text => Value::Text(cell.to_string()),
    }
}
