//! Server-side DataTables adapter.
//!
//! Turns a set of already-loaded view rows plus DataTables request
//! parameters (`draw`, `start`, `length`, `search[value]`,
//! `order[0][column]`, `order[0][dir]`) into the standard response envelope
//! `{data, recordsTotal, recordsFiltered, draw}`.
//!
//! Each view declares its columns once as an explicit descriptor list; the
//! adapter never introspects row types.

mod params;


pub use params::{DataTableParams, SortDirection};

use serde::Serialize;
use serde_json::Value;

use crate::errors::{Error, Result};

/// One column of a paged view, identified by its JSON field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
}

impl Column {
    pub const fn new(name: &'static str) -> Self {
        Column { name }
    }
}

/// DataTables response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct DataTablePage {
    pub data: Vec<Value>,
    #[serde(rename = "recordsTotal")]
    pub records_total: u64,
    #[serde(rename = "recordsFiltered")]
    pub records_filtered: u64,
    pub draw: u64,
}

/// Apply search, ordering, and paging to `rows` and build the envelope.
pub fn paginate<T: Serialize>(
    rows: &[T],
    columns: &[Column],
    params: &DataTableParams,
) -> Result<DataTablePage> {
    let mut values = rows
        .iter()
        .map(|row| serde_json::to_value(row).map_err(Error::from))
        .collect::<Result<Vec<Value>>>()?;
    let records_total = values.len() as u64;

    if let Some(term) = params.search.as_deref().filter(|t| !t.is_empty()) {
        let needle = term.to_lowercase();
        values.retain(|row| {
            columns
                .iter()
                .any(|col| cell_text(row, col.name).to_lowercase().contains(&needle))
        });
    }
    let records_filtered = values.len() as u64;

    if let Some(index) = params.order_column {
        if let Some(col) = columns.get(index) {
            values.sort_by(|a, b| compare_cells(a, b, col.name));
            if params.order_dir == SortDirection::Desc {
                values.reverse();
            }
        }
    }

    let data: Vec<Value> = match params.length {
        // Negative length means "all rows from start"
        l if l < 0 => values.into_iter().skip(params.start).collect(),
        l => values
            .into_iter()
            .skip(params.start)
            .take(l as usize)
            .collect(),
    };

    Ok(DataTablePage {
        data,
        records_total,
        records_filtered,
        draw: params.draw,
    })
}

fn cell_text(row: &Value, column: &str) -> String {
    match row.get(column) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn compare_cells(a: &Value, b: &Value, column: &str) -> std::cmp::Ordering {
    let numeric = (
        a.get(column).and_then(Value::as_f64),
        b.get(column).and_then(Value::as_f64),
    );
    match numeric {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal),
        _ => cell_text(a, column)
            .to_lowercase()
            .cmp(&cell_text(b, column).to_lowercase()),
    }
}
