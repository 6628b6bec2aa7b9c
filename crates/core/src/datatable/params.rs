//! DataTables request parameter parsing.

use std::collections::HashMap;

/// Sort direction for the ordered column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Parsed DataTables server-side request parameters.
///
/// The wire keys use the bracketed form the DataTables client sends
/// (`search[value]`, `order[0][column]`, `order[0][dir]`), which does not fit
/// a derived deserializer; parsing is explicit instead. Unknown or malformed
/// values fall back to defaults, matching the lenient behavior of the legacy
/// helper.
#[derive(Debug, Clone)]
pub struct DataTableParams {
    pub draw: u64,
    pub start: usize,
    pub length: i64,
    pub search: Option<String>,
    pub order_column: Option<usize>,
    pub order_dir: SortDirection,
}

impl Default for DataTableParams {
    fn default() -> Self {
        DataTableParams {
            draw: 0,
            start: 0,
            // Negative length means "no page limit" in the DataTables protocol
            length: -1,
            search: None,
            order_column: None,
            order_dir: SortDirection::Asc,
        }
    }
}

impl DataTableParams {
    pub fn from_query(query: &HashMap<String, String>) -> Self {
        let draw = parse_or_default(query.get("draw"), 0u64);
        let start = parse_or_default(query.get("start"), 0usize);
        let length = parse_or_default(query.get("length"), -1i64);
        let search = query
            .get("search[value]")
            .filter(|s| !s.is_empty())
            .cloned();
        let order_column = query.get("order[0][column]").and_then(|s| s.parse().ok());
        let order_dir = match query.get("order[0][dir]").map(String::as_str) {
            Some("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        };

        DataTableParams {
            draw,
            start,
            length,
            search,
            order_column,
            order_dir,
        }
    }
}

fn parse_or_default<T: std::str::FromStr>(raw: Option<&String>, default: T) -> T {
    raw.and_then(|s| s.parse().ok()).unwrap_or(default)
}
