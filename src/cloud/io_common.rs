use std::collections::HashMap;
use std::path::Path;

use log::debug;

/// The content of one response sheet: the question texts of the first row,
/// then one row per participant. Empty cells are `None`.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct ResponseTable {
    pub header: Vec<Option<String>>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl ResponseTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The non-empty answers found under the given question, in row order.
    ///
    /// Returns `None` when no column carries this question.
    pub fn column_responses(&self, question: &str) -> Option<Vec<String>> {
        let col_names = get_col_names(&self.header);
        let col_idx = *col_names.get(question.trim())?;
        let res: Vec<String> = self
            .rows
            .iter()
            .filter_map(|row| row.get(col_idx).cloned().flatten())
            .collect();
        debug!(
            "column_responses: column {} ({:?}): {} responses",
            col_idx,
            question,
            res.len()
        );
        Some(res)
    }
}

/// Maps the (trimmed) names of the columns to their position. When a name is
/// repeated, the first column wins.
pub fn get_col_names(header: &[Option<String>]) -> HashMap<String, usize> {
    let mut col_names: HashMap<String, usize> = HashMap::new();
    for (idx, x) in header.iter().enumerate() {
        if let Some(s) = x {
            col_names.entry(s.trim().to_string()).or_insert(idx);
        }
    }
    col_names
}

/// A cell, or `None` if it only contains whitespace.
pub fn cell_text(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

pub fn simplify_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
        .to_string()
}
