// Primitives for reading CSV files.

use log::{debug, info};
use snafu::prelude::*;

use crate::cloud::{
    io_common::{cell_text, simplify_file_name, ResponseTable},
    *,
};

/// Reads a CSV export of a form. The first line holds the question texts.
pub fn read_csv_responses(path: &str) -> CloudResult<ResponseTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .context(CsvOpenSnafu { path })?;

    let header: Vec<Option<String>> = rdr
        .headers()
        .context(CsvLineParseSnafu { path, lineno: 1usize })?
        .iter()
        .map(cell_text)
        .collect();
    debug!("read_csv_responses: header: {:?}", header);

    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    for (idx, line_r) in rdr.records().enumerate() {
        // The header is line 1.
        let lineno = idx + 2;
        let line = line_r.context(CsvLineParseSnafu { path, lineno })?;
        let row: Vec<Option<String>> = line.iter().map(cell_text).collect();
        debug!("read_csv_responses: lineno: {:?} row: {:?}", lineno, &row);
        rows.push(row);
    }
    info!(
        "read_csv_responses: {} rows in {}",
        rows.len(),
        simplify_file_name(path)
    );
    Ok(ResponseTable { header, rows })
}
