use calamine::{open_workbook, DataType, Range, Reader, Xlsx};
use log::{debug, info};
use snafu::prelude::*;

use crate::cloud::{
    io_common::{simplify_file_name, ResponseTable},
    *,
};

/// Reads an Excel export of a form (Google Forms, Microsoft Forms).
///
/// The worksheet must be named when the workbook has several of them.
pub fn read_xlsx_responses(
    path: &str,
    worksheet_name: Option<&str>,
) -> CloudResult<ResponseTable> {
    let wrange = get_range(path, worksheet_name)?;

    let mut iter = wrange.rows();
    let header: Vec<Option<String>> = match iter.next() {
        Some(row) => row.iter().map(read_cell).collect(),
        None => Vec::new(),
    };
    debug!("read_xlsx_responses: header: {:?}", header);

    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    for (idx, row) in iter.enumerate() {
        let cells: Vec<Option<String>> = row.iter().map(read_cell).collect();
        debug!("read_xlsx_responses: idx: {:?} row: {:?}", idx, &cells);
        rows.push(cells);
    }
    info!(
        "read_xlsx_responses: {} rows in {}",
        rows.len(),
        simplify_file_name(path)
    );
    Ok(ResponseTable { header, rows })
}

/// The text of a cell. Numbers, booleans and dates are coerced to strings,
/// empty cells and cells in error are dropped.
pub fn read_cell(cell: &DataType) -> Option<String> {
    match cell {
        DataType::String(s) if s.trim().is_empty() => None,
        DataType::String(s) => Some(s.clone()),
        DataType::Int(i) => Some(i.to_string()),
        DataType::Float(f) => Some(f.to_string()),
        DataType::Bool(b) => Some(b.to_string()),
        DataType::DateTime(d) => Some(d.to_string()),
        DataType::Error(e) => {
            debug!("read_cell: skipping cell in error {:?}", e);
            None
        }
        DataType::Empty => None,
    }
}

fn get_range(path: &str, worksheet_name_o: Option<&str>) -> CloudResult<Range<DataType>> {
    debug!(
        "get_range: path: {:?} worksheet: {:?}",
        &path, &worksheet_name_o
    );
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path })?;

    // A worksheet name was provided, use it.
    if let Some(worksheet_name) = worksheet_name_o {
        let wrange = workbook
            .worksheet_range(worksheet_name)
            .context(MissingWorksheetSnafu {
                name: worksheet_name,
                path,
            })?
            .context(OpeningExcelSnafu { path })?;
        Ok(wrange)
    } else {
        let all_worksheets = workbook.worksheets();
        match all_worksheets.as_slice() {
            [] => EmptyExcelSnafu { path }.fail(),
            [(worksheet_name, wrange)] => {
                debug!("get_range: path: {:?} worksheet: {:?}", &path, &worksheet_name);
                Ok(wrange.clone())
            }
            _ => AmbiguousWorksheetSnafu {
                path,
                names: all_worksheets
                    .iter()
                    .map(|(name, _)| name.clone())
                    .collect::<Vec<String>>(),
            }
            .fail(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_coerced() {
        assert_eq!(
            read_cell(&DataType::String("Entregas".to_string())),
            Some("Entregas".to_string())
        );
        assert_eq!(read_cell(&DataType::String(" ".to_string())), None);
        assert_eq!(read_cell(&DataType::Int(2025)), Some("2025".to_string()));
        assert_eq!(read_cell(&DataType::Float(2.5)), Some("2.5".to_string()));
        assert_eq!(read_cell(&DataType::Bool(true)), Some("true".to_string()));
        assert_eq!(read_cell(&DataType::Empty), None);
    }

    fn workbook(file_name: &str) -> String {
        format!(
            "{}/tests/data/xlsx_responses/{}",
            env!("CARGO_MANIFEST_DIR"),
            file_name
        )
    }

    fn header(table: &ResponseTable) -> Vec<Option<&str>> {
        table.header.iter().map(|h| h.as_deref()).collect()
    }

    #[test]
    fn named_worksheet() {
        let table =
            read_xlsx_responses(&workbook("xlsx_responses.xlsx"), Some("Respostas")).unwrap();
        assert_eq!(
            header(&table),
            vec![
                Some("Carimbo de data/hora"),
                Some("Projetos da equipe"),
                Some("Ano de entrada")
            ]
        );
        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.rows[0][0], Some("45123.5".to_string()));
        assert_eq!(table.rows[0][1], Some("Plano de ação".to_string()));
        // Numeric answers come back as text.
        assert_eq!(table.rows[0][2], Some("2019".to_string()));
        assert_eq!(table.rows[3][1], None);
    }

    #[test]
    fn only_worksheet_is_picked() {
        let table = read_xlsx_responses(&workbook("xlsx_responses_single_sheet.xlsx"), None).unwrap();
        assert_eq!(header(&table)[1], Some("Projetos da equipe"));
        assert_eq!(
            table.column_responses("Ano de entrada"),
            Some(vec![
                "2019".to_string(),
                "2021".to_string(),
                "2019".to_string(),
                "2019".to_string()
            ])
        );
    }

    #[test]
    fn several_worksheets_need_a_name() {
        let res = read_xlsx_responses(&workbook("xlsx_responses.xlsx"), None);
        match res {
            Err(CloudError::AmbiguousWorksheet { names, .. }) => {
                assert_eq!(names, vec!["Respostas".to_string(), "Notas".to_string()])
            }
            other => panic!("unexpected result {:?}", other),
        }
        let notas = read_xlsx_responses(&workbook("xlsx_responses.xlsx"), Some("Notas")).unwrap();
        assert_eq!(header(&notas), vec![Some("Nota")]);
        assert_eq!(notas.rows.len(), 1);
    }

    #[test]
    fn missing_worksheet() {
        let res = read_xlsx_responses(&workbook("xlsx_responses.xlsx"), Some("Planilha1"));
        assert!(matches!(res, Err(CloudError::MissingWorksheet { .. })));
    }

    #[test]
    fn missing_workbook() {
        let res = read_xlsx_responses("/nonexistent/respostas.xlsx", None);
        assert!(matches!(res, Err(CloudError::OpeningExcel { .. })));
    }
}
