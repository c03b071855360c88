use log::{debug, info, warn};

use snafu::{prelude::*, Snafu};
use term_frequency::builder::Builder;
use term_frequency::*;

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use serde_json::json;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::cloud::config_reader::*;
use crate::cloud::io_common::ResponseTable;

pub mod config_reader;
pub mod io_common;
pub mod io_csv;
pub mod io_xlsx;

#[derive(Debug, Snafu)]
pub enum CloudError {
    #[snafu(display("Error opening file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("No worksheet in {path}"))]
    EmptyExcel { path: String },
    #[snafu(display("Worksheet {name} not found in {path}"))]
    MissingWorksheet { name: String, path: String },
    #[snafu(display(
        "Several worksheets in {path} ({names:?}), the worksheet name must be provided"
    ))]
    AmbiguousWorksheet { path: String, names: Vec<String> },
    #[snafu(display("Error opening file {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error reading line {lineno} of {path}"))]
    CsvLineParse {
        source: csv::Error,
        path: String,
        lineno: usize,
    },
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Cannot find input file {path}"))]
    InputPath {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error writing summary to {path}"))]
    WritingSummary {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Unknown input provider {provider:?}"))]
    UnknownProvider { provider: String },
    #[snafu(display("No response source: use --input or responseSources"))]
    MissingSource {},
    #[snafu(display("No question: use --questions or questions"))]
    MissingQuestions {},
    #[snafu(display("Cannot find the directory of the configuration file"))]
    MissingParentDir {},
    #[snafu(display("Difference detected between calculated summary and reference summary"))]
    ReferenceMismatch {},
}

pub type CloudResult<T> = Result<T, CloudError>;

/// What can be shown for one question.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum QuestionStatus {
    /// There are terms to display.
    Ready,
    /// The answers are still too short to be worth a cloud.
    AwaitingResponses,
    /// Only stopwords were written.
    NotEnoughWords,
    /// No column of the source carries this question.
    ColumnPending,
}

impl QuestionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionStatus::Ready => "ready",
            QuestionStatus::AwaitingResponses => "awaitingResponses",
            QuestionStatus::NotEnoughWords => "notEnoughWords",
            QuestionStatus::ColumnPending => "columnPending",
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct QuestionResult {
    pub title: String,
    pub column: String,
    pub status: QuestionStatus,
    pub responses: usize,
    pub terms: Vec<RankedTerm>,
}

/// The state of the response source for one refresh cycle.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum SourceStatus {
    Ready(Vec<ResponseTable>),
    /// The source could not be read, or does not contain any answer yet.
    Pending,
}

/// Runs the term counting for one question over all the sources.
pub fn tabulate_question(
    question: &QuestionConfig,
    tables: &[ResponseTable],
    stopwords: &StopwordSet,
    max_terms: usize,
    minimum_text_length: usize,
) -> QuestionResult {
    let mut found = false;
    let mut batch = Builder::new(stopwords);
    for table in tables.iter() {
        if let Some(col_responses) = table.column_responses(&question.column) {
            found = true;
            for response in col_responses.iter() {
                batch.add_response(response);
            }
        }
    }

    let (status, terms) = if !found {
        warn!("Question {:?} not found in the sources", question.column);
        (QuestionStatus::ColumnPending, Vec::new())
    } else if batch.responses().join(" ").trim().chars().count() <= minimum_text_length {
        (QuestionStatus::AwaitingResponses, Vec::new())
    } else {
        let freqs = batch.frequencies();
        if freqs.is_empty() {
            (QuestionStatus::NotEnoughWords, Vec::new())
        } else {
            (QuestionStatus::Ready, rank_terms(&freqs, max_terms))
        }
    };
    info!(
        "Question {:?}: {} responses, {} terms, {}",
        question.display_title(),
        batch.len(),
        terms.len(),
        status.label()
    );

    QuestionResult {
        title: question.display_title(),
        column: question.column.clone(),
        status,
        responses: batch.len(),
        terms,
    }
}

fn question_result_to_json(qr: &QuestionResult) -> JSValue {
    let terms: Vec<JSValue> = qr
        .terms
        .iter()
        .map(|rt| json!({"term": rt.term, "count": rt.count}))
        .collect();
    json!({
        "title": qr.title,
        "column": qr.column,
        "status": qr.status.label(),
        "responses": qr.responses,
        "terms": terms
    })
}

fn build_summary_js(config: &CloudConfig, results: Option<&[QuestionResult]>) -> JSValue {
    let c = json!({
        "title": config.output_settings.dashboard_title,
        "sources": config.response_sources.len()
    });
    match results {
        Some(qrs) => {
            let questions: Vec<JSValue> = qrs.iter().map(question_result_to_json).collect();
            json!({"config": c, "status": "ready", "questions": questions})
        }
        None => json!({"config": c, "status": "sourcePending", "questions": []}),
    }
}

fn read_responses(root_path: &Path, cfs: &FileSource) -> CloudResult<ResponseTable> {
    let p: PathBuf = root_path.join(&cfs.file_path);
    let p2 = p.as_path().display().to_string();
    info!("Attempting to read response file {:?}", p2);
    match Provider::parse(&cfs.provider)? {
        Provider::Csv => io_csv::read_csv_responses(&p2),
        Provider::Xlsx => {
            io_xlsx::read_xlsx_responses(&p2, cfs.excel_worksheet_name.as_deref())
        }
    }
}

/// Reads all the sources of the configuration.
///
/// When `tolerate_errors` is set, a source that cannot be read makes the whole
/// cycle pending instead of failing.
pub fn read_sources(
    config: &CloudConfig,
    root_path: &Path,
    tolerate_errors: bool,
) -> CloudResult<SourceStatus> {
    let mut tables: Vec<ResponseTable> = Vec::new();
    for cfs in config.response_sources.iter() {
        match read_responses(root_path, cfs) {
            Ok(table) => tables.push(table),
            Err(e) if tolerate_errors => {
                warn!("Waiting for the response source {}: {}", cfs.file_path, e);
                return Ok(SourceStatus::Pending);
            }
            Err(e) => return Err(e),
        }
    }
    if tables.iter().all(|t| t.is_empty()) {
        info!("No response in the sources yet");
        return Ok(SourceStatus::Pending);
    }
    Ok(SourceStatus::Ready(tables))
}

/// One refresh cycle: reads the sources and tabulates every question.
pub fn run_cycle(
    config: &CloudConfig,
    root_path: &Path,
    stopwords: &StopwordSet,
    tolerate_errors: bool,
) -> CloudResult<JSValue> {
    let tables = match read_sources(config, root_path, tolerate_errors)? {
        SourceStatus::Ready(tables) => tables,
        SourceStatus::Pending => return Ok(build_summary_js(config, None)),
    };
    let results: Vec<QuestionResult> = config
        .questions
        .iter()
        .map(|q| {
            tabulate_question(
                q,
                &tables,
                stopwords,
                config.max_terms(),
                config.minimum_text_length(),
            )
        })
        .collect();
    Ok(build_summary_js(config, Some(results.as_slice())))
}

fn write_summary(js: &JSValue, out: Option<&str>) -> CloudResult<String> {
    let pretty_js = serde_json::to_string_pretty(js).context(ParsingJsonSnafu {})?;
    match out {
        None | Some("stdout") => println!("{}", pretty_js),
        Some(path) => {
            fs::write(path, &pretty_js).context(WritingSummarySnafu { path })?;
            info!("Summary written to {}", path);
        }
    }
    Ok(pretty_js)
}

/// Tabulates the responses once, or forever in watch mode.
///
/// Arguments:
/// * `root_path` the directory the file paths of the configuration are relative to
/// * `out` where to write the summary (standard output if not provided)
/// * `check_summary_path` a reference summary to compare with (single run only)
pub fn run_dashboard(
    config: &CloudConfig,
    root_path: &Path,
    out: Option<String>,
    check_summary_path: Option<String>,
    watch: bool,
) -> CloudResult<()> {
    config.validate()?;
    debug!("config: {:?}", config);
    let stopwords = config.build_stopwords();

    if watch {
        let period = config.refresh_period();
        info!("Refreshing every {:?}", period);
        loop {
            let js = run_cycle(config, root_path, &stopwords, true)?;
            write_summary(&js, out.as_deref())?;
            thread::sleep(period);
        }
    }

    let result_js = run_cycle(config, root_path, &stopwords, false)?;
    let pretty_js_stats = write_summary(&result_js, out.as_deref())?;

    // The reference summary, if provided for comparison
    if let Some(summary_p) = check_summary_path {
        let summary_ref = read_summary(&summary_p)?;
        let pretty_js_summary_ref =
            serde_json::to_string_pretty(&summary_ref).context(ParsingJsonSnafu {})?;
        if pretty_js_summary_ref != pretty_js_stats {
            warn!("Found differences with the reference string");
            print_diff(
                pretty_js_summary_ref.as_str(),
                pretty_js_stats.as_ref(),
                "\n",
            );
            return ReferenceMismatchSnafu {}.fail();
        }
        info!("Summary matches the reference {}", summary_p);
    }

    Ok(())
}

/// Merges the command line arguments into the configuration.
///
/// Returns the configuration, the directory its paths are relative to and the
/// output location.
pub fn config_from_args(args: &Args) -> CloudResult<(CloudConfig, PathBuf, Option<String>)> {
    let (mut config, root_path) = match &args.config {
        Some(config_path) => {
            let config = read_config(config_path)?;
            let root_p = Path::new(config_path)
                .parent()
                .context(MissingParentDirSnafu {})?
                .to_path_buf();
            (config, root_p)
        }
        None => (CloudConfig::default(), PathBuf::from(".")),
    };

    if let Some(input) = &args.input {
        // Relative to the working directory, not to the configuration.
        let input_p = fs::canonicalize(input).context(InputPathSnafu { path: input })?;
        let provider = match &args.input_type {
            Some(x) => Provider::parse(x)?,
            None => Provider::from_path(input),
        };
        config.response_sources = vec![FileSource {
            provider: provider.name().to_string(),
            file_path: input_p.display().to_string(),
            excel_worksheet_name: None,
        }];
    }

    if let Some(worksheet_name) = &args.excel_worksheet_name {
        for cfs in config.response_sources.iter_mut() {
            cfs.excel_worksheet_name = Some(worksheet_name.clone());
        }
    }

    if let Some(questions) = &args.questions {
        config.questions = questions
            .iter()
            .map(|q| QuestionConfig {
                column: q.clone(),
                title: None,
            })
            .collect();
    }

    let out = match &args.out {
        Some(x) => Some(x.clone()),
        None => config
            .output_settings
            .output_path
            .as_ref()
            .map(|p| root_path.join(p).display().to_string()),
    };

    Ok((config, root_path, out))
}
