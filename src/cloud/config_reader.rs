use std::fs;
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;
use snafu::prelude::*;
use term_frequency::{StopwordSet, StopwordSetBuilder, DEFAULT_MAX_TERMS, PORTUGUESE_EXTRA};

use crate::cloud::*;

/// Questions whose answers, put together, are not longer than this are still
/// waiting for responses.
pub const DEFAULT_MINIMUM_TEXT_LENGTH: usize = 5;

pub const DEFAULT_REFRESH_SECONDS: u64 = 10;

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(rename = "dashboardTitle")]
    pub dashboard_title: Option<String>,
    #[serde(rename = "outputPath")]
    pub output_path: Option<String>,
    #[serde(rename = "maxTerms")]
    pub max_terms: Option<usize>,
    #[serde(rename = "minimumTextLength")]
    pub minimum_text_length: Option<usize>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct FileSource {
    pub provider: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct QuestionConfig {
    /// The text of the question, as found in the first row of the source.
    pub column: String,
    /// A short title displayed above the cloud.
    pub title: Option<String>,
}

impl QuestionConfig {
    pub fn display_title(&self) -> String {
        self.title.clone().unwrap_or_else(|| self.column.clone())
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopwordConfig {
    pub extra: Option<Vec<String>>,
    #[serde(rename = "replaceDefaults")]
    pub replace_defaults: Option<bool>,
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct CloudConfig {
    #[serde(rename = "outputSettings", default)]
    pub output_settings: OutputSettings,
    #[serde(rename = "responseSources", default)]
    pub response_sources: Vec<FileSource>,
    #[serde(default)]
    pub questions: Vec<QuestionConfig>,
    pub stopwords: Option<StopwordConfig>,
    #[serde(rename = "refreshSeconds")]
    pub refresh_seconds: Option<u64>,
}

impl CloudConfig {
    pub fn max_terms(&self) -> usize {
        self.output_settings.max_terms.unwrap_or(DEFAULT_MAX_TERMS)
    }

    pub fn minimum_text_length(&self) -> usize {
        self.output_settings
            .minimum_text_length
            .unwrap_or(DEFAULT_MINIMUM_TEXT_LENGTH)
    }

    pub fn refresh_period(&self) -> Duration {
        Duration::from_secs(self.refresh_seconds.unwrap_or(DEFAULT_REFRESH_SECONDS))
    }

    /// The stopwords for this dashboard. Built once, before the first cycle.
    pub fn build_stopwords(&self) -> StopwordSet {
        let sw_config = self.stopwords.clone().unwrap_or_default();
        let mut builder = StopwordSetBuilder::new();
        if !sw_config.replace_defaults.unwrap_or(false) {
            builder = builder
                .with_generic_defaults()
                .with_words(PORTUGUESE_EXTRA);
        }
        if let Some(extra) = sw_config.extra {
            debug!("build_stopwords: {} extra words", extra.len());
            builder = builder.with_words(extra.as_slice());
        }
        builder.build()
    }

    /// Checks what can be checked before reading any response.
    pub fn validate(&self) -> CloudResult<()> {
        ensure!(!self.response_sources.is_empty(), MissingSourceSnafu {});
        ensure!(!self.questions.is_empty(), MissingQuestionsSnafu {});
        for cfs in self.response_sources.iter() {
            Provider::parse(&cfs.provider)?;
        }
        Ok(())
    }
}

/// The supported input formats.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Provider {
    Csv,
    Xlsx,
}

impl Provider {
    pub fn parse(provider: &str) -> CloudResult<Provider> {
        match provider {
            "csv" => Ok(Provider::Csv),
            "xlsx" | "excel" => Ok(Provider::Xlsx),
            x => UnknownProviderSnafu { provider: x }.fail(),
        }
    }

    /// Guesses the provider from the extension of a file, defaulting to csv.
    pub fn from_path(path: &str) -> Provider {
        if path.to_lowercase().ends_with(".xlsx") {
            Provider::Xlsx
        } else {
            Provider::Csv
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Csv => "csv",
            Provider::Xlsx => "xlsx",
        }
    }
}

pub fn read_config(path: &str) -> CloudResult<CloudConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let config: CloudConfig =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(config)
}

pub fn read_summary(path: &str) -> CloudResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(js)
}
