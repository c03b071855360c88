use clap::Parser;

/// Counts the terms of free-text survey answers, one word cloud per question.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file describing the sources, the questions and the stopwords.
    /// See the manual of the term_frequency crate for the format.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path) A reference summary in JSON format. If provided, wcterms will check that
    /// the computed summary matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (file path, 'stdout' or empty) Where to write the summary in JSON format. Setting this
    /// option overrides the outputPath that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path or empty) The file containing the responses. Setting this option overrides
    /// the sources that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (csv or xlsx) The type of the input. By default, it is guessed from the file extension.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (text of a question, repeated) The columns to turn into clouds. It should correspond to
    /// the entries in the first row of the input.
    #[clap(long, value_parser)]
    pub questions: Option<Vec<String>>,

    /// When using an Excel file, indicates the name of the worksheet to use.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// Keeps polling the input and rewriting the summary, every refreshSeconds (default 10).
    #[clap(long, takes_value = false)]
    pub watch: bool,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
