mod args;
mod cloud;

use clap::Parser;
use log::{debug, info};
use snafu::ErrorCompat;

use crate::args::Args;
use crate::cloud::{config_from_args, run_dashboard, CloudResult};

fn run(args: &Args) -> CloudResult<()> {
    let (config, root_path, out) = config_from_args(args)?;
    info!(
        "{} sources, {} questions",
        config.response_sources.len(),
        config.questions.len()
    );
    run_dashboard(
        &config,
        &root_path,
        out,
        args.reference.clone(),
        args.watch,
    )
}

fn main() {
    let args = Args::parse();
    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    debug!("args: {:?}", args);

    if let Err(e) = run(&args) {
        eprintln!("An error occured: {}", e);
        for cause in ErrorCompat::iter_chain(&e).skip(1) {
            eprintln!("  caused by: {}", cause);
        }
        std::process::exit(1);
    }
}
