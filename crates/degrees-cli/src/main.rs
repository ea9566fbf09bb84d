//! degrees — interactive degrees-of-separation session.
//!
//! Loads the CSV corpus, prompts for two names, and prints the shortest
//! chain of shared movies connecting them.

mod args;
mod prompt;
mod render;

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use degrees_core::errors::CliError;
use degrees_core::{DegreesConfig, ErrorCode};
use degrees_search::{SearchEngine, SearchOptions};
use degrees_store::{load_directory, NameIndex};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    match run(&mut input, &mut output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error[{}]: {err}", err.error_code());
            ExitCode::FAILURE
        }
    }
}

fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), CliError> {
    let parsed = args::parse(std::env::args().skip(1))?;
    let config = DegreesConfig::load(Path::new("."), Some(&parsed.overrides))?;

    let directory = config.data.effective_directory();
    writeln!(output, "Loading data...")?;
    let started = Instant::now();
    let (graph, stats) = load_directory(Path::new(directory))?;
    tracing::info!(
        directory,
        people = stats.people,
        movies = stats.movies,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Data loaded"
    );
    writeln!(output, "Data loaded.")?;

    let names = NameIndex::build(&graph);
    let source = prompt::prompt_person(input, output, &graph, &names)?;
    let target = prompt::prompt_person(input, output, &graph, &names)?;

    let engine = SearchEngine::with_options(&graph, SearchOptions::from_config(&config.search));
    let outcome = engine.run(&source, &target)?;
    tracing::debug!(
        layers = outcome.stats.layers,
        nodes_expanded = outcome.stats.nodes_expanded,
        "Search finished"
    );

    match outcome.path {
        None => writeln!(output, "Not connected.")?,
        Some(path) if parsed.json => {
            let json = serde_json::to_string_pretty(&path)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            writeln!(output, "{json}")?;
        }
        Some(path) => {
            for line in render::render_path(&graph, &source, &path) {
                writeln!(output, "{line}")?;
            }
        }
    }

    Ok(())
}
