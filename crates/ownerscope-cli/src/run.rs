//! Single-URL and batch processing.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use ownerscope_extractor::OwnerFinder;
use ownerscope_llm::PerplexityProvider;
use std::fs;
use std::path::Path;

/// Execute the parsed command line. Returns the number of failed inputs.
pub async fn run(cli: Cli) -> Result<usize> {
    let config = Config::load().unwrap_or_default();

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let api_key = cli.api_key.clone().ok_or(CliError::MissingApiKey)?;

    let mut finder_config = config.finder.clone();
    if cli.no_second_pass {
        finder_config.second_pass = false;
    }
    finder_config.validate().map_err(CliError::Config)?;

    let provider = PerplexityProvider::new(api_key)
        .with_base_url(&config.api.base_url)
        .with_model(&config.api.model)
        .with_timeout(finder_config.request_timeout_secs)
        .with_max_tokens(finder_config.max_tokens)
        .with_temperature(finder_config.temperature)
        .with_top_p(finder_config.top_p);
    let finder = OwnerFinder::new(provider, finder_config);

    let results_root = cli
        .results_root
        .clone()
        .unwrap_or_else(|| config.settings.results_root.clone().into());

    match (&cli.url, &cli.file) {
        (Some(url), None) => {
            let ok = process_single_url(&finder, url, &results_root, &formatter).await;
            Ok(usize::from(!ok))
        }
        (None, Some(path)) => process_urls_from_file(&finder, path, &results_root, &formatter).await,
        // clap enforces exactly one input mode
        _ => Err(CliError::Config(
            "Provide either a URL or --file".to_string(),
        )),
    }
}

/// Process a single website URL, printing its summary. Returns success.
async fn process_single_url(
    finder: &OwnerFinder<PerplexityProvider>,
    url: &str,
    results_root: &Path,
    formatter: &Formatter,
) -> bool {
    if !formatter.is_quiet() {
        println!("Analyzing company website: {}", url);
    }

    let extraction = match finder.find(url).await {
        Ok(extraction) => extraction,
        Err(e) => {
            eprintln!("{}", formatter.error(&e.to_string()));
            return false;
        }
    };

    if let Some(reason) = extraction.degraded_reason() {
        eprintln!(
            "{}",
            formatter.warning(&format!("Extraction degraded: {}", reason))
        );
    }

    let record = extraction.record();
    let saved = match ownerscope_store::save_record(record, results_root, None) {
        Ok(path) => path,
        Err(e) => {
            eprintln!(
                "{}",
                formatter.error(&format!("Failed to save results: {}", e))
            );
            return false;
        }
    };

    if formatter.is_quiet() {
        println!("{}", saved.display());
        return true;
    }

    match formatter.format_record(record) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            eprintln!("{}", formatter.error(&format!("Failed to render record: {}", e)));
            return false;
        }
    }
    println!(
        "{}",
        formatter.success(&format!("Results saved to: {}", saved.display()))
    );
    true
}

/// Process URLs from a newline-delimited file, strictly sequentially.
/// Returns the number of failed inputs; one failure never halts the run.
async fn process_urls_from_file(
    finder: &OwnerFinder<PerplexityProvider>,
    path: &Path,
    results_root: &Path,
    formatter: &Formatter,
) -> Result<usize> {
    let contents = fs::read_to_string(path)?;
    let urls: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if urls.is_empty() {
        return Err(CliError::EmptyInputFile(path.display().to_string()));
    }

    println!(
        "Found {} URLs to process from '{}'",
        urls.len(),
        path.display()
    );
    println!("{}", "=".repeat(60));

    let mut successful = 0;
    let mut failed = 0;

    for (i, url) in urls.iter().enumerate() {
        println!();
        println!("[{}/{}] Processing: {}", i + 1, urls.len(), url);
        println!("{}", "-".repeat(40));

        if process_single_url(finder, url, results_root, formatter).await {
            successful += 1;
        } else {
            failed += 1;
        }

        println!("{}", "-".repeat(40));
    }

    println!();
    println!("{}", "=".repeat(60));
    println!("BATCH PROCESSING COMPLETE");
    println!("Successful: {}", successful);
    println!("Failed: {}", failed);
    println!("Total: {}", urls.len());
    println!("{}", "=".repeat(60));

    Ok(failed)
}
