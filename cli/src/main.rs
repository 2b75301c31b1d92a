//! CLI entrypoint for cupid
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use cupid_application::{
    CalculateCompatibilityUseCase, CalculateError, CredentialError, CredentialUseCase,
    GenerateStoryUseCase, KeyValueStore, TextRequestClient,
};
use cupid_domain::{CouplePair, Language, Model, OutputFormat, Reading, score};
use cupid_infrastructure::{
    ConfigLoader, FileConfig, FileKeyValueStore, GeminiTextGenerator, InMemoryKeyValueStore,
};
use cupid_presentation::{Cli, ConsoleFormatter, Controller, InteractiveApp, Spinner, UiText};
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_ref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    check_config(&config)?;

    let _log_guard = init_logging(&cli, &config);
    info!("Starting cupid");

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let language = match &cli.language {
        Some(raw) => raw.parse::<Language>().map_err(|e| anyhow!(e))?,
        None => config.prompt.parse_language().0,
    };
    let text = UiText::for_language(language);
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    // Score-only runs never touch the credential store or the network
    if cli.score_only {
        let pair = one_shot_pair(&cli)?;
        let score = score(pair.first.as_str(), pair.second.as_str());
        match format {
            OutputFormat::Text => println!("{}", ConsoleFormatter::format_score(&pair, score)),
            OutputFormat::Json => println!("{}", ConsoleFormatter::format_score_json(&pair, score)),
        }
        return Ok(());
    }

    // === Dependency Injection ===
    let credentials = CredentialUseCase::new(build_store(&cli, &config));

    if cli.forget_key {
        credentials.forget()?;
        println!("Stored API key removed.");
        return Ok(());
    }

    let model = match &cli.model {
        Some(raw) => raw.parse::<Model>().map_err(|e| anyhow!(e))?,
        None => config.generation.parse_model().0.unwrap_or_default(),
    };
    let base_url = config.generation.base_url.trim();
    debug!("Using model {} at {}", model, base_url);

    let generator = Arc::new(GeminiTextGenerator::new(base_url));
    let mut client = TextRequestClient::new(generator)
        .with_model(model)
        .with_language(language);

    apply_explicit_credential(&cli, &config, &credentials, &mut client)?;

    // Interactive form
    if cli.names().is_none() {
        let controller = Controller::new(client, credentials);
        InteractiveApp::new(controller).run().await?;
        return Ok(());
    }

    // One-shot reading
    if !client.is_initialized() {
        credentials.restore(&mut client);
    }
    let pair = one_shot_pair(&cli)?;
    let show_progress = format == OutputFormat::Text;

    let spinner = progress(show_progress, text.calculating);
    let result =
        CalculateCompatibilityUseCase::execute(&client, pair.first.as_str(), pair.second.as_str())
            .await;
    spinner.finish();

    let result = match result {
        Ok(result) => result,
        Err(CalculateError::NotInitialized) => bail!(
            "No API key available. Pass --api-key, set {} or run `cupid` without names to enter one.",
            config.generation.api_key_env
        ),
        Err(e) => return Err(e.into()),
    };

    let mut reading = Reading::new(pair, result);

    if cli.story {
        let spinner = progress(show_progress, text.writing_story);
        let story = GenerateStoryUseCase::execute(&client, &reading.pair).await;
        spinner.finish();
        reading = reading.with_story(story?);
    }

    match format {
        OutputFormat::Text => {
            println!(
                "{}",
                ConsoleFormatter::format_result(&reading.pair, &reading.result, text)
            );
            if let Some(story) = &reading.story {
                println!("{}", ConsoleFormatter::format_story(story, text));
            }
        }
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&reading)),
    }

    Ok(())
}

/// Print config issues; errors abort startup
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        let label = if issue.is_error() { "error" } else { "warning" };
        eprintln!("config {}: {}", label, issue.message);
    }
    if issues.iter().any(|issue| issue.is_error()) {
        bail!("Invalid configuration");
    }
    Ok(())
}

/// Initialize logging based on verbosity level.
///
/// The interactive form logs to a file so diagnostics do not tear the
/// prompts. Everything else logs to stderr.
fn init_logging(cli: &Cli, config: &FileConfig) -> Option<WorkerGuard> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let interactive = cli.names().is_none() && !cli.forget_key;
    if interactive
        && let Some(path) = config.logging.resolved_file()
        && let (Some(dir), Some(file_name)) = (path.parent(), path.file_name())
        && std::fs::create_dir_all(dir).is_ok()
    {
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
            .init();
        return Some(guard);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    None
}

fn build_store(cli: &Cli, config: &FileConfig) -> Arc<dyn KeyValueStore> {
    if cli.ephemeral {
        return Arc::new(InMemoryKeyValueStore::new());
    }
    match config.storage.resolved_path() {
        Some(path) => {
            debug!("Credential store at {}", path.display());
            Arc::new(FileKeyValueStore::new(path))
        }
        None => {
            warn!("No data directory found; the API key will not be remembered");
            Arc::new(InMemoryKeyValueStore::new())
        }
    }
}

/// Initialize the client from `--api-key` (saved) or the environment (not saved)
fn apply_explicit_credential(
    cli: &Cli,
    config: &FileConfig,
    credentials: &CredentialUseCase,
    client: &mut TextRequestClient,
) -> Result<()> {
    if let Some(key) = &cli.api_key {
        return match credentials.save(client, key) {
            Ok(()) => {
                info!("Using API key from --api-key");
                Ok(())
            }
            Err(CredentialError::Store(e)) => {
                warn!("API key from --api-key not persisted: {}", e);
                Ok(())
            }
            Err(e) => Err(e.into()),
        };
    }

    let var = config.generation.api_key_env.trim();
    if var.is_empty() {
        return Ok(());
    }
    if let Ok(value) = std::env::var(var)
        && !value.trim().is_empty()
    {
        client.initialize(&value)?;
        info!("Using API key from ${}", var);
    }
    Ok(())
}

fn one_shot_pair(cli: &Cli) -> Result<CouplePair> {
    let Some((name1, name2)) = cli.names() else {
        bail!("Two names are required.");
    };
    Ok(CouplePair::try_new(name1, name2)?)
}

fn progress(show: bool, message: &str) -> Spinner {
    if show {
        Spinner::start(message)
    } else {
        Spinner::hidden()
    }
}
