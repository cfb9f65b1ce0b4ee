//! CLI entrypoint for openapi-agent-tools
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use agent_tools_application::{
    GenerateProgressNotifier, GenerateToolsInput, GenerateToolsUseCase, NoGenerateProgress,
    SpecLoaderPort, ToolStorePort, ValidateToolsInput, ValidateToolsUseCase,
};
use agent_tools_infrastructure::{
    ConfigLoader, FileConfig, HttpSettings, JsonFileToolStore, Severity, SpecLoader,
    write_indented,
};
use agent_tools_presentation::{
    Cli, Command, ConsoleFormatter, GenerateArgs, OutputFormatter, ProgressReporter,
    SimpleProgress, ValidateArgs,
};
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting openapi-agent-tools");

    let formatter = ConsoleFormatter::new();
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", formatter.format_error("loading configuration", &format!("{e:#}")));
            return ExitCode::FAILURE;
        }
    };
    ConsoleFormatter::set_color(config.output.color);

    let (context, result) = match &cli.command {
        Command::Generate(args) => ("generating tools", run_generate(args, &config, cli.quiet).await),
        Command::Validate(args) => ("validating tools", run_validate(args, &config).await),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("{}", formatter.format_error(context, &format!("{e:#}")));
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        for source in ConfigLoader::config_sources() {
            debug!("config source {}", source);
        }
        ConfigLoader::load(cli.config.as_deref()).context("invalid configuration")?
    };

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("config: {}", issue),
            Severity::Error => error!("config: {}", issue),
        }
    }
    if let Some(issue) = issues.iter().find(|i| i.severity == Severity::Error) {
        bail!("{issue}");
    }

    Ok(config)
}

async fn run_generate(args: &GenerateArgs, config: &FileConfig, quiet: bool) -> Result<()> {
    let Some(source) = args.source() else {
        bail!("either --url or --file is required");
    };

    // === Dependency Injection ===
    let settings = HttpSettings {
        user_agent: config.http.user_agent.clone(),
        timeout: config.http.timeout(),
    };
    let loader: Arc<dyn SpecLoaderPort> = Arc::new(SpecLoader::new(&settings)?);
    let use_case =
        GenerateToolsUseCase::new(loader).with_config(config.generate.to_generation_config());

    let mut input = GenerateToolsInput::new(source);
    if let Some(base_url) = &args.base_url {
        input = input.with_base_url(base_url.clone());
    }
    if args.validate {
        input = input.with_validate(true);
    }

    let progress: Box<dyn GenerateProgressNotifier> = if quiet {
        Box::new(NoGenerateProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };
    let output = use_case.execute_with_progress(input, progress.as_ref()).await?;

    let formatter = ConsoleFormatter::new();
    if !output.failed.is_empty() {
        eprintln!("{}", formatter.format_failures(&output.failed));
    }

    match &args.output {
        Some(path) => {
            JsonFileToolStore::new(config.output.indent)
                .write_tools(path, &output.tools)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("{}", formatter.format_generated(&output, path));
        }
        None => println!("{}", write_indented(&output.tools, config.output.indent)?),
    }

    Ok(())
}

async fn run_validate(args: &ValidateArgs, config: &FileConfig) -> Result<()> {
    let store: Arc<dyn ToolStorePort> = Arc::new(JsonFileToolStore::new(config.output.indent));
    let use_case = ValidateToolsUseCase::new(store);

    let mut input = ValidateToolsInput::new(&args.input_file);
    if let Some(output) = &args.output {
        input = input.with_output(output);
    }

    let output = use_case.execute(input).await?;
    let formatter = ConsoleFormatter::new();
    println!("{}", formatter.format_validation(&output));
    if output.has_failures() {
        eprintln!("{}", formatter.format_failures(&output.failed));
    }

    Ok(())
}
