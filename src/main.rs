use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

use hexons_toolbox::cli::Cli;
use hexons_toolbox::cli::commands::Commands;
use hexons_toolbox::config::Config;
use hexons_toolbox::resources::{self, ResolvedPaths};
use hexons_toolbox::tui::{self, TuiRunner};
use hexons_toolbox::{Launcher, ToolCatalog};

fn setup_logging(config: &Config, verbose: bool) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(env!("CARGO_PKG_NAME"))
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join(format!("{}.log", env!("CARGO_PKG_NAME")));

    // Log to a file; the TUI owns the terminal
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter(verbose)))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None => run_tui(config),
        Some(Commands::List) => handle_list_command(),
        Some(Commands::Open { tool }) => handle_open_command(tool, config),
        Some(Commands::Paths) => handle_paths_command(config),
    }
}

fn build_launcher(config: &Config) -> Result<Launcher> {
    let paths = ResolvedPaths::resolve(config).context("Failed to prepare the runtime directory")?;
    Ok(Launcher::with_process_spawner(paths, ToolCatalog::builtin()))
}

fn run_tui(config: &Config) -> Result<()> {
    info!("Launching TUI mode");
    let launcher = build_launcher(config)?;

    let terminal = tui::init_terminal().context("Failed to initialize terminal")?;
    let mut runner = TuiRunner::new(terminal, launcher, config.tui.tick_rate_ms);
    let result = runner.run();

    // Restore even when the loop failed
    tui::restore_terminal().context("Failed to restore terminal")?;
    result
}

fn handle_list_command() -> Result<()> {
    info!("Listing tools");
    for tool in ToolCatalog::builtin().tools() {
        println!("{} ({})", tool.title.bold(), tool.slug().cyan());
        println!("  {}", tool.description);
        println!("  {}", tool.exe_name.dimmed());
    }
    Ok(())
}

fn handle_open_command(tool: &str, config: &Config) -> Result<()> {
    info!("Opening tool: {}", tool);
    let launcher = build_launcher(config)?;

    match launcher.launch(tool) {
        Ok(launched) => {
            println!(
                "{} {} (pid {})",
                "Launched:".green(),
                launched.path.display(),
                launched.pid
            );
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", err.title().red().bold());
            eprintln!("{}", err.details());
            std::process::exit(1);
        }
    }
}

fn handle_paths_command(config: &Config) -> Result<()> {
    info!("Showing resolved paths");
    let paths = ResolvedPaths::resolve(config).context("Failed to prepare the runtime directory")?;

    println!("{} {}", "Distribution:".green(), resources::source_origin(config));
    let marker = if paths.source_dir.is_dir() {
        "".normal()
    } else {
        " (missing)".red()
    };
    println!("{} {}{}", "Source:".green(), paths.source_dir.display(), marker);
    println!("{} {}", "Runtime:".green(), paths.runtime_dir.display());
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(&config, cli.is_verbose()).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
