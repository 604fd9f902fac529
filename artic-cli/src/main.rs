mod cli;
mod error;
mod paths;
mod render;
mod shell;

use std::fs;
use std::fs::File;
use std::process::ExitCode;

use artic_lib::ArticClient;
use artic_lib::Grid;
use artic_lib::api::PageNumber;
use clap::Parser;
use log::info;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;

use crate::cli::Cli;
use crate::cli::Command;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Starts file logging in the cache directory, if one is available.
fn init_logging(level: LevelFilter) {
    if level == LevelFilter::Off {
        return;
    }

    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }

    match File::create(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(level, Config::default(), file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Failed to create log file {}: {}", path.display(), e),
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = cli.client()?;
    info!("Using catalog at {}", client.base_url());

    match cli.command {
        Some(Command::Page { number }) => print_page(client, number).await,
        Some(Command::Select {
            count,
            page,
            deselect,
        }) => select(client, page, count, !deselect).await,
        Some(Command::Browse { page }) => browse(client, page).await,
        None => browse(client, PageNumber::FIRST).await,
    }
}

async fn print_page(client: ArticClient, page: PageNumber) -> Result<(), CliError> {
    let mut grid = Grid::new(client);
    grid.load(page).await?;
    println!("{}", render::grid_view(&grid));
    Ok(())
}

async fn select(
    client: ArticClient,
    page: PageNumber,
    count: String,
    select: bool,
) -> Result<(), CliError> {
    let mut grid = Grid::new(client);
    grid.load(page).await?;

    grid.set_pending_input(count.clone());
    let Some(accumulation) = grid.submit_pending(select).await else {
        eprintln!("'{}' is not a positive number of rows; nothing changed", count);
        return Ok(());
    };

    let ids: Vec<String> = accumulation.ids().iter().map(ToString::to_string).collect();
    println!("{}", ids.join("\n"));
    eprintln!("{}", render::accumulation_summary(&accumulation, select));
    Ok(())
}

async fn browse(client: ArticClient, page: PageNumber) -> Result<(), CliError> {
    let mut grid = Grid::new(client);
    shell::run(&mut grid, page).await?;
    Ok(())
}
