//! Interactive browse shell.
//!
//! Reads one command per line from stdin and redraws the grid after every
//! command that changes it. `select N` / `deselect N` are shorthands for
//! typing N into the selection panel and pressing the matching button.

use std::io;
use std::io::Write;
use std::str::FromStr;

use artic_lib::Grid;
use artic_lib::api::PageFetcher;
use artic_lib::api::PageNumber;
use artic_lib::error::FetchError;
use artic_lib::model::ArtworkId;
use log::warn;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;

use crate::cli::parse_page;
use crate::render;

const HELP: &str = "\
Commands:
  next | n            next page
  prev | p            previous page
  page N              go to page N
  reload              fetch the current page again
  toggle ID           tick or untick a row on this page
  select N            select N rows starting at this page
  deselect N          deselect N rows starting at this page
  panel               open or close the selection panel
  input TEXT          type TEXT into the selection panel
  apply | remove      select / deselect using the panel input
  selected            list every selected id
  show                redraw the page
  help                show this help
  quit | q            exit";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Next,
    Prev,
    Page(PageNumber),
    Reload,
    Toggle(ArtworkId),
    Select(String),
    Deselect(String),
    Panel,
    Input(String),
    Apply,
    Remove,
    Selected,
    Show,
    Help,
    Quit,
}

/// Error parsing a shell line.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("{0}")]
    Invalid(String),
}

impl FromStr for ShellCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        let required = |command: &'static str, expected: &'static str| {
            if arg.is_empty() {
                Err(ParseCommandError::MissingArgument { command, expected })
            } else {
                Ok(arg.to_string())
            }
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "next" | "n" => Self::Next,
            "prev" | "p" => Self::Prev,
            "page" => {
                let arg = required("page", "a page number")?;
                Self::Page(parse_page(&arg).map_err(ParseCommandError::Invalid)?)
            }
            "reload" => Self::Reload,
            "toggle" => {
                let arg = required("toggle", "an artwork id")?;
                let id = arg.parse::<u64>().map_err(|_| {
                    ParseCommandError::Invalid(format!("'{}' is not an artwork id", arg))
                })?;
                Self::Toggle(ArtworkId::new(id))
            }
            "select" => Self::Select(required("select", "a number of rows")?),
            "deselect" => Self::Deselect(required("deselect", "a number of rows")?),
            "panel" => Self::Panel,
            "input" => Self::Input(arg.to_string()),
            "apply" => Self::Apply,
            "remove" => Self::Remove,
            "selected" => Self::Selected,
            "show" | "" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => return Err(ParseCommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

/// Whether the shell keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs one command against the grid, writing output to `out`.
pub async fn execute<F, W>(
    grid: &mut Grid<F>,
    command: ShellCommand,
    out: &mut W,
) -> io::Result<Flow>
where
    F: PageFetcher,
    W: Write,
{
    match command {
        ShellCommand::Next => match grid.next_page().await {
            Ok(true) => writeln!(out, "{}", render::grid_view(grid))?,
            Ok(false) if grid.page_count() == 0 => {
                writeln!(out, "No page loaded yet; try 'reload' or 'page N'")?
            }
            Ok(false) => writeln!(out, "Already on the last page")?,
            Err(e) => report_fetch_error(out, &e)?,
        },
        ShellCommand::Prev => match grid.prev_page().await {
            Ok(true) => writeln!(out, "{}", render::grid_view(grid))?,
            Ok(false) => writeln!(out, "Already on the first page")?,
            Err(e) => report_fetch_error(out, &e)?,
        },
        ShellCommand::Page(page) => match grid.load(page).await {
            Ok(()) => writeln!(out, "{}", render::grid_view(grid))?,
            Err(e) => report_fetch_error(out, &e)?,
        },
        ShellCommand::Reload => match grid.reload().await {
            Ok(()) => writeln!(out, "{}", render::grid_view(grid))?,
            Err(e) => report_fetch_error(out, &e)?,
        },
        ShellCommand::Toggle(id) => match grid.toggle_row(id) {
            Some(_) => writeln!(out, "{}", render::grid_view(grid))?,
            None => writeln!(out, "Artwork {} is not on this page", id)?,
        },
        ShellCommand::Select(count) => {
            grid.set_pending_input(count);
            submit(grid, true, out).await?;
        }
        ShellCommand::Deselect(count) => {
            grid.set_pending_input(count);
            submit(grid, false, out).await?;
        }
        ShellCommand::Panel => {
            grid.toggle_panel();
            if grid.is_panel_open() {
                writeln!(out, "Selection panel open, input: '{}'", grid.pending_input())?;
            } else {
                writeln!(out, "Selection panel closed")?;
            }
        }
        ShellCommand::Input(text) => {
            if !grid.is_panel_open() {
                grid.toggle_panel();
            }
            grid.set_pending_input(text);
            writeln!(out, "Input: '{}'", grid.pending_input())?;
        }
        ShellCommand::Apply => submit(grid, true, out).await?,
        ShellCommand::Remove => submit(grid, false, out).await?,
        ShellCommand::Selected => {
            let ids = grid.selection().selected_ids();
            if ids.is_empty() {
                writeln!(out, "Nothing selected")?;
            } else {
                let list: Vec<String> = ids.iter().map(ToString::to_string).collect();
                writeln!(out, "{} selected: {}", ids.len(), list.join(", "))?;
            }
        }
        ShellCommand::Show => writeln!(out, "{}", render::grid_view(grid))?,
        ShellCommand::Help => writeln!(out, "{}", HELP)?,
        ShellCommand::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

async fn submit<F, W>(grid: &mut Grid<F>, select: bool, out: &mut W) -> io::Result<()>
where
    F: PageFetcher,
    W: Write,
{
    // Rejected input is absorbed by the grid and prints nothing.
    if let Some(accumulation) = grid.submit_pending(select).await {
        writeln!(out, "{}", render::grid_view(grid))?;
        writeln!(out, "{}", render::accumulation_summary(&accumulation, select))?;
    }
    Ok(())
}

fn report_fetch_error<W: Write>(out: &mut W, err: &FetchError) -> io::Result<()> {
    warn!("{}", err);
    writeln!(out, "Could not load page {}: {}", err.page, err.source)
}

/// Runs the shell on stdin/stdout until `quit` or end of input.
pub async fn run<F: PageFetcher>(grid: &mut Grid<F>, start: PageNumber) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute(grid, ShellCommand::Page(start), &mut stdout).await?;
    writeln!(stdout, "Type 'help' for commands.")?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        write!(stdout, "artic> ")?;
        stdout.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match line.parse::<ShellCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(stdout, "{}", e)?;
                continue;
            }
        };

        if execute(grid, command, &mut stdout).await? == Flow::Quit {
            break;
        }
    }

    Ok(())
}
