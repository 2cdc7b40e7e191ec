//! # CLI Layer
//!
//! The **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Chooses the random source
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap turns shell arguments into typed commands
//! 2. **Logging**: install the tracing subscriber (`RANDNOTE_LOG`, `-v`)
//! 3. **Context Setup**: find the graph, load configuration, build the API
//! 4. **Dispatch**: overlay flags onto configured options and call the API
//! 5. **Output**: links on stdout, messages on stderr, or JSON on stdout

use super::render;
use super::setup::{build_command, Cli, Commands, ConfigCommands, FilterArgs, OutputMode, PickArgs};
use crate::clipboard::copy_to_clipboard;
use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use randnoteapp::commands::config::{self as config_cmd, ConfigAction};
use randnoteapp::commands::pick::Destination;
use randnoteapp::commands::{CmdMessage, CmdResult};
use randnoteapp::count::Count;
use randnoteapp::graph::{Placement, Target};
use randnoteapp::init::{find_graph_root, initialize, load_config, RandnoteContext};
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "RANDNOTE_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(*shell, &mut build_command(), "randnote", &mut io::stdout());
            Ok(())
        }
        Some(Commands::Config { action }) => handle_config(&cli, *action),
        Some(Commands::Pages { filters }) => {
            let ctx = context(&cli)?;
            handle_pages(&ctx, filters, cli.output)
        }
        Some(Commands::Pick(args)) => {
            let mut ctx = context(&cli)?;
            handle_pick(&mut ctx, args, cli.output)
        }
        None => {
            let mut ctx = context(&cli)?;
            handle_pick(&mut ctx, &cli.pick, cli.output)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn context(cli: &Cli) -> Result<RandnoteContext> {
    let cwd = std::env::current_dir().context("Cannot read the current directory")?;
    Ok(initialize(&cwd, cli.graph.clone(), cli.json.clone())?)
}

fn handle_pick(ctx: &mut RandnoteContext, args: &PickArgs, output: OutputMode) -> Result<()> {
    let api = &mut ctx.api;
    let mut options = match &args.count_text {
        Some(text) => api.pick_options_for(text),
        None => api.pick_options(),
    };
    if let Some(count) = &args.count {
        options.select.count = Count::parse_lenient(count);
    }
    if let Some(sort) = args.sort_override() {
        options.select.sort = sort;
    }
    args.filters.apply(&mut options.select.filters);
    if let Some(header) = &args.header {
        options.header = Some(header.trim().to_string()).filter(|h| !h.is_empty());
    }

    let placement = match args.append_override() {
        Some(append) => Placement::from_append(append),
        None => ctx.config.placement(),
    };
    if let Some(page) = &args.page {
        options.destination = Destination::Write {
            target: Target::Page(page.clone()),
            placement,
        };
    } else if args.today {
        options.destination = Destination::Write {
            target: Target::today(),
            placement,
        };
    }
    debug!(?options, seed = ?args.seed, "picking");

    let mut result = match args.seed {
        Some(seed) => api.pick(&options, &mut StdRng::seed_from_u64(seed))?,
        None => api.pick(&options, &mut rand::thread_rng())?,
    };

    let printing = options.destination == Destination::Print;
    let copied = printing && args.copy && result.outline.is_some();
    if copied {
        copy_to_clipboard(&render::render_outline(&result))?;
        let n = result.listed_pages.len();
        result.add_message(CmdMessage::success(format!(
            "Copied {} link{} to the clipboard",
            n,
            if n == 1 { "" } else { "s" }
        )));
    }

    if output == OutputMode::Json {
        return print_json(&result);
    }
    if printing && !copied {
        print!("{}", render::render_outline(&result));
    }
    eprint!("{}", render::render_written(&result, console::colors_enabled_stderr()));
    print_messages(&result.messages);
    Ok(())
}

fn handle_pages(ctx: &RandnoteContext, filters: &FilterArgs, output: OutputMode) -> Result<()> {
    let mut page_filters = ctx.config.filters();
    filters.apply(&mut page_filters);
    let result = ctx.api.pages(&page_filters)?;

    if output == OutputMode::Json {
        return print_json(&result);
    }
    print!(
        "{}",
        render::render_page_list(&result.listed_pages, console::colors_enabled())
    );
    print_messages(&result.messages);
    Ok(())
}

/// Configuration does not need a graph, but picks up the graph's file if there is one.
fn handle_config(cli: &Cli, action: Option<ConfigCommands>) -> Result<()> {
    let action = match action {
        Some(ConfigCommands::Gen) => ConfigAction::Gen,
        None => ConfigAction::Show,
    };
    let graph_root = match &cli.graph {
        Some(root) => Some(root.clone()),
        None => find_graph_root(&std::env::current_dir()?),
    };
    let config = load_config(graph_root.as_deref())?;
    let result = config_cmd::run(&config, action);

    if cli.output == OutputMode::Json {
        return print_json(&result);
    }
    match &result.template {
        Some(template) => print!("{}", template),
        None => {
            for message in &result.messages {
                println!("{}", message.content);
            }
        }
    }
    Ok(())
}

fn print_json(result: &CmdResult) -> Result<()> {
    print!("{}", render::render_json(result)?);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    eprint!(
        "{}",
        render::render_messages(messages, console::colors_enabled_stderr())
    );
}
