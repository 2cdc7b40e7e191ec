use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use randnoteapp::attributes::{Dimension, FilterMode, PageFilters};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Human readable output
    #[default]
    Term,
    /// Structured JSON on stdout
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "randnote",
    bin_name = "randnote",
    version,
    disable_help_subcommand = true,
    after_help = "Filter modes: none (exclude), include (no filter), only (keep just these)\n\nEnable shell completions:\n  eval \"$(randnote completions bash)\"  # add to ~/.bashrc\n  eval \"$(randnote completions zsh)\"   # add to ~/.zshrc"
)]
#[command(about = "Link to random pages of a Logseq graph", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub pick: PickArgs,

    /// Graph directory (default: nearest parent with logseq/ or pages/)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub graph: Option<PathBuf>,

    /// Read pages from a JSON page export instead of a graph directory
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub json: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputMode::Term,
        help_heading = "Options"
    )]
    pub output: OutputMode,

    /// Verbose logging on stderr
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick random pages and emit links to them (default)
    #[command(display_order = 1)]
    Pick(PickArgs),

    /// List the pages that pass the filters
    #[command(alias = "ls", display_order = 2)]
    Pages {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show the effective configuration
    #[command(display_order = 3)]
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },

    /// Print a shell completion script
    #[command(display_order = 4)]
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigCommands {
    /// Print a commented randnote.toml with every default
    Gen,
}

#[derive(Args, Debug, Default, Clone)]
pub struct PickArgs {
    /// How many pages; read leniently ("3", "3 notes"), anything else means 1
    #[arg(value_name = "COUNT")]
    pub count_text: Option<String>,

    /// How many pages; values below 1 and non-numbers mean 1
    #[arg(
        short = 'n',
        long = "count",
        value_name = "N",
        allow_hyphen_values = true,
        conflicts_with = "count_text"
    )]
    pub count: Option<String>,

    /// Sort picked pages by name
    #[arg(long, overrides_with = "no_sort")]
    pub sort: bool,

    /// Keep the random order
    #[arg(long, overrides_with = "sort")]
    pub no_sort: bool,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Nest the links under a header block
    #[arg(long, value_name = "TEXT")]
    pub header: Option<String>,

    /// Write the links into this page instead of printing them
    #[arg(long, value_name = "NAME", conflicts_with = "today")]
    pub page: Option<String>,

    /// Write the links into today's journal page
    #[arg(long)]
    pub today: bool,

    /// Put the links before the page's first block
    #[arg(long, overrides_with = "append")]
    pub prepend: bool,

    /// Put the links after the page's last block
    #[arg(long, overrides_with = "prepend")]
    pub append: bool,

    /// Copy the links to the clipboard instead of printing them
    #[arg(long)]
    pub copy: bool,

    /// Seed the random source for a reproducible pick
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}

impl PickArgs {
    /// `Some(true)` for `--sort`, `Some(false)` for `--no-sort`, `None` for neither.
    pub fn sort_override(&self) -> Option<bool> {
        match (self.sort, self.no_sort) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// `Some(true)` for `--append`, `Some(false)` for `--prepend`.
    pub fn append_override(&self) -> Option<bool> {
        match (self.append, self.prepend) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Journal pages: none, include or only
    #[arg(long, value_name = "MODE")]
    pub journal: Option<FilterMode>,

    /// Pages without a file: none, include or only
    #[arg(long, value_name = "MODE")]
    pub dangling: Option<FilterMode>,

    /// Pages inside a namespace: none, include or only
    #[arg(long, value_name = "MODE")]
    pub namespace: Option<FilterMode>,

    /// Pages with properties: none, include or only
    #[arg(long, value_name = "MODE")]
    pub properties: Option<FilterMode>,
}

impl FilterArgs {
    /// Overlay the modes given on the command line onto `filters`.
    pub fn apply(&self, filters: &mut PageFilters) {
        let given = [
            (Dimension::Journal, self.journal),
            (Dimension::Dangling, self.dangling),
            (Dimension::Namespace, self.namespace),
            (Dimension::Properties, self.properties),
        ];
        for (dimension, mode) in given {
            if let Some(mode) = mode {
                filters.set(dimension, mode);
            }
        }
    }
}

pub fn build_command() -> clap::Command {
    Cli::command()
}
