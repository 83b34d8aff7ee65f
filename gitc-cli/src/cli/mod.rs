//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the gitc tool: branch
//! pattern search, date-ranged activity reports, stale-branch cleanup, and
//! commit-message search with a cherry-pick helper.

mod activity;
mod find_branch;
mod search;
mod stale;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use gitc_core::output::ColorMode;

/// Top-level CLI command for the gitc tool
#[derive(Parser)]
#[command(name = "gitc")]
#[command(about = "Enhanced Git CLI wrappers for common workflows")]
#[command(
  long_about = "Gitc wraps everyday git queries into four focused commands:\n\n\
        branch pattern search across local and remote refs, a date-ranged\n\
        activity report, stale-branch reporting with optional deletion, and\n\
        commit-message search with cherry-pick by result index."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(arg_required_else_help = true)]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the gitc tool
#[derive(Subcommand)]
pub enum Commands {
  /// Find branches across local & remotes
  #[command(long_about = "Find branches whose name matches a pattern.\n\n\
            The pattern is a comma-separated list of shell globs by default,\n\
            or a single regular expression with --regex. A branch matches when\n\
            the pattern covers its whole name or occurs anywhere inside it.")]
  #[command(alias = "fb")]
  FindBranch(find_branch::FindBranchArgs),

  /// Show commits on matching local branches within a date range
  #[command(long_about = "Show commits filtered by branch patterns and date bounds.\n\n\
            Runs a log query per matching local branch and prints a short\n\
            per-branch listing plus a grand total. Branches whose log query\n\
            fails are skipped rather than aborting the report.")]
  Activity(activity::ActivityArgs),

  /// List candidate stale branches, optionally deleting local ones
  #[command(long_about = "List branches whose last commit is older than an age cutoff.\n\n\
            The cutoff is an expression like 30d, 12w, 6m, or 1y. Protected\n\
            branches (main, master, develop, dev), branches named via --keep,\n\
            and the current branch are never reported. With --delete, stale\n\
            local branches are removed one by one; remote branches are only\n\
            ever reported.")]
  Stale(stale::StaleArgs),

  /// Search commits by message and optionally cherry-pick one
  #[command(long_about = "Search commit subjects with git's --grep and list the hits\n\
            with 1-based indices. --pick N cherry-picks the Nth hit onto the\n\
            current branch, surfacing git's own output verbatim.")]
  Search(search::SearchArgs),
}

/// Handle the parsed CLI command
pub fn handle_cli(cli: Cli) -> Result<()> {
  // Set global color override based on --colors argument
  match cli.colors {
    ColorMode::Always | ColorMode::Yes => owo_colors::set_override(true),
    ColorMode::Never | ColorMode::No => owo_colors::set_override(false),
    ColorMode::Auto => {
      // Let owo_colors use its default auto-detection
    }
  }

  match cli.command {
    Commands::FindBranch(args) => find_branch::handle_find_branch_command(args),
    Commands::Activity(args) => activity::handle_activity_command(args),
    Commands::Stale(args) => stale::handle_stale_command(args),
    Commands::Search(args) => search::handle_search_command(args),
  }
}
