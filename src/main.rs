use clap::{Parser, Subcommand};

mod cmd;
mod creds;
mod error;
mod utils;
mod zoom;

use cmd::{AssignArgs, ListArgs, MeetingsArgs, ShowArgs, UnassignArgs};

/// zoomctl - manage Zoom license assignment from the command line.
///
/// Commands:
///   zoomctl show [USER]                  show one user
///   zoomctl list [--json]                list all users in the account
///   zoomctl assign [USER] [--from SRC]   move a Licensed seat to USER
///   zoomctl unassign [USER]              demote USER to Basic
///   zoomctl list-meetings [--json]       upcoming meetings across all users
///
/// USER is an id or email and defaults to the credential email.
///
/// With no command, `show` runs against the credential email.
///
/// Credentials are read from ~/.zoomctl_credentials.json (keys API_KEY,
/// API_SECRET, USER_EMAIL); ZOOMCTL_CREDENTIALS overrides the path.
#[derive(Parser, Debug)]
#[command(
    name = "zoomctl",
    version,
    about = "Manage Zoom user licenses and list users/meetings",
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all non-error diagnostics
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a single user
    Show(ShowArgs),

    /// List all users in the account
    List(ListArgs),

    /// Move a Licensed seat to a user
    Assign(AssignArgs),

    /// Demote a user to Basic, freeing their seat
    Unassign(UnassignArgs),

    /// List upcoming meetings across all users, time-ordered
    ListMeetings(MeetingsArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("ERROR: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = utils::derive_level(cli.verbose, cli.quiet);
    utils::init_logging(level);

    // Credentials are required by every command; fail before dispatch.
    let creds = creds::load()?;

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Show(ShowArgs::default()));

    match command {
        Commands::Show(args) => cmd::execute_show(args, &creds),
        Commands::List(args) => cmd::execute_list(args, &creds),
        Commands::Assign(args) => cmd::execute_assign(args, &creds),
        Commands::Unassign(args) => cmd::execute_unassign(args, &creds),
        Commands::ListMeetings(args) => cmd::execute_meetings(args, &creds),
    }
}
