//! CLI frontend for the tarot reading table.

mod commands;
mod logging;

use std::process;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tarot",
    about = "A tarot reading table in your terminal",
    version,
    propagate_version = true,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Log session activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    // Reading flags for a bare `tarot` with no subcommand.
    #[command(flatten)]
    read: ReadArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sit down for an interactive reading (the default)
    Read(ReadArgs),

    /// List the cards in the deck
    Cards {
        /// Only show one suit (trump, wands, cups, swords, pentacles)
        #[arg(short, long)]
        suit: Option<String>,

        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the available spreads and what each position means
    Spreads,
}

#[derive(Args)]
struct ReadArgs {
    /// RNG seed for a reproducible reading
    #[arg(short, long)]
    seed: Option<u64>,

    /// Seconds per dramatic pause (0 to disable)
    #[arg(long, default_value = "1.0")]
    pace: f64,

    /// Line width for banners and card reports (20 to 500)
    #[arg(
        short,
        long,
        default_value = "80",
        value_parser = clap::value_parser!(u16).range(20..=500)
    )]
    width: u16,

    /// Name the reader introduces themselves with
    #[arg(long)]
    reader: Option<String>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Print a markdown recap of every reading after saying goodbye
    #[arg(long)]
    recap: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Read(cli.read));

    let result = match command {
        Commands::Read(args) => commands::read::run(&commands::read::Options {
            seed: args.seed,
            pace: args.pace,
            width: usize::from(args.width),
            reader: args.reader,
            color: !args.no_color,
            recap: args.recap,
        }),
        Commands::Cards { suit, json } => commands::cards::run(suit.as_deref(), json),
        Commands::Spreads => commands::spreads::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
