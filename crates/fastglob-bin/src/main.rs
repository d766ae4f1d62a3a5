use clap::Parser;
use tracing_subscriber::{filter::LevelFilter, util::SubscriberInitExt, EnvFilter};

mod commands;

/// Test glob patterns and inspect what they compile to
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase logging verbosity, can be repeated
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Test inputs against a pattern
    Match(commands::matches::Opt),

    /// Show the matcher a pattern compiles to
    Draw(commands::draw::Opt),
}

/// Entry point of the `fastglob` cli.
fn main() -> anyhow::Result<()> {
    // Parse the command line arguments
    let cli = Cli::parse();

    // Setup default logging level
    let default_filter = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(default_filter.into())
        .from_env()?;

    // Setup the tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .finish()
        .try_init()?;

    // Dispatch the selected command
    match cli.command {
        Commands::Match(opt) => commands::matches::matches(opt),
        Commands::Draw(opt) => commands::draw::draw(opt),
    }
}
