use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cipherdesk::cipher::Direction;
use cipherdesk::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries results.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let result = match cli.command {
        Commands::Encrypt {
            ref text,
            ref output,
        } => cipherdesk::cli::commands::process::execute(
            &cli,
            Direction::Encrypt,
            text.as_deref(),
            output,
        ),
        Commands::Decrypt {
            ref text,
            ref output,
        } => cipherdesk::cli::commands::process::execute(
            &cli,
            Direction::Decrypt,
            text.as_deref(),
            output,
        ),
        Commands::Matrix => cipherdesk::cli::commands::matrix::execute(&cli),
        Commands::Keygen { length } => cipherdesk::cli::commands::keygen::execute(&cli, length),
        Commands::Completions { shell } => {
            cipherdesk::cli::commands::completions::execute(shell)
        }
    };

    if let Err(e) = result {
        cipherdesk::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
