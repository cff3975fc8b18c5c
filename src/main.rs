use imggen::Cli;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(Cli::exit_code(&e));
        }
    };

    let outcome = imggen::run(&cli, |name| std::env::var(name).ok()).await;

    if outcome.show_usage {
        eprint!("{}", Cli::usage());
    }
    if let Err(e) = outcome.write_to(&mut io::stdout().lock()) {
        tracing::error!("failed to write output: {}", e);
        return ExitCode::from(1);
    }

    ExitCode::from(outcome.exit_code)
}
