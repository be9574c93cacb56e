use clap::Parser;
use user_roster::utils::{logger, validation::Validate};
use user_roster::{CliConfig, RosterEngine, RosterError};

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(e);
    }

    let engine = RosterEngine::with_header(config.source(), config.header.clone());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match engine.run(&mut out) {
        Ok(count) => tracing::debug!("Printed {} users", count),
        Err(e) => fail(e),
    }
}

fn fail(e: RosterError) -> ! {
    tracing::error!(
        "{} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::debug!("Suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
