use anyhow::Result;
use clap::Parser;
use termsettings::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging goes to stderr; --log-level beats TERMSETTINGS_LOG
    termsettings::debug::init_log_bridge(cli.log_level.map(|l| l.to_level_filter()));

    let code = cli::run(cli)?;
    if code != 0 {
        // Nothing left to clean up, so exiting directly is fine
        std::process::exit(code);
    }
    Ok(())
}
