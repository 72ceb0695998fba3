use crate::cli::commands::open_app;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::ask_confirmation;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if !*yes
            && !ask_confirmation(
                "Delete ALL sessions and journal entries? This action is irreversible.",
            )
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut app = open_app(cfg)?;
        app.reset_all()?;
        success("All sessions and journal entries have been deleted.");
    }

    Ok(())
}
