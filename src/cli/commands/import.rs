use crate::cli::commands::open_app;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut app = open_app(cfg)?;
        let report = ImportLogic::import_file(&mut app, Path::new(file))?;

        success(format!("Imported {} session(s) from {}", report.added, file));
        if report.skipped > 0 {
            warning(format!(
                "Skipped {} session(s) with an id already present",
                report.skipped
            ));
        }
    }

    Ok(())
}
