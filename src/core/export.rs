use crate::core::store::SessionStore;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ensure_writable, export_csv, export_json};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export every stored session to `file`. When `format` is `None` it
    /// is inferred from the file extension. Returns the number exported.
    pub fn export<S: SessionStore>(
        store: &S,
        format: Option<ExportFormat>,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        let format = match format {
            Some(f) => f,
            None => ExportFormat::from_path(path)?,
        };

        ensure_writable(path, force)?;

        let sessions = store.load_sessions()?;

        match format {
            ExportFormat::Csv => export_csv(&sessions, path)?,
            ExportFormat::Json => export_json(&sessions, path)?,
        }

        store.record(
            "export",
            file,
            &format!("{} sessions exported as {}", sessions.len(), format.as_str()),
        )?;

        Ok(sessions.len())
    }
}
