pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod export;
pub mod import;
pub mod init;
pub mod journal;
pub mod list;
pub mod log;
pub mod reset;
pub mod stats;
pub mod types;

use crate::config::Config;
use crate::core::app_data::AppData;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;

/// Open the configured database and load sessions and journal.
pub(crate) fn open_app(cfg: &Config) -> AppResult<AppData<SqliteStore>> {
    let store = SqliteStore::open(&cfg.database)?;
    AppData::load(store)
}
