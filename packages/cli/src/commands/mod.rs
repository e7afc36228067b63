pub mod catalog;
pub mod edit;
pub mod export;
pub mod init;

pub use catalog::{catalog, CatalogArgs};
pub use edit::{edit, EditCommand};
pub use export::{export, ExportArgs};
pub use init::{init, InitArgs};

use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use landkit_catalog::Catalog;
use landkit_common::FileStorage;
use landkit_editor::{persistence, EditSession};
use std::sync::Arc;

/// The saved page of a project directory, opened for editing
pub(crate) struct Project {
    pub config: Config,
    pub storage: FileStorage,
    pub session: EditSession,
}

impl Project {
    /// Open the project in `cwd`, restoring its saved page
    pub fn open(cwd: &str) -> Result<Self> {
        let config = Config::load(cwd)?;
        let storage = FileStorage::new(config.get_storage_dir(cwd));

        let state = persistence::load_state(&storage)
            .context("Failed to read the saved page")?
            .ok_or_else(|| {
                anyhow!(
                    "No saved page in {}. Run `landkit init` first",
                    storage.root().display()
                )
            })?;

        let mut session = EditSession::new(Arc::new(Catalog::builtin()))?;
        session.restore(state)?;

        Ok(Self {
            config,
            storage,
            session,
        })
    }

    pub fn save(&mut self) -> Result<()> {
        self.session
            .save_to(&mut self.storage, now_millis())
            .context("Failed to save the page")?;
        Ok(())
    }
}

pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
