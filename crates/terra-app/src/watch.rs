//! Polls `config.ron` and feeds edits to a running planet.

use std::path::{Path, PathBuf};
use std::time::Duration;

use terra_config::{CliArgs, Config};
use terra_planet::PlanetController;
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::planet::{PlanetOutput, UpdateOutcome, apply_changes};

/// How often the config file is re-read.
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Tracks the config file and the effective config derived from it.
///
/// CLI overrides are reapplied to every reloaded file so a flag given at
/// startup keeps winning over the file.
pub struct ConfigWatcher {
    config_dir: PathBuf,
    overrides: CliArgs,
    file_config: Config,
    applied: Config,
    rejected: Option<Config>,
}

impl ConfigWatcher {
    /// `file_config` is the config as read from disk, before overrides.
    pub fn new(config_dir: &Path, file_config: Config, overrides: CliArgs) -> Self {
        let mut applied = file_config.clone();
        applied.apply_cli_overrides(&overrides);
        Self {
            config_dir: config_dir.to_path_buf(),
            overrides,
            file_config,
            applied,
            rejected: None,
        }
    }

    /// The config currently driving the planet.
    pub fn applied(&self) -> &Config {
        &self.applied
    }

    /// Re-read the file once and apply any accepted change.
    ///
    /// Unreadable or invalid files are logged and skipped; the planet keeps
    /// its last good configuration.
    pub fn poll<S: PlanetOutput>(
        &mut self,
        controller: &mut PlanetController<S>,
    ) -> Result<Option<UpdateOutcome>, AppError> {
        let reloaded = match self.file_config.reload(&self.config_dir) {
            Ok(Some(config)) => config,
            Ok(None) => return Ok(None),
            Err(e) => {
                debug!("Config reload skipped: {e}");
                return Ok(None);
            }
        };
        if self.rejected.as_ref() == Some(&reloaded) {
            return Ok(None);
        }

        let mut candidate = reloaded.clone();
        candidate.apply_cli_overrides(&self.overrides);
        if let Err(e) = candidate.validate() {
            warn!("Ignoring edited config: {e}");
            self.rejected = Some(reloaded);
            return Ok(None);
        }

        let changes = self.applied.diff(&candidate);
        self.file_config = reloaded;
        self.applied = candidate;
        self.rejected = None;

        if changes.is_empty() {
            return Ok(None);
        }
        info!("Config changed: {changes:?}");
        apply_changes(controller, &self.applied, changes).map(Some)
    }

    /// Poll forever at `interval`.
    pub fn run<S: PlanetOutput>(
        &mut self,
        controller: &mut PlanetController<S>,
        interval: Duration,
    ) -> Result<(), AppError> {
        info!(
            "Watching {} for changes",
            self.config_dir.join("config.ron").display()
        );
        loop {
            std::thread::sleep(interval);
            if let Some(outcome) = self.poll(controller)? {
                debug!("Applied config change: {outcome:?}");
            }
        }
    }
}
