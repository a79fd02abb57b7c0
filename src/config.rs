//! Configuration handling for the signup wizard

use crate::catalog::{IndustryId, PlanId};
use crate::wizard::{RegistrationPayload, SeedParams};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User configuration for the wizard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WizardConfig {
    /// Plan preselected when no seed names one
    pub default_plan: Option<PlanId>,
    /// Industry preselected when no seed names one
    pub default_industry: Option<IndustryId>,
    /// Directory registrations are written to
    pub outbox_dir: Option<PathBuf>,
    /// Simulated registration latency in milliseconds
    pub submit_delay_ms: Option<u64>,
}

impl WizardConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "fleet-signup", "fleet-signup")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; defaults when the file is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Preselect the plan and industry of an accepted registration next time
    pub fn remember(&mut self, registration: &RegistrationPayload) {
        self.default_plan = Some(registration.plan);
        self.default_industry = Some(registration.industry);
    }

    /// Configured defaults as seed parameters
    pub fn seed(&self) -> SeedParams {
        SeedParams {
            plan: self.default_plan,
            industry: self.default_industry,
            billing: None,
        }
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.unwrap_or(0))
    }
}
