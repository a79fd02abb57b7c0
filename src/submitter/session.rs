//! Activated session persistence
//!
//! Written once after a successful registration so the dashboard can pick
//! up the trial account on its next start.

use crate::catalog::PlanId;
use crate::wizard::RegistrationPayload;
use anyhow::Result;
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// The activated trial account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSession {
    pub account_id: Uuid,
    pub email: String,
    pub company: String,
    pub plan: PlanId,
    pub trial_expiry_date: DateTime<Utc>,
}

impl From<&RegistrationPayload> for ActiveSession {
    fn from(payload: &RegistrationPayload) -> Self {
        Self {
            account_id: payload.id,
            email: payload.email.clone(),
            company: payload.company.clone(),
            plan: payload.plan,
            trial_expiry_date: payload.trial_expiry_date,
        }
    }
}

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform data directory
    pub fn in_data_dir() -> Option<Self> {
        ProjectDirs::from("com", "fleet-signup", "fleet-signup")
            .map(|dirs| Self::new(dirs.data_dir().join("session.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the session for an accepted registration
    pub fn save(&self, payload: &RegistrationPayload) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&ActiveSession::from(payload))?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Load the stored session, if any
    pub fn load(&self) -> Result<Option<ActiveSession>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }
}
