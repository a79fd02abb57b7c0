//! File-backed registration submitter
//!
//! Each accepted registration is written as `<id>.json` into an outbox
//! directory that a separate process forwards to the account service.

use super::traits::RegistrationSubmitter;
use crate::error::SubmitError;
use crate::wizard::RegistrationPayload;
use async_trait::async_trait;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Environment override for the outbox directory
pub const OUTBOX_ENV: &str = "FLEET_SIGNUP_OUTBOX";

pub struct OutboxSubmitter {
    dir: PathBuf,
    /// Artificial latency before each registration
    delay: Duration,
}

impl OutboxSubmitter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Resolve the outbox directory: environment, then `configured`, then
    /// the platform data directory.
    pub fn resolve_dir(configured: Option<&Path>) -> Option<PathBuf> {
        std::env::var_os(OUTBOX_ENV)
            .map(PathBuf::from)
            .or_else(|| configured.map(Path::to_path_buf))
            .or_else(Self::default_dir)
    }

    pub fn default_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "fleet-signup", "fleet-signup")
            .map(|dirs| dirs.data_dir().join("outbox"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether a registration for `email` is already queued
    async fn email_taken(&self, email: &str) -> Result<bool, SubmitError> {
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let content = tokio::fs::read(&path).await?;
            match serde_json::from_slice::<RegistrationPayload>(&content) {
                Ok(existing) if existing.email.eq_ignore_ascii_case(email) => return Ok(true),
                Ok(_) => {}
                Err(err) => warn!(path = %path.display(), error = %err, "skipping unreadable outbox entry"),
            }
        }
        Ok(false)
    }
}

#[async_trait]
impl RegistrationSubmitter for OutboxSubmitter {
    async fn register(&self, payload: RegistrationPayload) -> Result<(), SubmitError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        tokio::fs::create_dir_all(&self.dir).await?;
        if self.email_taken(&payload.email).await? {
            return Err(SubmitError::Rejected(format!(
                "An account for {} is already pending activation",
                payload.email
            )));
        }

        let path = self.dir.join(format!("{}.json", payload.id));
        let body = serde_json::to_vec_pretty(&payload)?;
        tokio::fs::write(&path, body).await?;
        debug!(path = %path.display(), "registration written to outbox");
        Ok(())
    }
}
