//! Fleet signup - terminal front-end for the registration wizard
//!
//! Walks a prospect through contact, organization, planning and consent
//! steps, then hands the registration to the outbox.

mod app;
mod ui;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fleet_signup::config::WizardConfig;
use fleet_signup::submitter::{OutboxSubmitter, RegistrationSubmitter, SessionStore};
use fleet_signup::wizard::{RegistrationPayload, SeedParams, WizardStateMachine};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment fallback for the seed query string
const SEED_ENV: &str = "FLEET_SIGNUP_SEED";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fleet_signup=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = WizardConfig::load().context("failed to load config")?;

    // Unknown plan or industry ids are fatal before the terminal is touched
    let query = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(SEED_ENV).ok())
        .unwrap_or_default();
    let seed = SeedParams::from_query(&query)?.or(config.seed());

    let outbox_dir = OutboxSubmitter::resolve_dir(config.outbox_dir.as_deref())
        .context("could not determine an outbox directory")?;
    tracing::info!(outbox = %outbox_dir.display(), ?seed, "starting signup wizard");
    let submitter: Arc<dyn RegistrationSubmitter> =
        Arc::new(OutboxSubmitter::new(outbox_dir).with_delay(config.submit_delay()));

    let remembered = config.clone();
    let wizard = WizardStateMachine::new(seed).on_success(move |payload| {
        let payload = payload.clone();
        let mut config = remembered.clone();
        // File writes stay off the runtime thread that drives the UI
        tokio::task::spawn_blocking(move || persist_activation(&payload, &mut config));
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(wizard, submitter);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    if let Some(registration) = app.wizard.registration() {
        println!(
            "Trial activated for {} ({}), expires {}",
            registration.company,
            registration.email,
            registration.trial_expiry_date.format("%Y-%m-%d")
        );
    }

    Ok(())
}

/// Save the activated session and remember the chosen plan and industry
fn persist_activation(payload: &RegistrationPayload, config: &mut WizardConfig) {
    match SessionStore::in_data_dir() {
        Some(store) => match store.save(payload) {
            Ok(()) => tracing::info!(path = %store.path().display(), "session saved"),
            Err(err) => tracing::error!(error = %err, "failed to save session"),
        },
        None => tracing::warn!("no data directory, session not saved"),
    }

    let Some(path) = WizardConfig::config_path() else {
        return;
    };
    config.remember(payload);
    if let Err(err) = config.save_to(&path) {
        tracing::warn!(error = %err, "failed to remember plan and industry");
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.poll_submission();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll faster while a registration is in flight so the result shows promptly
        let poll_duration = if app.is_submitting() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }
                    app.handle_key(key)?;
                }
            }
        } else {
            // Let the spawned registration task make progress between frames
            tokio::task::yield_now().await;
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
