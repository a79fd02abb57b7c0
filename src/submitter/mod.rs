//! Registration submitters and the post-registration handoff

mod outbox;
mod session;
mod traits;

pub use outbox::OutboxSubmitter;
pub use session::{ActiveSession, SessionStore};
pub use traits::RegistrationSubmitter;

#[cfg(test)]
pub use traits::MockRegistrationSubmitter;
