//! Fleet signup - multi-step registration wizard engine
//!
//! Four fixed steps (contact, organization, planning, consent) with
//! industry-dependent validation on the organization step, derived plan
//! pricing, and an asynchronous registration handoff.

pub mod catalog;
pub mod config;
pub mod error;
pub mod state;
pub mod submitter;
pub mod wizard;
