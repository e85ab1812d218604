//! Core pipeline for schedcal: turning loosely structured task descriptions
//! into validated, timezone-aware calendar events and exporting them as ICS.
//!
//! The flow: raw task records (manual entry or the scheduling service's
//! decoded reply) pass schema validation, their date/time strings are
//! resolved into instants in the configured timezone, ordering is enforced,
//! and admitted events accumulate in an [`EventStore`] that can be
//! serialized with [`ics::generate_ics`].

pub mod config;
pub mod error;
pub mod event;
pub mod ics;
pub mod intake;
pub mod resolve;
pub mod schedule;
pub mod store;
pub mod taskspec;

pub use error::{SchedCalError, SchedCalResult};
pub use event::Event;
pub use store::EventStore;
pub use taskspec::TaskSpec;
