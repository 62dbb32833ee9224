//! Models between the preference store and its views.
//!
//! [`RecordModel`] exposes the five preferences as a single record.
//! [`EnabledList`] and [`DisabledList`] borrow it and present the enabled
//! items and their complement as lists. Every model publishes changes
//! through its own [`Notifier`].

mod disabled;
mod enabled;
pub mod notify;
mod record;

pub use disabled::DisabledList;
pub use enabled::EnabledList;
pub use notify::{ModelEvent, Notifier, SubscriptionId};
pub use record::{RecordModel, Role, WriteOutcome};
