//! Component labeler abstractions and implementations.

mod gds;
mod mock;
mod provider;

pub use gds::GdsLabeler;
pub use mock::MockLabeler;
pub use provider::{ComponentLabeler, ComponentLabels};
