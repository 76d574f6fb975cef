//! Departure records and next-departure selection.
//!
//! Records are kept close to the wire format: the scheduled time stays as
//! the RFC 3339 string the API sent and is parsed only when a selection
//! needs it, so passthrough fields round-trip into the snapshot untouched.

mod error;
mod record;
mod select;

pub use error::SelectError;
pub use record::{Departure, DirectionId, SelectedDeparture};
pub use select::{is_chronological, select_next};
