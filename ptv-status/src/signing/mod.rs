//! PTV request signing.
//!
//! Every Timetable API request carries the developer ID as a `devid` query
//! parameter and an HMAC-SHA1 `signature` computed over the path and query
//! using the developer key. The key itself never leaves the process.

mod error;
mod signer;

pub use error::SignError;
pub use signer::{Signer, sign, signature};
