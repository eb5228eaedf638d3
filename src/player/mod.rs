//! Candidate player pool: records and their store
//!
//! ## Schema Overview
//!
//! ```text
//! PlayerStore (1) ──< PlayerRecord (N)
//!                          │
//!                          └── name (identity) + 7 scored attributes
//! ```
//!
//! Records are loaded once (JSON array, every field required) and the
//! store stays immutable for the life of the process. Lookup is
//! case-insensitive on name; suggestion order is load order.

mod record;
mod store;

pub use record::{PlayerRecord, PlayerRecordBuilder};
pub use store::PlayerStore;
