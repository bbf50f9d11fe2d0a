//! Day-partitioned standup record storage
//!
//! Records are arbitrary JSON, stored whole-file at
//! `<data_dir>/<YYYY>/<MM>/<DD>.json`. At most one record per calendar day;
//! saving again overwrites. Absence of a record is a normal outcome, not an
//! error.

mod error;
mod store;

pub use error::{StoreError, StoreResult};
pub use store::{SavedRecord, StandupStore};
