//! Audit logging for money-manager
//!
//! Records account creation, transaction recording, category changes and
//! ledger imports in an append-only JSON-lines log next to the data.
//!
//! - `AuditEntry`: one entry with timestamp, operation, entity information
//!   and an optional snapshot of the recorded entity.
//! - `AuditLogger`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
