//! Local order outbox.
//!
//! Stands in for an e-mail transport: every submitted order is appended to
//! a JSONL file that can be reviewed or forwarded later.

mod jsonl_outbox;

pub use jsonl_outbox::JsonlOutbox;
