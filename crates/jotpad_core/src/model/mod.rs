//! Domain model for the note widget.
//!
//! # Responsibility
//! - Define committed notes and the ordered list that holds them.
//! - Define the in-progress draft text.
//!
//! # Invariants
//! - Committed notes are never empty or whitespace-only.
//! - The draft performs no validation; checks happen at commit time.

pub mod draft;
pub mod note;
