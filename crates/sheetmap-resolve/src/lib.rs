#![deny(unsafe_code)]

//! Resolution of flat label→value records against a schema tree.
//!
//! [`resolve`] walks a [`Schema`](sheetmap_model::Schema) depth-first,
//! consuming matching entries from a mutable input map and building an
//! ordered [`Assignment`](sheetmap_model::Assignment) tree. The engine is
//! best-effort and never fails; missing required fields are reported
//! afterwards by `sheetmap-validate`.
//!
//! The input map is drained destructively: once a label matches a field it
//! is removed, so each key satisfies at most one field occurrence. Callers
//! that may retry a partially-resolved record must clone the map first.

mod engine;
mod label;

pub use engine::resolve;
pub use label::current_label;
