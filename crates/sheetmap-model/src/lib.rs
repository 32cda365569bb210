#![deny(unsafe_code)]

//! Data model for schema-driven resolution of labeled tabular values.
//!
//! A [`Schema`] is an ordered tree of [`Field`] definitions describing the
//! columns an external data source is expected to carry. Resolution (in the
//! `sheetmap-resolve` crate) turns one flat label→value record into an
//! ordered tree of [`Assignment`]s mirroring the schema.

pub mod assignment;
pub mod schema;

pub use assignment::{Assignment, AssignmentValue};
pub use schema::{Field, Schema};
