#![deny(unsafe_code)]

//! Post-resolution validation of assignment trees.
//!
//! Resolution is best-effort and silently skips fields it cannot match;
//! this crate runs afterwards and reports non-optional fields that ended up
//! without an assignment. The two phases are explicit: resolve first, then
//! call [`validate`] (first failure) or [`collect_issues`] (full report).

mod issue;

pub use issue::{Issue, ValidationReport};

use thiserror::Error;

use sheetmap_model::{Assignment, AssignmentValue, Schema};

/// Validation failure for one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidateError {
    /// A non-optional field has no corresponding assignment.
    #[error("missing required field {name}")]
    MissingRequiredField { name: String },
}

/// Checks that every non-optional field has an assignment, at every schema
/// level, and fails on the first one missing in declaration order.
pub fn validate(schema: &Schema, assignments: &[Assignment]) -> Result<(), ValidateError> {
    match collect_issues(schema, assignments).into_iter().next() {
        Some(Issue::MissingRequired { field }) => {
            Err(ValidateError::MissingRequiredField { name: field })
        }
        None => Ok(()),
    }
}

/// Collects every missing-required-field issue, walking nested and repeated
/// assignment sets in schema declaration order.
pub fn collect_issues(schema: &Schema, assignments: &[Assignment]) -> Vec<Issue> {
    let mut issues = Vec::new();
    collect_into(schema, assignments, &mut issues);
    issues
}

/// Builds a serializable report for one resolution pass.
pub fn report(schema: &Schema, assignments: &[Assignment]) -> ValidationReport {
    ValidationReport::new(collect_issues(schema, assignments))
}

fn collect_into(schema: &Schema, assignments: &[Assignment], issues: &mut Vec<Issue>) {
    for field in &schema.fields {
        let assignment = assignments.iter().find(|a| a.name == field.name);

        let Some(assignment) = assignment else {
            if !field.optional {
                issues.push(Issue::MissingRequired {
                    field: field.name.clone(),
                });
            }
            continue;
        };

        let Some(sub) = &field.schema else {
            continue;
        };
        match &assignment.value {
            AssignmentValue::Nested(children) => collect_into(sub, children, issues),
            AssignmentValue::Repeated(sets) => {
                for set in sets {
                    collect_into(sub, set, issues);
                }
            }
            AssignmentValue::Scalar(_) => {}
        }
    }
}
