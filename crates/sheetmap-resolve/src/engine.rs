//! Depth-first resolution of a schema against one input record.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use sheetmap_model::{Assignment, Field, Schema};

use crate::label::current_label;

/// Resolves one input record against a schema.
///
/// Matched keys are removed from `input`; whatever remains afterwards was
/// not claimed by any field. The returned assignments follow schema
/// declaration order. Resolution never fails; run
/// `sheetmap_validate::validate` on the result to surface missing required
/// fields.
pub fn resolve(schema: &Schema, input: &mut BTreeMap<String, String>) -> Vec<Assignment> {
    let (assignments, _) = resolve_at(&schema.fields, input, 0);
    assignments
}

/// Resolves `fields` at one repetition index.
///
/// The bool reports whether any label matched at this index; a sequential
/// parent uses it to stop probing. Plain nested recursion deliberately does
/// not feed its flag back to the caller.
fn resolve_at(
    fields: &[Field],
    input: &mut BTreeMap<String, String>,
    index: u32,
) -> (Vec<Assignment>, bool) {
    let mut assignments = Vec::new();
    let mut matched_any = false;

    for field in fields {
        match &field.schema {
            None => {
                if let Some(label) = current_label(&field.label, &field.alias_labels, index, input)
                    && let Some(value) = input.remove(&label)
                {
                    debug!(field = %field.name, %label, "matched column");
                    assignments.push(Assignment::scalar(&field.name, value));
                    matched_any = true;
                }
            }
            Some(sub) if sub.sequential_columns => {
                let mut repetitions = Vec::new();
                // Strict incrementing probe; the first gap terminates.
                for i in 1.. {
                    let (set, hit) = resolve_at(&sub.fields, input, i);
                    if !hit {
                        break;
                    }
                    matched_any = true;
                    repetitions.push(set);
                }
                // The node stands for the field itself, so it is recorded
                // even when no repetition matched.
                assignments.push(Assignment::repeated(&field.name, repetitions));
            }
            Some(sub) if sub.multi_delimiter.is_some() => {
                // Delimiter multiplexing is declared but not resolved yet;
                // keep the upstream skip, but make it observable.
                warn!(
                    field = %field.name,
                    "multi-delimiter field skipped: resolution not implemented"
                );
            }
            Some(sub) => {
                let (children, _) = resolve_at(&sub.fields, input, index);
                assignments.push(Assignment::nested(&field.name, children));
            }
        }
    }

    (assignments, matched_any)
}
