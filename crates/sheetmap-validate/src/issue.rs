//! Issue and report types.

use serde::{Deserialize, Serialize};

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// A non-optional field has no assignment.
    MissingRequired { field: String },
}

impl Issue {
    /// Human-readable message, surfaced verbatim by hosts.
    pub fn message(&self) -> String {
        match self {
            Self::MissingRequired { field } => format!("missing required field {field}"),
        }
    }
}

/// Validation outcome for one resolution pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts() {
        let report = ValidationReport::new(vec![Issue::MissingRequired {
            field: "email".to_string(),
        }]);
        assert!(!report.is_ok());
        assert_eq!(report.issue_count(), 1);
        assert_eq!(report.issues[0].message(), "missing required field email");
    }
}
