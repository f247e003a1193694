use thiserror::Error;

use super::channel::DeliveryChannel;
use super::request::OrderField;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldProblem {
    Missing,
    Invalid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: OrderField,
    pub problem: FieldProblem,
}

/// Raised by submit when required fields are empty or malformed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("order request is incomplete: {}", summarize(.issues))]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Returns `None` when there is nothing to report.
    pub fn from_issues(issues: Vec<FieldIssue>) -> Option<Self> {
        if issues.is_empty() {
            None
        } else {
            Some(Self { issues })
        }
    }

    #[cfg(test)]
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn fields(&self) -> impl Iterator<Item = OrderField> + '_ {
        self.issues.iter().map(|issue| issue.field)
    }

    pub fn concerns(&self, field: OrderField) -> bool {
        self.fields().any(|f| f == field)
    }
}

fn summarize(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| match issue.problem {
            FieldProblem::Missing => format!("{} is required", issue.field.label()),
            FieldProblem::Invalid => format!("{} is not valid", issue.field.label()),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// The host environment could not open the hand-off link.
#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("no browser window available")]
    NoWindow,
    #[error("browser refused to open the {0} link")]
    Refused(DeliveryChannel),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_issue_list_is_not_an_error() {
        assert!(ValidationError::from_issues(Vec::new()).is_none());
    }

    #[test]
    fn message_names_every_field() {
        let err = ValidationError::from_issues(vec![
            FieldIssue { field: OrderField::Name, problem: FieldProblem::Missing },
            FieldIssue { field: OrderField::Email, problem: FieldProblem::Invalid },
        ])
        .unwrap();
        assert_eq!(
            err.to_string(),
            "order request is incomplete: Name is required, Email is not valid"
        );
        assert!(err.concerns(OrderField::Email));
        assert!(!err.concerns(OrderField::Description));
    }
}
