use validator::ValidateEmail;

use super::error::{FieldIssue, FieldProblem, ValidationError};

pub const SERVICE_TYPES: [&str; 7] = [
    "Personal Portfolio",
    "Business Website",
    "E-commerce",
    "Mobile App",
    "Branding & Design",
    "Programming & Tech",
    "Other",
];

pub const BUDGET_TIERS: [&str; 4] = [
    "Basic - $100",
    "Professional - $250",
    "Premium - $500+",
    "Custom Budget",
];

/// Fields of an order request. `ALL` is also the order they appear in the
/// serialized message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderField {
    Name,
    Email,
    ContactNumber,
    ServiceType,
    BudgetTier,
    Description,
}

impl OrderField {
    pub const ALL: [OrderField; 6] = [
        OrderField::Name,
        OrderField::Email,
        OrderField::ContactNumber,
        OrderField::ServiceType,
        OrderField::BudgetTier,
        OrderField::Description,
    ];

    /// Label used in the serialized message and in error text.
    pub fn label(&self) -> &'static str {
        match self {
            OrderField::Name => "Name",
            OrderField::Email => "Email",
            OrderField::ContactNumber => "Contact Number",
            OrderField::ServiceType => "Service Type",
            OrderField::BudgetTier => "Budget",
            OrderField::Description => "Description",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderRequest {
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub service_type: String,
    pub budget_tier: String,
    pub description: String,
}

impl OrderRequest {
    pub fn get(&self, field: OrderField) -> &str {
        match field {
            OrderField::Name => &self.name,
            OrderField::Email => &self.email,
            OrderField::ContactNumber => &self.contact_number,
            OrderField::ServiceType => &self.service_type,
            OrderField::BudgetTier => &self.budget_tier,
            OrderField::Description => &self.description,
        }
    }

    /// Overwrites one field. No validation happens here.
    pub fn set(&mut self, field: OrderField, value: String) {
        let slot = match field {
            OrderField::Name => &mut self.name,
            OrderField::Email => &mut self.email,
            OrderField::ContactNumber => &mut self.contact_number,
            OrderField::ServiceType => &mut self.service_type,
            OrderField::BudgetTier => &mut self.budget_tier,
            OrderField::Description => &mut self.description,
        };
        *slot = value;
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        OrderField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Checks every field and reports all problems at once.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let issues = OrderField::ALL
            .iter()
            .filter_map(|field| {
                check_field(*field, self.get(*field).trim())
                    .map(|problem| FieldIssue { field: *field, problem })
            })
            .collect::<Vec<_>>();

        match ValidationError::from_issues(issues) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn check_field(field: OrderField, value: &str) -> Option<FieldProblem> {
    if value.is_empty() {
        return Some(FieldProblem::Missing);
    }
    let valid = match field {
        OrderField::Email => value.validate_email(),
        OrderField::ServiceType => SERVICE_TYPES.contains(&value),
        OrderField::BudgetTier => BUDGET_TIERS.contains(&value),
        OrderField::Name | OrderField::ContactNumber | OrderField::Description => true,
    };
    if valid {
        None
    } else {
        Some(FieldProblem::Invalid)
    }
}

#[cfg(test)]
pub(crate) fn sample_request() -> OrderRequest {
    OrderRequest {
        name: "Sam".to_string(),
        email: "sam@x.com".to_string(),
        contact_number: "+1555".to_string(),
        service_type: "E-commerce".to_string(),
        budget_tier: "Premium - $500+".to_string(),
        description: "Need a store".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_request_is_valid() {
        assert!(sample_request().validate().is_ok());
    }

    #[test]
    fn each_missing_field_is_reported() {
        for field in OrderField::ALL {
            let mut request = sample_request();
            request.set(field, String::new());
            let err = request.validate().unwrap_err();
            assert_eq!(
                err.issues(),
                &[FieldIssue { field, problem: FieldProblem::Missing }]
            );
        }
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut request = sample_request();
        request.set(OrderField::Description, "   \n ".to_string());
        let err = request.validate().unwrap_err();
        assert!(err.concerns(OrderField::Description));
    }

    #[test]
    fn malformed_email_is_invalid() {
        let mut request = sample_request();
        request.set(OrderField::Email, "sam-at-x".to_string());
        let err = request.validate().unwrap_err();
        assert_eq!(err.issues()[0].problem, FieldProblem::Invalid);
        assert!(err.concerns(OrderField::Email));
    }

    #[test]
    fn service_and_budget_must_come_from_the_lists() {
        let mut request = sample_request();
        request.set(OrderField::ServiceType, "Space Program".to_string());
        request.set(OrderField::BudgetTier, "$1".to_string());
        let err = request.validate().unwrap_err();
        let fields: Vec<_> = err.fields().collect();
        assert_eq!(fields, vec![OrderField::ServiceType, OrderField::BudgetTier]);
    }

    #[test]
    fn empty_request_reports_all_six_fields() {
        let err = OrderRequest::default().validate().unwrap_err();
        assert_eq!(err.issues().len(), 6);
        assert!(OrderRequest::default().is_empty());
    }

    #[test]
    fn set_and_get_address_the_same_slot() {
        let mut request = OrderRequest::default();
        for (i, field) in OrderField::ALL.into_iter().enumerate() {
            request.set(field, format!("v{i}"));
        }
        for (i, field) in OrderField::ALL.into_iter().enumerate() {
            assert_eq!(request.get(field), format!("v{i}"));
        }
    }
}
