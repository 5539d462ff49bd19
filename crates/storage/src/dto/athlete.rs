use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for registering a new athlete
///
/// Carries the same business fields as [`crate::models::Athlete`] minus the
/// store-assigned `id`. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAthleteRequest {
    #[validate(
        length(max = 255, message = "Name must be at most 255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    #[validate(
        length(max = 255, message = "National ID must be at most 255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub national_id: String,

    #[validate(
        length(max = 255, message = "Training center must be at most 255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub training_center: String,

    #[validate(
        length(max = 255, message = "Category must be at most 255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub category: String,
}

/// Exact-match criteria for listing athletes. Supplied fields are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AthleteFilter {
    pub name: Option<String>,
    pub national_id: Option<String>,
}

impl AthleteFilter {
    /// Empty strings count as "no filter".
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    pub fn national_id(&self) -> Option<&str> {
        self.national_id.as_deref().filter(|s| !s.is_empty())
    }
}

fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut err = validator::ValidationError::new("blank");
        err.message = Some("must not be empty".into());
        Err(err)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateAthleteRequest {
        CreateAthleteRequest {
            name: "Ana Silva".to_string(),
            national_id: "111".to_string(),
            training_center: "CT1".to_string(),
            category: "Senior".to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_empty_field_is_rejected() {
        let req = CreateAthleteRequest {
            national_id: String::new(),
            ..request()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("national_id"));
    }

    #[test]
    fn test_whitespace_only_field_is_rejected() {
        let req = CreateAthleteRequest {
            category: "   ".to_string(),
            ..request()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("category"));
    }

    #[test]
    fn test_overlong_field_is_rejected() {
        let req = CreateAthleteRequest {
            name: "a".repeat(256),
            ..request()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_deserializes_camel_case_and_ignores_id() {
        let req: CreateAthleteRequest = serde_json::from_str(
            r#"{"id": 42, "name": "Ana Silva", "nationalId": "111", "trainingCenter": "CT1", "category": "Senior"}"#,
        )
        .unwrap();
        assert_eq!(req.national_id, "111");
        assert_eq!(req.training_center, "CT1");
    }

    #[test]
    fn test_missing_field_fails_to_deserialize() {
        let result: Result<CreateAthleteRequest, _> =
            serde_json::from_str(r#"{"name": "Ana Silva", "nationalId": "111"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_filter_values_are_ignored() {
        let filter = AthleteFilter {
            name: Some(String::new()),
            national_id: Some("111".to_string()),
        };
        assert_eq!(filter.name(), None);
        assert_eq!(filter.national_id(), Some("111"));
    }
}
