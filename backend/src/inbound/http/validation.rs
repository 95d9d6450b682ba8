//! Request body validation for `POST /users`.
//!
//! Works on the raw JSON value so that a missing field, a field of the wrong
//! JSON type, and a syntactically invalid value each produce their own issue.
//! Every violation is reported, not just the first. Values are never
//! trimmed or normalised.

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::domain::{EmailAddress, Error, NewUser, UserName, UserValidationError};

/// Top-level message of every validation failure.
pub const VALIDATION_FAILED: &str = "request validation failed";

/// Machine-readable reason attached to each field issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// The field is absent.
    MissingField,
    /// The field is present but not a JSON string.
    InvalidType,
    /// The field is an empty string.
    EmptyValue,
    /// The email field does not match email syntax.
    InvalidEmail,
}

/// One field-level violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Name of the offending body field.
    pub field: &'static str,
    /// Machine-readable reason.
    pub code: IssueCode,
    /// Human-readable explanation.
    pub message: String,
}

impl FieldIssue {
    fn new(field: &'static str, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            field,
            code,
            message: message.into(),
        }
    }
}

fn string_field<'a>(
    body: &'a Map<String, Value>,
    field: &'static str,
    issues: &mut Vec<FieldIssue>,
) -> Option<&'a str> {
    match body.get(field) {
        None => {
            issues.push(FieldIssue::new(
                field,
                IssueCode::MissingField,
                format!("missing required field: {field}"),
            ));
            None
        }
        Some(Value::String(value)) => Some(value.as_str()),
        Some(_) => {
            issues.push(FieldIssue::new(
                field,
                IssueCode::InvalidType,
                format!("{field} must be a string"),
            ));
            None
        }
    }
}

fn issue_for(field: &'static str, err: &UserValidationError) -> FieldIssue {
    let code = match err {
        UserValidationError::InvalidEmail => IssueCode::InvalidEmail,
        _ => IssueCode::EmptyValue,
    };
    FieldIssue::new(field, code, err.to_string())
}

fn validation_error(issues: &[FieldIssue]) -> Error {
    Error::invalid_request(VALIDATION_FAILED).with_details(json!({ "issues": issues }))
}

/// Validate a create-user body and build the domain value.
///
/// # Errors
///
/// Returns an [`crate::domain::ErrorCode::InvalidRequest`] error whose
/// details list every field issue, or a plain invalid-request error when the
/// body is not a JSON object.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use user_directory::inbound::http::validation::validate_new_user;
///
/// let user = validate_new_user(&json!({"name": "Ada", "email": "ada@example.com"}))
///     .expect("valid body");
/// assert_eq!(user.name().as_ref(), "Ada");
///
/// let err = validate_new_user(&json!({"name": "Bob"})).expect_err("missing email");
/// assert_eq!(err.message(), "request validation failed");
/// ```
pub fn validate_new_user(body: &Value) -> Result<NewUser, Error> {
    let Some(body) = body.as_object() else {
        return Err(Error::invalid_request("request body must be a JSON object"));
    };

    let mut issues = Vec::new();
    let name = string_field(body, "name", &mut issues).and_then(|raw| match UserName::new(raw) {
        Ok(name) => Some(name),
        Err(err) => {
            issues.push(issue_for("name", &err));
            None
        }
    });
    let email = string_field(body, "email", &mut issues).and_then(|raw| {
        match EmailAddress::new(raw) {
            Ok(email) => Some(email),
            Err(err) => {
                issues.push(issue_for("email", &err));
                None
            }
        }
    });

    match (name, email) {
        (Some(name), Some(email)) if issues.is_empty() => Ok(NewUser::new(name, email)),
        _ => Err(validation_error(&issues)),
    }
}
