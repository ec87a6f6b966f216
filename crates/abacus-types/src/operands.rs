use crate::Number;
use std::fmt;
use thiserror::Error;

/// The two validated operands of a calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperandPair {
    /// First operand (the dividend for division)
    pub a: Number,
    /// Second operand (the divisor for division)
    pub b: Number,
}

impl OperandPair {
    /// Creates a pair from anything convertible into `Number`.
    pub fn new(a: impl Into<Number>, b: impl Into<Number>) -> Self {
        Self { a: a.into(), b: b.into() }
    }

    /// Validates a JSON request body of the form `{"a": <number>, "b": <number>}`.
    ///
    /// Both fields are checked before returning so every problem is reported
    /// together. Extra fields are ignored.
    pub fn from_json(body: &serde_json::Value) -> Result<Self, ValidationError> {
        let Some(object) = body.as_object() else {
            return Err(ValidationError::single(FieldIssue::body(IssueKind::NotAnObject)));
        };

        let read = |field: &'static str| match object.get(field) {
            None => Err(FieldIssue::new(field, IssueKind::Missing)),
            Some(value) => {
                Number::from_json(value).ok_or(FieldIssue::new(field, IssueKind::NotNumeric))
            }
        };

        Self::combine(read("a"), read("b"))
    }

    /// Validates two text fields as submitted by an HTML form or the CLI.
    /// Absent or blank fields count as missing.
    pub fn from_text(a: Option<&str>, b: Option<&str>) -> Result<Self, ValidationError> {
        let read = |field: &'static str, text: Option<&str>| match text.map(str::trim) {
            None | Some("") => Err(FieldIssue::new(field, IssueKind::Missing)),
            Some(text) => {
                Number::parse_text(text).ok_or(FieldIssue::new(field, IssueKind::NotNumeric))
            }
        };

        Self::combine(read("a", a), read("b", b))
    }

    fn combine(
        a: Result<Number, FieldIssue>,
        b: Result<Number, FieldIssue>,
    ) -> Result<Self, ValidationError> {
        match (a, b) {
            (Ok(a), Ok(b)) => Ok(Self { a, b }),
            (a, b) => Err(ValidationError {
                issues: [a.err(), b.err()].into_iter().flatten().collect(),
            }),
        }
    }
}

/// What is wrong with a single input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// The field was not supplied.
    Missing,
    /// The field was supplied but is not a finite number.
    NotNumeric,
    /// The request body is not a JSON object.
    NotAnObject,
    /// The request body could not be read or decoded.
    MalformedBody(String),
}

impl IssueKind {
    /// Human-readable description used in error payloads.
    pub fn message(&self) -> &str {
        match self {
            Self::Missing => "field required",
            Self::NotNumeric => "value is not a valid number",
            Self::NotAnObject => "request body must be a JSON object",
            Self::MalformedBody(reason) => reason,
        }
    }
}

/// A validation problem tied to one field (`a`, `b`, or `body`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Name of the offending field
    pub field: &'static str,
    /// Kind of problem
    pub kind: IssueKind,
}

impl FieldIssue {
    /// Creates an issue for a named field.
    pub const fn new(field: &'static str, kind: IssueKind) -> Self {
        Self { field, kind }
    }

    /// Creates an issue that concerns the whole request body.
    pub const fn body(kind: IssueKind) -> Self {
        Self { field: "body", kind }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind.message())
    }
}

/// Input rejected before any arithmetic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid operands: {}", join_issues(.issues))]
pub struct ValidationError {
    /// Every problem found, in field order
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Wraps a single issue.
    pub fn single(issue: FieldIssue) -> Self {
        Self { issues: vec![issue] }
    }

    /// Builds a body-level error for a payload that could not be decoded.
    pub fn malformed_body(reason: impl Into<String>) -> Self {
        Self::single(FieldIssue::body(IssueKind::MalformedBody(reason.into())))
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_two_numbers() {
        let pair = OperandPair::from_json(&json!({"a": 10, "b": 2.5})).unwrap();
        assert_eq!(pair, OperandPair::new(10_i64, 2.5));
    }

    #[test]
    fn ignores_extra_fields() {
        let pair = OperandPair::from_json(&json!({"a": 1, "b": 2, "c": "x"})).unwrap();
        assert_eq!(pair, OperandPair::new(1_i64, 2_i64));
    }

    #[test]
    fn reports_missing_field() {
        let err = OperandPair::from_json(&json!({"a": 5})).unwrap_err();
        assert_eq!(err.issues, vec![FieldIssue::new("b", IssueKind::Missing)]);
    }

    #[test]
    fn reports_every_bad_field() {
        let err = OperandPair::from_json(&json!({"a": "not a number"})).unwrap_err();
        assert_eq!(
            err.issues,
            vec![
                FieldIssue::new("a", IssueKind::NotNumeric),
                FieldIssue::new("b", IssueKind::Missing),
            ]
        );
        assert_eq!(
            err.to_string(),
            "invalid operands: a: value is not a valid number; b: field required"
        );
    }

    #[test]
    fn numeric_strings_and_null_are_not_numbers() {
        let err = OperandPair::from_json(&json!({"a": "5", "b": null})).unwrap_err();
        assert_eq!(
            err.issues,
            vec![
                FieldIssue::new("a", IssueKind::NotNumeric),
                FieldIssue::new("b", IssueKind::NotNumeric),
            ]
        );
    }

    #[test]
    fn rejects_non_object_bodies() {
        let err = OperandPair::from_json(&json!([1, 2])).unwrap_err();
        assert_eq!(err.issues, vec![FieldIssue::body(IssueKind::NotAnObject)]);
    }

    #[test]
    fn text_fields_parse_like_form_input() {
        let pair = OperandPair::from_text(Some("10.5"), Some(" 2 ")).unwrap();
        assert_eq!(pair, OperandPair::new(10.5, 2_i64));
    }

    #[test]
    fn blank_text_counts_as_missing() {
        let err = OperandPair::from_text(Some(""), None).unwrap_err();
        assert_eq!(
            err.issues,
            vec![
                FieldIssue::new("a", IssueKind::Missing),
                FieldIssue::new("b", IssueKind::Missing),
            ]
        );
    }

    #[test]
    fn malformed_body_keeps_reason() {
        let err = ValidationError::malformed_body("EOF while parsing");
        assert_eq!(err.issues[0].field, "body");
        assert_eq!(err.issues[0].kind.message(), "EOF while parsing");
    }
}
