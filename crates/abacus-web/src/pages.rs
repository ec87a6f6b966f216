use abacus_calculator::{CalculationResult, Number, Operation};
use askama::Template;

/// Text shown when the form fallback receives unusable operands.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid numbers for a and b.";

/// What the result region currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing calculated yet
    Pending,
    /// A computed value
    Success(Number),
    /// A failure message, without the `Error: ` prefix
    Failure(String),
}

impl Outcome {
    pub fn text(&self) -> String {
        match self {
            Self::Pending => String::new(),
            Self::Success(value) => format!("Calculation Result: {value}"),
            Self::Failure(message) => format!("Error: {message}"),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success(_) => "success",
            Self::Failure(_) => "error",
        }
    }
}

impl From<CalculationResult> for Outcome {
    fn from(result: CalculationResult) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failure(err.to_string()),
        }
    }
}

#[derive(Template, Debug, Clone)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub a: String,
    pub b: String,
    pub outcome: Outcome,
    pub operations: [Operation; 4],
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self::with_inputs(String::new(), String::new())
    }
}

impl IndexTemplate {
    /// A page that echoes the submitted inputs back into the form.
    pub fn with_inputs(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            outcome: Outcome::Pending,
            operations: Operation::ALL,
        }
    }

    pub fn showing(mut self, outcome: impl Into<Outcome>) -> Self {
        self.outcome = outcome.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abacus_calculator::CalculationError;

    #[test]
    fn outcome_texts_use_fixed_prefixes() {
        assert_eq!(Outcome::Success(Number::Integer(15)).text(), "Calculation Result: 15");
        assert_eq!(Outcome::Success(Number::Float(5.0)).text(), "Calculation Result: 5");
        assert_eq!(
            Outcome::from(Err(CalculationError::DivisionByZero)).text(),
            "Error: Cannot divide by zero!"
        );
        assert_eq!(Outcome::Pending.text(), "");
    }

    #[test]
    fn blank_page_has_inputs_buttons_and_result_region() {
        let html = IndexTemplate::default().render().unwrap();
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains(r#"id="a""#));
        assert!(html.contains(r#"id="b""#));
        for label in ["Add", "Subtract", "Multiply", "Divide"] {
            assert!(html.contains(&format!(">{label}</button>")), "missing {label} button");
        }
        assert!(html.contains(r#"<div id="result" class="pending" role="status"></div>"#));
    }

    #[test]
    fn rendered_result_is_escaped_and_inputs_echoed() {
        let html = IndexTemplate::with_inputs("10", "<5>")
            .showing(Outcome::Failure("bad <input>".to_string()))
            .render()
            .unwrap();
        assert!(html.contains(r#"value="10""#));
        assert!(html.contains("&lt;5&gt;"));
        assert!(html.contains("Error: bad &lt;input&gt;"));
    }
}
