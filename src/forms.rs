//! Form validation and sanitization
//!
//! Submitted fields run through an ordered chain of named checks. A failed
//! check records a `(field, message)` pair and the chain keeps going, so one
//! submission reports every problem at once.

use chrono::NaiveDate;
use serde::Deserialize;

/// A single validation failure.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Raw author form body. Missing fields deserialize to empty strings so a
/// partial submission behaves like blank inputs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub date_of_death: String,
}

/// Trimmed and escaped field values, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorInput {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<String>,
    pub date_of_death: Option<String>,
}

/// One field moving through its check chain.
pub struct Checked<'a> {
    field: &'static str,
    value: String,
    errors: &'a mut Vec<FieldError>,
}

impl<'a> Checked<'a> {
    pub fn field(field: &'static str, raw: &str, errors: &'a mut Vec<FieldError>) -> Self {
        Self {
            field,
            value: raw.to_string(),
            errors,
        }
    }

    fn fail(&mut self, message: &str) {
        self.errors.push(FieldError {
            field: self.field,
            message: message.to_string(),
        });
    }

    pub fn trim(mut self) -> Self {
        self.value = self.value.trim().to_string();
        self
    }

    pub fn required(mut self, message: &str) -> Self {
        if self.value.is_empty() {
            self.fail(message);
        }
        self
    }

    pub fn alphanumeric(mut self, message: &str) -> Self {
        if !self.value.is_empty() && !self.value.chars().all(char::is_alphanumeric) {
            self.fail(message);
        }
        self
    }

    /// ISO-8601 calendar date. Blank means "unset" and skips the check.
    pub fn iso_date(mut self, message: &str) -> Self {
        if !self.value.is_empty() && NaiveDate::parse_from_str(&self.value, "%Y-%m-%d").is_err() {
            self.fail(message);
        }
        self
    }

    pub fn escape(mut self) -> Self {
        self.value = escape(&self.value);
        self
    }

    pub fn done(self) -> String {
        self.value
    }
}

/// Neutralize markup-significant characters before storage or display.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}

/// Run the author form through its validators. Errors keep submission order:
/// first_name, family_name, date_of_birth, date_of_death.
pub fn validate_author(form: &AuthorForm) -> Result<AuthorInput, Vec<FieldError>> {
    let mut errors = Vec::new();

    let first_name = Checked::field("first_name", &form.first_name, &mut errors)
        .trim()
        .required("First name must be specified.")
        .alphanumeric("First name has non-alphanumeric characters.")
        .escape()
        .done();
    let family_name = Checked::field("family_name", &form.family_name, &mut errors)
        .trim()
        .required("Family name must be specified.")
        .alphanumeric("Family name has non-alphanumeric characters.")
        .escape()
        .done();
    let date_of_birth = Checked::field("date_of_birth", &form.date_of_birth, &mut errors)
        .trim()
        .iso_date("Invalid date of birth")
        .escape()
        .done();
    let date_of_death = Checked::field("date_of_death", &form.date_of_death, &mut errors)
        .trim()
        .iso_date("Invalid date of death")
        .escape()
        .done();

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(AuthorInput {
        first_name,
        family_name,
        date_of_birth: (!date_of_birth.is_empty()).then_some(date_of_birth),
        date_of_death: (!date_of_death.is_empty()).then_some(date_of_death),
    })
}
