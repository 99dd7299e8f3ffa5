//! Field validation rules, the submit-time form validator, and the city catalog
//!
//! Everything in this module is a pure function of its inputs: invalid input
//! produces a message string, never an error. Callers own the resulting
//! message maps.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// The ten registration form fields, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    FirstName,
    LastName,
    Email,
    Username,
    Password,
    PhoneNumber,
    PanNumber,
    AadharNumber,
    Country,
    City,
}

/// All fields in form order.
pub const ALL_FIELDS: &[FieldKey] = &[
    FieldKey::FirstName,
    FieldKey::LastName,
    FieldKey::Email,
    FieldKey::Username,
    FieldKey::Password,
    FieldKey::PhoneNumber,
    FieldKey::PanNumber,
    FieldKey::AadharNumber,
    FieldKey::Country,
    FieldKey::City,
];

impl FieldKey {
    /// Canonical camelCase key name. The country field key is lowercase
    /// `country` everywhere, including submit-time validation.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::FirstName => "firstName",
            FieldKey::LastName => "lastName",
            FieldKey::Email => "email",
            FieldKey::Username => "username",
            FieldKey::Password => "password",
            FieldKey::PhoneNumber => "phoneNumber",
            FieldKey::PanNumber => "panNumber",
            FieldKey::AadharNumber => "aadharNumber",
            FieldKey::Country => "country",
            FieldKey::City => "city",
        }
    }

    /// Key name with a space before each capital, e.g. "first Name".
    /// Required-field messages use this form verbatim.
    pub fn spaced(self) -> String {
        let mut out = String::new();
        for c in self.as_str().chars() {
            if c.is_ascii_uppercase() {
                out.push(' ');
            }
            out.push(c);
        }
        out
    }

    /// Display label for rendering, e.g. "First Name".
    pub fn label(self) -> String {
        let spaced = self.spaced();
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => spaced,
        }
    }
}

/// Per-field validation rule descriptor.
enum Rule {
    /// Trimmed value must be non-empty.
    Required,
    /// Value must match the pattern, else the fixed message applies.
    Pattern {
        pattern: &'static Lazy<Regex>,
        message: &'static str,
    },
    /// Length plus character-class requirements (no lookahead in the
    /// regex crate, so the classes are checked directly).
    PasswordStrength,
}

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email pattern"));
// [0-9], not \d: the regex crate's \d matches any Unicode decimal digit
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone pattern"));
static PAN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("valid PAN pattern"));
static AADHAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{12}$").expect("valid Aadhar pattern"));

const PASSWORD_MESSAGE: &str =
    "Password must contain at least 8 characters, one number, one capital letter, and one special character";

impl FieldKey {
    fn rule(self) -> Rule {
        match self {
            FieldKey::FirstName
            | FieldKey::LastName
            | FieldKey::Username
            | FieldKey::Country
            | FieldKey::City => Rule::Required,
            FieldKey::Email => Rule::Pattern {
                pattern: &EMAIL_PATTERN,
                message: "Email is invalid",
            },
            FieldKey::Password => Rule::PasswordStrength,
            FieldKey::PhoneNumber => Rule::Pattern {
                pattern: &PHONE_PATTERN,
                message: "Phone Number is invalid",
            },
            FieldKey::PanNumber => Rule::Pattern {
                pattern: &PAN_PATTERN,
                message: "PAN Number must be 10 characters long with 5 letters, 4 digits, and 1 letter",
            },
            FieldKey::AadharNumber => Rule::Pattern {
                pattern: &AADHAR_PATTERN,
                message: "Aadhar Number must be 12 digits",
            },
        }
    }
}

/// Current form values, one entry per field.
pub type FormValues = BTreeMap<FieldKey, String>;

/// Per-field error messages; a missing or empty entry means the field is valid.
pub type ValidationMessages = BTreeMap<FieldKey, String>;

/// A fresh value map with every field present and empty.
pub fn empty_values() -> FormValues {
    ALL_FIELDS
        .iter()
        .map(|key| (*key, String::new()))
        .collect()
}

/// Validate a single field against its rule.
///
/// Returns the error message, or an empty string when the value is valid.
pub fn validate_field(key: FieldKey, value: &str) -> String {
    match key.rule() {
        Rule::Required => {
            if value.trim().is_empty() {
                format!("{} is required", key.spaced())
            } else {
                String::new()
            }
        }
        Rule::Pattern { pattern, message } => {
            if pattern.is_match(value) {
                String::new()
            } else {
                message.to_string()
            }
        }
        Rule::PasswordStrength => {
            if password_is_strong(value) {
                String::new()
            } else {
                PASSWORD_MESSAGE.to_string()
            }
        }
    }
}

fn password_is_strong(value: &str) -> bool {
    value.chars().count() >= 8
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| !c.is_ascii_alphanumeric())
}

/// Result of a submit-time validation pass.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub valid: bool,
    pub messages: ValidationMessages,
}

/// Submit-time validation over the whole form.
///
/// Every field, password included, is checked only for trimmed
/// non-emptiness; the per-field format rules are not re-applied here. The
/// returned message map replaces any previously published messages.
pub fn validate_form(values: &FormValues) -> SubmitOutcome {
    let mut messages = ValidationMessages::new();
    let mut valid = true;

    for key in ALL_FIELDS {
        let value = values.get(key).map(String::as_str).unwrap_or("");
        if value.trim().is_empty() {
            messages.insert(*key, format!("{} is required", key.spaced()));
            valid = false;
        }
    }

    SubmitOutcome { valid, messages }
}

/// Countries with a city catalog entry.
pub const COUNTRY_OPTIONS: &[&str] = &["India", "United States"];

/// Cities selectable for the given country, in catalog order.
///
/// Unknown or empty countries have no cities.
pub fn city_options(country: &str) -> &'static [&'static str] {
    match country {
        "India" => &["Kanpur", "Lucknow", "Mumbai", "Gajiyabad", "Kolkata"],
        "United States" => &["New York", "California"],
        _ => &[],
    }
}
