use serde_json::Value;

/// REST endpoint returning the summary of a random article.
///
/// `{lang}` is replaced with the language code of the Wikipedia edition.
pub const API_URL: &str = "https://{lang}.wikipedia.org/api/rest_v1/page/random/summary";

/// Language edition used when none is given.
pub const DEFAULT_LANG: &str = "en";

const LANG_PLACEHOLDER: &str = "{lang}";

/// Summary of a Wikipedia article, as returned by the page summary endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSummary {
    pub title: String,
    pub extract: String,
}

/// Reasons a response body is not a usable article summary
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SummaryError {
    #[error("Invalid JSON in response body: {0}")]
    InvalidJson(String),

    #[error("Expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Field '{field}' must be a string, got {found}")]
    InvalidField {
        field: &'static str,
        found: &'static str,
    },

    #[error("Field 'title' must not be empty")]
    EmptyTitle,
}

/// Build the request URL for a language edition
///
/// The language code is substituted verbatim. It is not checked against the
/// list of existing editions; an unknown code just yields whatever the
/// upstream host answers.
pub fn build_url(template: &str, lang: &str) -> String {
    template.replacen(LANG_PLACEHOLDER, lang, 1)
}

/// Parse a raw response body into an article summary
pub fn parse_summary(body: &str) -> Result<ArticleSummary, SummaryError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| SummaryError::InvalidJson(e.to_string()))?;
    validate_summary(value)
}

/// Validate a decoded JSON value against the summary schema
///
/// Only `title` and `extract` are read; every other key is dropped.
/// The first failing check is reported.
pub fn validate_summary(value: Value) -> Result<ArticleSummary, SummaryError> {
    let mut map = match value {
        Value::Object(map) => map,
        other => return Err(SummaryError::NotAnObject(json_kind(&other))),
    };

    let title = take_string(&mut map, "title")?;
    if title.trim().is_empty() {
        return Err(SummaryError::EmptyTitle);
    }
    let extract = take_string(&mut map, "extract")?;

    Ok(ArticleSummary { title, extract })
}

fn take_string(
    map: &mut serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<String, SummaryError> {
    match map.remove(field) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(SummaryError::InvalidField {
            field,
            found: json_kind(&other),
        }),
        None => Err(SummaryError::MissingField(field)),
    }
}

/// Name of a JSON value's type, for error messages
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
