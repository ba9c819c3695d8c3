// User records are not validated: whatever the input file holds is forwarded
// verbatim. Only `email` is ever looked at, and only for log messages.

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Placeholder used in log lines when a record carries no usable `email`.
pub const UNKNOWN_EMAIL: &str = "unknown";

/// One element of the input array, posted as-is.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct UserRecord(pub Value);

impl UserRecord {
    /// Email used to identify the record in logs. Non-string values are shown
    /// as JSON, anything missing as [`UNKNOWN_EMAIL`].
    pub fn email(&self) -> String {
        match self.0.get("email") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => UNKNOWN_EMAIL.into(),
            Some(other) => other.to_string(),
        }
    }
}

/// Read the whole input file as a JSON array of records.
pub fn load_users(path: &Path) -> Result<Vec<UserRecord>> {
    read_users(path).with_context(|| format!("Failed to load users from {}", path.display()))
}

fn read_users(path: &Path) -> Result<Vec<UserRecord>> {
    let file = File::open(path)?;
    let value: Value = serde_json::from_reader(BufReader::new(file))?;
    match value {
        Value::Array(items) => Ok(items.into_iter().map(UserRecord).collect()),
        other => Err(anyhow!("expected a JSON array, found {}", kind(&other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(contents: &str) -> Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(contents.as_bytes())?;
        Ok(file)
    }

    #[test]
    fn loads_records_in_file_order() -> Result<()> {
        let file = file_with(r#"[{"email":"a@x.com","name":"A"},{"email":"b@x.com"}]"#)?;
        let users = load_users(file.path())?;
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].email(), "a@x.com");
        assert_eq!(users[0].0["name"], "A");
        assert_eq!(users[1].email(), "b@x.com");
        Ok(())
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_users(Path::new("/definitely/not/here.json"))
            .err()
            .map(|e| format!("{e:#}"))
            .unwrap_or_default();
        assert!(err.starts_with("Failed to load users from /definitely/not/here.json: "));
    }

    #[test]
    fn invalid_json_is_a_load_error() -> Result<()> {
        let file = file_with("[{\"email\": ")?;
        assert!(load_users(file.path()).is_err());
        Ok(())
    }

    #[test]
    fn top_level_must_be_an_array() -> Result<()> {
        let file = file_with(r#"{"email":"a@x.com"}"#)?;
        let err = load_users(file.path()).err().ok_or_else(|| anyhow!("expected error"))?;
        assert!(format!("{err:#}").contains("expected a JSON array, found an object"));
        Ok(())
    }

    #[test]
    fn email_falls_back_to_placeholder() {
        assert_eq!(UserRecord(json!({"name": "nobody"})).email(), "unknown");
        assert_eq!(UserRecord(json!({"email": null})).email(), "unknown");
        assert_eq!(UserRecord(json!("just a string")).email(), "unknown");
        assert_eq!(UserRecord(json!({"email": 42})).email(), "42");
    }

    #[test]
    fn record_serializes_verbatim() -> Result<()> {
        let value = json!({"email": "a@x.com", "tags": [1, 2], "active": true});
        let body = serde_json::to_value(UserRecord(value.clone()))?;
        assert_eq!(body, value);
        Ok(())
    }
}
