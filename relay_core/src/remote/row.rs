//! Mapping from contact forms onto rows of the remote table

use crate::models::ContactFormRequest;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Form field name to remote column name.
pub const FIELD_RENAMES: [(&str, &str); 5] = [
    ("name", "Name"),
    ("email", "Email"),
    ("company", "Unternehmen"),
    ("phone", "Telefon"),
    ("message", "Nachricht"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteRowPayload {
    pub table_name: String,
    pub row: Map<String, Value>,
}

impl RemoteRowPayload {
    /// Every renamed column is present; absent optional fields become `null`.
    pub fn from_request(table_name: &str, request: &ContactFormRequest) -> crate::Result<Self> {
        let fields = match serde_json::to_value(request)? {
            Value::Object(fields) => fields,
            other => {
                return Err(anyhow::anyhow!("contact form serialized to non-object: {}", other).into())
            }
        };

        let row = FIELD_RENAMES
            .iter()
            .map(|(field, column)| {
                let value = fields.get(*field).cloned().unwrap_or(Value::Null);
                (column.to_string(), value)
            })
            .collect();

        Ok(Self {
            table_name: table_name.to_string(),
            row,
        })
    }
}
