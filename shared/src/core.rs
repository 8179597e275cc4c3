use serde::{Deserialize, Deserializer, Serialize};

/// Status written by the receiver before an order is put on the queue.
pub const RECEIVED_STATUS: &str = "From OrderLoggingLambda";

/// Status attached to an order whose queue message could not be decoded.
pub const CONVERSION_ERROR_STATUS: &str = "Error converting object";

/// The record relayed from the HTTP endpoint to the order queue.
///
/// Field names on the wire are `Name`, `Description`, `CreatedAt` and `Status`;
/// the lowercase, camelCase and uppercase spellings are accepted on input.
/// Missing or `null` fields decode as empty text and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Order {
    #[serde(alias = "name", alias = "NAME", deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(
        alias = "description",
        alias = "DESCRIPTION",
        deserialize_with = "null_as_empty"
    )]
    pub description: String,
    #[serde(
        alias = "createdAt",
        alias = "createdat",
        alias = "CREATEDAT",
        deserialize_with = "null_as_empty"
    )]
    pub created_at: String,
    #[serde(alias = "status", alias = "STATUS")]
    pub status: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Order {
    pub fn new(name: String, description: String, created_at: String) -> Self {
        Self {
            name,
            description,
            created_at,
            status: None,
        }
    }

    /// A bare `null` body decodes as an empty order.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice::<Option<Self>>(body).map(Option::unwrap_or_default)
    }

    /// Overwrites any incoming status with the receiver marker.
    pub fn mark_received(&mut self) {
        self.status = Some(RECEIVED_STATUS.to_string());
    }

    pub fn to_message_body(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn log_summary(&self) -> String {
        format!(
            "\nOrder Name: {}\nOrder Description: {}\nOrder CreatedAt: {}\nOrder Status: {}\n",
            self.name,
            self.description,
            self.created_at,
            self.status.as_deref().unwrap_or_default()
        )
    }
}
