//! User/admin record types as served by the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a [`MongoDate`] does not hold a valid millisecond
/// timestamp.
#[derive(Debug, Error)]
pub enum MongoDateError {
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error("out of range: {0}")]
    OutOfRange(i64),
}

/// A timestamp in MongoDB extended-JSON form:
/// `{"$date": {"$numberLong": "<millis>"}}`.
///
/// The dashboard treats this as opaque; the chrono conversions exist for
/// callers that want a real timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MongoDate {
    #[serde(rename = "$date")]
    pub date: NumberLong,
}

/// The inner `{"$numberLong": "<millis>"}` wrapper. Mongo serializes 64-bit
/// integers as strings to survive JSON number precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLong {
    #[serde(rename = "$numberLong")]
    pub millis: String,
}

impl MongoDate {
    /// Wrap a chrono timestamp in the extended-JSON encoding.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self {
            date: NumberLong {
                millis: dt.timestamp_millis().to_string(),
            },
        }
    }

    /// Decode the wrapped millisecond count into a chrono timestamp.
    pub fn to_datetime(&self) -> Result<DateTime<Utc>, MongoDateError> {
        let millis: i64 = self
            .date
            .millis
            .parse()
            .map_err(|_| MongoDateError::NotANumber(self.date.millis.clone()))?;
        DateTime::from_timestamp_millis(millis).ok_or(MongoDateError::OutOfRange(millis))
    }
}

/// One user/admin document as fetched from the server.
///
/// Field names follow the backend's wire format exactly; `id` is an opaque
/// server-assigned identifier, unique within a fetched batch, and is the
/// only handle the dashboard uses to address a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name; the only field editable from the dashboard.
    pub name: String,
    #[serde(rename = "emailAddress")]
    pub email_address: String,
    #[serde(rename = "avatarURL")]
    pub avatar_url: String,
    #[serde(rename = "dateJoined")]
    pub date_joined: MongoDate,
    pub achievements: Vec<String>,
    #[serde(rename = "admin")]
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> &'static str {
        r#"{
            "_id": "62ab14f1c0e2b5a930fa1234",
            "name": "Alice",
            "emailAddress": "alice@example.com",
            "avatarURL": "https://cdn.example.com/alice.png",
            "dateJoined": {"$date": {"$numberLong": "1650000000000"}},
            "achievements": ["founder", "mentor"],
            "admin": true
        }"#
    }

    #[test]
    fn deserializes_wire_format() {
        let user: UserRecord = serde_json::from_str(sample_doc()).unwrap();
        assert_eq!(user.id, "62ab14f1c0e2b5a930fa1234");
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email_address, "alice@example.com");
        assert_eq!(user.avatar_url, "https://cdn.example.com/alice.png");
        assert_eq!(user.achievements, vec!["founder", "mentor"]);
        assert!(user.is_admin);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let user: UserRecord = serde_json::from_str(sample_doc()).unwrap();
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("_id").is_some());
        assert!(json.get("emailAddress").is_some());
        assert!(json.get("avatarURL").is_some());
        assert!(json.get("admin").is_some());
        assert_eq!(
            json["dateJoined"]["$date"]["$numberLong"],
            serde_json::json!("1650000000000")
        );
        // Rust-side names must never leak onto the wire.
        assert!(json.get("email_address").is_none());
        assert!(json.get("is_admin").is_none());
    }

    #[test]
    fn mongo_date_roundtrips_through_chrono() {
        let date = MongoDate {
            date: NumberLong {
                millis: "1650000000000".into(),
            },
        };
        let dt = date.to_datetime().unwrap();
        assert_eq!(dt.timestamp_millis(), 1_650_000_000_000);
        assert_eq!(MongoDate::from_datetime(dt), date);
    }

    #[test]
    fn mongo_date_rejects_garbage_millis() {
        let date = MongoDate {
            date: NumberLong {
                millis: "not-a-number".into(),
            },
        };
        assert!(matches!(
            date.to_datetime(),
            Err(MongoDateError::NotANumber(_))
        ));
    }
}
