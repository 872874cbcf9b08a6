//! Response envelope for the profile list endpoint.

use serde::{Deserialize, Serialize};

use crate::UserRecord;

/// The `GET /profiles` response: `{"result": [UserRecord, ...]}`.
///
/// Record order is meaningful and must be preserved into rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileBatch {
    pub result: Vec<UserRecord>,
}

impl ProfileBatch {
    /// Consume the envelope, yielding the records in server order.
    pub fn into_records(self) -> Vec<UserRecord> {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_record_order() {
        let body = r#"{"result": [
            {"_id": "u1", "name": "Alice", "emailAddress": "a@x.io", "avatarURL": "",
             "dateJoined": {"$date": {"$numberLong": "0"}}, "achievements": [], "admin": true},
            {"_id": "u2", "name": "Bob", "emailAddress": "b@x.io", "avatarURL": "",
             "dateJoined": {"$date": {"$numberLong": "0"}}, "achievements": [], "admin": false}
        ]}"#;
        let batch: ProfileBatch = serde_json::from_str(body).unwrap();
        let ids: Vec<_> = batch.into_records().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec!["u1", "u2"]);
    }

    #[test]
    fn missing_result_field_is_an_error() {
        let err = serde_json::from_str::<ProfileBatch>(r#"{"users": []}"#);
        assert!(err.is_err());
    }
}
