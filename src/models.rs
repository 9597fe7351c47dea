use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============ Wire Models ============

/// Body of `POST /api/validate`.
///
/// Fields default to empty strings so a missing field and an empty field
/// fail the same non-emptiness check (both are 400s, never deserialization
/// errors).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "nicheId")]
    pub niche_id: String,
}

/// Successful response of `POST /api/validate`.
///
/// `data` is whatever the lead store returned for the insert, passed through
/// unchanged (with `Prefer: return=representation` that is the inserted row).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadResponse {
    pub success: bool,
    pub data: serde_json::Value,
}

// ============ Store Models ============

/// A captured lead as stored in the `leads` table. Written once at insert
/// time, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadRecord {
    pub email: String,
    pub niche_id: String,
    pub created_at: DateTime<Utc>,
}

impl LeadRecord {
    /// Builds a record stamped with the current time.
    pub fn new(email: impl Into<String>, niche_id: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            niche_id: niche_id.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_request_accepts_camel_case_niche_id() {
        let req: LeadRequest =
            serde_json::from_str(r#"{"email":"a@b.co","nicheId":"solar"}"#).unwrap();
        assert_eq!(req.email, "a@b.co");
        assert_eq!(req.niche_id, "solar");
    }

    #[test]
    fn lead_request_missing_fields_default_to_empty() {
        let req: LeadRequest = serde_json::from_str(r#"{"email":"a@b.co"}"#).unwrap();
        assert!(req.niche_id.is_empty());

        let req: LeadRequest = serde_json::from_str("{}").unwrap();
        assert!(req.email.is_empty());
    }

    #[test]
    fn lead_record_serializes_snake_case_niche_id() {
        let record = LeadRecord::new("a@b.co", "solar");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["niche_id"], "solar");
        assert!(json["created_at"].is_string());
    }
}
