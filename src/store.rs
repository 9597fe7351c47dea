use crate::errors::AppError;
use crate::models::LeadRecord;
use serde_json::Value;
use std::time::Duration;

/// Client for the Supabase REST endpoint backing the lead store.
///
/// The core only depends on one capability: insert a row into the `leads`
/// table and report success or failure. Concurrent-write safety is the
/// store's problem, not ours.
#[derive(Clone)]
pub struct SupabaseStore {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseStore {
    /// Creates a new `SupabaseStore`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The Supabase project base URL.
    /// * `anon_key` - The anon key used for both `apikey` and bearer auth.
    pub fn new(base_url: String, anon_key: String) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| {
                AppError::InternalError(format!("Failed to create Supabase client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
        })
    }

    /// Inserts one lead into the `leads` table, stamped with the current time.
    ///
    /// Returns the representation the store echoes back for the insert.
    /// Transport failures, timeouts, non-2xx statuses, and unparseable bodies
    /// all surface as [`AppError::Storage`].
    pub async fn insert_lead(&self, email: &str, niche_id: &str) -> Result<Value, AppError> {
        let url = format!("{}/rest/v1/leads", self.base_url);
        tracing::info!("Inserting lead for niche {} into Supabase", niche_id);

        let rows = vec![LeadRecord::new(email, niche_id)];

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .header("Prefer", "return=representation")
            .json(&rows)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("Supabase request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Storage(format!(
                "Supabase returned {}: {}",
                status, error_text
            )));
        }

        let data = response.json().await.map_err(|e| {
            AppError::Storage(format!("Failed to parse Supabase response: {}", e))
        })?;

        tracing::info!("✓ Lead saved for niche {}", niche_id);
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_creation_strips_trailing_slash() {
        let store = SupabaseStore::new(
            "https://example.supabase.co/".to_string(),
            "anon".to_string(),
        )
        .unwrap();
        assert_eq!(store.base_url, "https://example.supabase.co");
    }
}
