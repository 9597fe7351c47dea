use serde::Deserialize;
use url::Url;

/// Process configuration, read from the environment exactly once at startup
/// and passed by reference into whatever needs it. Nothing else in the crate
/// touches `std::env`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    /// Base URL of the Supabase project backing the lead store.
    /// Optional: the server starts without it and the validate endpoint
    /// answers 500 until it is configured.
    pub supabase_url: Option<String>,
    /// Supabase anon key paired with `supabase_url`.
    pub supabase_anon_key: Option<String>,
    /// Google Analytics measurement ID, handed to the UI layer's analytics
    /// initializer. Unused by the API itself.
    pub ga_id: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            supabase_url: match std::env::var("SUPABASE_URL")
                .ok()
                .filter(|s| !s.trim().is_empty())
            {
                Some(url) => {
                    let parsed = Url::parse(&url)
                        .map_err(|e| anyhow::anyhow!("SUPABASE_URL is not a valid URL: {}", e))?;
                    if parsed.scheme() != "http" && parsed.scheme() != "https" {
                        anyhow::bail!("SUPABASE_URL must start with http:// or https://");
                    }
                    Some(url)
                }
                None => None,
            },
            supabase_anon_key: std::env::var("SUPABASE_ANON_KEY")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            ga_id: std::env::var("GA_ID").ok().filter(|s| !s.trim().is_empty()),
        };

        // Log successful configuration load (without sensitive values)
        if let Some(ref url) = config.supabase_url {
            tracing::debug!("Supabase URL: {}", url);
        }
        if config.supabase_url.is_some() != config.supabase_anon_key.is_some() {
            tracing::warn!(
                "Supabase partially configured; both SUPABASE_URL and SUPABASE_ANON_KEY are required"
            );
        }
        if let Some(ref ga_id) = config.ga_id {
            tracing::debug!("Google Analytics ID configured: {}", ga_id);
        }
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }

    /// Whether the lead store has everything it needs.
    pub fn lead_store_configured(&self) -> bool {
        self.supabase_url.is_some() && self.supabase_anon_key.is_some()
    }
}
