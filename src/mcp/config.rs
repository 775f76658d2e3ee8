//! Environment-based configuration for the PrismHR relay.
//!
//! Values are read once at start-up into a `PrismConfig` that is handed to the relay.
//! Credentials are optional here: a missing one only fails the tool call that needs it,
//! so the server still starts and `test_connection` can report what is absent.

use std::{env, fmt, time::Duration};

use anyhow::{Result, anyhow};

use crate::mcp::error::PrismError;

pub const DEFAULT_BASE_URL: &str = "https://salesdemoapi.prismhr.com/prismhr-api";

/// Upstream calls are bounded by this unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_PORT: u16 = 8080;

const REDACTED: &str = "<redacted>";

/// Credentials needed to open a PEO session.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub peo_id: String,
}

/// Which credentials are present, as reported by `test_connection`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CredentialStatus {
    pub username: bool,
    pub password: bool,
    pub peo_id: bool,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &REDACTED)
            .field("peo_id", &self.peo_id)
            .finish()
    }
}

#[derive(Clone)]
pub struct PrismConfig {
    username: Option<String>,
    password: Option<String>,
    peo_id: Option<String>,
    base_url: String,
    timeout: Duration,
    session_ttl: Option<Duration>,
}

impl PrismConfig {
    /// A config pointing at `base_url` with no credentials and session reuse disabled.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            username: None,
            password: None,
            peo_id: None,
            base_url: normalize_base_url(base_url.into()),
            timeout: DEFAULT_TIMEOUT,
            session_ttl: None,
        }
    }

    /// Reads `PRISMHR_*` variables from the process environment.
    ///
    /// # Errors
    /// Returns an error when `PRISMHR_SESSION_TTL_SECS` is set but is not a number.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    /// Returns an error when `PRISMHR_SESSION_TTL_SECS` is set but is not a number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let session_ttl = read("PRISMHR_SESSION_TTL_SECS")
            .map(|v| {
                v.trim()
                    .parse::<u64>()
                    .map_err(|e| anyhow!("PRISMHR_SESSION_TTL_SECS must be a number of seconds: {e}"))
            })
            .transpose()?
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Ok(Self {
            username: read("PRISMHR_USERNAME"),
            password: read("PRISMHR_PASSWORD"),
            peo_id: read("PRISMHR_PEO_ID"),
            base_url: normalize_base_url(
                read("PRISMHR_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            ),
            timeout: DEFAULT_TIMEOUT,
            session_ttl,
        })
    }

    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        peo_id: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self.peo_id = Some(peo_id.into());
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enables session reuse for `ttl`. A zero duration disables it.
    #[must_use]
    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = Some(ttl).filter(|d| !d.is_zero());
        self
    }

    /// The three credentials, or `MissingCredentials` if any is absent.
    ///
    /// # Errors
    /// Returns `PrismError::MissingCredentials` when username, password or PEO id is unset.
    pub fn credentials(&self) -> Result<Credentials, PrismError> {
        match (&self.username, &self.password, &self.peo_id) {
            (Some(username), Some(password), Some(peo_id)) => Ok(Credentials {
                username: username.clone(),
                password: password.clone(),
                peo_id: peo_id.clone(),
            }),
            _ => Err(PrismError::MissingCredentials),
        }
    }

    #[must_use]
    pub const fn credential_status(&self) -> CredentialStatus {
        CredentialStatus {
            username: self.username.is_some(),
            password: self.password.is_some(),
            peo_id: self.peo_id.is_some(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub const fn session_ttl(&self) -> Option<Duration> {
        self.session_ttl
    }
}

impl fmt::Debug for PrismConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrismConfig")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .field("peo_id", &self.peo_id)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("session_ttl", &self.session_ttl)
            .finish()
    }
}

/// Address the MCP HTTP transport binds to, from `PORT`.
///
/// # Errors
/// Returns an error when `PORT` is set but is not a valid port number.
pub fn bind_address() -> Result<String> {
    let port = match env::var("PORT") {
        Ok(v) if !v.trim().is_empty() => v
            .trim()
            .parse::<u16>()
            .map_err(|e| anyhow!("PORT must be a valid port number: {e}"))?,
        _ => DEFAULT_PORT,
    };
    Ok(format!("0.0.0.0:{port}"))
}

fn normalize_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<PrismConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        PrismConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() -> Result<()> {
        let config = config_from(&[])?;
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.session_ttl(), None);
        assert!(matches!(
            config.credentials(),
            Err(PrismError::MissingCredentials)
        ));
        Ok(())
    }

    #[test]
    fn missing_peo_id_is_a_credentials_error() -> Result<()> {
        let config = config_from(&[
            ("PRISMHR_USERNAME", "svc"),
            ("PRISMHR_PASSWORD", "secret"),
        ])?;
        assert!(matches!(
            config.credentials(),
            Err(PrismError::MissingCredentials)
        ));
        assert_eq!(
            config.credential_status(),
            CredentialStatus {
                username: true,
                password: true,
                peo_id: false
            }
        );
        Ok(())
    }

    #[test]
    fn blank_values_count_as_unset() -> Result<()> {
        let config = config_from(&[
            ("PRISMHR_USERNAME", "svc"),
            ("PRISMHR_PASSWORD", "secret"),
            ("PRISMHR_PEO_ID", "  "),
        ])?;
        assert!(!config.credential_status().peo_id);
        Ok(())
    }

    #[test]
    fn full_environment_is_read() -> Result<()> {
        let config = config_from(&[
            ("PRISMHR_USERNAME", "svc"),
            ("PRISMHR_PASSWORD", "secret"),
            ("PRISMHR_PEO_ID", "624*demo"),
            ("PRISMHR_BASE_URL", "https://api.example.com/prismhr-api/"),
            ("PRISMHR_SESSION_TTL_SECS", "600"),
        ])?;
        assert_eq!(config.base_url(), "https://api.example.com/prismhr-api");
        assert_eq!(config.session_ttl(), Some(Duration::from_secs(600)));
        assert_eq!(
            config.credentials()?,
            Credentials {
                username: "svc".to_string(),
                password: "secret".to_string(),
                peo_id: "624*demo".to_string(),
            }
        );
        Ok(())
    }

    #[test]
    fn zero_ttl_disables_session_reuse() -> Result<()> {
        let config = config_from(&[("PRISMHR_SESSION_TTL_SECS", "0")])?;
        assert_eq!(config.session_ttl(), None);
        Ok(())
    }

    #[test]
    fn debug_output_hides_the_password() -> Result<()> {
        let config = config_from(&[
            ("PRISMHR_USERNAME", "svc"),
            ("PRISMHR_PASSWORD", "hunter2"),
            ("PRISMHR_PEO_ID", "624*demo"),
        ])?;
        let rendered = format!("{config:?} {:?}", config.credentials()?);
        assert!(!rendered.contains("hunter2"), "{rendered}");
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("svc"));
        Ok(())
    }

    #[test]
    fn invalid_ttl_is_rejected() {
        assert!(config_from(&[("PRISMHR_SESSION_TTL_SECS", "soon")]).is_err());
    }
}
