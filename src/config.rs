use std::env;

use crate::shared::http::ExecutionContext;

const DEFAULT_PUBLIC_API_URL: &str = "http://localhost:8000/api";
const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
const DEFAULT_CONTRIBUTIONS_API_URL: &str = "https://github-contributions-api.jogruber.de/v4";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Content API endpoints. Server-side requests go to `internal_url` when it
/// is configured; browsers only ever see `public_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub internal_url: Option<String>,
    pub public_url: String,
}

impl ApiConfig {
    pub fn base_url(&self, context: ExecutionContext) -> &str {
        match (context, self.internal_url.as_deref()) {
            (ExecutionContext::Server, Some(internal)) => internal,
            _ => &self.public_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubConfig {
    pub username: Option<String>,
    pub api_url: String,
    pub contributions_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteIdentity {
    /// Shown when the profile cannot be fetched.
    pub owner_name: String,
    pub contact_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    pub api: ApiConfig,
    pub github: GithubConfig,
    pub identity: SiteIdentity,
}

impl SiteConfig {
    /// Load configuration from `.env.{RUST_ENV}` (falling back to `.env`) and
    /// the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match var("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
            None => 3000,
        };

        let url_var = |key: &'static str, default: &str| {
            checked_url(key, var(key).unwrap_or_else(|| default.to_string()))
        };

        let api = ApiConfig {
            internal_url: var("INTERNAL_API_URL")
                .map(|url| checked_url("INTERNAL_API_URL", url))
                .transpose()?,
            public_url: url_var("PUBLIC_API_URL", DEFAULT_PUBLIC_API_URL)?,
        };

        let github = GithubConfig {
            username: var("GITHUB_USERNAME"),
            api_url: url_var("GITHUB_API_URL", DEFAULT_GITHUB_API_URL)?,
            contributions_url: url_var("CONTRIBUTIONS_API_URL", DEFAULT_CONTRIBUTIONS_API_URL)?,
        };

        let owner_name = var("SITE_OWNER")
            .or_else(|| github.username.clone())
            .ok_or(ConfigError::Missing("SITE_OWNER"))?;
        let contact_email = var("CONTACT_EMAIL").unwrap_or_else(|| "contact@example.com".to_string());
        if !email_address::EmailAddress::is_valid(&contact_email) {
            return Err(ConfigError::Invalid {
                key: "CONTACT_EMAIL",
                value: contact_email,
            });
        }

        Ok(Self {
            host,
            port,
            api,
            github,
            identity: SiteIdentity {
                owner_name,
                contact_email,
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Base URLs must be absolute http(s) URLs.
fn checked_url(key: &'static str, value: String) -> Result<String, ConfigError> {
    match reqwest::Url::parse(value.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(value.trim().to_string()),
        _ => Err(ConfigError::Invalid { key, value }),
    }
}
