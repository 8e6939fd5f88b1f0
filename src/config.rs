// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 NoteIn

//! # Runtime Configuration
//!
//! This module defines environment variable names, default values, and the
//! resolved server configuration. Configuration is loaded from the
//! environment at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `DATA_DIR` | Root directory for document storage | `/data` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `3000` |
//! | `JWT_SECRET` | HMAC secret for session tokens | Required |
//! | `SESSION_TTL_HOURS` | Session token lifetime in hours | `24` |
//! | `CORS_ALLOWED_ORIGINS` | Comma-separated client origins | localhost dev origins |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;

/// Environment variable name for the document storage root.
pub const DATA_DIR_ENV: &str = "DATA_DIR";

/// Environment variable name for the session signing secret.
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

/// Environment variable name for the session lifetime in hours.
pub const SESSION_TTL_ENV: &str = "SESSION_TTL_HOURS";

/// Environment variable name for the CORS origin allow-list.
pub const CORS_ORIGINS_ENV: &str = "CORS_ALLOWED_ORIGINS";

/// Default session lifetime when `SESSION_TTL_HOURS` is unset.
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Default client origins allowed to send credentialed requests.
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

/// Configuration error raised when the environment is incomplete.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{JWT_SECRET_ENV} must be set to a non-empty value")]
    MissingJwtSecret,

    #[error("{SESSION_TTL_ENV} must be a positive number of hours, got {0:?}")]
    InvalidSessionTtl(String),
}

/// Resolved server configuration, shared through [`crate::state::AppState`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Root directory for document storage.
    pub data_dir: String,
    /// HMAC secret used to sign and verify session tokens.
    pub jwt_secret: String,
    /// Session token lifetime in hours.
    pub session_ttl_hours: i64,
    /// Client origins allowed by CORS (credentials enabled).
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// The session secret is mandatory; everything else falls back to the
    /// documented defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = env::var(JWT_SECRET_ENV)
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingJwtSecret)?;

        let session_ttl_hours = match env::var(SESSION_TTL_ENV) {
            Ok(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|ttl| *ttl > 0)
                .ok_or(ConfigError::InvalidSessionTtl(raw))?,
            Err(_) => DEFAULT_SESSION_TTL_HOURS,
        };

        let allowed_origins = env::var(CORS_ORIGINS_ENV)
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            data_dir: env::var(DATA_DIR_ENV).unwrap_or_else(|_| "/data".to_string()),
            jwt_secret,
            session_ttl_hours,
            allowed_origins,
        })
    }

    /// Configuration for tests: throwaway secret, short defaults.
    #[cfg(test)]
    pub fn for_tests(data_dir: impl Into<String>) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            data_dir: data_dir.into(),
            jwt_secret: "test-secret".to_string(),
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
            allowed_origins: vec!["http://localhost:5173".to_string()],
        }
    }
}
