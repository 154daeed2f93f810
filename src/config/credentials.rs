//! Account credentials and authentication tiers.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::config::newtypes::{AppKey, AppSecret, MasterSecret};
use crate::error::ConfigError;

/// Which secret an operation authenticates with.
///
/// Urban Airship accepts the application secret for low-privilege calls
/// and requires the master secret for anything that sends or schedules
/// notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthTier {
    /// HTTP Basic with the application secret.
    App,
    /// HTTP Basic with the master secret.
    Master,
}

impl AuthTier {
    /// Returns `true` for the elevated (master secret) tier.
    #[must_use]
    pub const fn is_elevated(&self) -> bool {
        matches!(self, Self::Master)
    }
}

/// The key, secret and master secret of an Urban Airship application.
///
/// All three values are guaranteed non-empty. Credentials are immutable and
/// are shared by every resource client built from the same configuration.
///
/// # Example
///
/// ```rust
/// use urban_airship::{AuthTier, Credentials};
///
/// let credentials = Credentials::new("key", "secret", "master").unwrap();
/// assert_eq!(credentials.password(AuthTier::App), "secret");
/// assert_eq!(credentials.password(AuthTier::Master), "master");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    key: AppKey,
    secret: AppSecret,
    master_secret: MasterSecret,
}

impl Credentials {
    /// Creates credentials from raw strings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] naming the first empty field.
    pub fn new(
        key: impl Into<String>,
        secret: impl Into<String>,
        master_secret: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let key = AppKey::new(key).map_err(|_| ConfigError::MissingCredentials { field: "key" })?;
        let secret = AppSecret::new(secret)
            .map_err(|_| ConfigError::MissingCredentials { field: "secret" })?;
        let master_secret = MasterSecret::new(master_secret).map_err(|_| {
            ConfigError::MissingCredentials {
                field: "master_secret",
            }
        })?;

        Ok(Self::from_parts(key, secret, master_secret))
    }

    /// Creates credentials from already validated parts.
    #[must_use]
    pub const fn from_parts(key: AppKey, secret: AppSecret, master_secret: MasterSecret) -> Self {
        Self {
            key,
            secret,
            master_secret,
        }
    }

    /// Returns the application key.
    #[must_use]
    pub const fn key(&self) -> &AppKey {
        &self.key
    }

    /// Returns the application secret.
    #[must_use]
    pub const fn secret(&self) -> &AppSecret {
        &self.secret
    }

    /// Returns the master secret.
    #[must_use]
    pub const fn master_secret(&self) -> &MasterSecret {
        &self.master_secret
    }

    /// Returns the HTTP Basic password for the given tier.
    #[must_use]
    pub fn password(&self, tier: AuthTier) -> &str {
        match tier {
            AuthTier::App => self.secret.as_ref(),
            AuthTier::Master => self.master_secret.as_ref(),
        }
    }

    /// Returns the `Authorization` header value for the given tier.
    ///
    /// The username is always the application key.
    #[must_use]
    pub fn basic_authorization(&self, tier: AuthTier) -> String {
        let pair = format!("{}:{}", self.key.as_ref(), self.password(tier));
        format!("Basic {}", STANDARD.encode(pair))
    }
}
