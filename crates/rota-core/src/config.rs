//! Environment-driven configuration.
//!
//! Every setting comes from a single lookup function so tests can supply a
//! map instead of mutating the process environment. See [`Config::from_env`]
//! for the variable names.

use std::{fmt, path::PathBuf, str::FromStr};

use jiff::{civil::Weekday, tz::TimeZone};
use log::debug;

use crate::{
    db::Database,
    error::{Result, RotaError},
    messenger::{twilio::API_BASE_URL, ProviderError, TwilioClient},
    models::Roster,
};

pub const APP_ENV_VAR: &str = "APP_ENV";
pub const TWILIO_SID_VAR: &str = "TWILIO_SID";
pub const TWILIO_TOKEN_VAR: &str = "TWILIO_TOKEN";
pub const TWILIO_SEND_VAR: &str = "TWILIO_SEND";
pub const TWILIO_SEND_TEST_VAR: &str = "TWILIO_SEND_TEST";
pub const TWILIO_API_BASE_VAR: &str = "TWILIO_API_BASE";
pub const DATABASE_FILE_VAR: &str = "ROTA_DATABASE_FILE";
pub const NOTIFY_DAY_VAR: &str = "ROTA_NOTIFY_DAY";
pub const TIMEZONE_VAR: &str = "ROTA_TIMEZONE";

/// Deployment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    /// `APP_ENV=development`: `.env` is loaded and the test sender is used
    Development,

    /// Real reminders from the production sender
    Production,

    /// Unset or any other value: test sender, no `.env` loading
    #[default]
    Other,
}

impl AppEnv {
    /// Reads `APP_ENV` from the process environment.
    pub fn current() -> Self {
        std::env::var(APP_ENV_VAR)
            .ok()
            .map_or_else(Self::default, |value| Self::from_value(&value))
    }

    fn from_value(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "development" => AppEnv::Development,
            "production" => AppEnv::Production,
            _ => AppEnv::Other,
        }
    }

    /// Whether a local `.env` file should be loaded before reading settings.
    pub fn loads_dotenv(&self) -> bool {
        matches!(self, AppEnv::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, AppEnv::Production)
    }
}

/// Credentials and endpoint for the SMS provider.
#[derive(Clone, PartialEq, Eq)]
pub struct MessagingConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub api_base: String,
    /// Sender number for the current [`AppEnv`]
    pub sender: String,
}

impl MessagingConfig {
    /// Builds the Twilio client for these credentials.
    pub fn client(&self) -> std::result::Result<TwilioClient, ProviderError> {
        Ok(TwilioClient::new(&self.account_sid, &self.auth_token)?.with_base_url(&self.api_base))
    }
}

impl fmt::Debug for MessagingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessagingConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("sender", &self.sender)
            .finish()
    }
}

/// Settings needed to read the rota without sending anything.
#[derive(Debug, Clone)]
pub struct StoreSettings {
    /// Explicit store location; `None` means the XDG default
    pub database_file: Option<PathBuf>,
    /// Zone used to decide "today" and calendar-day differences
    pub time_zone: TimeZone,
}

impl StoreSettings {
    /// Reads `ROTA_DATABASE_FILE` and `ROTA_TIMEZONE` from the environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let time_zone = match get(TIMEZONE_VAR) {
            Some(name) => TimeZone::get(name.trim()).map_err(|e| {
                RotaError::configuration(format!("{TIMEZONE_VAR}: {e}"))
            })?,
            None => TimeZone::system(),
        };

        Ok(Self {
            database_file: get(DATABASE_FILE_VAR).map(PathBuf::from),
            time_zone,
        })
    }

    /// Picks the store location: `explicit`, then `ROTA_DATABASE_FILE`, then
    /// the XDG default.
    pub fn database_path(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        match explicit.or_else(|| self.database_file.clone()) {
            Some(path) => Ok(path),
            None => Database::default_path(),
        }
    }
}

/// Fully resolved application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub app_env: AppEnv,
    pub roster: Roster,
    pub messaging: MessagingConfig,
    pub store: StoreSettings,
    /// Weekday on which reminders go out
    pub notify_day: Weekday,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// | variable | meaning |
    /// |---|---|
    /// | `LEXY` … `ANG` | phone number per roster member |
    /// | `TWILIO_SID`, `TWILIO_TOKEN` | provider credentials |
    /// | `TWILIO_SEND` / `TWILIO_SEND_TEST` | production / other sender |
    /// | `TWILIO_API_BASE` | provider base URL |
    /// | `APP_ENV` | `development` or `production` |
    /// | `ROTA_DATABASE_FILE` | SQLite store path |
    /// | `ROTA_NOTIFY_DAY` | weekday name, default `sunday` |
    /// | `ROTA_TIMEZONE` | IANA zone name, default system zone |
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary lookup. Blank values count as
    /// missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &str| {
            get(key).ok_or_else(|| {
                RotaError::configuration(format!("missing environment variable {key}"))
            })
        };

        let app_env = get(APP_ENV_VAR)
            .map_or_else(AppEnv::default, |value| AppEnv::from_value(&value));

        let roster = Roster::resolve(|member| get(&member.env_key())).map_err(|member| {
            RotaError::configuration(format!(
                "missing phone number for {member} (set {})",
                member.env_key()
            ))
        })?;

        let sender = if app_env.is_production() {
            require(TWILIO_SEND_VAR)?
        } else {
            require(TWILIO_SEND_TEST_VAR)?
        };

        let messaging = MessagingConfig {
            account_sid: require(TWILIO_SID_VAR)?,
            auth_token: require(TWILIO_TOKEN_VAR)?,
            api_base: get(TWILIO_API_BASE_VAR).unwrap_or_else(|| API_BASE_URL.to_string()),
            sender,
        };

        let notify_day = match get(NOTIFY_DAY_VAR) {
            Some(value) => parse_weekday(&value).ok_or_else(|| {
                RotaError::configuration(format!("{NOTIFY_DAY_VAR}: unknown weekday '{value}'"))
            })?,
            None => Weekday::Sunday,
        };

        let config = Self {
            app_env,
            roster,
            messaging,
            store: StoreSettings::from_lookup(&lookup)?,
            notify_day,
        };
        debug!("Loaded configuration: {config:?}");
        Ok(config)
    }
}

/// Parses a weekday from its English name or three-letter abbreviation.
pub fn parse_weekday(value: &str) -> Option<Weekday> {
    let weekday = match value.trim().to_lowercase().as_str() {
        "monday" | "mon" => Weekday::Monday,
        "tuesday" | "tue" => Weekday::Tuesday,
        "wednesday" | "wed" => Weekday::Wednesday,
        "thursday" | "thu" => Weekday::Thursday,
        "friday" | "fri" => Weekday::Friday,
        "saturday" | "sat" => Weekday::Saturday,
        "sunday" | "sun" => Weekday::Sunday,
        _ => return None,
    };
    Some(weekday)
}

impl FromStr for AppEnv {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_value(s))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::models::{Member, ROSTER};

    fn base_env() -> HashMap<String, String> {
        let mut env: HashMap<String, String> = ROSTER
            .iter()
            .enumerate()
            .map(|(i, m)| (m.env_key(), format!("+1555000{i}")))
            .collect();
        env.insert(TWILIO_SID_VAR.into(), "AC123".into());
        env.insert(TWILIO_TOKEN_VAR.into(), "secret".into());
        env.insert(TWILIO_SEND_VAR.into(), "+15559999".into());
        env.insert(TWILIO_SEND_TEST_VAR.into(), "+15558888".into());
        env.insert(TIMEZONE_VAR.into(), "UTC".into());
        env
    }

    fn load(env: &HashMap<String, String>) -> Result<Config> {
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&base_env()).unwrap();

        assert_eq!(config.app_env, AppEnv::Other);
        assert_eq!(config.messaging.sender, "+15558888");
        assert_eq!(config.messaging.api_base, API_BASE_URL);
        assert_eq!(config.notify_day, Weekday::Sunday);
        assert_eq!(config.store.database_file, None);
        assert_eq!(config.roster.person(Member::Kevin).phone, "+15550003");
    }

    #[test]
    fn test_development_uses_test_sender() {
        let mut env = base_env();
        env.insert(APP_ENV_VAR.into(), "development".into());

        let config = load(&env).unwrap();
        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.messaging.sender, "+15558888");
    }

    #[test]
    fn test_production_uses_live_sender() {
        let mut env = base_env();
        env.insert(APP_ENV_VAR.into(), "production".into());
        env.remove(TWILIO_SEND_TEST_VAR);

        let config = load(&env).unwrap();
        assert_eq!(config.app_env, AppEnv::Production);
        assert_eq!(config.messaging.sender, "+15559999");
    }

    #[test]
    fn test_missing_phone_number() {
        let mut env = base_env();
        env.insert("ELLIE".into(), "  ".into());

        let err = load(&env).unwrap_err();
        assert!(err.to_string().contains("ELLIE"), "{err}");
    }

    #[test]
    fn test_missing_credentials() {
        let mut env = base_env();
        env.remove(TWILIO_TOKEN_VAR);

        let err = load(&env).unwrap_err();
        assert!(err.to_string().contains(TWILIO_TOKEN_VAR), "{err}");
    }

    #[test]
    fn test_overrides() {
        let mut env = base_env();
        env.insert(NOTIFY_DAY_VAR.into(), "Mon".into());
        env.insert(DATABASE_FILE_VAR.into(), "/tmp/rota.db".into());
        env.insert(TWILIO_API_BASE_VAR.into(), "http://127.0.0.1:9".into());

        let config = load(&env).unwrap();
        assert_eq!(config.notify_day, Weekday::Monday);
        assert_eq!(config.store.database_file, Some(PathBuf::from("/tmp/rota.db")));
        assert_eq!(config.messaging.api_base, "http://127.0.0.1:9");
    }

    #[test]
    fn test_invalid_weekday_and_zone() {
        let mut env = base_env();
        env.insert(NOTIFY_DAY_VAR.into(), "caturday".into());
        assert!(load(&env).is_err());

        let mut env = base_env();
        env.insert(TIMEZONE_VAR.into(), "Mars/Olympus_Mons".into());
        assert!(load(&env).is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = load(&base_env()).unwrap();
        assert!(!format!("{config:?}").contains("secret"));
    }

    #[test]
    fn test_store_settings_precedence() {
        let env = HashMap::from([(DATABASE_FILE_VAR.to_string(), "/srv/rota.db".to_string())]);
        let settings = StoreSettings::from_lookup(|key| env.get(key).cloned()).unwrap();

        assert_eq!(
            settings.database_path(Some(PathBuf::from("/tmp/cli.db"))).unwrap(),
            PathBuf::from("/tmp/cli.db")
        );
        assert_eq!(
            settings.database_path(None).unwrap(),
            PathBuf::from("/srv/rota.db")
        );
    }

    #[test]
    fn test_app_env_parsing() {
        assert_eq!("Production".parse::<AppEnv>(), Ok(AppEnv::Production));
        assert_eq!("staging".parse::<AppEnv>(), Ok(AppEnv::Other));
        assert_eq!("development".parse::<AppEnv>(), Ok(AppEnv::Development));
        assert_eq!("".parse::<AppEnv>(), Ok(AppEnv::Other));
        assert!(AppEnv::Development.loads_dotenv());
        assert!(!AppEnv::Other.loads_dotenv());
        assert!(!AppEnv::default().loads_dotenv());
    }
}
