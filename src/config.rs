use crate::constants::*;
use crate::models::Coordinates;
use std::env;
use std::time::Duration;
use time::UtcOffset;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// History goes to Redis when set and reachable
    pub redis_url: Option<String>,
    /// Otherwise to JSON files in this directory, otherwise memory only
    pub history_dir: Option<String>,
    pub history_utc_offset_hours: i8,
    pub geolocation: GeolocationConfig,
}

#[derive(Debug, Clone)]
pub struct GeolocationConfig {
    /// When false every lookup is denied
    pub enabled: bool,
    /// Position reported by the server-side geolocator
    pub position: Option<Coordinates>,
    pub timeout_secs: u64,
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            position: None,
            timeout_secs: DEFAULT_GEOLOCATION_TIMEOUT_SECS,
        }
    }
}

impl GeolocationConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let enabled = env::var("GEOLOCATION_ENABLED")
            .unwrap_or_else(|_| defaults.enabled.to_string())
            .parse()
            .map_err(|_| "Invalid GEOLOCATION_ENABLED")?;

        let timeout_secs: u64 = env::var("GEOLOCATION_TIMEOUT_SECS")
            .unwrap_or_else(|_| defaults.timeout_secs.to_string())
            .parse()
            .map_err(|_| "Invalid GEOLOCATION_TIMEOUT_SECS")?;

        if timeout_secs == 0 {
            return Err("GEOLOCATION_TIMEOUT_SECS must be at least 1".to_string());
        }

        let position = match (env::var("GEOLOCATION_LAT"), env::var("GEOLOCATION_LNG")) {
            (Ok(lat), Ok(lng)) => {
                let lat: f64 = lat.parse().map_err(|_| "Invalid GEOLOCATION_LAT")?;
                let lng: f64 = lng.parse().map_err(|_| "Invalid GEOLOCATION_LNG")?;
                Some(Coordinates::new(lat, lng)?)
            }
            (Err(_), Err(_)) => None,
            _ => {
                return Err(
                    "GEOLOCATION_LAT and GEOLOCATION_LNG must be set together".to_string(),
                )
            }
        };

        Ok(Self {
            enabled,
            position,
            timeout_secs,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let history_utc_offset_hours: i8 = env::var("HISTORY_UTC_OFFSET_HOURS")
            .unwrap_or_else(|_| DEFAULT_HISTORY_UTC_OFFSET_HOURS.to_string())
            .parse()
            .map_err(|_| "Invalid HISTORY_UTC_OFFSET_HOURS")?;

        if !(-12..=14).contains(&history_utc_offset_hours) {
            return Err("HISTORY_UTC_OFFSET_HOURS must be between -12 and 14".to_string());
        }

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            redis_url: env::var("REDIS_URL").ok().filter(|s| !s.is_empty()),
            history_dir: env::var("HISTORY_DIR").ok().filter(|s| !s.is_empty()),
            history_utc_offset_hours,
            geolocation: GeolocationConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn history_utc_offset(&self) -> UtcOffset {
        // range is checked in from_env
        UtcOffset::from_hms(self.history_utc_offset_hours, 0, 0).unwrap_or(UtcOffset::UTC)
    }
}
