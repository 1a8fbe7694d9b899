// --- File: crates/showroom_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

// --- Database Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g. DATABASE_URL, or SHOWROOM__DATABASE__URL
}

// --- Scheduling Config ---
// The business-hours constants. Read once at startup, immutable afterwards.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SchedulingConfig {
    /// IANA time zone the showroom operates in (e.g. "America/Los_Angeles").
    pub time_zone: String,
    /// Length of one appointment slot, in minutes.
    pub slot_minutes: u32,
    /// First bookable hour of the day in local time (e.g. 9 for 09:00).
    pub business_start_hour: u32,
    /// Hour the showroom closes in local time (e.g. 17 for 17:00).
    pub business_end_hour: u32,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            time_zone: "America/Los_Angeles".to_string(),
            slot_minutes: 30,
            business_start_hour: 9,
            business_end_hour: 17,
        }
    }
}

impl SchedulingConfig {
    /// Sanity-check the business-hours window. Called once at load time.
    pub fn validate(&self) -> Result<(), String> {
        if self.slot_minutes == 0 || self.slot_minutes > 24 * 60 {
            return Err(format!(
                "slot_minutes must be between 1 and 1440, got {}",
                self.slot_minutes
            ));
        }
        if self.business_end_hour > 24 {
            return Err(format!(
                "business_end_hour must be at most 24, got {}",
                self.business_end_hour
            ));
        }
        if self.business_start_hour >= self.business_end_hour {
            return Err(format!(
                "business_start_hour ({}) must be before business_end_hour ({})",
                self.business_start_hour, self.business_end_hour
            ));
        }
        Ok(())
    }
}

// --- Admin Config ---
// The allow-list of addresses that hold the administrative capability.
// Injected into the API layer at construction; never read ad hoc.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AdminConfig {
    #[serde(default)]
    pub emails: Vec<String>,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: Option<DatabaseConfig>, // Central DB config

    #[serde(default)]
    pub scheduling: SchedulingConfig,

    #[serde(default)]
    pub admin: AdminConfig,
}
