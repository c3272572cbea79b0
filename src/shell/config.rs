// Runtime configuration read from the environment.
//
// Responsibilities
// - Resolve the bind address, the storage location and the workday rules.
// - Fall back to defaults for unset or blank keys; refuse values that do not parse.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

use crate::modules::attendance::core::accumulator::{
    DEFAULT_LUNCH_BREAK_MINUTES, DEFAULT_STANDARD_WORKDAY_MINUTES, PunchOrderPolicy, WorkdayConfig,
};
use crate::modules::attendance::use_cases::record_punch::handler::LedgerConfig;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// `None` keeps ledgers in memory.
    pub data_dir: Option<PathBuf>,
    pub ledger: LedgerConfig,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &'static str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bind_addr = match read("LEDGER_BIND_ADDR") {
            Some(value) => parse_value("LEDGER_BIND_ADDR", value)?,
            None => parse_value("LEDGER_BIND_ADDR", DEFAULT_BIND_ADDR.to_string())?,
        };
        let standard_workday_minutes = read("LEDGER_STANDARD_WORKDAY_MINUTES")
            .map(|value| parse_value::<u32>("LEDGER_STANDARD_WORKDAY_MINUTES", value))
            .transpose()?
            .map_or(DEFAULT_STANDARD_WORKDAY_MINUTES, i64::from);
        let lunch_break_minutes = read("LEDGER_LUNCH_BREAK_MINUTES")
            .map(|value| parse_value::<u32>("LEDGER_LUNCH_BREAK_MINUTES", value))
            .transpose()?
            .map_or(DEFAULT_LUNCH_BREAK_MINUTES, i64::from);
        let punch_order = read("LEDGER_PUNCH_ORDER_POLICY")
            .map(|value| parse_value::<PunchOrderPolicy>("LEDGER_PUNCH_ORDER_POLICY", value))
            .transpose()?
            .unwrap_or_default();
        let strict_calendar_dates = read("LEDGER_STRICT_CALENDAR_DATES")
            .map(|value| parse_flag("LEDGER_STRICT_CALENDAR_DATES", value))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            bind_addr,
            data_dir: read("LEDGER_DATA_DIR").map(PathBuf::from),
            ledger: LedgerConfig {
                workday: WorkdayConfig {
                    standard_workday_minutes,
                    lunch_break_minutes,
                    punch_order,
                },
                strict_calendar_dates,
            },
        })
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value }),
    }
}
