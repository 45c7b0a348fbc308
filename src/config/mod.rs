use std::{env, path::PathBuf, str::FromStr, time::Duration};

use crate::error::{AppError, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upload: UploadConfig,
    pub idgt: IdgtConfig,
    pub defi: DefiConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_concurrent_requests: usize,
}

#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub dir: PathBuf,
    pub max_file_size: usize,
    pub allowed_mime_types: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct IdgtConfig {
    /// Base units (18 decimals) credited per registered IP.
    pub registration_reward: u128,

    /// Share of a usage fee converted to IDGT for the IP owner.
    pub usage_fee_rate: f64,
}

#[derive(Debug, Clone)]
pub struct DefiConfig {
    pub collateral_price: f64,
    pub max_ltv: f64,
    pub liquidation_threshold: f64,
    pub repay_interest_rate: f64,
    pub unstake_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                host: env_or_default("HOST", "127.0.0.1"),
                port: env_or_parse("PORT", 5000)?,
                cors_allowed_origins: env_list("CORS_ALLOWED_ORIGINS", vec![]),
                max_concurrent_requests: env_or_parse("SERVER_MAX_CONCURRENT_REQUESTS", 100)?,
            },
            upload: UploadConfig {
                dir: PathBuf::from(env_or_default("UPLOAD_DIR", "uploads")),
                max_file_size: env_or_parse("UPLOAD_MAX_FILE_SIZE", 50 * 1024 * 1024)?, // 50MB
                allowed_mime_types: env_list(
                    "UPLOAD_ALLOWED_MIME_TYPES",
                    DEFAULT_MIME_TYPES.iter().map(|mime| mime.to_string()).collect(),
                ),
            },
            idgt: IdgtConfig {
                registration_reward: env_or_parse(
                    "IDGT_REGISTRATION_REWARD",
                    100_000_000_000_000_000_000, // 100 IDGT
                )?,
                usage_fee_rate: env_or_parse("IDGT_USAGE_FEE_RATE", 0.05)?,
            },
            defi: DefiConfig {
                collateral_price: env_or_parse("DEFI_COLLATERAL_PRICE", 100.0)?,
                max_ltv: env_or_parse("DEFI_MAX_LTV", 0.9)?,
                liquidation_threshold: env_or_parse("DEFI_LIQUIDATION_THRESHOLD", 0.95)?,
                repay_interest_rate: env_or_parse("DEFI_REPAY_INTEREST_RATE", 0.03)?,
                unstake_delay: Duration::from_secs(
                    env_or_parse("DEFI_UNSTAKE_DELAY_SECS", 7 * 24 * 60 * 60)?, // 7 days
                ),
            },
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.upload.max_file_size == 0 {
            return Err(AppError::InvalidParams(
                "UPLOAD_MAX_FILE_SIZE must be positive".into(),
            ));
        }

        if self.upload.allowed_mime_types.is_empty() {
            return Err(AppError::InvalidParams(
                "UPLOAD_ALLOWED_MIME_TYPES must list at least one type".into(),
            ));
        }

        if !(0.0..=1.0).contains(&self.idgt.usage_fee_rate) {
            return Err(AppError::InvalidParams(
                "IDGT_USAGE_FEE_RATE must be between 0 and 1".into(),
            ));
        }

        if !(0.0..1.0).contains(&self.defi.max_ltv) || self.defi.collateral_price <= 0.0 {
            return Err(AppError::InvalidParams(
                "DEFI_MAX_LTV must be in [0, 1) and DEFI_COLLATERAL_PRICE positive".into(),
            ));
        }

        if self.defi.unstake_delay > MAX_UNSTAKE_DELAY {
            return Err(AppError::InvalidParams(
                "DEFI_UNSTAKE_DELAY_SECS must not exceed one year".into(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 5000,
                cors_allowed_origins: vec![],
                max_concurrent_requests: 100,
            },
            upload: UploadConfig {
                dir: PathBuf::from("uploads"),
                max_file_size: 50 * 1024 * 1024,
                allowed_mime_types: DEFAULT_MIME_TYPES.iter().map(|m| m.to_string()).collect(),
            },
            idgt: IdgtConfig {
                registration_reward: 100_000_000_000_000_000_000,
                usage_fee_rate: 0.05,
            },
            defi: DefiConfig {
                collateral_price: 100.0,
                max_ltv: 0.9,
                liquidation_threshold: 0.95,
                repay_interest_rate: 0.03,
                unstake_delay: Duration::from_secs(7 * 24 * 60 * 60),
            },
        }
    }
}

const MAX_UNSTAKE_DELAY: Duration = Duration::from_secs(365 * 24 * 60 * 60);

const DEFAULT_MIME_TYPES: [&str; 6] = [
    "image/jpeg",
    "image/png",
    "image/svg+xml",
    "audio/mpeg",
    "audio/wav",
    "audio/ogg",
];

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_or_parse<T: FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key) {
        Ok(val) => val
            .parse()
            .map_err(|_| AppError::InvalidParams(format!("Invalid value for {key}"))),
        Err(_) => Ok(default),
    }
}

fn env_list(key: &str, default: Vec<String>) -> Vec<String> {
    env::var(key)
        .map(|val| {
            val.split(',')
                .map(|str_val| str_val.trim().to_string())
                .filter(|str_val| !str_val.is_empty())
                .collect()
        })
        .unwrap_or(default)
}
