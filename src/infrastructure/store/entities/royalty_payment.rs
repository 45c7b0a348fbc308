use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "WIP";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: i32,
    pub ip_asset_id: Option<i32>,

    /// Decimal string, kept as supplied so no precision is lost.
    pub amount: String,
    pub currency: String,
    pub claimer_address: String,
    pub tx_hash: Option<String>,
    pub status: RoyaltyStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoyaltyStatus {
    #[default]
    Pending,
    Claimed,
    Failed,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoyaltyPayment {
    #[serde(default)]
    pub ip_asset_id: Option<i32>,
    pub amount: String,

    #[serde(default)]
    pub currency: Option<String>,
    pub claimer_address: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RoyaltyPaymentUpdate {
    pub ip_asset_id: Option<i32>,
    pub amount: Option<String>,
    pub currency: Option<String>,
    pub claimer_address: Option<String>,
    pub tx_hash: Option<String>,
    pub status: Option<RoyaltyStatus>,
}

impl RoyaltyPaymentUpdate {
    pub fn claim(tx_hash: Option<String>) -> Self {
        Self {
            status: Some(RoyaltyStatus::Claimed),
            tx_hash,
            ..Default::default()
        }
    }
}

impl Model {
    pub fn merge(&mut self, update: RoyaltyPaymentUpdate) {
        if let Some(ip_asset_id) = update.ip_asset_id {
            self.ip_asset_id = Some(ip_asset_id);
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        if let Some(currency) = update.currency {
            self.currency = currency;
        }
        if let Some(claimer_address) = update.claimer_address {
            self.claimer_address = claimer_address;
        }
        if let Some(tx_hash) = update.tx_hash {
            self.tx_hash = Some(tx_hash);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}
