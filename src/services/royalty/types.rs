use serde::Serialize;

use crate::infrastructure::store::entities::RoyaltyPayment;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoyaltySummary {
    pub payments: Vec<RoyaltyPayment>,
    pub total_earned: f64,
    pub available_to_claim: f64,
}
