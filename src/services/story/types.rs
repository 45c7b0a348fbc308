use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryRegistration {
    pub ip_id: String,
    pub tx_hash: String,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueClaim {
    pub tx_hash: String,
    pub claimed_amount: String,
    pub currency: String,
    pub success: bool,
}
