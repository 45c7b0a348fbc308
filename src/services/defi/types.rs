use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingPosition {
    pub staked_amount: String,
    pub lst_balance: String,
    pub rewards: String,
    pub exchange_rate: String,
    pub unstake_requests: Vec<UnstakeRequest>,
    pub total_value_locked: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnstakeRequest {
    pub amount: String,
    pub unlock_time: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredPattern {
    pub token_id: u32,
    pub pattern_name: String,
    pub cultural_origin: String,
    pub artisan_name: String,
    pub is_verified: bool,
    pub royalty_percentage: u8,
    pub registration_date: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IpRegistryHoldings {
    pub owned_tokens: Vec<RegisteredPattern>,
    pub total_registered: u32,
    pub verified_count: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanPosition {
    pub has_position: bool,
    pub collateral_amount: String,
    pub borrowed_amount: String,
    pub accrued_interest: String,
    pub health_factor: u32,
    pub utilization_ratio: u32,
    pub collateral_value: String,
    pub borrowing_capacity: String,
    pub liquidation_threshold: String,
    pub interest_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorrowQuote {
    pub collateral_value: f64,
    pub max_borrowable: f64,
    pub health_factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepaymentSplit {
    pub principal: f64,
    pub interest: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefiStats {
    pub total_value_locked: String,
    pub total_staked: String,
    pub total_borrowed: String,
    pub average_health_factor: u32,
    pub registered_patterns: u32,
    pub verified_patterns: u32,
    pub active_borrowers: u32,
    pub liquidation_events: u32,
}
