use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Account {
    pub balance: u128,
    pub royalties: u128,
}

#[derive(Debug, Clone)]
pub struct IdgtRegistration {
    pub transaction_hash: String,
    pub tokens_awarded: String,
}

#[derive(Debug, Clone)]
pub struct IdgtRoyaltyTransfer {
    pub transaction_hash: String,
    pub amount_paid: String,
}

#[derive(Debug, Clone)]
pub struct IdgtUsageFee {
    pub transaction_hash: String,
    pub fee_amount: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub balance: String,
    pub royalties: String,
    pub balance_formatted: String,
    pub royalties_formatted: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdgtStats {
    pub total_supply: String,
    pub total_holders: u32,
    pub total_royalties_paid: String,
    #[serde(rename = "totalIPsRegistered")]
    pub total_ips_registered: u32,
}
