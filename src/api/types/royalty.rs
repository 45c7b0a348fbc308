use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRoyaltyParams {
    #[serde(default)]
    pub tx_hash: Option<String>,
}
