pub mod types;

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::{
    AppState,
    error::{AppError, Result},
    infrastructure::store::entities::IpAssetUpdate,
    services::{
        chain::mock_tx_hash,
        idgt::types::{
            Account, IdgtRegistration, IdgtRoyaltyTransfer, IdgtStats, IdgtUsageFee, TokenInfo,
        },
    },
};

const IDGT_DECIMALS: i32 = 18;

/// Simulated IDGT balances keyed by lowercased wallet address.
#[derive(Default)]
pub struct IdgtLedger {
    accounts: RwLock<HashMap<String, Account>>,
}

impl IdgtLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credit_reward(&self, address: &str, amount: u128) {
        let mut accounts = self.accounts.write();
        let account = accounts.entry(address.to_lowercase()).or_default();
        account.balance = account.balance.saturating_add(amount);
    }

    /// Royalties count towards the spendable balance as well.
    pub fn credit_royalty(&self, address: &str, amount: u128) {
        let mut accounts = self.accounts.write();
        let account = accounts.entry(address.to_lowercase()).or_default();
        account.balance = account.balance.saturating_add(amount);
        account.royalties = account.royalties.saturating_add(amount);
    }

    pub fn account(&self, address: &str) -> Account {
        self.accounts
            .read()
            .get(&address.to_lowercase())
            .copied()
            .unwrap_or_default()
    }
}

fn to_tokens(base_units: u128) -> f64 {
    base_units as f64 / 10f64.powi(IDGT_DECIMALS)
}

fn parse_base_units(value: &str, field: &str) -> Result<u128> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidParams(format!("{field} must be a whole number")))
}

/// Wallet of the user owning the asset with this `ipId`, if both are known.
fn owner_wallet(state: &AppState, ip_id: &str) -> Option<String> {
    let asset = state.store.get_ip_asset_by_ip_id(ip_id)?;
    let user = state.store.get_user(asset.user_id?)?;
    Some(user.wallet_address)
}

pub fn process_ip_registration(
    state: &AppState,
    ip_asset_id: i32,
    owner_address: &str,
    ip_id: &str,
) -> Result<IdgtRegistration> {
    let reward = state.config.idgt.registration_reward;
    let transaction_hash = mock_tx_hash();

    state
        .store
        .update_ip_asset(
            ip_asset_id,
            IpAssetUpdate {
                idgt_registered: Some(true),
                idgt_reward_amount: Some(reward.to_string()),
                idgt_transaction_hash: Some(transaction_hash.clone()),
                ..Default::default()
            },
        )
        .ok_or(AppError::IpAssetNotFound)?;

    state.idgt.credit_reward(owner_address, reward);

    tracing::info!(
        ip_asset_id,
        ip_id,
        owner = owner_address,
        reward = %reward,
        "IDGT registration reward credited"
    );

    Ok(IdgtRegistration {
        transaction_hash,
        tokens_awarded: format!("{} IDGT", to_tokens(reward)),
    })
}

pub fn process_royalty_payment(
    state: &AppState,
    ip_id: &str,
    amount: &str,
    payer_address: &str,
) -> Result<IdgtRoyaltyTransfer> {
    let amount = parse_base_units(amount, "amount")?;

    match owner_wallet(state, ip_id) {
        Some(owner) => state.idgt.credit_royalty(&owner, amount),
        None => tracing::warn!(ip_id, "Royalty paid for an IP with no known owner"),
    }

    tracing::info!(ip_id, payer = payer_address, amount = %amount, "IDGT royalty paid");

    Ok(IdgtRoyaltyTransfer {
        transaction_hash: mock_tx_hash(),
        amount_paid: format!("{:.2} IDGT", to_tokens(amount)),
    })
}

pub fn process_usage_fee(
    state: &AppState,
    ip_id: &str,
    eth_amount: &str,
    user_address: &str,
) -> Result<IdgtUsageFee> {
    let eth_amount = parse_base_units(eth_amount, "ethAmount")?;
    let fee = eth_amount as f64 * state.config.idgt.usage_fee_rate;

    if let Some(owner) = owner_wallet(state, ip_id) {
        state.idgt.credit_royalty(&owner, fee as u128);
    }

    tracing::info!(ip_id, user = user_address, fee, "IDGT usage fee paid");

    Ok(IdgtUsageFee {
        transaction_hash: mock_tx_hash(),
        fee_amount: format!("{fee:.6} ETH converted to IDGT"),
    })
}

pub fn user_token_info(state: &AppState, address: &str) -> TokenInfo {
    let account = state.idgt.account(address);

    TokenInfo {
        balance: account.balance.to_string(),
        royalties: account.royalties.to_string(),
        balance_formatted: format!("{:.2} IDGT", to_tokens(account.balance)),
        royalties_formatted: format!("{:.2} IDGT", to_tokens(account.royalties)),
    }
}

pub fn stats() -> IdgtStats {
    IdgtStats {
        total_supply: "1,000,000 IDGT".to_string(),
        total_holders: 42,
        total_royalties_paid: "15,230.50 IDGT".to_string(),
        total_ips_registered: 127,
    }
}
