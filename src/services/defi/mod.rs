//! Simulated lending and staking. Positions are fixed demo figures; only the
//! borrow and repay arithmetic reacts to input.

pub mod types;

use std::time::Duration;

use chrono::Utc;

use crate::{
    config::DefiConfig,
    error::{AppError, Result},
    services::defi::types::{
        BorrowQuote, DefiStats, IpRegistryHoldings, LoanPosition, RegisteredPattern,
        RepaymentSplit, StakingPosition,
    },
};

/// LST minted per staked token.
pub const STAKE_EXCHANGE_RATE: f64 = 1.0;

pub fn quote_borrow(config: &DefiConfig, collateral: f64, borrow: f64) -> Result<BorrowQuote> {
    if collateral <= 0.0 || borrow <= 0.0 {
        return Err(AppError::InvalidParams(
            "Collateral and borrow amounts must be positive".into(),
        ));
    }

    let collateral_value = collateral * config.collateral_price;
    let max_borrowable = collateral_value * config.max_ltv;

    if borrow > max_borrowable {
        return Err(AppError::InvalidParams(format!(
            "Borrow amount exceeds {}% LTV. Max borrowable: {:.2} IPUSD",
            (config.max_ltv * 100.0).round(),
            max_borrowable
        )));
    }

    Ok(BorrowQuote {
        collateral_value,
        max_borrowable,
        health_factor: (collateral_value * config.liquidation_threshold) / borrow * 100.0,
    })
}

pub fn split_repayment(config: &DefiConfig, amount: f64) -> RepaymentSplit {
    let interest = amount * config.repay_interest_rate;

    RepaymentSplit {
        principal: amount - interest,
        interest,
    }
}

/// Unix milliseconds at which an unstake request submitted now unlocks.
/// Saturates at `i64::MAX` rather than wrapping.
pub fn unstake_unlock_time(config: &DefiConfig) -> i64 {
    let delay = i64::try_from(config.unstake_delay.as_millis()).unwrap_or(i64::MAX);
    Utc::now().timestamp_millis().saturating_add(delay)
}

/// Renders a delay in the largest unit that divides it evenly.
pub fn describe_delay(delay: Duration) -> String {
    let secs = delay.as_secs();
    let (count, unit) = match secs {
        s if s > 0 && s % 86_400 == 0 => (s / 86_400, "day"),
        s if s > 0 && s % 3_600 == 0 => (s / 3_600, "hour"),
        s if s > 0 && s % 60 == 0 => (s / 60, "minute"),
        s => (s, "second"),
    };

    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

pub fn staking_position() -> StakingPosition {
    StakingPosition {
        staked_amount: "1000.0".into(),
        lst_balance: "1050.0".into(),
        rewards: "50.0".into(),
        exchange_rate: "1.05".into(),
        unstake_requests: vec![],
        total_value_locked: "50000000.0".into(),
    }
}

pub fn ip_registry_holdings() -> IpRegistryHoldings {
    IpRegistryHoldings {
        owned_tokens: vec![
            RegisteredPattern {
                token_id: 1,
                pattern_name: "Batak Ulos Sacred Pattern".into(),
                cultural_origin: "Batak".into(),
                artisan_name: "Maria Simbolon".into(),
                is_verified: true,
                royalty_percentage: 5,
                registration_date: "2024-01-15".into(),
            },
            RegisteredPattern {
                token_id: 2,
                pattern_name: "Javanese Batik Kawung".into(),
                cultural_origin: "Javanese".into(),
                artisan_name: "Pak Suharto".into(),
                is_verified: false,
                royalty_percentage: 3,
                registration_date: "2024-01-20".into(),
            },
        ],
        total_registered: 127,
        verified_count: 89,
    }
}

pub fn loan_position() -> LoanPosition {
    LoanPosition {
        has_position: true,
        collateral_amount: "500.0".into(),
        borrowed_amount: "400.0".into(),
        accrued_interest: "12.0".into(),
        health_factor: 125,
        utilization_ratio: 82,
        collateral_value: "525.0".into(),
        borrowing_capacity: "472.5".into(),
        liquidation_threshold: "498.75".into(),
        interest_rate: 3.0,
    }
}

pub fn stats() -> DefiStats {
    DefiStats {
        total_value_locked: "50,000,000".into(),
        total_staked: "35,000,000".into(),
        total_borrowed: "28,000,000".into(),
        average_health_factor: 145,
        registered_patterns: 127,
        verified_patterns: 89,
        active_borrowers: 1234,
        liquidation_events: 12,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn borrow_within_ltv() {
        let config = Config::default().defi;

        let quote = quote_borrow(&config, 5.0, 400.0).unwrap();

        assert_eq!(quote.collateral_value, 500.0);
        assert_eq!(quote.max_borrowable, 450.0);
        assert!((quote.health_factor - 118.75).abs() < 1e-9);
    }

    #[test]
    fn borrow_above_ltv_is_rejected() {
        let config = Config::default().defi;

        match quote_borrow(&config, 5.0, 450.01) {
            Err(AppError::InvalidParams(msg)) => {
                assert_eq!(msg, "Borrow amount exceeds 90% LTV. Max borrowable: 450.00 IPUSD")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn repayment_splits_interest() {
        let split = split_repayment(&Config::default().defi, 100.0);

        assert!((split.interest - 3.0).abs() < 1e-9);
        assert!((split.principal - 97.0).abs() < 1e-9);
    }

    #[test]
    fn unstake_unlocks_after_delay() {
        let config = Config::default().defi;
        let now = Utc::now().timestamp_millis();

        let unlock = unstake_unlock_time(&config);

        assert!(unlock >= now + 7 * 24 * 60 * 60 * 1000);
    }

    #[test]
    fn huge_unstake_delay_saturates() {
        let mut config = Config::default().defi;
        config.unstake_delay = Duration::from_secs(u64::MAX / 1000);

        assert_eq!(unstake_unlock_time(&config), i64::MAX);
    }

    #[test]
    fn describes_delay_in_whole_units() {
        assert_eq!(describe_delay(Duration::from_secs(7 * 86_400)), "7 days");
        assert_eq!(describe_delay(Duration::from_secs(86_400)), "1 day");
        assert_eq!(describe_delay(Duration::from_secs(12 * 3_600)), "12 hours");
        assert_eq!(describe_delay(Duration::from_secs(90 * 60)), "90 minutes");
        assert_eq!(describe_delay(Duration::from_secs(45)), "45 seconds");
        assert_eq!(describe_delay(Duration::ZERO), "0 seconds");
    }
}
