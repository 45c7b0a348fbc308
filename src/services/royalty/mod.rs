pub mod types;

use crate::{
    AppState,
    infrastructure::store::entities::{RoyaltyPayment, RoyaltyStatus},
    services::royalty::types::RoyaltySummary,
};

/// Unparsable amounts count as zero.
fn sum_with_status(payments: &[RoyaltyPayment], status: RoyaltyStatus) -> f64 {
    payments
        .iter()
        .filter(|payment| payment.status == status)
        .map(|payment| payment.amount.trim().parse::<f64>().unwrap_or(0.0))
        .sum()
}

pub fn summarize(payments: Vec<RoyaltyPayment>) -> RoyaltySummary {
    let total_earned = sum_with_status(&payments, RoyaltyStatus::Claimed);
    let available_to_claim = sum_with_status(&payments, RoyaltyStatus::Pending);

    RoyaltySummary {
        payments,
        total_earned,
        available_to_claim,
    }
}

pub fn royalties_for_user(state: &AppState, user_id: i32) -> RoyaltySummary {
    summarize(state.store.get_royalty_payments_by_user_id(user_id))
}
