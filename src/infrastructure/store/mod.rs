pub mod entities;
pub mod memory;

use entities::{
    DerivativeWork, IpAsset, IpAssetUpdate, NewDerivativeWork, NewIpAsset, NewRoyaltyPayment,
    NewUser, RoyaltyPayment, RoyaltyPaymentUpdate, User,
};

pub use memory::MemoryStore;

/// Persistence contract for the four record kinds.
///
/// Every call returns owned snapshots, so callers can never mutate stored
/// state except through `create_*` and `update_*`. A missing record is
/// `None` (or an empty list); implementations have no failure mode of their
/// own. List results are in creation order.
pub trait EntityStore: Send + Sync {
    fn get_user(&self, id: i32) -> Option<User>;

    fn get_user_by_wallet_address(&self, wallet_address: &str) -> Option<User>;

    /// Does not reject a wallet address that is already stored. Callers that
    /// need one user per wallet look it up first.
    fn create_user(&self, user: NewUser) -> User;

    fn get_ip_asset(&self, id: i32) -> Option<IpAsset>;

    fn get_ip_asset_by_ip_id(&self, ip_id: &str) -> Option<IpAsset>;

    fn get_ip_assets_by_user_id(&self, user_id: i32) -> Vec<IpAsset>;

    fn create_ip_asset(&self, ip_asset: NewIpAsset, user_id: i32) -> IpAsset;

    fn update_ip_asset(&self, id: i32, update: IpAssetUpdate) -> Option<IpAsset>;

    fn get_royalty_payments_by_ip_asset_id(&self, ip_asset_id: i32) -> Vec<RoyaltyPayment>;

    fn get_royalty_payments_by_user_id(&self, user_id: i32) -> Vec<RoyaltyPayment>;

    fn create_royalty_payment(&self, payment: NewRoyaltyPayment) -> RoyaltyPayment;

    fn update_royalty_payment(
        &self,
        id: i32,
        update: RoyaltyPaymentUpdate,
    ) -> Option<RoyaltyPayment>;

    fn get_derivative_works_by_parent_id(&self, parent_ip_id: &str) -> Vec<DerivativeWork>;

    fn create_derivative_work(&self, derivative: NewDerivativeWork) -> DerivativeWork;
}
