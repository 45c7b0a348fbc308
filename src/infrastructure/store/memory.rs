use std::collections::{BTreeMap, HashSet};

use chrono::Utc;
use parking_lot::RwLock;

use crate::infrastructure::store::{
    EntityStore,
    entities::{
        DerivativeWork, IpAsset, IpAssetStatus, IpAssetUpdate, NewDerivativeWork, NewIpAsset,
        NewRoyaltyPayment, NewUser, RoyaltyPayment, RoyaltyPaymentUpdate, RoyaltyStatus, User,
        ip_asset::DEFAULT_ROYALTY_RATE, royalty_payment::DEFAULT_CURRENCY,
    },
};

/// Rows of one record kind keyed by id. Ids only grow, so iterating the map
/// yields rows in creation order.
struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    fn allocate_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn get(&self, id: i32) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.values().find(|row| predicate(row)).cloned()
    }

    fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .values()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    fn insert(&mut self, id: i32, row: T) -> T {
        self.rows.insert(id, row.clone());
        row
    }

    fn modify(&mut self, id: i32, apply: impl FnOnce(&mut T)) -> Option<T> {
        let row = self.rows.get_mut(&id)?;
        apply(row);
        Some(row.clone())
    }
}

/// Process-lifetime store with one reader/writer lock per record kind.
///
/// No operation holds more than one lock at a time, including the
/// royalty-by-user join.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Table<User>>,
    ip_assets: RwLock<Table<IpAsset>>,
    royalty_payments: RwLock<Table<RoyaltyPayment>>,
    derivative_works: RwLock<Table<DerivativeWork>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

impl EntityStore for MemoryStore {
    fn get_user(&self, id: i32) -> Option<User> {
        self.users.read().get(id)
    }

    fn get_user_by_wallet_address(&self, wallet_address: &str) -> Option<User> {
        self.users
            .read()
            .find(|user| user.wallet_address == wallet_address)
    }

    fn create_user(&self, user: NewUser) -> User {
        let mut users = self.users.write();
        let id = users.allocate_id();

        users.insert(
            id,
            User {
                id,
                wallet_address: user.wallet_address,
                username: non_empty(user.username),
                email: non_empty(user.email),
                created_at: Utc::now(),
            },
        )
    }

    fn get_ip_asset(&self, id: i32) -> Option<IpAsset> {
        self.ip_assets.read().get(id)
    }

    fn get_ip_asset_by_ip_id(&self, ip_id: &str) -> Option<IpAsset> {
        self.ip_assets.read().find(|asset| asset.ip_id == ip_id)
    }

    fn get_ip_assets_by_user_id(&self, user_id: i32) -> Vec<IpAsset> {
        self.ip_assets
            .read()
            .filter(|asset| asset.user_id == Some(user_id))
    }

    fn create_ip_asset(&self, ip_asset: NewIpAsset, user_id: i32) -> IpAsset {
        let mut ip_assets = self.ip_assets.write();
        let id = ip_assets.allocate_id();
        let now = Utc::now();

        // Unique through `id`; the timestamp is only for readability.
        let ip_id = format!("ip_{}_{}", id, now.timestamp_millis());

        ip_assets.insert(
            id,
            IpAsset {
                id,
                ip_id,
                user_id: Some(user_id),
                title: ip_asset.title,
                description: ip_asset.description,
                asset_type: ip_asset.asset_type,
                file_name: ip_asset.file_name,
                file_size: ip_asset.file_size,
                ipfs_hash: None,
                metadata_hash: None,
                cultural_origin: ip_asset.cultural_origin,
                language: ip_asset.language,
                region: ip_asset.region,
                creation_date: ip_asset.creation_date,
                royalty_rate: ip_asset
                    .royalty_rate
                    .unwrap_or_else(|| DEFAULT_ROYALTY_RATE.to_string()),
                registration_tx_hash: None,
                license_terms_id: None,
                idgt_registered: false,
                idgt_reward_amount: None,
                idgt_transaction_hash: None,
                status: IpAssetStatus::Pending,
                created_at: now,
            },
        )
    }

    fn update_ip_asset(&self, id: i32, update: IpAssetUpdate) -> Option<IpAsset> {
        self.ip_assets
            .write()
            .modify(id, |asset| asset.merge(update))
    }

    fn get_royalty_payments_by_ip_asset_id(&self, ip_asset_id: i32) -> Vec<RoyaltyPayment> {
        self.royalty_payments
            .read()
            .filter(|payment| payment.ip_asset_id == Some(ip_asset_id))
    }

    fn get_royalty_payments_by_user_id(&self, user_id: i32) -> Vec<RoyaltyPayment> {
        let asset_ids: HashSet<i32> = self
            .get_ip_assets_by_user_id(user_id)
            .into_iter()
            .map(|asset| asset.id)
            .collect();

        self.royalty_payments.read().filter(|payment| {
            payment
                .ip_asset_id
                .is_some_and(|asset_id| asset_ids.contains(&asset_id))
        })
    }

    fn create_royalty_payment(&self, payment: NewRoyaltyPayment) -> RoyaltyPayment {
        let mut royalty_payments = self.royalty_payments.write();
        let id = royalty_payments.allocate_id();

        royalty_payments.insert(
            id,
            RoyaltyPayment {
                id,
                ip_asset_id: payment.ip_asset_id,
                amount: payment.amount,
                currency: payment
                    .currency
                    .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
                claimer_address: payment.claimer_address,
                tx_hash: None,
                status: RoyaltyStatus::Pending,
                created_at: Utc::now(),
            },
        )
    }

    fn update_royalty_payment(
        &self,
        id: i32,
        update: RoyaltyPaymentUpdate,
    ) -> Option<RoyaltyPayment> {
        self.royalty_payments
            .write()
            .modify(id, |payment| payment.merge(update))
    }

    fn get_derivative_works_by_parent_id(&self, parent_ip_id: &str) -> Vec<DerivativeWork> {
        self.derivative_works
            .read()
            .filter(|work| work.parent_ip_id == parent_ip_id)
    }

    fn create_derivative_work(&self, derivative: NewDerivativeWork) -> DerivativeWork {
        let mut derivative_works = self.derivative_works.write();
        let id = derivative_works.allocate_id();

        derivative_works.insert(
            id,
            DerivativeWork {
                id,
                parent_ip_id: derivative.parent_ip_id,
                child_ip_id: derivative.child_ip_id,
                license_terms_id: derivative.license_terms_id,
                registration_tx_hash: derivative.registration_tx_hash,
                created_at: Utc::now(),
            },
        )
    }
}
