pub mod derivative_work;
pub mod ip_asset;
pub mod royalty_payment;
pub mod user;

pub use derivative_work::{Model as DerivativeWork, NewDerivativeWork};
pub use ip_asset::{AssetType, IpAssetStatus, IpAssetUpdate, Model as IpAsset, NewIpAsset};
pub use royalty_payment::{
    Model as RoyaltyPayment, NewRoyaltyPayment, RoyaltyPaymentUpdate, RoyaltyStatus,
};
pub use user::{Model as User, NewUser};
