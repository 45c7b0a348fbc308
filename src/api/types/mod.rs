mod common;
mod defi;
mod idgt;
mod ip_asset;
mod royalty;
mod story;

pub use common::*;
pub use defi::*;
pub use idgt::*;
pub use ip_asset::*;
pub use royalty::*;
pub use story::*;
