pub mod defi;
pub mod derivatives;
pub mod idgt;
pub mod ip_assets;
pub mod royalties;
pub mod story;
pub mod users;
pub mod verify;
