pub mod chain;
pub mod defi;
pub mod idgt;
pub mod royalty;
pub mod story;
pub mod upload;
