pub mod api;
pub mod export;
pub mod filter;
pub mod ui;
