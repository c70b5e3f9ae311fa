//! HTTP route handlers for the webhook receiver.

pub mod info;
pub mod signal;
pub mod tradingview;
