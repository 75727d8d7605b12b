//! Pricing catalog and conversion logic live here.

pub mod catalog;
pub mod entities;
pub mod pricing;

pub use catalog::PACKAGES;
pub use entities::{Currency, Package, PackageId};
pub use pricing::{format_price, ExchangeRate};
