pub mod currency_toggle;
pub mod feature_item;
pub mod icons;
pub mod package_card;

pub use currency_toggle::CurrencyToggle;
pub use package_card::{build_cards, PackageCard};
