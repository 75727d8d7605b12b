use dioxus::prelude::*;

use crate::domain::{format_price, Currency, ExchangeRate, Package, PackageId};
use crate::ui::components::feature_item::FeatureItem;
use crate::ui::theme;

/// Everything a card renders, resolved for one currency and rate.
#[derive(Clone, Debug, PartialEq)]
pub struct PackageCardView {
    pub id: PackageId,
    pub title: &'static str,
    pub price: String,
    pub suffix: Option<&'static str>,
    pub rows: Vec<FeatureRowView>,
    pub description: Option<&'static str>,
    pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeatureRowView {
    pub label: &'static str,
    pub included: bool,
}

impl PackageCardView {
    pub fn build(package: &Package, currency: Currency, rate: &ExchangeRate) -> Self {
        Self {
            id: package.id,
            title: package.name,
            price: format_price(package.base_price_eur, currency, rate.usd_per_eur()),
            suffix: package.billing.suffix(),
            rows: package
                .features()
                .iter()
                .map(|row| FeatureRowView {
                    label: row.feature.label(),
                    included: row.included,
                })
                .collect(),
            description: package.description(),
            highlighted: package.highlighted,
        }
    }
}

pub fn build_cards(
    packages: &[Package],
    currency: Currency,
    rate: &ExchangeRate,
) -> Vec<PackageCardView> {
    packages
        .iter()
        .map(|package| PackageCardView::build(package, currency, rate))
        .collect()
}

#[component]
pub fn PackageCard(view: PackageCardView) -> Element {
    rsx! {
        div {
            class: "{theme::card(view.highlighted)}",
            h3 { class: theme::CARD_TITLE, "{view.title}" }
            p {
                class: theme::CARD_PRICE,
                "{view.price}"
                if let Some(suffix) = view.suffix {
                    span { class: theme::PRICE_SUFFIX, " {suffix}" }
                }
            }
            if !view.rows.is_empty() {
                ul {
                    class: theme::FEATURE_LIST,
                    for row in view.rows.iter() {
                        FeatureItem { key: "{row.label}", label: row.label, included: row.included }
                    }
                }
            }
            if let Some(description) = view.description {
                p { class: theme::CARD_DESCRIPTION, "{description}" }
            }
        }
    }
}
