//! The fixed set of packages offered on the pricing table.

use super::entities::{
    Billing, Feature, FeatureInclusion, Package, PackageBody, PackageId,
};

const SIMPLE_LANDING_FEATURES: &[FeatureInclusion] = &[
    FeatureInclusion::included(Feature::Responsive),
    FeatureInclusion::included(Feature::Contact),
    FeatureInclusion::included(Feature::Pictures),
    FeatureInclusion::included(Feature::Maintenance),
    FeatureInclusion::excluded(Feature::Auth),
    FeatureInclusion::excluded(Feature::Db),
];

const FULL_STACK_FEATURES: &[FeatureInclusion] = &[
    FeatureInclusion::included(Feature::Responsive),
    FeatureInclusion::included(Feature::Contact),
    FeatureInclusion::included(Feature::Gallery),
    FeatureInclusion::included(Feature::Auth),
    FeatureInclusion::included(Feature::Db),
    FeatureInclusion::included(Feature::Crud),
    FeatureInclusion::included(Feature::Admin),
    FeatureInclusion::included(Feature::Maintenance),
];

const CUSTOM_DESCRIPTION: &str = "Advanced web apps, dashboards, e-commerce, integrations, \
automations and long-term development partnerships.";

/// Cards in display order.
pub static PACKAGES: [Package; 3] = [
    Package {
        id: PackageId::SimpleLanding,
        name: "Simple Landing",
        base_price_eur: 500.0,
        billing: Billing::Flat,
        body: PackageBody::Features(SIMPLE_LANDING_FEATURES),
        highlighted: false,
    },
    Package {
        id: PackageId::FullStackStarter,
        name: "Full-Stack Starter",
        base_price_eur: 1000.0,
        billing: Billing::Flat,
        body: PackageBody::Features(FULL_STACK_FEATURES),
        highlighted: true,
    },
    Package {
        id: PackageId::CustomApplication,
        name: "Custom Application",
        base_price_eur: 40.0,
        billing: Billing::Hourly,
        body: PackageBody::Description(CUSTOM_DESCRIPTION),
        highlighted: false,
    },
];

#[cfg(test)]
pub(crate) fn package(id: PackageId) -> &'static Package {
    PACKAGES
        .iter()
        .find(|package| package.id == id)
        .expect("every package id is in the catalog")
}
