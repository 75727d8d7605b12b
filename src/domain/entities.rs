use std::fmt;

/// Display currency selected by the toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Currency {
    #[default]
    Eur,
    Usd,
}

impl Currency {
    /// Toggle order.
    pub const ALL: [Currency; 2] = [Currency::Eur, Currency::Usd];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Usd => "$",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Capabilities a package can list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    Responsive,
    Contact,
    Pictures,
    Gallery,
    Auth,
    Crud,
    Db,
    Admin,
    Maintenance,
}

impl Feature {
    pub fn label(&self) -> &'static str {
        match self {
            Feature::Responsive => "Responsive design + navbar",
            Feature::Contact => "Contact / socials",
            Feature::Pictures => "Static Image Gallery",
            Feature::Gallery => "Editable Gallery",
            Feature::Auth => "Authentication",
            Feature::Crud => "CRUD screens",
            Feature::Db => "Database integration",
            Feature::Admin => "Admin dashboard / roles",
            Feature::Maintenance => "Deployment & setup",
        }
    }
}

/// A feature row as it appears on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureInclusion {
    pub feature: Feature,
    pub included: bool,
}

impl FeatureInclusion {
    pub const fn included(feature: Feature) -> Self {
        Self {
            feature,
            included: true,
        }
    }

    pub const fn excluded(feature: Feature) -> Self {
        Self {
            feature,
            included: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PackageId {
    SimpleLanding,
    FullStackStarter,
    CustomApplication,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Billing {
    Flat,
    Hourly,
}

impl Billing {
    /// Text appended after the formatted price, if any.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            Billing::Flat => None,
            Billing::Hourly => Some("/ hour"),
        }
    }
}

/// What a card shows below its price.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PackageBody {
    Features(&'static [FeatureInclusion]),
    Description(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Package {
    pub id: PackageId,
    pub name: &'static str,
    /// Canonical price in EUR, before conversion.
    pub base_price_eur: f64,
    pub billing: Billing,
    pub body: PackageBody,
    /// Emphasised card in the grid.
    pub highlighted: bool,
}

impl Package {
    pub fn features(&self) -> &'static [FeatureInclusion] {
        match self.body {
            PackageBody::Features(rows) => rows,
            PackageBody::Description(_) => &[],
        }
    }

    pub fn description(&self) -> Option<&'static str> {
        match self.body {
            PackageBody::Features(_) => None,
            PackageBody::Description(text) => Some(text),
        }
    }
}
