use std::fmt;

use super::dataset::LaunchRecord;

/// Dropdown value that selects every site.
pub const ALL_SITES: &str = "ALL";

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        if value == ALL_SITES {
            Self::All
        } else {
            Self::Site(value.to_owned())
        }
    }
}

impl SiteSelection {
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_SITES,
            Self::Site(site) => site,
        }
    }

    pub fn matches(&self, site: &str) -> bool {
        match self {
            Self::All => true,
            Self::Site(selected) => selected == site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive payload mass interval in kilograms. Any pair is accepted; an
/// inverted or NaN interval simply matches nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PayloadRange {
    pub min: f64,
    pub max: f64,
}

impl PayloadRange {
    pub const SLIDER_MIN: f64 = 0.0;
    pub const SLIDER_MAX: f64 = 10_000.0;
    pub const SLIDER_STEP: f64 = 1_000.0;

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(self, payload_mass_kg: f64) -> bool {
        self.min <= payload_mass_kg && payload_mass_kg <= self.max
    }

    pub fn is_empty(self) -> bool {
        !(self.min <= self.max)
    }
}

impl Default for PayloadRange {
    fn default() -> Self {
        Self::new(Self::SLIDER_MIN, Self::SLIDER_MAX)
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

pub fn filter_by_site<'a, I>(records: I, site: &SiteSelection) -> Vec<&'a LaunchRecord>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    records
        .into_iter()
        .filter(|record| site.matches(&record.site))
        .collect()
}

pub fn filter_by_payload_range<'a, I>(records: I, range: PayloadRange) -> Vec<&'a LaunchRecord>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    if range.is_empty() {
        return Vec::new();
    }

    records
        .into_iter()
        .filter(|record| range.contains(record.payload_mass_kg))
        .collect()
}
