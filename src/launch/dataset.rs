use std::collections::HashSet;

/// Binary launch outcome, stored in the source table as `class` 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    pub fn from_class(class: f64) -> Option<Self> {
        if class == 0.0 {
            Some(Self::Failure)
        } else if class == 1.0 {
            Some(Self::Success)
        } else {
            None
        }
    }

    pub fn class(self) -> u8 {
        match self {
            Self::Failure => 0,
            Self::Success => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Failure => "0",
            Self::Success => "1",
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LaunchRecord {
    pub flight_number: Option<u32>,
    pub site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version: Option<String>,
    pub booster_version_category: String,
}

/// Read-only launch table. Built once and shared behind an `Arc`.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
}

impl Dataset {
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        let mut seen = HashSet::new();
        let sites = records
            .iter()
            .filter(|record| seen.insert(record.site.as_str()))
            .map(|record| record.site.clone())
            .collect();

        Self { records, sites }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites in order of first appearance.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn contains_site(&self, site: &str) -> bool {
        self.sites.iter().any(|known| known == site)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::fixtures::record;

    #[test]
    fn sites_keep_first_appearance_order() {
        let dataset = Dataset::new(vec![
            record("KSC LC-39A", 100.0, 1, "FT"),
            record("CCAFS LC-40", 200.0, 0, "v1.0"),
            record("KSC LC-39A", 300.0, 1, "FT"),
            record("VAFB SLC-4E", 400.0, 1, "B4"),
        ]);

        assert_eq!(
            dataset.sites(),
            ["KSC LC-39A", "CCAFS LC-40", "VAFB SLC-4E"]
        );
        assert_eq!(dataset.len(), 4);
        assert!(dataset.contains_site("CCAFS LC-40"));
        assert!(!dataset.contains_site("CCAFS SLC-40"));
    }

    #[test]
    fn outcome_accepts_only_binary_classes() {
        assert_eq!(Outcome::from_class(0.0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1.0), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(0.5), None);
        assert_eq!(Outcome::from_class(2.0), None);
        assert_eq!(Outcome::Success.label(), "1");
        assert_eq!(Outcome::Failure.class(), 0);
    }

    #[test]
    fn empty_dataset_has_no_sites() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.sites().is_empty());
    }
}
