use super::dataset::{Dataset, LaunchRecord, Outcome};

pub(crate) fn record(site: &str, payload_mass_kg: f64, class: u8, category: &str) -> LaunchRecord {
    LaunchRecord {
        flight_number: None,
        site: site.to_owned(),
        payload_mass_kg,
        outcome: if class == 0 {
            Outcome::Failure
        } else {
            Outcome::Success
        },
        booster_version: None,
        booster_version_category: category.to_owned(),
    }
}

/// Two launches at `A` (one success, one failure) and two successes at `B`.
pub(crate) fn two_site_dataset() -> Dataset {
    Dataset::new(vec![
        record("A", 500.0, 1, "v1.0"),
        record("A", 1500.0, 0, "v1.1"),
        record("B", 2500.0, 1, "FT"),
        record("B", 9000.0, 1, "FT"),
    ])
}
