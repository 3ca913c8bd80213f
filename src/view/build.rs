use std::collections::HashMap;

use crate::launch::{
    Dataset, LaunchRecord, PayloadRange, SiteSelection, filter_by_payload_range, filter_by_site,
};

use super::chart::{ChartSpec, PieChart, PieSlice, ScatterChart, ScatterPoint, ScatterSeries};

pub const PIE_ALL_SITES_TITLE: &str = "Successful Launches by Site";
pub const SCATTER_ALL_SITES_TITLE: &str = "Success by Payload";
pub const SCATTER_X_LABEL: &str = "Payload Mass (kg)";
pub const SCATTER_Y_LABEL: &str = "class";
pub const SCATTER_COLOR_LABEL: &str = "Booster Version Category";

/// All sites: successful launches per site. One site: launch count per
/// outcome class at that site.
pub fn build_pie_view(dataset: &Dataset, site: &SiteSelection) -> ChartSpec {
    let pie = match site {
        SiteSelection::All => PieChart {
            title: PIE_ALL_SITES_TITLE.to_owned(),
            slices: tally_in_order(
                dataset.records(),
                |record| record.site.as_str(),
                |record| u64::from(record.outcome.is_success()),
            ),
        },
        SiteSelection::Site(name) => PieChart {
            title: format!("Launch Success Rate for {name}"),
            slices: tally_in_order(
                filter_by_site(dataset.records(), site),
                |record| record.outcome.label(),
                |_| 1,
            ),
        },
    };

    ChartSpec::Pie(pie)
}

/// Payload filter first, then the site filter on what remains.
pub fn build_scatter_view(
    dataset: &Dataset,
    site: &SiteSelection,
    payload_range: PayloadRange,
) -> ChartSpec {
    let in_range = filter_by_payload_range(dataset.records(), payload_range);
    let records = filter_by_site(in_range, site);

    let title = match site {
        SiteSelection::All => SCATTER_ALL_SITES_TITLE.to_owned(),
        SiteSelection::Site(name) => format!("Success by Payload for {name}"),
    };

    let mut series: Vec<ScatterSeries> = Vec::new();
    let mut index_by_category: HashMap<&str, usize> = HashMap::new();
    for record in records {
        let index = *index_by_category
            .entry(record.booster_version_category.as_str())
            .or_insert_with(|| {
                series.push(ScatterSeries {
                    category: record.booster_version_category.clone(),
                    points: Vec::new(),
                });
                series.len() - 1
            });

        series[index].points.push(ScatterPoint {
            x: record.payload_mass_kg,
            y: f64::from(record.outcome.class()),
            label: point_label(record),
        });
    }

    ChartSpec::Scatter(ScatterChart {
        title,
        x_label: SCATTER_X_LABEL.to_owned(),
        y_label: SCATTER_Y_LABEL.to_owned(),
        color_label: SCATTER_COLOR_LABEL.to_owned(),
        series,
    })
}

fn tally_in_order<'a, I, K, W>(records: I, key: K, weight: W) -> Vec<PieSlice>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
    K: Fn(&'a LaunchRecord) -> &'a str,
    W: Fn(&LaunchRecord) -> u64,
{
    let mut slices: Vec<PieSlice> = Vec::new();
    let mut index_by_label: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let label = key(record);
        let index = *index_by_label.entry(label).or_insert_with(|| {
            slices.push(PieSlice {
                label: label.to_owned(),
                value: 0,
            });
            slices.len() - 1
        });
        slices[index].value += weight(record);
    }

    slices
}

fn point_label(record: &LaunchRecord) -> Option<String> {
    match (record.flight_number, record.booster_version.as_deref()) {
        (Some(flight), Some(booster)) => Some(format!("Flight {flight}: {booster}")),
        (Some(flight), None) => Some(format!("Flight {flight}")),
        (None, Some(booster)) => Some(booster.to_owned()),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::fixtures::{record, two_site_dataset};

    fn slices(chart: &ChartSpec) -> Vec<(&str, u64)> {
        chart
            .as_pie()
            .expect("pie chart")
            .slices
            .iter()
            .map(|slice| (slice.label.as_str(), slice.value))
            .collect()
    }

    fn scatter_payloads(chart: &ChartSpec) -> Vec<f64> {
        let mut payloads = chart
            .as_scatter()
            .expect("scatter chart")
            .series
            .iter()
            .flat_map(|series| series.points.iter().map(|point| point.x))
            .collect::<Vec<_>>();
        payloads.sort_by(f64::total_cmp);
        payloads
    }

    #[test]
    fn all_sites_pie_counts_successes_per_site() {
        let chart = build_pie_view(&two_site_dataset(), &SiteSelection::All);

        assert_eq!(chart.title(), "Successful Launches by Site");
        assert_eq!(slices(&chart), [("A", 1), ("B", 2)]);
    }

    #[test]
    fn single_site_pie_counts_outcome_classes() {
        let chart = build_pie_view(&two_site_dataset(), &SiteSelection::from("A"));

        assert_eq!(chart.title(), "Launch Success Rate for A");
        let mut counts = slices(&chart);
        counts.sort();
        assert_eq!(counts, [("0", 1), ("1", 1)]);
    }

    #[test]
    fn site_without_successes_keeps_a_zero_slice() {
        let dataset = Dataset::new(vec![
            record("A", 100.0, 0, "v1.0"),
            record("B", 200.0, 1, "FT"),
        ]);
        let chart = build_pie_view(&dataset, &SiteSelection::All);

        assert_eq!(slices(&chart), [("A", 0), ("B", 1)]);
        assert_eq!(chart.as_pie().map(PieChart::total), Some(1));
    }

    #[test]
    fn unknown_site_pie_is_empty_not_an_error() {
        let chart = build_pie_view(&two_site_dataset(), &SiteSelection::from("C"));

        assert_eq!(chart.title(), "Launch Success Rate for C");
        assert!(slices(&chart).is_empty());
    }

    #[test]
    fn empty_dataset_pie_is_empty() {
        let chart = build_pie_view(&Dataset::default(), &SiteSelection::All);
        assert!(slices(&chart).is_empty());
    }

    #[test]
    fn scatter_applies_payload_range() {
        let dataset = Dataset::new(vec![
            record("A", 500.0, 1, "v1.0"),
            record("A", 1500.0, 0, "v1.1"),
            record("B", 9000.0, 1, "FT"),
        ]);
        let chart = build_scatter_view(
            &dataset,
            &SiteSelection::All,
            PayloadRange::new(1000.0, 10_000.0),
        );

        assert_eq!(chart.title(), "Success by Payload");
        assert_eq!(scatter_payloads(&chart), [1500.0, 9000.0]);
    }

    #[test]
    fn scatter_narrows_to_site_after_payload() {
        let chart = build_scatter_view(
            &two_site_dataset(),
            &SiteSelection::from("B"),
            PayloadRange::new(0.0, 5000.0),
        );

        assert_eq!(chart.title(), "Success by Payload for B");
        assert_eq!(scatter_payloads(&chart), [2500.0]);
    }

    #[test]
    fn scatter_groups_points_by_booster_category() {
        let dataset = Dataset::new(vec![
            record("A", 100.0, 1, "FT"),
            record("A", 200.0, 0, "v1.0"),
            record("B", 300.0, 1, "FT"),
        ]);
        let chart = build_scatter_view(&dataset, &SiteSelection::All, PayloadRange::default());
        let scatter = chart.as_scatter().expect("scatter chart");

        let categories = scatter
            .series
            .iter()
            .map(|series| (series.category.as_str(), series.points.len()))
            .collect::<Vec<_>>();
        assert_eq!(categories, [("FT", 2), ("v1.0", 1)]);
        assert_eq!(scatter.series[1].points[0].y, 0.0);
        assert_eq!(scatter.series[0].points[1].y, 1.0);
        assert_eq!(scatter.x_label, "Payload Mass (kg)");
        assert_eq!(scatter.y_label, "class");
        assert_eq!(scatter.color_label, "Booster Version Category");
    }

    #[test]
    fn scatter_tolerates_inverted_and_unknown_inputs() {
        let dataset = two_site_dataset();

        let inverted = build_scatter_view(
            &dataset,
            &SiteSelection::All,
            PayloadRange::new(10_000.0, 0.0),
        );
        assert_eq!(inverted.as_scatter().map(ScatterChart::point_count), Some(0));

        let unknown = build_scatter_view(
            &dataset,
            &SiteSelection::from("C"),
            PayloadRange::default(),
        );
        assert_eq!(unknown.as_scatter().map(ScatterChart::point_count), Some(0));
    }

    #[test]
    fn builders_are_idempotent() {
        let dataset = two_site_dataset();
        let site = SiteSelection::from("A");
        let range = PayloadRange::new(0.0, 2000.0);

        assert_eq!(
            build_pie_view(&dataset, &site),
            build_pie_view(&dataset, &site)
        );
        assert_eq!(
            build_pie_view(&dataset, &SiteSelection::All),
            build_pie_view(&dataset, &SiteSelection::All)
        );
        assert_eq!(
            build_scatter_view(&dataset, &site, range),
            build_scatter_view(&dataset, &site, range)
        );
    }

    #[test]
    fn point_labels_use_flight_and_booster() {
        let mut launch = record("A", 100.0, 1, "FT");
        assert_eq!(point_label(&launch), None);

        launch.flight_number = Some(7);
        assert_eq!(point_label(&launch).as_deref(), Some("Flight 7"));

        launch.booster_version = Some("F9 FT B1021.1".to_owned());
        assert_eq!(
            point_label(&launch).as_deref(),
            Some("Flight 7: F9 FT B1021.1")
        );
    }

    #[test]
    fn chart_spec_serializes_with_type_tag() {
        let chart = build_pie_view(&two_site_dataset(), &SiteSelection::All);
        let json = serde_json::to_value(&chart).expect("serializable");

        assert_eq!(json["type"], "pie");
        assert_eq!(json["title"], "Successful Launches by Site");
        assert_eq!(json["slices"][1]["value"], 2);
    }
}
