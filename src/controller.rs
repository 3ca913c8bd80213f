use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::launch::{Dataset, PayloadRange, SiteSelection};
use crate::view::{ChartSpec, build_pie_view, build_scatter_view};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidFilterError {
    #[error("unknown launch site `{0}`")]
    UnknownSite(String),
}

/// Inputs of one interaction: the dropdown value and the payload slider.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteOption {
    pub value: SiteSelection,
    pub label: String,
}

const KNOWN_SITE_NAMES: [(&str, &str); 4] = [
    ("CCAFS LC-40", "Cape Canaveral Launch Complex 40"),
    ("CCAFS SLC-40", "Cape Canaveral Space Launch Complex 40"),
    ("KSC LC-39A", "Kennedy Space Center Launch Complex 39A"),
    ("VAFB SLC-4E", "Vandenberg Space Launch Complex 4"),
];

fn site_label(site: &str) -> String {
    KNOWN_SITE_NAMES
        .iter()
        .find(|(code, _)| *code == site)
        .map(|(_, name)| (*name).to_owned())
        .unwrap_or_else(|| site.to_owned())
}

/// Maps input changes to freshly built chart views. Holds nothing but the
/// shared dataset and the site options derived from it.
pub struct Controller {
    dataset: Arc<Dataset>,
    site_options: Vec<SiteOption>,
}

impl Controller {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let site_options = std::iter::once(SiteOption {
            value: SiteSelection::All,
            label: "All Sites".to_owned(),
        })
        .chain(dataset.sites().iter().map(|site| SiteOption {
            value: SiteSelection::Site(site.clone()),
            label: site_label(site),
        }))
        .collect();

        Self {
            dataset,
            site_options,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn site_options(&self) -> &[SiteOption] {
        &self.site_options
    }

    pub fn site_label(&self, site: &SiteSelection) -> Option<&str> {
        self.site_options
            .iter()
            .find(|option| &option.value == site)
            .map(|option| option.label.as_str())
    }

    fn validate_site(&self, site: &SiteSelection) -> Result<(), InvalidFilterError> {
        match site {
            SiteSelection::All => Ok(()),
            SiteSelection::Site(name) if self.dataset.contains_site(name) => Ok(()),
            SiteSelection::Site(name) => {
                warn!(site = %name, "rejected unknown launch site");
                Err(InvalidFilterError::UnknownSite(name.clone()))
            }
        }
    }

    /// Pie binding: fires when the site dropdown changes.
    pub fn on_site_change(&self, site: &SiteSelection) -> Result<ChartSpec, InvalidFilterError> {
        self.validate_site(site)?;

        let chart = build_pie_view(&self.dataset, site);
        debug!(site = %site, title = chart.title(), "rebuilt pie view");
        trace_chart(&chart);
        Ok(chart)
    }

    /// Scatter binding: fires when either the site or the payload range changes.
    pub fn on_site_or_payload_change(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<ChartSpec, InvalidFilterError> {
        self.validate_site(&criteria.site)?;

        let chart = build_scatter_view(&self.dataset, &criteria.site, criteria.payload_range);
        debug!(
            site = %criteria.site,
            payload_range = %criteria.payload_range,
            title = chart.title(),
            "rebuilt scatter view"
        );
        trace_chart(&chart);
        Ok(chart)
    }

    /// Pie and scatter views for the first render.
    pub fn initial_views(&self) -> Result<(ChartSpec, ChartSpec), InvalidFilterError> {
        let criteria = FilterCriteria::default();
        Ok((
            self.on_site_change(&criteria.site)?,
            self.on_site_or_payload_change(&criteria)?,
        ))
    }
}

fn trace_chart(chart: &ChartSpec) {
    if tracing::enabled!(tracing::Level::TRACE) {
        match serde_json::to_string(chart) {
            Ok(json) => trace!(chart = %json, "chart spec"),
            Err(error) => trace!(%error, "chart spec could not be serialized"),
        }
    }
}
