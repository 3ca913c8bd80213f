use std::sync::Arc;

use crate::controller::{Controller, FilterCriteria, InvalidFilterError};
use crate::launch::Dataset;

use super::ViewModel;

impl ViewModel {
    pub(super) fn new(dataset: Arc<Dataset>) -> Result<Self, InvalidFilterError> {
        let controller = Controller::new(dataset);
        let criteria = FilterCriteria::default();
        let (pie, scatter) = controller.initial_views()?;

        Ok(Self {
            controller,
            site_search: String::new(),
            pie_input: criteria.site.clone(),
            scatter_input: criteria.clone(),
            criteria,
            pie,
            scatter,
            status: None,
        })
    }

    /// Re-runs each chart handler whose inputs differ from the last dispatch.
    /// A rejected input keeps the previous chart and surfaces the error.
    pub(super) fn refresh_views(&mut self) {
        let mut dispatched = false;
        let mut rejection = None;

        if self.criteria.site != self.pie_input {
            dispatched = true;
            self.pie_input = self.criteria.site.clone();
            match self.controller.on_site_change(&self.pie_input) {
                Ok(chart) => self.pie = chart,
                Err(error) => rejection = Some(error.to_string()),
            }
        }

        if self.criteria != self.scatter_input {
            dispatched = true;
            self.scatter_input = self.criteria.clone();
            match self.controller.on_site_or_payload_change(&self.scatter_input) {
                Ok(chart) => self.scatter = chart,
                Err(error) => rejection = Some(error.to_string()),
            }
        }

        if dispatched {
            self.status = rejection;
        }
    }

    pub(super) fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.site_search.clear();
    }
}
