use eframe::egui::{self, RichText, Ui};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::controller::SiteOption;
use crate::launch::{PayloadRange, SiteSelection};
use crate::util::format_mass_kg;

use super::super::ViewModel;
use super::range_slider::RangeSlider;

const SITE_PLACEHOLDER: &str = "Select a Launch Site";
const PAYLOAD_TICK_EVERY: f64 = 2_500.0;

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_ascii_lowercase(), &query.to_ascii_lowercase()))
}

/// Options whose label or site code fuzzy-match `query`, best match first.
fn matching_site_options<'a>(options: &'a [SiteOption], query: &str) -> Vec<&'a SiteOption> {
    let query = query.trim();
    if query.is_empty() {
        return options.iter().collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored = options
        .iter()
        .filter_map(|option| {
            let label_score = fuzzy_match_score(&matcher, &option.label, query);
            let code_score = fuzzy_match_score(&matcher, option.value.as_str(), query);
            label_score.max(code_score).map(|score| (score, option))
        })
        .collect::<Vec<_>>();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, option)| option).collect()
}

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("Filters");
        ui.separator();
        ui.add_space(4.0);

        ui.label("Launch site")
            .on_hover_text("Pick one launch site or all of them.");
        self.draw_site_dropdown(ui);

        ui.add_space(12.0);
        ui.label("Payload Range (Kg):");
        let slider = ui
            .add(
                RangeSlider::new(
                    &mut self.criteria.payload_range,
                    PayloadRange::SLIDER_MIN,
                    PayloadRange::SLIDER_MAX,
                )
                .step_by(PayloadRange::SLIDER_STEP)
                .ticks_every(PAYLOAD_TICK_EVERY),
            )
            .on_hover_text("Drag a handle, or focus the slider and use the arrow keys.");
        if slider.hovered() {
            slider.request_focus();
        }
        ui.label(format!(
            "{} to {}",
            format_mass_kg(self.criteria.payload_range.min),
            format_mass_kg(self.criteria.payload_range.max)
        ));

        ui.separator();
        let dataset = self.controller.dataset();
        ui.label(RichText::new("Dataset").strong());
        ui.label(format!("Launches: {}", dataset.len()));
        ui.label(format!("Sites: {}", dataset.sites().len()));
        if dataset.is_empty() {
            ui.weak("The data file has no launch rows.");
        }

        ui.add_space(8.0);
        if ui
            .button("Reset filters")
            .on_hover_text("Back to all sites and the full payload span.")
            .clicked()
        {
            self.reset_filters();
        }
    }

    fn draw_site_dropdown(&mut self, ui: &mut Ui) {
        let options = self.controller.site_options();
        let selected = &mut self.criteria.site;
        let search = &mut self.site_search;

        let selected_text = self
            .controller
            .site_label(selected)
            .unwrap_or(SITE_PLACEHOLDER)
            .to_owned();

        egui::ComboBox::from_id_salt("site-dropdown")
            .selected_text(selected_text)
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                ui.add(egui::TextEdit::singleline(&mut *search).hint_text("Search sites"));
                ui.separator();

                let matches = matching_site_options(options, search.as_str());
                if matches.is_empty() {
                    ui.weak("No matching sites");
                }
                for option in matches {
                    ui.selectable_value(selected, option.value.clone(), option.label.as_str())
                        .on_hover_text(site_hover_text(&option.value));
                }
            });
    }
}

fn site_hover_text(site: &SiteSelection) -> String {
    match site {
        SiteSelection::All => "Every launch site in the data file".to_owned(),
        SiteSelection::Site(code) => format!("Site code: {code}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<SiteOption> {
        [
            ("ALL", "All Sites"),
            ("CCAFS LC-40", "Cape Canaveral Launch Complex 40"),
            ("KSC LC-39A", "Kennedy Space Center Launch Complex 39A"),
            ("VAFB SLC-4E", "Vandenberg Space Launch Complex 4"),
        ]
        .into_iter()
        .map(|(value, label)| SiteOption {
            value: SiteSelection::from(value),
            label: label.to_owned(),
        })
        .collect()
    }

    fn values<'a>(matches: &[&'a SiteOption]) -> Vec<&'a str> {
        matches.iter().map(|option| option.value.as_str()).collect()
    }

    #[test]
    fn blank_query_lists_every_option_in_order() {
        let options = options();
        assert_eq!(
            values(&matching_site_options(&options, "  ")),
            ["ALL", "CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );
    }

    #[test]
    fn query_matches_labels_and_codes() {
        let options = options();

        assert_eq!(values(&matching_site_options(&options, "kennedy")), ["KSC LC-39A"]);
        assert_eq!(values(&matching_site_options(&options, "VAFB")), ["VAFB SLC-4E"]);
        assert!(matching_site_options(&options, "zzzz").is_empty());
    }
}
