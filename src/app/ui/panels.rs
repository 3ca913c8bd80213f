use std::path::Path;

use eframe::egui::{self, Align, Context, Layout};

use super::super::{DASHBOARD_TITLE, ViewModel};

impl ViewModel {
    pub(in crate::app) fn show(&mut self, ctx: &Context, data_path: &Path) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(DASHBOARD_TITLE);
                    ui.separator();
                    ui.label(format!("data: {}", data_path.display()));
                    ui.label(format!("launches: {}", self.controller.dataset().len()));
                    ui.label(format!(
                        "sites: {}",
                        self.controller.dataset().sites().len()
                    ));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if let Some(status) = &self.status {
                            ui.colored_label(ui.visuals().error_fg_color, status.as_str());
                        }
                    });
                });
            });

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| self.draw_controls(ui));

        self.refresh_views();

        egui::CentralPanel::default().show(ctx, |ui| self.draw_charts(ui));
    }
}
