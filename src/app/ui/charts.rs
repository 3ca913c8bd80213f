use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Align2, Color32, FontId, RichText, Sense, Stroke, Ui, vec2};
use egui_plot::{Corner, Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::launch::PayloadRange;
use crate::util::{format_mass_kg, percent};
use crate::view::{PieChart, ScatterChart};

use super::super::ViewModel;
use super::super::render_utils::{
    blend_color, category_color, palette_color, polar, wedge_at, wedge_mesh,
};

const PIE_SIZE: f32 = 280.0;
const PIE_START_ANGLE: f32 = -FRAC_PI_2;
const SCATTER_HEIGHT: f32 = 360.0;
/// Hover radius for the nearest-launch readout, as a fraction of the plot span.
const NEAREST_POINT_REACH: f64 = 0.03;

struct NearestLaunch {
    category: String,
    label: Option<String>,
    payload_mass_kg: f64,
    class: f64,
}

impl ViewModel {
    pub(in crate::app) fn draw_charts(&self, ui: &mut Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if let Some(pie) = self.pie.as_pie() {
                    draw_pie(ui, pie);
                }
                ui.add_space(16.0);
                ui.separator();
                if let Some(scatter) = self.scatter.as_scatter() {
                    draw_scatter(ui, scatter);
                }
            });
    }
}

fn draw_pie(ui: &mut Ui, pie: &PieChart) {
    ui.label(RichText::new(&pie.title).heading());
    ui.add_space(6.0);

    let total = pie.total();
    if total == 0 {
        ui.weak(if pie.slices.is_empty() {
            "No launches match this selection."
        } else {
            "No successful launches to show."
        });
        return;
    }

    let sweeps = pie
        .slices
        .iter()
        .map(|slice| TAU * slice.value as f32 / total as f32)
        .collect::<Vec<_>>();

    ui.horizontal(|ui| {
        let (rect, response) = ui.allocate_exact_size(vec2(PIE_SIZE, PIE_SIZE), Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = PIE_SIZE * 0.46;
        let hovered = response
            .hover_pos()
            .and_then(|pointer| wedge_at(pointer - center, radius, PIE_START_ANGLE, &sweeps));
        let separator = Stroke::new(1.5, ui.visuals().panel_fill);

        let mut start = PIE_START_ANGLE;
        for (index, sweep) in sweeps.iter().copied().enumerate() {
            if sweep <= 0.0 {
                continue;
            }

            let mut color = palette_color(index);
            if hovered == Some(index) {
                color = blend_color(color, Color32::WHITE, 0.25);
            }
            painter.add(egui::Shape::mesh(wedge_mesh(center, radius, start, sweep, color)));
            if sweep < TAU {
                painter.line_segment([center, polar(center, radius, start)], separator);
            }

            if sweep > 0.25 {
                let share = percent(pie.slices[index].value, total);
                painter.text(
                    polar(center, radius * 0.65, start + sweep * 0.5),
                    Align2::CENTER_CENTER,
                    format!("{share:.1}%"),
                    FontId::proportional(12.0),
                    Color32::WHITE,
                );
            }
            start += sweep;
        }

        ui.add_space(12.0);
        ui.vertical(|ui| {
            for (index, slice) in pie.slices.iter().enumerate() {
                ui.horizontal(|ui| {
                    let (swatch, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
                    ui.painter().rect_filled(swatch, 2.0, palette_color(index));
                    let text = format!(
                        "{}: {} ({:.1}%)",
                        slice.label,
                        slice.value,
                        percent(slice.value, total)
                    );
                    if hovered == Some(index) {
                        ui.label(RichText::new(text).strong());
                    } else {
                        ui.label(text);
                    }
                });
            }
        });

        if let Some(index) = hovered {
            let slice = &pie.slices[index];
            response.on_hover_text_at_pointer(format!(
                "{}\n{} of {total}",
                slice.label, slice.value
            ));
        }
    });
}

fn draw_scatter(ui: &mut Ui, scatter: &ScatterChart) {
    ui.label(RichText::new(&scatter.title).heading());
    ui.add_space(6.0);

    let point_count = scatter.point_count();
    if point_count == 0 {
        ui.weak("No launches in the selected payload range.");
    } else {
        ui.weak(format!("{point_count} launches"));
    }

    let plot = Plot::new("payload_scatter")
        .height(SCATTER_HEIGHT)
        .legend(Legend::default().position(Corner::RightTop))
        .x_axis_label(scatter.x_label.as_str())
        .y_axis_label(scatter.y_label.as_str())
        .include_x(PayloadRange::SLIDER_MIN)
        .include_x(PayloadRange::SLIDER_MAX)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_scroll(false);

    let nearest = plot
        .show(ui, |plot_ui| {
            for series in &scatter.series {
                let points = series
                    .points
                    .iter()
                    .map(|point| [point.x, point.y])
                    .collect::<PlotPoints>();
                plot_ui.points(
                    Points::new(series.category.as_str(), points)
                        .color(category_color(&series.category))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(5.0),
                );
            }

            let pointer = plot_ui.pointer_coordinate()?;
            let bounds = plot_ui.plot_bounds();
            let x_span = bounds.width().max(f64::EPSILON);
            let y_span = bounds.height().max(f64::EPSILON);

            scatter
                .series
                .iter()
                .flat_map(|series| series.points.iter().map(move |point| (series, point)))
                .map(|(series, point)| {
                    let dx = (point.x - pointer.x) / x_span;
                    let dy = (point.y - pointer.y) / y_span;
                    ((dx * dx + dy * dy).sqrt(), series, point)
                })
                .filter(|(distance, _, _)| *distance <= NEAREST_POINT_REACH)
                .min_by(|a, b| a.0.total_cmp(&b.0))
                .map(|(_, series, point)| NearestLaunch {
                    category: series.category.clone(),
                    label: point.label.clone(),
                    payload_mass_kg: point.x,
                    class: point.y,
                })
        })
        .inner;

    match nearest {
        Some(launch) => {
            let name = launch.label.as_deref().unwrap_or("launch");
            ui.label(format!(
                "{name} ({} {}): {}, class {:.0}",
                scatter.color_label,
                launch.category,
                format_mass_kg(launch.payload_mass_kg),
                launch.class
            ));
        }
        None => {
            ui.weak("Hover a point for launch details.");
        }
    }
}
