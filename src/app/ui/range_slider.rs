use eframe::egui::{
    self, Align2, FontId, Key, Rect, Response, Sense, Ui, Widget, pos2, vec2,
};

use crate::launch::PayloadRange;

const HANDLE_RADIUS: f32 = 8.0;
const TRACK_THICKNESS: f32 = 4.0;
const TICK_LABEL_GAP: f32 = 12.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Handle {
    #[default]
    Low,
    High,
}

/// Two-handle slider over a payload interval. Handles snap to `step` and
/// never cross.
pub(in crate::app) struct RangeSlider<'a> {
    range: &'a mut PayloadRange,
    min: f64,
    max: f64,
    step: f64,
    tick_every: f64,
}

impl<'a> RangeSlider<'a> {
    pub(in crate::app) fn new(range: &'a mut PayloadRange, min: f64, max: f64) -> Self {
        Self {
            range,
            min,
            max,
            step: 0.0,
            tick_every: 0.0,
        }
    }

    pub(in crate::app) fn step_by(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub(in crate::app) fn ticks_every(mut self, tick_every: f64) -> Self {
        self.tick_every = tick_every;
        self
    }
}

fn snap(value: f64, min: f64, max: f64, step: f64) -> f64 {
    let snapped = if step > 0.0 {
        min + ((value - min) / step).round() * step
    } else {
        value
    };
    snapped.clamp(min, max)
}

fn nearest_handle(pointer_x: f32, low_x: f32, high_x: f32) -> Handle {
    let low_distance = (pointer_x - low_x).abs();
    let high_distance = (pointer_x - high_x).abs();

    if low_distance < high_distance || (low_distance == high_distance && pointer_x < low_x) {
        Handle::Low
    } else {
        Handle::High
    }
}

fn move_handle(range: &mut PayloadRange, handle: Handle, value: f64) {
    match handle {
        Handle::Low => range.min = value.min(range.max),
        Handle::High => range.max = value.max(range.min),
    }
}

impl Widget for RangeSlider<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self {
            range,
            min,
            max,
            step,
            tick_every,
        } = self;

        let desired_size = vec2(ui.available_width().max(160.0), 46.0);
        let (rect, mut response) = ui.allocate_exact_size(desired_size, Sense::click_and_drag());

        let track_y = rect.top() + HANDLE_RADIUS + 4.0;
        let track = Rect::from_min_max(
            pos2(rect.left() + HANDLE_RADIUS, track_y - TRACK_THICKNESS * 0.5),
            pos2(rect.right() - HANDLE_RADIUS, track_y + TRACK_THICKNESS * 0.5),
        );
        let span = (max - min).max(f64::EPSILON);
        let to_x = |value: f64| {
            track.left() + (((value - min) / span).clamp(0.0, 1.0) as f32) * track.width()
        };
        let to_value = |x: f32| {
            min + (((x - track.left()) / track.width().max(1.0)).clamp(0.0, 1.0) as f64) * span
        };

        let state_id = response.id.with("active_handle");
        let mut active = ui
            .ctx()
            .data(|data| data.get_temp::<Handle>(state_id))
            .unwrap_or_default();
        let before = *range;

        if let Some(pointer) = response.interact_pointer_pos() {
            let pressed = ui.input(|input| input.pointer.primary_pressed());
            if pressed || response.drag_started() {
                active = nearest_handle(pointer.x, to_x(range.min), to_x(range.max));
                response.request_focus();
            }
            move_handle(range, active, snap(to_value(pointer.x), min, max, step));
        }

        if response.has_focus() {
            let (decrease, increase) = ui.input(|input| {
                (
                    input.key_pressed(Key::ArrowLeft) || input.key_pressed(Key::ArrowDown),
                    input.key_pressed(Key::ArrowRight) || input.key_pressed(Key::ArrowUp),
                )
            });
            let direction = (increase as i8 - decrease as i8) as f64;
            if direction != 0.0 {
                let nudge = if step > 0.0 { step } else { span / 100.0 };
                let current = match active {
                    Handle::Low => range.min,
                    Handle::High => range.max,
                };
                move_handle(range, active, snap(current + direction * nudge, min, max, step));
            }
        }

        ui.ctx()
            .data_mut(|data| data.insert_temp(state_id, active));

        if *range != before {
            response.mark_changed();
        }

        if ui.is_rect_visible(rect) {
            let visuals = ui.visuals();
            let painter = ui.painter_at(rect);

            painter.rect_filled(track, 2.0, visuals.widgets.inactive.bg_fill);
            let selected = Rect::from_min_max(
                pos2(to_x(range.min), track.top()),
                pos2(to_x(range.max), track.bottom()),
            );
            painter.rect_filled(selected, 2.0, visuals.selection.bg_fill);

            if tick_every > 0.0 {
                let mut tick = min;
                while tick <= max + f64::EPSILON {
                    let x = to_x(tick);
                    painter.line_segment(
                        [pos2(x, track.bottom() + 2.0), pos2(x, track.bottom() + 6.0)],
                        visuals.widgets.noninteractive.fg_stroke,
                    );
                    painter.text(
                        pos2(x, track.bottom() + TICK_LABEL_GAP),
                        Align2::CENTER_TOP,
                        format!("{tick:.0}"),
                        FontId::proportional(11.0),
                        visuals.weak_text_color(),
                    );
                    tick += tick_every;
                }
            }

            for (handle, value) in [(Handle::Low, range.min), (Handle::High, range.max)] {
                let center = pos2(to_x(value), track_y);
                let widget_visuals = if response.dragged() && handle == active {
                    &visuals.widgets.active
                } else if response.hovered() {
                    &visuals.widgets.hovered
                } else {
                    &visuals.widgets.inactive
                };
                let stroke = if response.has_focus() && handle == active {
                    visuals.selection.stroke
                } else {
                    widget_visuals.fg_stroke
                };

                painter.circle(center, HANDLE_RADIUS, widget_visuals.bg_fill, stroke);
            }
        }

        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Slider, true, format!("{}", *range))
        });
        response
    }
}
