use std::f32::consts::TAU;

use eframe::egui::{Color32, Mesh, Pos2, Vec2, vec2};

use crate::util::stable_slot;

const PALETTE: [Color32; 10] = [
    Color32::from_rgb(99, 110, 250),
    Color32::from_rgb(239, 85, 59),
    Color32::from_rgb(0, 204, 150),
    Color32::from_rgb(171, 99, 250),
    Color32::from_rgb(255, 161, 90),
    Color32::from_rgb(25, 211, 243),
    Color32::from_rgb(255, 102, 146),
    Color32::from_rgb(182, 232, 128),
    Color32::from_rgb(255, 151, 255),
    Color32::from_rgb(254, 203, 82),
];

pub(super) fn palette_color(index: usize) -> Color32 {
    PALETTE[index % PALETTE.len()]
}

/// Color keyed by name so a category keeps its color as filters change.
pub(super) fn category_color(name: &str) -> Color32 {
    PALETTE[stable_slot(name, PALETTE.len())]
}

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

pub(super) fn polar(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    center + vec2(angle.cos(), angle.sin()) * radius
}

/// Triangle fan covering one wedge. Angles are in screen space, clockwise.
pub(super) fn wedge_mesh(center: Pos2, radius: f32, start: f32, sweep: f32, color: Color32) -> Mesh {
    let segments = ((sweep / TAU) * 128.0).ceil().max(1.0) as u32;

    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, color);
    for step in 0..=segments {
        let angle = start + sweep * (step as f32 / segments as f32);
        mesh.colored_vertex(polar(center, radius, angle), color);
    }
    for step in 1..=segments {
        mesh.add_triangle(0, step, step + 1);
    }

    mesh
}

/// Index of the slice under `offset` (relative to the pie center), given
/// the slice sweeps in drawing order starting at `start`.
pub(super) fn wedge_at(offset: Vec2, radius: f32, start: f32, sweeps: &[f32]) -> Option<usize> {
    if offset.length() > radius {
        return None;
    }

    let angle = (offset.y.atan2(offset.x) - start).rem_euclid(TAU);
    let mut cursor = 0.0;
    for (index, sweep) in sweeps.iter().enumerate() {
        if *sweep <= 0.0 {
            continue;
        }
        cursor += *sweep;
        if angle < cursor {
            return Some(index);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn wedge_lookup_follows_drawing_order() {
        let sweeps = [PI, 0.0, PI];
        let start = -FRAC_PI_2;

        assert_eq!(wedge_at(vec2(10.0, 0.0), 50.0, start, &sweeps), Some(0));
        assert_eq!(wedge_at(vec2(-10.0, 0.0), 50.0, start, &sweeps), Some(2));
        assert_eq!(wedge_at(vec2(60.0, 0.0), 50.0, start, &sweeps), None);
    }

    #[test]
    fn wedge_mesh_is_a_closed_fan() {
        let mesh = wedge_mesh(Pos2::ZERO, 10.0, 0.0, FRAC_PI_2, Color32::WHITE);
        let segments = 32;

        assert_eq!(mesh.vertices.len(), segments + 2);
        assert_eq!(mesh.indices.len(), segments * 3);
    }

    #[test]
    fn category_colors_are_stable() {
        assert_eq!(category_color("FT"), category_color("FT"));
        assert_eq!(palette_color(0), palette_color(PALETTE.len()));
    }
}
