use std::f32::consts::TAU;

use egui::{Align2, Color32, FontId, Sense, Shape, Stroke, Vec2, Widget};

use crate::stats::LanguageShare;

const PALETTE: [Color32; 10] = [
    Color32::from_rgb(0x4e, 0x79, 0xa7),
    Color32::from_rgb(0xf2, 0x8e, 0x2b),
    Color32::from_rgb(0xe1, 0x57, 0x59),
    Color32::from_rgb(0x76, 0xb7, 0xb2),
    Color32::from_rgb(0x59, 0xa1, 0x4f),
    Color32::from_rgb(0xed, 0xc9, 0x48),
    Color32::from_rgb(0xb0, 0x7a, 0xa1),
    Color32::from_rgb(0xff, 0x9d, 0xa7),
    Color32::from_rgb(0x9c, 0x75, 0x5f),
    Color32::from_rgb(0xba, 0xb0, 0xac),
];

pub fn slice_color(index: usize) -> Color32 {
    PALETTE[index % PALETTE.len()]
}

pub struct PieChart<'a> {
    shares: &'a [LanguageShare],
}

impl<'a> PieChart<'a> {
    pub fn new(shares: &'a [LanguageShare]) -> Self {
        PieChart { shares }
    }
}

impl Widget for PieChart<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let desired_size = Vec2::new(360.0, 360.0);

        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::hover());

        if !ui.is_rect_visible(rect) || self.shares.is_empty() {
            return response;
        }

        let center = rect.center();
        let radius = 0.45 * rect.height();
        let painter = ui.painter();

        // Start at 12 o'clock, sweep clockwise.
        let mut angle = -TAU / 4.0;

        for (i, share) in self.shares.iter().enumerate() {
            let sweep = (share.percent as f32 / 100.0) * TAU;
            let color = slice_color(i);

            // Fan of thin triangles, so slices wider than a half turn
            // still fill correctly.
            let steps = (sweep / 0.05).ceil().max(1.0) as usize;
            let step = sweep / steps as f32;
            for s in 0..steps {
                let a0 = angle + step * s as f32;
                let a1 = a0 + step;
                let points = vec![
                    center,
                    center + radius * Vec2::new(a0.cos(), a0.sin()),
                    center + radius * Vec2::new(a1.cos(), a1.sin()),
                ];
                painter.add(Shape::convex_polygon(points, color, Stroke::none()));
            }

            // Annotate the slice at its mid-angle; skip slivers the text
            // would overflow.
            if share.percent >= 2.0 {
                let mid = angle + sweep / 2.0;
                let label_pos = center + 0.65 * radius * Vec2::new(mid.cos(), mid.sin());
                painter.text(
                    label_pos,
                    Align2::CENTER_CENTER,
                    format!("{:.1}%", share.percent),
                    FontId::proportional(13.0),
                    Color32::WHITE,
                );
            }

            angle += sweep;
        }

        response
    }
}
