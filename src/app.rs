use eframe::egui;
use egui::{CentralPanel, RichText, ScrollArea, TopBottomPanel};

use crate::pie_chart::{slice_color, PieChart};
use crate::stats::LanguageShare;
use crate::utils::bytes_to_human;

pub struct App {
    shares: Vec<LanguageShare>,
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Language Distribution");
        });
        CentralPanel::default().show(ctx, |ui| {
            ui.add(PieChart::new(&self.shares));

            ui.separator();

            ScrollArea::vertical().show(ui, |ui| {
                for (i, share) in self.shares.iter().enumerate() {
                    ui.label(
                        RichText::new(format!(
                            "{}: {:.2}% ({})",
                            share.language,
                            share.percent,
                            bytes_to_human(share.bytes)
                        ))
                        .color(slice_color(i)),
                    );
                }
            });
        });
    }
}

impl App {
    /// Opens the chart window; blocks until it is dismissed.
    pub fn run(shares: Vec<LanguageShare>) {
        let options = eframe::NativeOptions {
            initial_window_size: Some(egui::Vec2::new(420.0, 560.0)),
            ..Default::default()
        };

        eframe::run_native(
            "GitHub Language Stats",
            options,
            Box::new(|_cc| Box::new(App { shares })),
        );
    }
}
