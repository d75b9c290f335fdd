use eframe::egui::{RichText, Ui};

use super::super::ViewModel;
use super::super::render_utils::{ACCENT_COLOR, FAINT_COLOR, TEXT_COLOR};
use super::section_heading;

const COLUMNS: usize = 3;

impl ViewModel {
    pub(in crate::app) fn show_metrics(&self, ui: &mut Ui) {
        section_heading(
            ui,
            "Impact Metrics",
            "Measurable outcomes from a decade of shipping software.",
        );

        for row in self.content.metrics.chunks(COLUMNS) {
            ui.columns(COLUMNS, |columns| {
                for (metric, column) in row.iter().zip(columns.iter_mut()) {
                    column.group(|ui| {
                        ui.label(
                            RichText::new(&metric.value)
                                .size(30.0)
                                .strong()
                                .color(ACCENT_COLOR),
                        );
                        ui.label(RichText::new(&metric.description).size(13.0).color(TEXT_COLOR));
                        ui.label(RichText::new(&metric.context).size(11.0).color(FAINT_COLOR));
                    });
                }
            });
            ui.add_space(8.0);
        }
    }
}
