use eframe::egui::{RichText, Ui};

use super::super::ViewModel;
use super::super::render_utils::FAINT_COLOR;

impl ViewModel {
    pub(in crate::app) fn show_footer(&self, ui: &mut Ui) {
        ui.add_space(32.0);
        ui.separator();
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("© {}", self.content.profile.name))
                    .size(12.0)
                    .color(FAINT_COLOR),
            );
            ui.hyperlink_to(RichText::new("GitHub").size(12.0), &self.content.profile.github);
            ui.hyperlink_to(
                RichText::new("LinkedIn").size(12.0),
                &self.content.profile.linkedin,
            );
        });
        ui.add_space(20.0);
    }
}
