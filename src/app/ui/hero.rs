use eframe::egui::{Color32, RichText, Ui};

use super::super::ViewModel;
use super::super::render_utils::{ACCENT_COLOR, MUTED_COLOR, TEXT_COLOR};

impl ViewModel {
    pub(in crate::app) fn show_hero(&self, ui: &mut Ui) {
        let profile = &self.content.profile;

        ui.add_space(28.0);
        ui.label(
            RichText::new(&profile.name)
                .size(40.0)
                .strong()
                .color(Color32::WHITE),
        );
        ui.label(RichText::new(&profile.title).size(20.0).color(ACCENT_COLOR));
        ui.label(RichText::new(&profile.location).size(14.0).color(MUTED_COLOR));

        ui.add_space(12.0);
        ui.label(RichText::new(&profile.summary).size(14.0).color(TEXT_COLOR));

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.hyperlink_to("GitHub", &profile.github);
            ui.hyperlink_to("LinkedIn", &profile.linkedin);
            ui.hyperlink_to(profile.email.as_str(), format!("mailto:{}", profile.email));
        });
    }
}
