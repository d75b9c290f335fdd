use eframe::egui::{Color32, RichText, Ui};

use super::render_utils::MUTED_COLOR;

mod experience;
mod footer;
mod hero;
mod metrics;
mod projects;
mod skills;

pub(super) fn section_heading(ui: &mut Ui, title: &str, subtitle: &str) {
    ui.add_space(36.0);
    ui.label(RichText::new(title).size(30.0).strong().color(Color32::WHITE));
    ui.add_space(4.0);
    ui.label(RichText::new(subtitle).size(14.0).color(MUTED_COLOR));
    ui.add_space(14.0);
}
