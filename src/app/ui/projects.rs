use eframe::egui::{Color32, RichText, Ui};

use super::super::ViewModel;
use super::super::render_utils::{FAINT_COLOR, TEXT_COLOR, fade};
use super::section_heading;

impl ViewModel {
    pub(in crate::app) fn show_projects(&mut self, ui: &mut Ui) {
        section_heading(
            ui,
            "Projects",
            "Selected work. Click a technology to filter the page by it.",
        );

        let mut clicked = None;
        for project in &self.content.projects {
            let relevant = self.matches_filter(&project.technologies);
            let title_color = if relevant { Color32::WHITE } else { FAINT_COLOR };
            let body_color = if relevant { TEXT_COLOR } else { fade(FAINT_COLOR, 0.7) };

            ui.group(|ui| {
                ui.label(RichText::new(&project.title).size(17.0).strong().color(title_color));
                ui.label(RichText::new(&project.description).size(13.0).color(body_color));
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    for tech in &project.technologies {
                        let is_selected = self.selected_skill.as_deref() == Some(tech.as_str());
                        if ui.selectable_label(is_selected, RichText::new(tech).size(11.0)).clicked() {
                            clicked = Some(tech.clone());
                        }
                    }
                });
            });
            ui.add_space(8.0);
        }

        if let Some(tech) = clicked {
            self.set_selected(Some(tech));
        }
    }
}
