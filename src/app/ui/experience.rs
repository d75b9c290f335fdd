use eframe::egui::{Color32, RichText, Ui};

use super::super::ViewModel;
use super::super::render_utils::{ACCENT_COLOR, FAINT_COLOR, MUTED_COLOR, TEXT_COLOR, fade};
use super::section_heading;

impl ViewModel {
    pub(in crate::app) fn show_experience(&self, ui: &mut Ui) {
        section_heading(
            ui,
            "Work Experience",
            "Over a decade of engineering across global organizations.",
        );

        if let Some(selected) = &self.selected_skill {
            ui.label(
                RichText::new(format!("Filtering by: {selected}"))
                    .size(13.0)
                    .color(ACCENT_COLOR),
            );
            ui.add_space(6.0);
        }

        for job in &self.content.experience {
            let relevant = self.matches_filter(&job.tags);
            let heading_color = if relevant { Color32::WHITE } else { FAINT_COLOR };
            let body_color = if relevant { TEXT_COLOR } else { fade(FAINT_COLOR, 0.7) };

            ui.group(|ui| {
                ui.label(
                    RichText::new(&job.company)
                        .size(17.0)
                        .strong()
                        .color(heading_color),
                );
                ui.label(RichText::new(&job.role).size(14.0).color(body_color));
                ui.label(
                    RichText::new(format!("{}  ·  {}", job.period, job.location))
                        .size(12.0)
                        .color(FAINT_COLOR),
                );

                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    for tag in &job.tags {
                        let highlighted = relevant
                            && self
                                .selected_skill
                                .as_ref()
                                .is_some_and(|selected| super::super::tag_matches(tag, selected));
                        let color = if highlighted { ACCENT_COLOR } else { MUTED_COLOR };
                        ui.label(RichText::new(format!("[{tag}]")).size(11.0).color(color));
                    }
                });

                ui.add_space(4.0);
                for achievement in &job.achievements {
                    ui.label(
                        RichText::new(format!("• {achievement}"))
                            .size(12.0)
                            .color(body_color),
                    );
                }
            });
            ui.add_space(8.0);
        }
    }
}
