use std::collections::HashSet;

use eframe::egui::{RichText, TextEdit, Ui, vec2};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::super::graph::SkillGraph;
use super::super::render_utils::{CATEGORY_PALETTE, FAINT_COLOR};
use super::super::ViewModel;
use super::section_heading;

const GRAPH_HEIGHT: f32 = 600.0;

impl ViewModel {
    pub(in crate::app) fn show_skills(&mut self, ui: &mut Ui) {
        section_heading(
            ui,
            "Technical Arsenal",
            "A network of technologies defining the stack. Interact with the graph to filter \
             experience and projects.",
        );

        ui.horizontal(|ui| {
            ui.add(
                TextEdit::singleline(&mut self.skill_search)
                    .hint_text("Search skills")
                    .desired_width(220.0),
            );
            if let Some(selected) = self.selected_skill.clone()
                && ui.button(format!("Reset filter: {selected}")).clicked()
            {
                self.set_selected(None);
            }
        });
        ui.add_space(8.0);

        // The graph mounts on the first frame the section has a measured
        // width; later selection or search changes only re-run the highlight
        // pass, never a rebuild.
        let width = ui.available_width();
        if self.graph.is_none() && width > 0.0 {
            self.graph = Some(SkillGraph::build(
                &self.content.skills,
                &self.content.cross_links,
                vec2(width, GRAPH_HEIGHT),
            ));
        }

        let matches = self.search_matches();
        let selected = self.selected_skill.clone();
        let event = self
            .graph
            .as_mut()
            .and_then(|graph| graph.draw(ui, selected.as_deref(), matches.as_ref()));
        if let Some(raw) = event {
            self.set_selected(raw);
        }

        ui.add_space(16.0);
        self.show_category_chips(ui);
    }

    fn search_matches(&self) -> Option<HashSet<usize>> {
        let query = self.skill_search.trim();
        if query.is_empty() {
            return None;
        }
        let graph = self.graph.as_ref()?;

        let matcher = SkimMatcherV2::default();
        Some(
            graph
                .nodes
                .iter()
                .enumerate()
                .filter_map(|(index, node)| {
                    matcher.fuzzy_match(&node.id, query).map(|_score| index)
                })
                .collect(),
        )
    }

    fn show_category_chips(&mut self, ui: &mut Ui) {
        let mut clicked = None;
        let column_count = self.content.skills.len().max(1);

        ui.columns(column_count, |columns| {
            for (index, (cat, column)) in self
                .content
                .skills
                .iter()
                .zip(columns.iter_mut())
                .enumerate()
            {
                let color = CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()];
                column.label(
                    RichText::new(cat.category.to_uppercase())
                        .size(12.0)
                        .strong()
                        .color(color),
                );
                column.separator();
                column.horizontal_wrapped(|ui| {
                    for skill in &cat.skills {
                        let is_selected = self.selected_skill.as_deref() == Some(skill.as_str());
                        if ui
                            .selectable_label(is_selected, RichText::new(skill).size(11.0))
                            .clicked()
                        {
                            clicked = Some(skill.clone());
                        }
                    }
                });
            }
        });

        if let Some(skill) = clicked {
            self.set_selected(Some(skill));
        }

        if self.content.skills.is_empty() {
            ui.label(RichText::new("No skills configured.").color(FAINT_COLOR));
        }
    }
}
