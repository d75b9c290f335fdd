use eframe::egui::{self, Context, ScrollArea};

use crate::content::PortfolioContent;

mod graph;
mod highlight;
mod physics;
mod render_utils;
mod ui;

use graph::SkillGraph;

pub struct PortfolioApp {
    model: ViewModel,
}

/// Page-level state. This is the owner of the selected-skill filter: the
/// graph (and the chip lists) relay raw click events here and `set_selected`
/// applies the toggle, re-rendering the projects and experience sections
/// with the new filter on the next frame.
struct ViewModel {
    content: PortfolioContent,
    selected_skill: Option<String>,
    skill_search: String,
    /// Built once, on the first frame the skills section knows its width.
    /// Selection and search changes never rebuild it.
    graph: Option<SkillGraph>,
}

impl PortfolioApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, content: PortfolioContent) -> Self {
        Self {
            model: ViewModel::new(content),
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                self.model.show_hero(ui);
                self.model.show_metrics(ui);
                self.model.show_projects(ui);
                self.model.show_experience(ui);
                self.model.show_skills(ui);
                self.model.show_footer(ui);
            });
        });
    }
}

impl ViewModel {
    fn new(content: PortfolioContent) -> Self {
        Self {
            content,
            selected_skill: None,
            skill_search: String::new(),
            graph: None,
        }
    }

    /// Toggle semantics: re-selecting the current value clears the filter,
    /// `None` always clears.
    fn set_selected(&mut self, skill: Option<String>) {
        self.selected_skill = if self.selected_skill == skill {
            None
        } else {
            skill
        };
    }

    fn matches_filter(&self, tags: &[String]) -> bool {
        match &self.selected_skill {
            None => true,
            Some(selected) => tags.iter().any(|tag| tag_matches(tag, selected)),
        }
    }
}

/// Case-insensitive containment in either direction, so "SQL" matches
/// "MS-SQL" and "Database" entries tagged "Database" match "Oracle DB"-style
/// selections only when one contains the other.
fn tag_matches(tag: &str, selected: &str) -> bool {
    let tag = tag.to_lowercase();
    let selected = selected.to_lowercase();
    tag.contains(&selected) || selected.contains(&tag)
}

#[cfg(test)]
mod tests {
    use crate::content::PortfolioContent;

    use super::{ViewModel, tag_matches};

    #[test]
    fn selection_toggles_and_clears() {
        let mut model = ViewModel::new(PortfolioContent::builtin());
        assert_eq!(model.selected_skill, None);

        model.set_selected(Some("Java".to_owned()));
        assert_eq!(model.selected_skill.as_deref(), Some("Java"));

        // Different value replaces the filter.
        model.set_selected(Some("AWS".to_owned()));
        assert_eq!(model.selected_skill.as_deref(), Some("AWS"));

        // Same value clears it.
        model.set_selected(Some("AWS".to_owned()));
        assert_eq!(model.selected_skill, None);

        // Background click (None) clears, and clearing twice stays cleared.
        model.set_selected(Some("Docker".to_owned()));
        model.set_selected(None);
        assert_eq!(model.selected_skill, None);
        model.set_selected(None);
        assert_eq!(model.selected_skill, None);
    }

    #[test]
    fn filter_matching_is_case_insensitive_both_ways() {
        assert!(tag_matches("Java", "java"));
        assert!(tag_matches("SQL", "MS-SQL"));
        assert!(tag_matches("MS-SQL", "SQL"));
        assert!(!tag_matches("Java", "Rust"));
    }

    #[test]
    fn no_selection_matches_everything() {
        let model = ViewModel::new(PortfolioContent::builtin());
        assert!(model.matches_filter(&["anything".to_owned()]));
        assert!(model.matches_filter(&[]));
    }
}
