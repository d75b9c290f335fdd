use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

mod builtin;
pub mod taxonomy;

#[derive(Clone, Debug, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub summary: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MetricItem {
    pub value: String,
    pub description: String,
    pub context: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProjectItem {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ExperienceItem {
    pub role: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub tags: Vec<String>,
    pub achievements: Vec<String>,
}

/// One entry of the ordered category -> skills table driving the skill graph.
#[derive(Clone, Debug, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

/// Everything the page renders. `cross_links` is a hand-curated list of
/// skill pairs that get an extra edge in the graph; pairs whose endpoints are
/// not in the taxonomy are ignored at build time.
#[derive(Clone, Debug, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub metrics: Vec<MetricItem>,
    pub projects: Vec<ProjectItem>,
    pub experience: Vec<ExperienceItem>,
    pub skills: Vec<SkillCategory>,
    pub cross_links: Vec<(String, String)>,
}

impl PortfolioContent {
    pub fn builtin() -> Self {
        builtin::content()
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading content file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing content file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::PortfolioContent;

    #[test]
    fn builtin_content_is_complete() {
        let content = PortfolioContent::builtin();
        assert_eq!(content.skills.len(), 4);
        assert!(content.skills.iter().all(|cat| !cat.skills.is_empty()));
        assert!(!content.metrics.is_empty());
        assert!(!content.projects.is_empty());
        assert!(!content.experience.is_empty());
        assert!(!content.cross_links.is_empty());
    }

    #[test]
    fn content_parses_from_json() {
        let raw = r#"{
            "profile": {
                "name": "Ada", "title": "Engineer", "location": "London",
                "email": "ada@example.com", "github": "https://github.com/ada",
                "linkedin": "https://linkedin.com/in/ada", "summary": "Builds things."
            },
            "metrics": [{"value": "10%", "description": "Faster", "context": "Tuning"}],
            "projects": [{"title": "Engine", "description": "An engine", "technologies": ["Rust"]}],
            "experience": [{
                "role": "Engineer", "company": "Acme", "location": "London",
                "period": "2020 - Present", "tags": ["Rust"], "achievements": ["Shipped it"]
            }],
            "skills": [{"category": "Systems", "skills": ["Rust", "C"]}],
            "cross_links": [["Rust", "C"]]
        }"#;

        let content: PortfolioContent = serde_json::from_str(raw).expect("valid content");
        assert_eq!(content.profile.name, "Ada");
        assert_eq!(content.skills[0].skills, vec!["Rust", "C"]);
        assert_eq!(content.cross_links[0].0, "Rust");
    }
}
