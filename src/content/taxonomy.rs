use super::SkillCategory;

/// Flattens the ordered category -> skills table into (category, skill)
/// pairs, preserving category order. Duplicate skill names are kept as
/// separate occurrences; ownership is per-occurrence.
pub fn skill_pairs(categories: &[SkillCategory]) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(categories.iter().map(|cat| cat.skills.len()).sum());
    for cat in categories {
        for skill in &cat.skills {
            pairs.push((cat.category.clone(), skill.clone()));
        }
    }
    pairs
}
