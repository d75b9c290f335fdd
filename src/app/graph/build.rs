use std::collections::HashMap;

use eframe::egui::{Vec2, vec2};

use crate::content::{SkillCategory, taxonomy};
use crate::util::stable_pair;

use super::super::render_utils::CATEGORY_PALETTE;
use super::{EdgeKind, GraphEdge, GraphNode, NodeKind, SkillGraph};

const CATEGORY_RADIUS: f32 = 24.0;
const SKILL_RADIUS: f32 = 8.0;
const STRUCTURAL_REST_LENGTH: f32 = 40.0;
const CROSS_REST_LENGTH: f32 = 100.0;
const CATEGORY_JITTER: f32 = 18.0;
const SKILL_JITTER: f32 = 80.0;

// Quadrant centers as fractions of the measured drawing area.
const ANCHOR_FRACTIONS: [(f32, f32); 4] = [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)];

impl SkillGraph {
    /// Builds the full node and edge sets from the taxonomy. Deterministic:
    /// the same taxonomy and size always produce the same ids, edges and
    /// initial positions. A zero-sized drawing area yields an empty graph.
    pub(in crate::app) fn build(
        categories: &[SkillCategory],
        cross_links: &[(String, String)],
        size: Vec2,
    ) -> Self {
        let mut graph = Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            index_by_id: HashMap::new(),
            neighbors: Vec::new(),
            anchors: Vec::new(),
            size,
            alpha: 1.0,
            alpha_target: 0.0,
            drag_index: None,
        };

        if size.x <= 0.0 || size.y <= 0.0 {
            return graph;
        }

        for (category_index, cat) in categories.iter().enumerate() {
            let (fx, fy) = ANCHOR_FRACTIONS[category_index % ANCHOR_FRACTIONS.len()];
            graph.anchors.push(vec2(size.x * fx, size.y * fy));
            graph.push_node(
                cat.category.clone(),
                NodeKind::Category,
                CATEGORY_RADIUS,
                category_index,
                CATEGORY_JITTER,
            );
        }

        let category_indices: HashMap<&str, usize> = categories
            .iter()
            .enumerate()
            .map(|(index, cat)| (cat.category.as_str(), index))
            .collect();

        for (category_id, skill_id) in taxonomy::skill_pairs(categories) {
            let Some(&category_index) = category_indices.get(category_id.as_str()) else {
                continue;
            };

            let skill_index =
                graph.push_node(skill_id, NodeKind::Skill, SKILL_RADIUS, category_index, SKILL_JITTER);
            graph.edges.push(GraphEdge {
                source: category_index,
                target: skill_index,
                kind: EdgeKind::Structural,
                rest_length: STRUCTURAL_REST_LENGTH,
            });
        }

        // Curated cross links only apply when both endpoints exist; a pair
        // referencing a missing skill is a curation mistake, not an error.
        for (source_id, target_id) in cross_links {
            if let (Some(source), Some(target)) =
                (graph.node_index(source_id), graph.node_index(target_id))
            {
                graph.edges.push(GraphEdge {
                    source,
                    target,
                    kind: EdgeKind::Cross,
                    rest_length: CROSS_REST_LENGTH,
                });
            }
        }

        graph.neighbors = vec![Vec::new(); graph.nodes.len()];
        for edge in &graph.edges {
            graph.neighbors[edge.source].push(edge.target);
            graph.neighbors[edge.target].push(edge.source);
        }

        graph
    }

    fn push_node(
        &mut self,
        id: String,
        kind: NodeKind,
        radius: f32,
        category_index: usize,
        jitter: f32,
    ) -> usize {
        let anchor = self
            .anchors
            .get(category_index)
            .copied()
            .unwrap_or(self.size * 0.5);
        let (jx, jy) = stable_pair(&id);
        let pos = anchor + vec2(jx, jy) * jitter;

        let index = self.nodes.len();
        self.index_by_id.insert(id.clone(), index);
        self.nodes.push(GraphNode {
            id,
            kind,
            radius,
            color: CATEGORY_PALETTE[category_index % CATEGORY_PALETTE.len()],
            category_index,
            pos,
            velocity: Vec2::ZERO,
            pinned: false,
        });
        index
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use crate::content::SkillCategory;

    use super::super::{EdgeKind, NodeKind, SkillGraph};

    fn category(name: &str, skills: &[&str]) -> SkillCategory {
        SkillCategory {
            category: name.to_owned(),
            skills: skills.iter().map(|skill| (*skill).to_owned()).collect(),
        }
    }

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_owned(), b.to_owned())
    }

    #[test]
    fn single_category_taxonomy_builds_star() {
        let graph = SkillGraph::build(&[category("A", &["x", "y"])], &[], vec2(800.0, 600.0));

        let ids: Vec<&str> = graph.nodes.iter().map(|node| node.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "x", "y"]);
        assert_eq!(graph.nodes[0].kind, NodeKind::Category);
        assert_eq!(graph.nodes[1].kind, NodeKind::Skill);
        assert!(graph.nodes[0].radius > graph.nodes[1].radius);

        assert_eq!(graph.edges.len(), 2);
        for edge in &graph.edges {
            assert_eq!(edge.kind, EdgeKind::Structural);
            assert_eq!(edge.source, 0);
        }
    }

    #[test]
    fn every_skill_occurrence_gets_exactly_one_structural_edge() {
        let categories = [
            category("A", &["x", "y"]),
            category("B", &["z", "w", "v"]),
        ];
        let graph = SkillGraph::build(&categories, &[], vec2(800.0, 600.0));

        let skill_count = graph
            .nodes
            .iter()
            .filter(|node| node.kind == NodeKind::Skill)
            .count();
        let structural_count = graph
            .edges
            .iter()
            .filter(|edge| edge.kind == EdgeKind::Structural)
            .count();
        assert_eq!(skill_count, 5);
        assert_eq!(structural_count, skill_count);

        // No (category, skill) pair appears twice.
        let mut seen = std::collections::HashSet::new();
        for edge in &graph.edges {
            assert!(seen.insert((edge.source, edge.target)));
        }
    }

    #[test]
    fn cross_edge_added_only_when_both_endpoints_exist() {
        let categories = [category("A", &["x"]), category("B", &["y"])];
        let cross = [pair("x", "y"), pair("x", "missing")];
        let graph = SkillGraph::build(&categories, &cross, vec2(800.0, 600.0));

        let cross_edges: Vec<_> = graph
            .edges
            .iter()
            .filter(|edge| edge.kind == EdgeKind::Cross)
            .collect();
        assert_eq!(cross_edges.len(), 1);

        let x = graph.node_index("x").unwrap();
        let y = graph.node_index("y").unwrap();
        assert_eq!((cross_edges[0].source, cross_edges[0].target), (x, y));
        assert!((cross_edges[0].rest_length - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn build_is_deterministic() {
        let categories = [category("A", &["x", "y"]), category("B", &["z"])];
        let cross = [pair("x", "z")];
        let first = SkillGraph::build(&categories, &cross, vec2(800.0, 600.0));
        let second = SkillGraph::build(&categories, &cross, vec2(800.0, 600.0));

        assert_eq!(first.nodes.len(), second.nodes.len());
        assert_eq!(first.edges.len(), second.edges.len());
        for (a, b) in first.nodes.iter().zip(second.nodes.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.pos, b.pos);
        }
        for (a, b) in first.edges.iter().zip(second.edges.iter()) {
            assert_eq!((a.source, a.target), (b.source, b.target));
        }
    }

    #[test]
    fn category_colors_and_anchors_follow_category_index() {
        let categories = [
            category("A", &["x"]),
            category("B", &["y"]),
            category("C", &["z"]),
            category("D", &["w"]),
        ];
        let graph = SkillGraph::build(&categories, &[], vec2(800.0, 600.0));

        assert_eq!(graph.anchors.len(), 4);
        assert_eq!(graph.anchors[0], vec2(200.0, 150.0));
        assert_eq!(graph.anchors[3], vec2(600.0, 450.0));

        let x = graph.node_index("x").unwrap();
        assert_eq!(graph.nodes[x].color, graph.nodes[0].color);
        let w = graph.node_index("w").unwrap();
        assert_eq!(graph.nodes[w].color, graph.nodes[3].color);
        assert_ne!(graph.nodes[0].color, graph.nodes[3].color);
    }

    #[test]
    fn zero_sized_area_yields_empty_graph() {
        let graph = SkillGraph::build(&[category("A", &["x"])], &[], vec2(0.0, 600.0));
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn neighbors_cover_both_edge_directions() {
        let categories = [category("A", &["x"]), category("B", &["y"])];
        let graph = SkillGraph::build(&categories, &[pair("x", "y")], vec2(800.0, 600.0));

        let x = graph.node_index("x").unwrap();
        let y = graph.node_index("y").unwrap();
        let a = graph.node_index("A").unwrap();
        assert!(graph.neighbors[x].contains(&a));
        assert!(graph.neighbors[x].contains(&y));
        assert!(graph.neighbors[y].contains(&x));
        assert!(graph.neighbors[a].contains(&x));
    }
}
