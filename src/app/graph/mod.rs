use std::collections::HashMap;

use eframe::egui::{Color32, Vec2};

mod build;
mod interaction;
mod view;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::app) enum NodeKind {
    Category,
    Skill,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::app) enum EdgeKind {
    Structural,
    Cross,
}

pub(in crate::app) struct GraphNode {
    pub(in crate::app) id: String,
    pub(in crate::app) kind: NodeKind,
    pub(in crate::app) radius: f32,
    pub(in crate::app) color: Color32,
    /// Index of the owning category; category nodes own themselves.
    pub(in crate::app) category_index: usize,
    pub(in crate::app) pos: Vec2,
    pub(in crate::app) velocity: Vec2,
    /// Held fixed by an active drag; excluded from integration but still
    /// exerting forces on everything else.
    pub(in crate::app) pinned: bool,
}

pub(in crate::app) struct GraphEdge {
    pub(in crate::app) source: usize,
    pub(in crate::app) target: usize,
    pub(in crate::app) kind: EdgeKind,
    pub(in crate::app) rest_length: f32,
}

/// Arena of graph records built once per mount. The node and edge sets never
/// change afterwards; only positions, velocities, pin flags and the cooling
/// state mutate, all on the UI thread.
pub(in crate::app) struct SkillGraph {
    pub(in crate::app) nodes: Vec<GraphNode>,
    pub(in crate::app) edges: Vec<GraphEdge>,
    pub(in crate::app) index_by_id: HashMap<String, usize>,
    pub(in crate::app) neighbors: Vec<Vec<usize>>,
    /// One fixed anchor point per category (quadrant centers of the measured
    /// drawing area); the layout softly pulls members toward it.
    pub(in crate::app) anchors: Vec<Vec2>,
    pub(in crate::app) size: Vec2,
    pub(in crate::app) alpha: f32,
    pub(in crate::app) alpha_target: f32,
    pub(in crate::app) drag_index: Option<usize>,
}

impl SkillGraph {
    pub(in crate::app) fn node_index(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    pub(in crate::app) fn anchor_of(&self, node: &GraphNode) -> Vec2 {
        self.anchors
            .get(node.category_index)
            .copied()
            .unwrap_or(self.size * 0.5)
    }
}
