use eframe::egui::{Pos2, Vec2};

use super::super::physics;
use super::SkillGraph;

/// Extra pixels around a node that still count as a hit.
const HOVER_SLOP: f32 = 4.0;

impl SkillGraph {
    /// Nearest node under the pointer, if any. `origin` is the screen
    /// position of the graph's top-left corner.
    pub(in crate::app) fn hovered_index(
        &self,
        pointer: Option<Pos2>,
        origin: Pos2,
    ) -> Option<usize> {
        let pointer = pointer?;
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(index, node)| {
                let distance = (origin + node.pos).distance(pointer);
                (distance <= node.radius + HOVER_SLOP).then_some((index, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _distance)| index)
    }

    /// The raw payload relayed to the selection owner on click: the hovered
    /// node's id, or `None` for a background click. Toggle semantics live
    /// with the owner, not here.
    pub(in crate::app) fn click_payload(&self, hovered: Option<usize>) -> Option<String> {
        hovered.and_then(|index| self.nodes.get(index).map(|node| node.id.clone()))
    }

    pub(in crate::app) fn begin_drag(&mut self, index: usize) {
        let Some(node) = self.nodes.get_mut(index) else {
            return;
        };
        node.pinned = true;
        node.velocity = Vec2::ZERO;
        self.drag_index = Some(index);
        physics::reheat(self);
    }

    pub(in crate::app) fn drag_to(&mut self, index: usize, world: Vec2) {
        if let Some(node) = self.nodes.get_mut(index).filter(|node| node.pinned) {
            node.pos = world;
        }
    }

    pub(in crate::app) fn end_drag(&mut self) {
        if let Some(index) = self.drag_index.take()
            && let Some(node) = self.nodes.get_mut(index)
        {
            node.pinned = false;
        }
        physics::settle(self);
    }
}
