use std::collections::HashSet;

use eframe::egui::{Align2, Color32, CursorIcon, FontId, Sense, Stroke, Ui, vec2};

use super::super::highlight::{self, Display};
use super::super::physics;
use super::super::render_utils::{CANVAS_COLOR, LINE_COLOR, TEXT_COLOR, fade};
use super::{EdgeKind, NodeKind, SkillGraph};

const HOVER_GROW: f32 = 1.2;
const GLOW_OPACITY: f32 = 0.12;
const DIM_OPACITY: f32 = 0.1;
const DIM_EDGE_OPACITY: f32 = 0.05;
const REST_EDGE_OPACITY: f32 = 0.2;

impl SkillGraph {
    /// Draws the graph for one frame: advances the simulation, handles
    /// pointer input, paints edges, nodes and labels.
    ///
    /// Returns the raw selection event to relay to the page owner:
    /// `Some(Some(id))` for a node click, `Some(None)` for a background
    /// click, `None` when nothing was clicked this frame.
    pub(in crate::app) fn draw(
        &mut self,
        ui: &mut Ui,
        selected: Option<&str>,
        search_matches: Option<&HashSet<usize>>,
    ) -> Option<Option<String>> {
        if self.nodes.is_empty() {
            // Degenerate taxonomy: nothing to simulate or paint, but the
            // canvas is still allocated so a background click relays a
            // clear event.
            if self.size.x <= 0.0 || self.size.y <= 0.0 {
                return None;
            }
            let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());
            ui.painter_at(rect).rect_filled(rect, 0.0, CANVAS_COLOR);
            return response.clicked().then(|| self.click_payload(None));
        }

        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click_and_drag());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, CANVAS_COLOR);

        let origin = rect.min;
        let hovered = self.hovered_index(response.hover_pos(), origin);

        // Drag first so a pinned position is this frame's physics input.
        if response.drag_started()
            && let Some(index) = hovered
        {
            self.begin_drag(index);
        }
        if response.dragged()
            && let Some(index) = self.drag_index
            && let Some(pointer) = response.interact_pointer_pos()
        {
            self.drag_to(index, pointer - origin);
        }
        if response.drag_stopped() {
            self.end_drag();
        }

        let delta_seconds = ui
            .ctx()
            .input(|input| input.stable_dt)
            .clamp(1.0 / 240.0, 1.0 / 20.0);
        let moving = physics::step(self, delta_seconds);
        if moving || response.dragged() {
            ui.ctx().request_repaint();
        }

        if hovered.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = CursorIcon::PointingHand;
            });
        }

        let event = if response.clicked() {
            Some(self.click_payload(hovered))
        } else {
            None
        };

        // A live hover (or drag) previews over the persisted selection.
        let selected_index = selected.and_then(|id| self.node_index(id));
        let focus = highlight::focus_of(hovered.or(self.drag_index), selected_index);
        let sets = focus.map(|focus| highlight::focus_sets(self, focus));

        for (index, edge) in self.edges.iter().enumerate() {
            let start = origin + self.nodes[edge.source].pos;
            let end = origin + self.nodes[edge.target].pos;

            let stroke = match &sets {
                Some(sets) if sets.edges.contains(&index) => {
                    Stroke::new(2.0, fade(Color32::WHITE, 0.8))
                }
                Some(_) => Stroke::new(1.0, fade(LINE_COLOR, DIM_EDGE_OPACITY)),
                None => {
                    let width = match edge.kind {
                        EdgeKind::Structural => 1.5,
                        EdgeKind::Cross => 1.0,
                    };
                    Stroke::new(width, fade(LINE_COLOR, REST_EDGE_OPACITY))
                }
            };
            painter.line_segment([start, end], stroke);
        }

        for (index, node) in self.nodes.iter().enumerate() {
            let center = origin + node.pos;
            let state = highlight::display(index, sets.as_ref());
            let opacity = match state {
                Display::Dimmed => DIM_OPACITY,
                Display::Focused => 1.0,
                Display::Resting => {
                    if node.kind == NodeKind::Category {
                        0.8
                    } else {
                        1.0
                    }
                }
            };
            let is_hovered = hovered == Some(index) || self.drag_index == Some(index);
            let radius = if is_hovered {
                node.radius * HOVER_GROW
            } else {
                node.radius
            };

            match node.kind {
                NodeKind::Category => {
                    painter.circle_stroke(center, radius, Stroke::new(1.5, fade(node.color, opacity)));
                }
                NodeKind::Skill => {
                    if state != Display::Dimmed {
                        painter.circle_filled(center, radius * 2.2, fade(node.color, opacity * GLOW_OPACITY));
                    }
                    let fill = if is_hovered { Color32::WHITE } else { node.color };
                    painter.circle_filled(center, radius, fade(fill, opacity));
                    painter.circle_stroke(center, radius, Stroke::new(2.0, fade(node.color, opacity)));
                }
            }

            if let Some(matches) = search_matches
                && matches.contains(&index)
            {
                painter.circle_stroke(center, radius + 4.0, Stroke::new(1.5, fade(Color32::WHITE, 0.75)));
            }

            let (font_size, label_color) = match node.kind {
                NodeKind::Category => (14.0, Color32::WHITE),
                NodeKind::Skill => (12.0, TEXT_COLOR),
            };
            painter.text(
                center + vec2(radius + 8.0, 0.0),
                Align2::LEFT_CENTER,
                &node.id,
                FontId::proportional(font_size),
                fade(label_color, opacity),
            );
        }

        event
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{self, CentralPanel, Event, PointerButton, Pos2, RawInput, vec2};

    use super::SkillGraph;

    fn run_frame(
        ctx: &egui::Context,
        input: RawInput,
        graph: &mut SkillGraph,
    ) -> Option<Option<String>> {
        let mut event = None;
        ctx.run(input, |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                event = graph.draw(ui, None, None);
            });
        });
        event
    }

    fn pointer_button(pos: Pos2, pressed: bool) -> RawInput {
        RawInput {
            events: vec![Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                modifiers: Default::default(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn zero_size_graph_draws_nothing() {
        let ctx = egui::Context::default();
        let mut graph = SkillGraph::build(&[], &[], vec2(0.0, 0.0));
        assert_eq!(run_frame(&ctx, RawInput::default(), &mut graph), None);
    }

    #[test]
    fn empty_graph_still_relays_background_clicks() {
        let ctx = egui::Context::default();
        let mut graph = SkillGraph::build(&[], &[], vec2(300.0, 200.0));

        // Warm-up frame so the canvas rect exists before the click lands.
        assert_eq!(run_frame(&ctx, RawInput::default(), &mut graph), None);

        let pos = Pos2::new(60.0, 60.0);
        assert_eq!(run_frame(&ctx, pointer_button(pos, true), &mut graph), None);
        assert_eq!(
            run_frame(&ctx, pointer_button(pos, false), &mut graph),
            Some(None)
        );
    }
}
