use eframe::egui::{Vec2, vec2};

use super::graph::{EdgeKind, SkillGraph};

// Cooling, in the d3 style: forces are scaled by a decaying alpha; dragging
// raises the target so the neighborhood reacts fluidly, release lets the
// layout settle again.
const ALPHA_MIN: f32 = 0.003;
const ALPHA_RELAX: f32 = 0.05;
pub(in crate::app) const DRAG_ALPHA_TARGET: f32 = 0.3;

const REPULSION_STRENGTH: f32 = 9_500.0;
const REPULSION_SOFTENING: f32 = 600.0;
const STRUCTURAL_SPRING: f32 = 0.09;
const CROSS_SPRING: f32 = 0.04;
const COLLISION_MARGIN: f32 = 15.0;
const COLLISION_STRENGTH: f32 = 0.55;
const ANCHOR_STRENGTH: f32 = 0.06;

const MAX_FORCE: f32 = 140.0;
const MAX_SPEED: f32 = 26.0;
const VELOCITY_DAMPING: f32 = 0.6;
const MIN_SLEEP_SPEED_SQ: f32 = 0.02 * 0.02;

/// Advances the simulation by one frame. Returns whether anything is still
/// moving, so the caller can keep requesting repaints until the layout has
/// settled.
pub(in crate::app) fn step(graph: &mut SkillGraph, delta_seconds: f32) -> bool {
    let node_count = graph.nodes.len();
    if node_count < 2 {
        return false;
    }

    let time_step = (delta_seconds * 60.0).clamp(0.25, 3.0);

    graph.alpha += (graph.alpha_target - graph.alpha) * ALPHA_RELAX;
    if graph.alpha < ALPHA_MIN && graph.alpha_target < ALPHA_MIN {
        graph.alpha = 0.0;
    }

    let mut forces = vec![Vec2::ZERO; node_count];
    if graph.alpha > 0.0 {
        accumulate_repulsion(graph, &mut forces);
        accumulate_springs(graph, &mut forces);
        accumulate_collisions(graph, &mut forces);
        accumulate_anchor_pull(graph, &mut forces);
    }

    integrate(graph, &forces, time_step)
}

/// Reheats the simulation for an active drag.
pub(in crate::app) fn reheat(graph: &mut SkillGraph) {
    graph.alpha_target = DRAG_ALPHA_TARGET;
    graph.alpha = graph.alpha.max(DRAG_ALPHA_TARGET);
}

/// Lets the simulation cool back down after a drag ends.
pub(in crate::app) fn settle(graph: &mut SkillGraph) {
    graph.alpha_target = 0.0;
}

fn separation_direction(delta: Vec2, distance: f32, from: usize, to: usize) -> Vec2 {
    if distance > 0.0001 {
        delta / distance
    } else {
        // Coincident nodes: pick a stable pseudo-random direction so the
        // pair separates instead of dividing by zero.
        let angle =
            ((from as f32) * 0.618_034 + (to as f32) * 0.414_214) * std::f32::consts::TAU;
        vec2(angle.cos(), angle.sin())
    }
}

fn accumulate_repulsion(graph: &SkillGraph, forces: &mut [Vec2]) {
    let node_count = graph.nodes.len();
    for i in 0..node_count {
        for j in (i + 1)..node_count {
            let delta = graph.nodes[i].pos - graph.nodes[j].pos;
            let distance_sq = delta.length_sq();
            let direction = separation_direction(delta, distance_sq.sqrt(), i, j);

            let push = direction * (REPULSION_STRENGTH / (distance_sq + REPULSION_SOFTENING));
            forces[i] += push;
            forces[j] -= push;
        }
    }
}

fn accumulate_springs(graph: &SkillGraph, forces: &mut [Vec2]) {
    for edge in &graph.edges {
        let delta = graph.nodes[edge.source].pos - graph.nodes[edge.target].pos;
        let distance = delta.length().max(0.0001);
        let direction = delta / distance;

        let strength = match edge.kind {
            EdgeKind::Structural => STRUCTURAL_SPRING,
            EdgeKind::Cross => CROSS_SPRING,
        };
        let correction = direction * ((distance - edge.rest_length) * strength);

        forces[edge.source] -= correction;
        forces[edge.target] += correction;
    }
}

fn accumulate_collisions(graph: &SkillGraph, forces: &mut [Vec2]) {
    let node_count = graph.nodes.len();
    for i in 0..node_count {
        for j in (i + 1)..node_count {
            let delta = graph.nodes[i].pos - graph.nodes[j].pos;
            let distance = delta.length();
            let min_distance = graph.nodes[i].radius + graph.nodes[j].radius + COLLISION_MARGIN;
            if distance >= min_distance {
                continue;
            }

            let direction = separation_direction(delta, distance, i, j);
            let overlap_push = direction * ((min_distance - distance) * COLLISION_STRENGTH);
            forces[i] += overlap_push;
            forces[j] -= overlap_push;
        }
    }
}

fn accumulate_anchor_pull(graph: &SkillGraph, forces: &mut [Vec2]) {
    for (index, node) in graph.nodes.iter().enumerate() {
        forces[index] += (graph.anchor_of(node) - node.pos) * ANCHOR_STRENGTH;
    }
}

fn integrate(graph: &mut SkillGraph, forces: &[Vec2], time_step: f32) -> bool {
    let alpha = graph.alpha;
    let damping_factor = VELOCITY_DAMPING.powf(time_step);
    let mut any_motion = false;

    for (index, node) in graph.nodes.iter_mut().enumerate() {
        if node.pinned {
            // Position is imposed by the drag; the node still exerted forces
            // on everyone else above.
            node.velocity = Vec2::ZERO;
            continue;
        }

        let mut force = forces[index];
        let force_sq = force.length_sq();
        if force_sq > MAX_FORCE * MAX_FORCE {
            force *= MAX_FORCE / force_sq.sqrt();
        }

        let mut velocity = (node.velocity + (force * (alpha * time_step))) * damping_factor;
        let mut speed_sq = velocity.length_sq();
        if speed_sq > MAX_SPEED * MAX_SPEED {
            velocity *= MAX_SPEED / speed_sq.sqrt();
            speed_sq = MAX_SPEED * MAX_SPEED;
        }

        if speed_sq < MIN_SLEEP_SPEED_SQ {
            velocity = Vec2::ZERO;
            speed_sq = 0.0;
        }

        node.velocity = velocity;
        node.pos += velocity * time_step;
        if speed_sq > 0.0 {
            any_motion = true;
        }
    }

    any_motion
}
