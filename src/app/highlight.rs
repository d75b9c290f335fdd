use std::collections::HashSet;

use super::graph::SkillGraph;

/// Visual state of a node, derived fresh each frame from the hover and
/// selection inputs. Never stored on the node itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::app) enum Display {
    Resting,
    Focused,
    Dimmed,
}

pub(in crate::app) struct FocusSets {
    pub(in crate::app) nodes: HashSet<usize>,
    pub(in crate::app) edges: HashSet<usize>,
}

/// A live hover previews on top of the persisted selection; when the hover
/// ends the display falls back to the selection.
pub(in crate::app) fn focus_of(hovered: Option<usize>, selected: Option<usize>) -> Option<usize> {
    hovered.or(selected)
}

/// The focused node set is the focus itself plus everything sharing an edge
/// with it; the edge set is the incident edges.
pub(in crate::app) fn focus_sets(graph: &SkillGraph, focus: usize) -> FocusSets {
    let mut nodes = HashSet::from([focus]);
    let mut edges = HashSet::new();

    for (index, edge) in graph.edges.iter().enumerate() {
        if edge.source == focus || edge.target == focus {
            nodes.insert(edge.source);
            nodes.insert(edge.target);
            edges.insert(index);
        }
    }

    FocusSets { nodes, edges }
}

pub(in crate::app) fn display(index: usize, sets: Option<&FocusSets>) -> Display {
    match sets {
        None => Display::Resting,
        Some(sets) if sets.nodes.contains(&index) => Display::Focused,
        Some(_) => Display::Dimmed,
    }
}
