//! # Road Network
//!
//! Directed multigraph of named nodes. Every edge `from → to` carries an
//! ordered list of lanes. Insertion order is preserved everywhere so that
//! [`RoadNetwork::lanes_list`] is stable, which keeps seeded lane sampling
//! reproducible.

use crate::lane::StraightLane;

/// Address of a lane in the network.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LaneIndex {
    pub from: String,
    pub to: String,
    pub id: usize,
}

#[derive(Clone, Debug)]
struct Edge {
    to: String,
    lanes: Vec<StraightLane>,
}

#[derive(Clone, Debug)]
struct Node {
    name: String,
    edges: Vec<Edge>,
}

#[derive(Clone, Debug, Default)]
pub struct RoadNetwork {
    nodes: Vec<Node>,
}

impl RoadNetwork {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a lane on the edge `from → to` and return its index.
    pub fn add_lane(&mut self, from: &str, to: &str, lane: StraightLane) -> LaneIndex {
        let ni = self.nodes.iter().position(|n| n.name == from).unwrap_or_else(|| {
            self.nodes.push(Node { name: from.to_owned(), edges: Vec::new() });
            self.nodes.len() - 1
        });
        let node = &mut self.nodes[ni];
        let ei = node.edges.iter().position(|e| e.to == to).unwrap_or_else(|| {
            node.edges.push(Edge { to: to.to_owned(), lanes: Vec::new() });
            node.edges.len() - 1
        });
        let edge = &mut node.edges[ei];
        edge.lanes.push(lane);
        LaneIndex { from: from.to_owned(), to: to.to_owned(), id: edge.lanes.len() - 1 }
    }

    /// Look up a lane by index.
    #[must_use]
    pub fn lane(&self, index: &LaneIndex) -> Option<&StraightLane> {
        self.nodes
            .iter()
            .find(|n| n.name == index.from)?
            .edges
            .iter()
            .find(|e| e.to == index.to)?
            .lanes
            .get(index.id)
    }

    /// All lanes, ordered by source node, then destination node, then lane id.
    #[must_use]
    pub fn lanes_list(&self) -> Vec<&StraightLane> {
        self.nodes
            .iter()
            .flat_map(|n| n.edges.iter())
            .flat_map(|e| e.lanes.iter())
            .collect()
    }

    /// Indices of all lanes, in the same order as [`Self::lanes_list`].
    #[must_use]
    pub fn lane_indices(&self) -> Vec<LaneIndex> {
        self.nodes
            .iter()
            .flat_map(|n| {
                n.edges.iter().flat_map(move |e| {
                    (0..e.lanes.len()).map(move |id| LaneIndex {
                        from: n.name.clone(),
                        to: e.to.clone(),
                        id,
                    })
                })
            })
            .collect()
    }

    #[must_use]
    pub fn lane_count(&self) -> usize {
        self.nodes
            .iter()
            .flat_map(|n| n.edges.iter())
            .map(|e| e.lanes.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lane::LineType;
    use glam::DVec2;

    fn lane(x: f64) -> StraightLane {
        StraightLane::new(
            DVec2::new(x, 0.0),
            DVec2::new(x, 1.0),
            1.0,
            [LineType::Striped, LineType::None],
        )
    }

    #[test]
    fn lanes_list_keeps_insertion_order() {
        let mut net = RoadNetwork::new();
        net.add_lane("a", "b", lane(0.0));
        net.add_lane("b", "c", lane(1.0));
        net.add_lane("a", "b", lane(2.0));
        let xs: Vec<f64> = net.lanes_list().iter().map(|l| l.start.x).collect();
        assert_eq!(xs, vec![0.0, 2.0, 1.0]);
        assert_eq!(net.lane_count(), 3);
    }

    #[test]
    fn lookup_by_index() {
        let mut net = RoadNetwork::new();
        net.add_lane("a", "b", lane(0.0));
        let idx = net.add_lane("a", "b", lane(5.0));
        assert_eq!(idx.id, 1);
        assert_eq!(net.lane(&idx).map(|l| l.start.x), Some(5.0));
        let missing = LaneIndex { from: "x".into(), to: "b".into(), id: 0 };
        assert!(net.lane(&missing).is_none());
        assert_eq!(net.lane_indices()[1], idx);
    }
}
