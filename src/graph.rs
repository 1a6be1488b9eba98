//! Connected-component labeling and node merging for explicit graphs.
//!
//! A graph is given as an ordered list of nodes plus a list of edges, where
//! each edge is a pair of node indices. These routines never mutate their
//! inputs; they return fresh label or geometry arrays.

use std::collections::HashMap;

use crate::errors::MeasureError;
use crate::shapes::PointF;

/// Disjoint-set forest with path compression, used to merge node labels
/// along edges.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> DisjointSet {
        DisjointSet {
            parent: (0..len).collect(),
        }
    }

    /// Return the representative of the set containing `node`, compressing
    /// the path from `node` to the root.
    fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`. The surviving representative
    /// is the smaller of the two roots, so that labels later renumber in
    /// order of first appearance.
    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            let (keep, absorb) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[absorb] = keep;
        }
    }
}

/// Assign a label to each of `node_count` nodes such that two nodes share a
/// label iff they are connected by a path of `edges`.
///
/// Labels form a dense range starting at 1, numbered in order of first
/// appearance by node index. Isolated nodes keep distinct labels; an empty
/// edge list yields `node_count` distinct labels.
///
/// Returns [`MeasureError::InvalidEdge`] if an edge references a node index
/// `>= node_count`.
pub fn label_nodes(node_count: usize, edges: &[[usize; 2]]) -> Result<Vec<u32>, MeasureError> {
    if edges.iter().flatten().any(|&node| node >= node_count) {
        return Err(MeasureError::InvalidEdge);
    }

    let mut sets = DisjointSet::new(node_count);
    for &[a, b] in edges {
        sets.union(a, b);
    }

    // Renumber the surviving representatives to consecutive labels starting
    // at 1.
    let mut label_of_root = HashMap::new();
    let mut next_label = 1u32;
    let mut labels = Vec::with_capacity(node_count);
    for node in 0..node_count {
        let root = sets.find(node);
        let label = *label_of_root.entry(root).or_insert_with(|| {
            let label = next_label;
            next_label += 1;
            label
        });
        labels.push(label);
    }

    Ok(labels)
}

/// Merge the nodes listed in `selection` into a single node placed at their
/// centroid.
///
/// The merged node takes the position of the smallest selected index; the
/// other selected nodes are removed. Edges that referenced a merged node are
/// rewired onto the merged one; self edges and duplicate edges produced by
/// the rewiring are dropped. Returns the new node and edge lists.
///
/// Returns [`MeasureError::EmptyInput`] if `selection` is empty and
/// [`MeasureError::InvalidEdge`] if an edge or selection entry references a
/// node index out of range.
pub fn merge_nodes(
    nodes: &[PointF],
    edges: &[[usize; 2]],
    selection: &[usize],
) -> Result<(Vec<PointF>, Vec<[usize; 2]>), MeasureError> {
    if selection.is_empty() {
        return Err(MeasureError::EmptyInput);
    }
    if selection.iter().any(|&node| node >= nodes.len())
        || edges.iter().flatten().any(|&node| node >= nodes.len())
    {
        return Err(MeasureError::InvalidEdge);
    }

    let mut selected = vec![false; nodes.len()];
    for &node in selection {
        selected[node] = true;
    }
    let target = selection.iter().copied().min().unwrap_or(0);

    let inv_count = 1. / selection.len() as f32;
    let centroid = selection.iter().fold(PointF::default(), |acc, &node| {
        PointF::from_yx(
            acc.y + nodes[node].y * inv_count,
            acc.x + nodes[node].x * inv_count,
        )
    });

    // Build the new node list and the old-to-new index map in one pass.
    let mut remap = vec![usize::MAX; nodes.len()];
    let mut new_nodes = Vec::with_capacity(nodes.len());
    for (index, &node) in nodes.iter().enumerate() {
        if index == target {
            remap[index] = new_nodes.len();
            new_nodes.push(centroid);
        } else if !selected[index] {
            remap[index] = new_nodes.len();
            new_nodes.push(node);
        }
    }
    let target_new = remap[target];
    for (index, &is_selected) in selected.iter().enumerate() {
        if is_selected {
            remap[index] = target_new;
        }
    }

    let mut new_edges: Vec<[usize; 2]> = Vec::with_capacity(edges.len());
    for &[a, b] in edges {
        let (a, b) = (remap[a], remap[b]);
        let edge = if a <= b { [a, b] } else { [b, a] };
        if edge[0] != edge[1] && !new_edges.contains(&edge) {
            new_edges.push(edge);
        }
    }

    Ok((new_nodes, new_edges))
}

#[cfg(test)]
mod tests {
    use crate::errors::MeasureError;
    use crate::shapes::PointF;

    use super::{label_nodes, merge_nodes};

    #[test]
    fn test_label_nodes() {
        struct Case {
            node_count: usize,
            edges: Vec<[usize; 2]>,
            expected: Vec<u32>,
        }

        let cases = [
            // Empty graph
            Case {
                node_count: 0,
                edges: vec![],
                expected: vec![],
            },
            // Edgeless graph: as many labels as nodes
            Case {
                node_count: 4,
                edges: vec![],
                expected: vec![1, 2, 3, 4],
            },
            // Single chain
            Case {
                node_count: 3,
                edges: vec![[0, 1], [1, 2]],
                expected: vec![1, 1, 1],
            },
            // Two components, labels dense and in order of first appearance
            Case {
                node_count: 5,
                edges: vec![[3, 4], [0, 2]],
                expected: vec![1, 2, 1, 3, 3],
            },
            // Transitive connection through a later node
            Case {
                node_count: 4,
                edges: vec![[0, 3], [1, 3]],
                expected: vec![1, 1, 2, 1],
            },
        ];

        for case in cases {
            let labels = label_nodes(case.node_count, &case.edges).unwrap();
            assert_eq!(labels, case.expected);
        }
    }

    #[test]
    fn test_label_nodes_partition_properties() {
        // Nodes in the same component share a label, nodes in different
        // components do not, and labels form a contiguous range from 1.
        let edges = [[0, 1], [2, 3], [3, 4], [6, 7], [7, 0]];
        let labels = label_nodes(8, &edges).unwrap();

        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[0], labels[6]);
        assert_eq!(labels[0], labels[7]);
        assert_eq!(labels[2], labels[3]);
        assert_eq!(labels[2], labels[4]);
        assert_ne!(labels[0], labels[2]);
        assert_ne!(labels[0], labels[5]);
        assert_ne!(labels[2], labels[5]);

        let mut distinct = labels.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(distinct, (1..=3).collect::<Vec<u32>>());
    }

    #[test]
    fn test_label_nodes_idempotent_on_induced_partition() {
        let edges = [[0, 1], [1, 2], [4, 5]];
        let labels = label_nodes(6, &edges).unwrap();

        // Connect every pair of nodes that ended up with the same label and
        // re-run the labeler. The partition must be reproduced.
        let mut induced = Vec::new();
        for a in 0..labels.len() {
            for b in a + 1..labels.len() {
                if labels[a] == labels[b] {
                    induced.push([a, b]);
                }
            }
        }
        assert_eq!(label_nodes(6, &induced).unwrap(), labels);
    }

    #[test]
    fn test_label_nodes_invalid_edge() {
        assert_eq!(
            label_nodes(3, &[[0, 3]]),
            Err(MeasureError::InvalidEdge)
        );
    }

    #[test]
    fn test_merge_nodes() {
        let nodes = [
            PointF::from_yx(0., 0.),
            PointF::from_yx(0., 2.),
            PointF::from_yx(2., 0.),
            PointF::from_yx(5., 5.),
        ];
        let edges = [[0, 1], [1, 2], [2, 3]];

        let (new_nodes, new_edges) = merge_nodes(&nodes, &edges, &[0, 1, 2]).unwrap();

        // Merged node sits at the centroid of the selection, in the slot of
        // the smallest selected index.
        assert_eq!(new_nodes.len(), 2);
        let merged = new_nodes[0];
        assert!((merged.y - 2. / 3.).abs() < 1e-6);
        assert!((merged.x - 2. / 3.).abs() < 1e-6);
        assert_eq!(new_nodes[1], PointF::from_yx(5., 5.));

        // Intra-selection edges collapse to self edges and disappear; the
        // edge out of the selection is rewired once.
        assert_eq!(new_edges, [[0, 1]]);
    }

    #[test]
    fn test_merge_nodes_errors() {
        let nodes = [PointF::from_yx(0., 0.), PointF::from_yx(1., 1.)];

        assert_eq!(
            merge_nodes(&nodes, &[], &[]),
            Err(MeasureError::EmptyInput)
        );
        assert_eq!(
            merge_nodes(&nodes, &[], &[2]),
            Err(MeasureError::InvalidEdge)
        );
        assert_eq!(
            merge_nodes(&nodes, &[[0, 5]], &[0]),
            Err(MeasureError::InvalidEdge)
        );
    }
}
