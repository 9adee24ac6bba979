//! Bond graphs over replicated frameworks.
//!
//! The unit cell is repeated until the largest requested ring cannot reach
//! its own periodic image, re-centered on the seed atom, and turned into an
//! undirected graph from a connectivity matrix.

use zeoring_core::{Result, Summarizable, ZeoringError};
use zeoring_struct::{ConnectivityMatrix, ConnectivityProvider, Framework, Lattice, NeighborList};

/// Extra half-length (Å) the supercell must have beyond half the ring size.
pub const REPLICATION_MARGIN: f64 = 5.0;

/// Smallest positive repeat count `r` with `(cell_length * r) / 2 >= max_ring_size / 2 + 5`.
pub fn repeat_factor(cell_length: f64, max_ring_size: usize) -> usize {
    if cell_length.is_nan() || cell_length <= 0.0 {
        return 1;
    }
    let required = max_ring_size as f64 / 2.0 + REPLICATION_MARGIN;
    let mut factor = 1;
    while cell_length * factor as f64 / 2.0 < required {
        factor += 1;
    }
    factor
}

/// Repeat counts along `a`, `b`, `c` for a ring search up to `max_ring_size`.
pub fn repeat_factors(lattice: &Lattice, max_ring_size: usize) -> [usize; 3] {
    lattice.lengths().map(|c| repeat_factor(c, max_ring_size))
}

/// Undirected, unweighted bond graph over atom indices.
///
/// Neighbor lists are sorted by ascending atom index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameworkGraph {
    adjacency: Vec<Vec<usize>>,
}

impl FrameworkGraph {
    /// Build the graph from a validated connectivity matrix.
    pub fn from_connectivity(matrix: &ConnectivityMatrix) -> Result<Self> {
        matrix.validate()?;
        let adjacency = (0..matrix.size).map(|i| matrix.neighbors(i)).collect();
        Ok(FrameworkGraph { adjacency })
    }

    /// Build the graph from undirected edges. Repeated edges collapse.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut adjacency = vec![Vec::new(); node_count];
        for &(i, j) in edges {
            if i >= node_count || j >= node_count {
                return Err(ZeoringError::Connectivity(format!(
                    "edge ({}, {}) outside a {}-node graph",
                    i, j, node_count
                )));
            }
            if i == j {
                return Err(ZeoringError::Connectivity(format!(
                    "self loop on node {}",
                    i
                )));
            }
            adjacency[i].push(j);
            adjacency[j].push(i);
        }
        for list in &mut adjacency {
            list.sort_unstable();
            list.dedup();
        }
        Ok(FrameworkGraph { adjacency })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Neighbors of `node` in ascending order; empty for unknown nodes.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Graph degree of a node.
    pub fn degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }

    /// Whether `i` and `j` are bonded.
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.neighbors(i).binary_search(&j).is_ok()
    }
}

impl Summarizable for FrameworkGraph {
    fn summary(&self) -> String {
        format!(
            "FrameworkGraph: {} nodes, {} edges",
            self.node_count(),
            self.edge_count()
        )
    }
}

/// A supercell centered on the seed atom together with its bond graph.
#[derive(Debug, Clone)]
pub struct ReplicatedGraph {
    pub graph: FrameworkGraph,
    pub framework: Framework,
    /// Repeat counts along `a`, `b`, `c`.
    pub repeat: [usize; 3],
}

/// Builds bond graphs from a framework and a connectivity source.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder<C = NeighborList> {
    connectivity: C,
}

impl<C: ConnectivityProvider> GraphBuilder<C> {
    /// Builder backed by the given connectivity provider.
    pub fn new(connectivity: C) -> Self {
        GraphBuilder { connectivity }
    }

    /// Replicate `framework` for rings up to `max_ring_size`, center it on
    /// `seed`, and derive the bond graph.
    ///
    /// The seed keeps its index in the supercell because the first image is
    /// the original cell.
    pub fn build(
        &self,
        framework: &Framework,
        seed: usize,
        max_ring_size: usize,
    ) -> Result<ReplicatedGraph> {
        if seed >= framework.atom_count() {
            return Err(ZeoringError::InvalidInput(format!(
                "seed atom {} out of range ({} atoms)",
                seed,
                framework.atom_count()
            )));
        }

        let repeat = repeat_factors(&framework.lattice, max_ring_size);
        let mut large = framework.repeat(repeat)?;
        let shift = large.center_of_mass().sub(&large.atoms[seed].coords);
        large.translate(&shift);
        large.wrap();

        let matrix = self.connectivity.connectivity(&large)?;
        if matrix.size != large.atom_count() {
            return Err(ZeoringError::Connectivity(format!(
                "connectivity covers {} atoms, supercell has {}",
                matrix.size,
                large.atom_count()
            )));
        }
        let graph = FrameworkGraph::from_connectivity(&matrix)?;
        log::debug!(
            "replicated {} by {:?}: {} atoms, {} bonds",
            framework.name,
            repeat,
            large.atom_count(),
            graph.edge_count()
        );

        Ok(ReplicatedGraph {
            graph,
            framework: large,
            repeat,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn repeat_factor_is_sufficient_and_minimal(
            cell_length in 1.0f64..40.0,
            max_ring in 3usize..=24
        ) {
            let r = repeat_factor(cell_length, max_ring);
            let required = max_ring as f64 / 2.0 + REPLICATION_MARGIN;
            prop_assert!(r >= 1);
            prop_assert!(cell_length * r as f64 / 2.0 >= required);
            if r > 1 {
                prop_assert!(cell_length * (r - 1) as f64 / 2.0 < required);
            }
        }
    }
}
