//! Candidate ring enumeration.
//!
//! A ring through the seed is a simple path from the seed to one of its
//! neighbors, closed by the bond between them.

use crate::graph::FrameworkGraph;

/// Atom indices from the seed to the chosen neighbor. The closing bond back
/// to the seed is implicit.
pub type Path = Vec<usize>;

/// The neighbor every candidate ring through `seed` must end at: the one with
/// the smallest index.
pub fn ring_partner(graph: &FrameworkGraph, seed: usize) -> Option<usize> {
    graph.neighbors(seed).first().copied()
}

/// All simple paths from `source` to `target` with at most `max_atoms` atoms.
///
/// Depth-first, visiting neighbors in ascending index order; a path ends as
/// soon as it reaches `target`.
pub fn simple_paths(
    graph: &FrameworkGraph,
    source: usize,
    target: usize,
    max_atoms: usize,
) -> Vec<Path> {
    let n = graph.node_count();
    let mut paths = Vec::new();
    if source >= n || target >= n || source == target || max_atoms < 2 {
        return paths;
    }

    let mut on_path = vec![false; n];
    let mut path = vec![source];
    // cursors[d] is the next neighbor slot to try for path[d]
    let mut cursors = vec![0usize];
    on_path[source] = true;

    while let Some(&cursor) = cursors.last() {
        let depth = cursors.len() - 1;
        let node = path[depth];
        let neighbors = graph.neighbors(node);
        if cursor == neighbors.len() {
            cursors.pop();
            path.pop();
            on_path[node] = false;
            continue;
        }
        cursors[depth] += 1;

        let next = neighbors[cursor];
        if on_path[next] {
            continue;
        }
        if next == target {
            let mut found = path.clone();
            found.push(target);
            paths.push(found);
            continue;
        }
        if path.len() + 1 < max_atoms {
            path.push(next);
            cursors.push(0);
            on_path[next] = true;
        }
    }

    paths
}

/// Candidate rings through `seed` whose atom count is one of `target_sizes`.
///
/// Returns nothing when the seed has no bonds or no sizes are requested.
pub fn enumerate_paths(graph: &FrameworkGraph, seed: usize, target_sizes: &[usize]) -> Vec<Path> {
    let (Some(partner), Some(&max_size)) = (ring_partner(graph, seed), target_sizes.iter().max())
    else {
        return Vec::new();
    };

    let raw = simple_paths(graph, seed, partner, max_size);
    let raw_count = raw.len();
    let paths: Vec<Path> = raw
        .into_iter()
        .filter(|p| target_sizes.contains(&p.len()))
        .collect();
    log::debug!(
        "seed {} -> {}: {} simple paths, {} of the requested sizes",
        seed,
        partner,
        raw_count,
        paths.len()
    );
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(n: usize) -> FrameworkGraph {
        let edges: Vec<(usize, usize)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
        FrameworkGraph::from_edges(n, &edges).unwrap()
    }

    /// Two squares sharing the edge 0-1: 0-1-2-3-0 and 0-1-4-5-0.
    fn double_square() -> FrameworkGraph {
        FrameworkGraph::from_edges(
            6,
            &[(0, 1), (1, 2), (2, 3), (3, 0), (1, 4), (4, 5), (5, 0)],
        )
        .unwrap()
    }

    #[test]
    fn hexagon_raw_paths() {
        let g = cycle(6);
        let raw = simple_paths(&g, 0, 1, 6);
        assert_eq!(raw, vec![vec![0, 1], vec![0, 5, 4, 3, 2, 1]]);
    }

    #[test]
    fn hexagon_ring_of_six() {
        let g = cycle(6);
        assert_eq!(ring_partner(&g, 0), Some(1));
        let paths = enumerate_paths(&g, 0, &[6]);
        assert_eq!(paths, vec![vec![0, 5, 4, 3, 2, 1]]);
    }

    #[test]
    fn length_cutoff_excludes_long_way_round() {
        let g = cycle(8);
        assert!(enumerate_paths(&g, 0, &[6]).is_empty());
        assert_eq!(enumerate_paths(&g, 0, &[6, 8]).len(), 1);
    }

    #[test]
    fn paths_are_in_depth_first_order() {
        let g = double_square();
        // partner of 0 is 1; 0-3-2-1 comes before 0-5-4-1
        let paths = enumerate_paths(&g, 0, &[4, 6]);
        assert_eq!(
            paths,
            vec![vec![0, 3, 2, 1], vec![0, 5, 4, 1]]
        );
    }

    #[test]
    fn isolated_seed_has_no_paths() {
        let g = FrameworkGraph::from_edges(3, &[(1, 2)]).unwrap();
        assert_eq!(ring_partner(&g, 0), None);
        assert!(enumerate_paths(&g, 0, &[3]).is_empty());
    }

    #[test]
    fn no_sizes_no_paths() {
        let g = cycle(6);
        assert!(enumerate_paths(&g, 0, &[]).is_empty());
        assert!(simple_paths(&g, 0, 0, 6).is_empty());
        assert!(simple_paths(&g, 0, 9, 6).is_empty());
    }
}
