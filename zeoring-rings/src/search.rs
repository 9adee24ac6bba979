//! End-to-end ring search.
//!
//! Composes the stages in order: supercell graph, path enumeration,
//! duplicate removal, secondary ring removal, geometric filtering, and
//! pruning of the supercell to the ring atoms.

use std::collections::BTreeMap;

use zeoring_core::{ContentAddressable, Result, Summarizable, ZeoringError};
use zeoring_struct::{
    AngleProvider, ConnectivityProvider, Framework, MinimumImageAngles, NeighborList,
    DEFAULT_CUTOFF_MULT, DEFAULT_SKIN,
};

use crate::dedup::dedup;
use crate::geometric::remove_geometric_outliers;
use crate::graph::GraphBuilder;
use crate::paths::{enumerate_paths, Path};
use crate::prune::prune;
use crate::secondary::remove_secondary;

/// Configuration for the default ring finder.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingSearchConfig {
    /// Multiplicative slack on covalent radii when detecting bonds.
    pub cutoff_mult: f64,
    /// Distance (Å) added to every cutoff radius.
    pub skin: f64,
}

impl Default for RingSearchConfig {
    fn default() -> Self {
        RingSearchConfig {
            cutoff_mult: DEFAULT_CUTOFF_MULT,
            skin: DEFAULT_SKIN,
        }
    }
}

/// Rings found around one seed atom.
#[derive(Debug, Clone)]
pub struct RingSearchResult {
    /// The centered supercell, reduced to the atoms of surviving rings.
    pub framework: Framework,
    /// Surviving rings as atom indices of the supercell before pruning.
    pub rings: Vec<Path>,
    /// The same rings with every atom mapped to its unit-cell index.
    pub unit_cell_rings: Vec<Path>,
    /// Repeat counts along `a`, `b`, `c` used to build the supercell.
    pub repeat: [usize; 3],
}

impl RingSearchResult {
    /// Number of rings found.
    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    /// Whether no ring survived.
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Rings with atom indices of the original (unrepeated) framework.
    pub fn rings_in_unit_cell(&self) -> &[Path] {
        &self.unit_cell_rings
    }

    /// Ring size to number of rings of that size.
    pub fn size_counts(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for ring in &self.rings {
            *counts.entry(ring.len()).or_insert(0) += 1;
        }
        counts
    }
}

impl Summarizable for RingSearchResult {
    fn summary(&self) -> String {
        let sizes: Vec<String> = self
            .size_counts()
            .iter()
            .map(|(size, count)| format!("{}x{}", count, size))
            .collect();
        format!(
            "{} ring(s) [{}], {} ring atom(s), supercell {}x{}x{}",
            self.ring_count(),
            sizes.join(", "),
            self.framework.atom_count(),
            self.repeat[0],
            self.repeat[1],
            self.repeat[2],
        )
    }
}

/// Ring search with injected connectivity and angle providers.
#[derive(Debug, Clone)]
pub struct RingFinder<C = NeighborList, A = MinimumImageAngles> {
    builder: GraphBuilder<C>,
    angles: A,
}

impl RingFinder {
    /// Finder using covalent-radius bonds and minimum-image angles.
    pub fn new(config: &RingSearchConfig) -> Self {
        RingFinder::with_providers(
            NeighborList::new(config.cutoff_mult).with_skin(config.skin),
            MinimumImageAngles,
        )
    }
}

impl Default for RingFinder {
    fn default() -> Self {
        RingFinder::new(&RingSearchConfig::default())
    }
}

impl<C: ConnectivityProvider, A: AngleProvider> RingFinder<C, A> {
    /// Finder backed by the given providers.
    pub fn with_providers(connectivity: C, angles: A) -> Self {
        RingFinder {
            builder: GraphBuilder::new(connectivity),
            angles,
        }
    }

    /// Find the rings of the requested sizes that pass through `seed`.
    ///
    /// A seed without bonds is not an error; it gives an empty result.
    pub fn search(
        &self,
        framework: &Framework,
        seed: usize,
        target_sizes: &[usize],
    ) -> Result<RingSearchResult> {
        let Some(&max_size) = target_sizes.iter().max() else {
            return Err(ZeoringError::InvalidInput(
                "at least one ring size is required".into(),
            ));
        };
        if seed >= framework.atom_count() {
            return Err(ZeoringError::InvalidInput(format!(
                "seed atom {} out of range ({} atoms)",
                seed,
                framework.atom_count()
            )));
        }
        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "ring search in {} ({}), seed {}, sizes {:?}",
                framework.name,
                &framework.content_hash()[..12],
                seed,
                target_sizes
            );
        }

        let replicated = self.builder.build(framework, seed, max_size)?;
        let paths = enumerate_paths(&replicated.graph, seed, target_sizes);
        let paths = dedup(paths);
        let paths = remove_secondary(paths);
        let rings = remove_geometric_outliers(&replicated.framework, paths, &self.angles)?;

        let unit_cell_rings = rings
            .iter()
            .map(|ring| {
                ring.iter()
                    .map(|&atom| replicated.framework.atoms[atom].origin)
                    .collect()
            })
            .collect();
        let pruned = prune(replicated.framework, &rings);

        let result = RingSearchResult {
            framework: pruned,
            rings,
            unit_cell_rings,
            repeat: replicated.repeat,
        };
        log::debug!("seed {}: {}", seed, result.summary());
        Ok(result)
    }
}

#[cfg(feature = "parallel")]
impl<C, A> RingFinder<C, A>
where
    C: ConnectivityProvider + Sync,
    A: AngleProvider + Sync,
{
    /// Run [`search`](Self::search) for several seeds, in parallel.
    pub fn search_many(
        &self,
        framework: &Framework,
        seeds: &[usize],
        target_sizes: &[usize],
    ) -> Result<Vec<RingSearchResult>> {
        use rayon::prelude::*;
        seeds
            .par_iter()
            .map(|&seed| self.search(framework, seed, target_sizes))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
impl<C: ConnectivityProvider, A: AngleProvider> RingFinder<C, A> {
    /// Run [`search`](Self::search) for several seeds.
    pub fn search_many(
        &self,
        framework: &Framework,
        seeds: &[usize],
        target_sizes: &[usize],
    ) -> Result<Vec<RingSearchResult>> {
        seeds
            .iter()
            .map(|&seed| self.search(framework, seed, target_sizes))
            .collect()
    }
}

/// Find the rings of `target_sizes` through `seed` with default settings and
/// return the supercell reduced to the ring atoms.
pub fn find_rings(framework: &Framework, seed: usize, target_sizes: &[usize]) -> Result<Framework> {
    RingFinder::default()
        .search(framework, seed, target_sizes)
        .map(|result| result.framework)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zeoring_struct::{ConnectivityMatrix, Lattice, Point3D};

    /// Six Si atoms on a hexagon in a 20 Å cell, bonded around the ring only.
    fn hexagon() -> (Framework, ConnectivityMatrix) {
        let mut fw = Framework::new("HEX", Lattice::orthorhombic(20.0, 20.0, 20.0).unwrap());
        for k in 0..6 {
            let t = (k as f64 * 60.0).to_radians();
            fw.push("Si", Point3D::new(10.0 + 3.1 * t.cos(), 10.0 + 3.1 * t.sin(), 10.0));
        }
        let bonds: Vec<(usize, usize)> = (0..6).map(|i| (i, (i + 1) % 6)).collect();
        (fw, ConnectivityMatrix::from_bonds(6, &bonds).unwrap())
    }

    /// A provider that must never be reached.
    struct Unreachable;

    impl ConnectivityProvider for Unreachable {
        fn connectivity(&self, _: &Framework) -> Result<ConnectivityMatrix> {
            Err(ZeoringError::Other("connectivity requested".into()))
        }
    }

    #[test]
    fn hexagon_end_to_end() {
        let (fw, bonds) = hexagon();
        let finder = RingFinder::with_providers(bonds, MinimumImageAngles);
        let result = finder.search(&fw, 0, &[6]).unwrap();
        assert_eq!(result.repeat, [1, 1, 1]);
        assert_eq!(result.rings, vec![vec![0, 5, 4, 3, 2, 1]]);
        assert_eq!(result.framework.atom_count(), 6);
        let mut origins: Vec<usize> = result.framework.atoms.iter().map(|a| a.origin).collect();
        origins.sort_unstable();
        assert_eq!(origins, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(result.size_counts(), BTreeMap::from([(6, 1)]));
        assert!(result.summary().starts_with("1 ring(s) [1x6]"));
    }

    #[test]
    fn wrong_size_finds_nothing() {
        let (fw, bonds) = hexagon();
        let finder = RingFinder::with_providers(bonds, MinimumImageAngles);
        let result = finder.search(&fw, 3, &[4, 5]).unwrap();
        assert!(result.is_empty());
        assert!(result.framework.is_empty());
    }

    #[test]
    fn isolated_seed_gives_empty_framework() {
        let (fw, _) = hexagon();
        let finder = RingFinder::with_providers(ConnectivityMatrix::new(6), MinimumImageAngles);
        let result = finder.search(&fw, 2, &[6]).unwrap();
        assert_eq!(result.ring_count(), 0);
        assert_eq!(result.framework.atom_count(), 0);
    }

    #[test]
    fn input_validated_before_replication() {
        let (fw, _) = hexagon();
        let finder = RingFinder::with_providers(Unreachable, MinimumImageAngles);
        assert!(matches!(
            finder.search(&fw, 0, &[]),
            Err(ZeoringError::InvalidInput(_))
        ));
        assert!(matches!(
            finder.search(&fw, 6, &[6]),
            Err(ZeoringError::InvalidInput(_))
        ));
        assert!(matches!(
            finder.search(&fw, 0, &[6]),
            Err(ZeoringError::Other(_))
        ));
    }

    #[test]
    fn malformed_connectivity_is_surfaced() {
        let (fw, _) = hexagon();
        let mut bonds = ConnectivityMatrix::new(6);
        bonds.set(0, 1, true);
        let finder = RingFinder::with_providers(bonds, MinimumImageAngles);
        assert!(matches!(
            finder.search(&fw, 0, &[6]),
            Err(ZeoringError::Connectivity(_))
        ));
    }

    #[test]
    fn search_many_matches_single_searches() {
        let (fw, bonds) = hexagon();
        let finder = RingFinder::with_providers(bonds, MinimumImageAngles);
        let results = finder.search_many(&fw, &[0, 3], &[6]).unwrap();
        assert_eq!(results.len(), 2);
        for (result, seed) in results.iter().zip([0, 3]) {
            let single = finder.search(&fw, seed, &[6]).unwrap();
            assert_eq!(result.rings, single.rings);
        }
        assert!(finder.search_many(&fw, &[0, 9], &[6]).is_err());
    }

    #[test]
    fn search_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RingFinder>();
        assert_send_sync::<RingSearchResult>();
        assert_send_sync::<RingSearchConfig>();
    }

    #[test]
    fn default_config() {
        let config = RingSearchConfig::default();
        assert!((config.cutoff_mult - 1.05).abs() < 1e-12);
        assert!((config.skin - 0.3).abs() < 1e-12);
    }

    /// Si-O-Si-O rhombus with 1.9 Å Si-O bonds and Si...Si at 3.1 Å,
    /// alone in a large cell.
    fn stretched_rhombus() -> Framework {
        let mut fw = Framework::new("RHB", Lattice::orthorhombic(30.0, 30.0, 30.0).unwrap());
        let half_o = (1.9f64.powi(2) - 1.55f64.powi(2)).sqrt();
        fw.push("Si", Point3D::new(13.45, 15.0, 15.0));
        fw.push("O", Point3D::new(15.0, 15.0 - half_o, 15.0));
        fw.push("Si", Point3D::new(16.55, 15.0, 15.0));
        fw.push("O", Point3D::new(15.0, 15.0 + half_o, 15.0));
        fw
    }

    #[test]
    fn skin_reaches_stretched_bonds() {
        let fw = stretched_rhombus();
        let result = RingFinder::default().search(&fw, 0, &[4]).unwrap();
        assert_eq!(result.rings, vec![vec![0, 3, 2, 1]]);
        assert_eq!(result.framework.atom_count(), 4);

        let bare = RingSearchConfig {
            skin: 0.0,
            ..RingSearchConfig::default()
        };
        let result = RingFinder::new(&bare).search(&fw, 0, &[4]).unwrap();
        assert!(result.is_empty());
    }
}
