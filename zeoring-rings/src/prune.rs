//! Reduce a framework to its ring atoms.

use zeoring_struct::Framework;

use crate::paths::Path;

/// Atom indices appearing in any path, in order of first appearance.
pub fn ring_atoms(paths: &[Path]) -> Vec<usize> {
    let mut seen = std::collections::HashSet::new();
    paths
        .iter()
        .flatten()
        .copied()
        .filter(|&atom| seen.insert(atom))
        .collect()
}

/// Delete every atom that is not part of a path. With no paths the
/// framework ends up empty.
pub fn prune(mut framework: Framework, paths: &[Path]) -> Framework {
    let mut keep = vec![false; framework.atom_count()];
    for atom in ring_atoms(paths) {
        if let Some(flag) = keep.get_mut(atom) {
            *flag = true;
        }
    }
    let doomed: Vec<usize> = (0..keep.len()).filter(|&i| !keep[i]).collect();
    framework.delete_atoms(&doomed);
    log::debug!(
        "pruned {} atoms, {} ring atoms remain",
        doomed.len(),
        framework.atom_count()
    );
    framework
}
