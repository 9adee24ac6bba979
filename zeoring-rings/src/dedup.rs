//! Duplicate ring removal.

use crate::paths::Path;

/// Sorted atom indices: equal keys mean the same ring regardless of start
/// atom or direction.
fn atom_set(path: &Path) -> Vec<usize> {
    let mut key = path.clone();
    key.sort_unstable();
    key
}

/// Drop every path whose atom set equals that of an earlier path.
///
/// Pairs are compared in ascending `(i, j)` order and the later index is
/// marked, so among equal paths only the first one survives.
pub fn dedup(paths: Vec<Path>) -> Vec<Path> {
    let keys: Vec<Vec<usize>> = paths.iter().map(atom_set).collect();
    let mut duplicate = vec![false; paths.len()];
    for i in 0..keys.len() {
        for j in (i + 1)..keys.len() {
            if keys[i] == keys[j] {
                duplicate[j] = true;
            }
        }
    }

    let before = paths.len();
    let kept: Vec<Path> = paths
        .into_iter()
        .zip(duplicate)
        .filter_map(|(path, dup)| (!dup).then_some(path))
        .collect();
    log::debug!("dedup: {} -> {} paths", before, kept.len());
    kept
}
