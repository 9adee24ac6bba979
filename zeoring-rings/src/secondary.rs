//! Secondary ring removal.
//!
//! Large candidate rings are often two genuine smaller rings joined along a
//! shared chain. Each larger ring collects demerits from the smaller rings it
//! overlaps, and rings with two or more demerits are dropped.
//!
//! The thresholds are empirical and reproduced exactly:
//!
//! | larger ring | smaller ring | shared atoms of the smaller ring | demerits |
//! |-------------|--------------|----------------------------------|----------|
//! | >= 16       | > 6          | exactly half                     | 1        |
//! | >= 16       | > 6          | more than half                   | 2        |
//! | any         | 6 or 8       | all but at most two              | 2        |

use std::collections::HashSet;

use crate::paths::Path;

/// Size from which a ring is checked for being a union of smaller rings.
pub const LARGE_RING_SIZE: usize = 16;

/// Smaller rings must be strictly bigger than this to count as ring halves.
pub const MIN_HALF_RING_SIZE: usize = 6;

/// Ring sizes that a larger ring may not almost contain.
pub const CANONICAL_RING_SIZES: [usize; 2] = [6, 8];

/// Demerit total at which a ring is discarded.
pub const DISCARD_DEMERITS: u32 = 2;

/// Demerits the ring `large` earns from the strictly smaller ring `small`.
fn pair_demerits(large: &HashSet<usize>, large_size: usize, small: &Path) -> u32 {
    let ns = small.len();
    let halves = large_size >= LARGE_RING_SIZE && ns > MIN_HALF_RING_SIZE;
    let canonical = CANONICAL_RING_SIZES.contains(&ns);
    if !halves && !canonical {
        return 0;
    }

    let shared = small.iter().filter(|&a| large.contains(a)).count();
    let mut demerits = 0;
    if halves {
        if 2 * shared == ns {
            demerits += 1;
        } else if 2 * shared > ns {
            demerits += 2;
        }
    }
    if canonical && shared + 2 >= ns {
        demerits += 2;
    }
    demerits
}

/// Demerit count for every path, indexed like `paths`.
///
/// Each unordered pair is scored once, and only the larger ring of the pair
/// can be penalized. Equal-sized rings never penalize each other.
pub fn secondary_demerits(paths: &[Path]) -> Vec<u32> {
    let sets: Vec<HashSet<usize>> = paths
        .iter()
        .map(|p| p.iter().copied().collect())
        .collect();
    let mut demerits = vec![0u32; paths.len()];

    for i in 0..paths.len() {
        for j in (i + 1)..paths.len() {
            let (ni, nj) = (paths[i].len(), paths[j].len());
            if ni > nj {
                demerits[i] += pair_demerits(&sets[i], ni, &paths[j]);
            } else if nj > ni {
                demerits[j] += pair_demerits(&sets[j], nj, &paths[i]);
            }
        }
    }

    demerits
}

/// Drop the rings that look like unions or near-supersets of smaller rings.
pub fn remove_secondary(paths: Vec<Path>) -> Vec<Path> {
    let demerits = secondary_demerits(&paths);
    let before = paths.len();
    let kept: Vec<Path> = paths
        .into_iter()
        .zip(demerits)
        .filter_map(|(path, d)| {
            if d >= DISCARD_DEMERITS {
                log::trace!("secondary ring {:?} ({} demerits)", path, d);
                None
            } else {
                Some(path)
            }
        })
        .collect();
    log::debug!("secondary filter: {} -> {} paths", before, kept.len());
    kept
}
