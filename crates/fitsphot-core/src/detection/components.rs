use ndarray::Array2;

use super::config::Connectivity;

/// Connected-component labels for one image.
#[derive(Clone, Debug)]
pub struct LabelMap {
    /// 0 = background, 1..=count = components in row-major first-seen order.
    pub labels: Array2<u32>,
    /// Number of components.
    pub count: u32,
}

impl LabelMap {
    pub fn dim(&self) -> (usize, usize) {
        self.labels.dim()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Label connected foreground regions of a binary mask using two-pass
/// labeling with union-find.
///
/// Components are numbered 1..N by the position of their first pixel in a
/// row-major scan, so the numbering does not depend on how provisional
/// labels were merged.
pub fn label_components(mask: &Array2<bool>, connectivity: Connectivity) -> LabelMap {
    let (h, w) = mask.dim();
    let mut labels = Array2::<u32>::zeros((h, w));
    if h == 0 || w == 0 {
        return LabelMap { labels, count: 0 };
    }

    // Union-find parent array. Index 0 unused; labels start at 1.
    let mut parent: Vec<u32> = vec![0];

    // Pass 1: assign provisional labels.
    for row in 0..h {
        for col in 0..w {
            if !mask[[row, col]] {
                continue;
            }

            let mut smallest = 0u32;
            let mut neighbours = [0u32; 4];
            for (slot, (dr, dc)) in scanned_neighbours(connectivity).iter().enumerate() {
                let nr = row as isize + dr;
                let nc = col as isize + dc;
                if nr < 0 || nc < 0 || nc >= w as isize {
                    continue;
                }
                let lbl = labels[[nr as usize, nc as usize]];
                neighbours[slot] = lbl;
                if lbl > 0 && (smallest == 0 || lbl < smallest) {
                    smallest = lbl;
                }
            }

            if smallest == 0 {
                let new_label = parent.len() as u32;
                parent.push(new_label);
                labels[[row, col]] = new_label;
                continue;
            }

            labels[[row, col]] = smallest;
            for &lbl in neighbours.iter().filter(|&&l| l > 0 && l != smallest) {
                union(&mut parent, smallest, lbl);
            }
        }
    }

    // Flatten parent references.
    for i in 1..parent.len() {
        parent[i] = find(&parent, i as u32);
    }

    // Pass 2: map roots to sequential labels in scan order.
    let mut final_label = vec![0u32; parent.len()];
    let mut count = 0u32;
    for lbl in labels.iter_mut() {
        if *lbl == 0 {
            continue;
        }
        let root = parent[*lbl as usize] as usize;
        if final_label[root] == 0 {
            count += 1;
            final_label[root] = count;
        }
        *lbl = final_label[root];
    }

    LabelMap { labels, count }
}

/// Neighbours already visited in a row-major scan.
fn scanned_neighbours(connectivity: Connectivity) -> &'static [(isize, isize)] {
    match connectivity {
        Connectivity::Four => &[(-1, 0), (0, -1)],
        Connectivity::Eight => &[(-1, -1), (-1, 0), (-1, 1), (0, -1)],
    }
}

fn find(parent: &[u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        x = parent[x as usize];
    }
    x
}

fn union(parent: &mut [u32], a: u32, b: u32) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        // Merge larger root into smaller root to keep labels consistent.
        let (small, big) = if ra < rb { (ra, rb) } else { (rb, ra) };
        parent[big as usize] = small;
    }
}
