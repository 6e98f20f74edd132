// File: crates/aqchart-core/src/hit.rs
// Summary: Nearest-point hit index over the shown records, in unzoomed plot coordinates.
// Notes:
// - Looking up the nearest site is the same question as "which Voronoi cell
//   contains the pointer", so a k-d tree stands in for the cell diagram.
// - Sites are bounded to the plot rectangle; queries outside it miss.
// - The tree cannot split a bucket whose items share the split-axis value (a
//   flat series puts every site on one y), so each site is stored with a
//   distinct sub-pixel offset on both axes. Hits report the true site.

use kiddo::float::kdtree::KdTree;
use kiddo::SquaredEuclidean;

use crate::geometry::{Point, Rect};

type SiteTree = KdTree<f64, u64, 2, 32, u32>;

/// Total offset spread across all sites, in base pixels.
const TIE_SPREAD: f64 = 1e-3;

/// Result of a nearest-site lookup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// Index into `Dataset::records`.
    pub record: usize,
    /// Distance from the query in base pixels.
    pub distance: f64,
    /// The site position in base pixels.
    pub site: Point,
}

pub struct HitIndex {
    tree: Option<SiteTree>,
    sites: Vec<(usize, Point)>,
    bounds: Rect,
}

impl std::fmt::Debug for HitIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitIndex")
            .field("sites", &self.sites.len())
            .field("bounds", &self.bounds)
            .finish()
    }
}

impl HitIndex {
    pub fn empty(bounds: Rect) -> Self {
        Self { tree: None, sites: Vec::new(), bounds }
    }

    /// Build from `(record index, base position)` pairs. Non-finite and
    /// out-of-bounds positions are dropped; coincident positions keep the first
    /// record. Fewer than two distinct sites leave the index empty.
    pub fn build(points: impl IntoIterator<Item = (usize, Point)>, bounds: Rect) -> Self {
        let mut sites: Vec<(usize, Point)> = points
            .into_iter()
            .filter(|(_, p)| p.is_finite() && bounds.contains(*p))
            .collect();
        sites.sort_by(|a, b| {
            a.1.x
                .total_cmp(&b.1.x)
                .then(a.1.y.total_cmp(&b.1.y))
                .then(a.0.cmp(&b.0))
        });
        sites.dedup_by(|later, first| later.1 == first.1);

        if sites.len() < 2 || bounds.is_empty() {
            if !sites.is_empty() {
                tracing::debug!("hit index degenerate ({} distinct site), no matches", sites.len());
            }
            return Self { tree: None, sites, bounds };
        }

        let step = TIE_SPREAD / sites.len() as f64;
        let mut tree = SiteTree::with_capacity(sites.len());
        for (slot, (_, p)) in sites.iter().enumerate() {
            let nudge = slot as f64 * step;
            tree.add(&[p.x + nudge, p.y + nudge], slot as u64);
        }
        tracing::debug!("hit index built over {} sites", sites.len());
        Self { tree: Some(tree), sites, bounds }
    }

    /// Nearest site to `p` (base coordinates), or `None` when the index is
    /// degenerate or `p` lies outside the bounds.
    pub fn nearest(&self, p: Point) -> Option<Hit> {
        let tree = self.tree.as_ref()?;
        if !p.is_finite() || !self.bounds.contains(p) {
            return None;
        }
        let found = tree.nearest_one::<SquaredEuclidean>(&[p.x, p.y]);
        let &(record, site) = self.sites.get(found.item as usize)?;
        let distance = (site.x - p.x).hypot(site.y - p.y);
        Some(Hit { record, distance, site })
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Distinct sites indexed.
    pub fn len(&self) -> usize {
        if self.tree.is_some() { self.sites.len() } else { 0 }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}
