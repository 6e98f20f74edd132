// File: crates/aqchart-core/src/selection.rs
// Summary: Legend state machine: single-select pin and two-category comparison.

use std::collections::BTreeSet;

/// Which selection mode the legend is in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// No pin; the next click pins.
    #[default]
    Free,
    /// One category isolated.
    Pinned { anchor: String },
    /// The pinned category plus one other, side by side.
    Comparing { anchor: String, other: String },
}

/// Enabled categories plus the selection mode that produced them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendState {
    all: BTreeSet<String>,
    enabled: BTreeSet<String>,
    selection: Selection,
}

impl LegendState {
    /// Every category enabled, nothing pinned.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let all: BTreeSet<String> = ids.into_iter().map(Into::into).collect();
        Self { enabled: all.clone(), all, selection: Selection::Free }
    }

    pub fn enabled(&self) -> &BTreeSet<String> { &self.enabled }
    pub fn selection(&self) -> &Selection { &self.selection }
    pub fn is_enabled(&self, id: &str) -> bool { self.enabled.contains(id) }

    /// The pinned category, while single-select is active.
    pub fn single_selected(&self) -> Option<&str> {
        match &self.selection {
            Selection::Free => None,
            Selection::Pinned { anchor } | Selection::Comparing { anchor, .. } => Some(anchor),
        }
    }

    fn set(&mut self, enabled: impl IntoIterator<Item = String>, selection: Selection) {
        self.enabled = enabled.into_iter().collect();
        self.selection = selection;
    }

    /// Legend entry clicked.
    ///
    /// Outside single-select every click pins. Clicking the pin again, in either
    /// single-select mode, clears to an empty set; clicking the compared category
    /// toggles it off.
    pub fn click(&mut self, id: &str) {
        if !self.all.contains(id) {
            tracing::warn!("legend click on unknown category '{id}' ignored");
            return;
        }
        let id = id.to_string();
        match self.selection.clone() {
            Selection::Free => {
                self.set([id.clone()], Selection::Pinned { anchor: id });
            }
            Selection::Pinned { anchor } | Selection::Comparing { anchor, .. } if anchor == id => {
                self.set(BTreeSet::new(), Selection::Free);
            }
            Selection::Comparing { anchor, other } if other == id => {
                self.set([anchor.clone()], Selection::Pinned { anchor });
            }
            Selection::Pinned { anchor } | Selection::Comparing { anchor, .. } => {
                self.set([anchor.clone(), id.clone()], Selection::Comparing { anchor, other: id });
            }
        }
    }

    /// A plotted point clicked; behaves as a click on its category's legend entry.
    pub fn click_point(&mut self, id: &str) {
        self.click(id);
    }

    pub fn hide_all(&mut self) {
        self.set(BTreeSet::new(), Selection::Free);
    }

    pub fn show_all(&mut self) {
        let all = self.all.clone();
        self.set(all, Selection::Free);
    }
}
