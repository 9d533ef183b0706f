//! Quick-search over the catalog.

use crate::catalog::{Catalog, DistributionHandle};

/// Which string a listing shows for each distribution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    ShowName,
    ShowPath,
}

impl DisplayMode {
    pub fn from_show_path(show_path: bool) -> Self {
        if show_path {
            DisplayMode::ShowPath
        } else {
            DisplayMode::ShowName
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            DisplayMode::ShowName => DisplayMode::ShowPath,
            DisplayMode::ShowPath => DisplayMode::ShowName,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::ShowName => "name",
            DisplayMode::ShowPath => "path",
        }
    }
}

pub fn display_label(handle: &DistributionHandle, mode: DisplayMode) -> &str {
    match mode {
        DisplayMode::ShowName => &handle.name,
        DisplayMode::ShowPath => &handle.path,
    }
}

/// Sorts a listing by displayed label, then identity.
pub fn sort_for_display(items: &mut [&DistributionHandle], mode: DisplayMode) {
    items.sort_by(|a, b| {
        display_label(a, mode)
            .cmp(display_label(b, mode))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Catalog entries whose full path contains `query`.
///
/// Matching is case-sensitive and always against the full path, even when
/// `mode` shows names. An empty query matches everything.
pub fn filter<'a>(
    catalog: &'a Catalog,
    query: &str,
    mode: DisplayMode,
) -> Vec<&'a DistributionHandle> {
    let mut out: Vec<&DistributionHandle> = catalog
        .iter()
        .filter(|h| h.path.contains(query))
        .collect();
    sort_for_display(&mut out, mode);
    out
}

#[cfg(test)]
#[path = "tests/search_tests.rs"]
mod tests;
