use std::slice;

use crate::model::Histogram;

use super::document::{ArchiveEntry, Group};

/// One histogram found by [`walk`].
#[derive(Clone, Debug, PartialEq)]
pub struct Discovered {
    pub name: String,
    pub path: String,
    pub histogram: Histogram,
}

/// Lazy depth-first walk over a group tree.
///
/// Subgroups are entered at the position they occupy among their siblings,
/// so histograms come out in document order.
pub struct Walk<'a> {
    stack: Vec<(String, slice::Iter<'a, ArchiveEntry>)>,
}

pub fn walk(root: &Group) -> Walk<'_> {
    Walk {
        stack: vec![(root.name.clone(), root.entries.iter())],
    }
}

impl Iterator for Walk<'_> {
    type Item = Discovered;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (prefix, entries) = self.stack.last_mut()?;
            match entries.next() {
                None => {
                    self.stack.pop();
                }
                Some(ArchiveEntry::Group(g)) => {
                    let child = join_path(prefix, &g.name);
                    self.stack.push((child, g.entries.iter()));
                }
                Some(ArchiveEntry::Histogram(h)) => {
                    return Some(Discovered {
                        name: h.name.clone(),
                        path: join_path(prefix, &h.name),
                        histogram: h.clone(),
                    });
                }
            }
        }
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", prefix, name)
    }
}

#[cfg(test)]
#[path = "../tests/archive/walk_tests.rs"]
mod tests;
