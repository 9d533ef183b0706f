use serde::{Deserialize, Serialize};

use crate::model::Histogram;

pub const ARCHIVE_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArchiveDocument {
    #[serde(default = "default_version")]
    pub version: u32,
    pub root: Group,
}

fn default_version() -> u32 {
    ARCHIVE_VERSION
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,

    #[serde(default)]
    pub entries: Vec<ArchiveEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ArchiveEntry {
    Group(Group),
    Histogram(Histogram),
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_group(mut self, group: Group) -> Self {
        self.entries.push(ArchiveEntry::Group(group));
        self
    }

    pub fn with_histogram(mut self, histogram: Histogram) -> Self {
        self.entries.push(ArchiveEntry::Histogram(histogram));
        self
    }

    /// Direct child group by name.
    pub fn child(&self, name: &str) -> Option<&Group> {
        self.entries.iter().find_map(|e| match e {
            ArchiveEntry::Group(g) if g.name == name => Some(g),
            _ => None,
        })
    }

    /// Nested group by slash-separated path relative to this group.
    pub fn descend(&self, path: &str) -> Option<&Group> {
        path.split('/')
            .filter(|p| !p.is_empty())
            .try_fold(self, |g, part| g.child(part))
    }
}
