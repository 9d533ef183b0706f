//! Archive documents and the discovery walk over them.
//!
//! An archive is a JSON document holding a tree of named groups whose leaves
//! are histograms. Entry order inside a group is preserved and decides the
//! order in which [`walk`] yields histograms.

mod demo;
mod document;
mod open;
mod walk;

pub use self::demo::demo_document;
pub use self::document::{ARCHIVE_VERSION, ArchiveDocument, ArchiveEntry, Group};
pub use self::open::{ArchiveOpener, JsonArchiveOpener, OpenedArchive};
pub use self::walk::{Discovered, Walk, walk};
