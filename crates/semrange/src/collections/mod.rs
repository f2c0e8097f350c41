//! Ordered containers of versions

mod version_list;
mod version_map;

pub use version_list::VersionList;
pub use version_map::VersionMap;
