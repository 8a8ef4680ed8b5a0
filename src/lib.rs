//! Fetch the latest GitHub release of a project, normalize its tag into a
//! strict SemVer version, install its binary and record both in a wrapper
//! package manifest.

pub mod config;
pub mod install;
pub mod logging;
pub mod release;
pub mod version;
