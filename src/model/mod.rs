//! Unified data model for the video catalog
//!
//! This module defines data structures that are independent of
//! both the catalog file format and the interactive shell.

mod video;
mod playlist;
mod library;

pub use video::Video;
pub use playlist::Playlist;
pub use library::VideoLibrary;
