//! Video Player - in-memory video catalog command processor
//!
//! This library tracks a fixed catalog of videos, a single playback cursor,
//! named playlists and flagged videos, and prints the result of every command.

pub mod catalog;
pub mod model;
pub mod player;
pub mod shell;

pub use catalog::VideoCatalog;
pub use model::{Playlist, Video, VideoLibrary};
pub use player::{Console, LineInput, Output, PlayerError, VideoPlayer};
pub use shell::{Shell, ShellConfig};
