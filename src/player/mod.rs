//! Video player command processor
//!
//! [`VideoPlayer`] owns the catalog and the per-run [`Session`]. Every command
//! runs to completion and reports through an [`Output`] sink; rejected
//! commands leave the session untouched and print one error line.

mod error;
mod flags;
mod io;
mod playback;
mod playlists;
mod search;
mod session;

pub use error::{ErrorKind, PlayerError, Reason};
pub use io::{Console, LineInput, Output};
pub use search::parse_selection;
pub use session::{
    FlagRegistry, PlaybackState, PlaybackStatus, PlaylistBook, Session, REASON_NOT_SUPPLIED,
};

use crate::catalog::VideoCatalog;
use crate::model::VideoLibrary;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Command processor over a read-only catalog
pub struct VideoPlayer<C: VideoCatalog = VideoLibrary> {
    catalog: C,
    session: Session,
    rng: StdRng,
}

impl<C: VideoCatalog> VideoPlayer<C> {
    /// Create a player with an entropy-seeded random source
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            session: Session::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a player whose random picks are reproducible
    pub fn with_seed(catalog: C, seed: u64) -> Self {
        Self {
            catalog,
            session: Session::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// ID of the loaded video (playing or paused)
    pub fn now_playing(&self) -> Option<&str> {
        self.session.playback.current()
    }

    pub fn is_paused(&self) -> bool {
        self.session.playback.is_paused()
    }

    pub fn is_flagged(&self, video_id: &str) -> bool {
        self.session.flags.is_flagged(video_id)
    }

    pub fn flag_reason(&self, video_id: &str) -> Option<&str> {
        self.session.flags.reason(video_id)
    }

    /// Print the number of videos in the catalog
    pub fn number_of_videos(&self, out: &mut dyn Output) {
        let count = self.catalog.all_videos().len();
        out.emit(&format!("{} videos in the library", count));
    }

    /// Print every video, sorted by its listing line
    pub fn show_all_videos(&self, out: &mut dyn Output) {
        out.emit("Here's a list of all available videos:");
        for line in sorted_listing(self.catalog.all_videos().into_iter()) {
            out.emit(&format!("    {}", line));
        }
    }
}

/// Listing lines for the given videos, in natural string order
fn sorted_listing<'a>(videos: impl Iterator<Item = &'a crate::model::Video>) -> Vec<String> {
    let mut lines: Vec<String> = videos.map(|v| v.to_string()).collect();
    lines.sort();
    lines
}

/// Title for a video ID, falling back to the ID if the catalog no longer has it
fn title_of<C: VideoCatalog>(catalog: &C, video_id: &str) -> String {
    catalog
        .get_video(video_id)
        .map(|v| v.title.clone())
        .unwrap_or_else(|| video_id.to_string())
}

/// Listing line for a video ID, falling back to the ID
fn describe<C: VideoCatalog>(catalog: &C, video_id: &str) -> String {
    catalog
        .get_video(video_id)
        .map(|v| v.to_string())
        .unwrap_or_else(|| video_id.to_string())
}

/// Print a rejection, if any
fn report(result: Result<(), PlayerError>, out: &mut dyn Output) {
    if let Err(e) = result {
        log::debug!("Command rejected ({:?}): {}", e.kind(), e);
        out.emit(&e.to_string());
    }
}
