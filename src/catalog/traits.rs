//! Catalog lookup trait

use crate::model::{Video, VideoLibrary};

/// Read-only video catalog - the player only ever looks videos up and enumerates them
pub trait VideoCatalog {
    /// Look up a video by ID
    fn get_video(&self, id: &str) -> Option<&Video>;

    /// Every video in the catalog (order unspecified)
    fn all_videos(&self) -> Vec<&Video>;
}

impl VideoCatalog for VideoLibrary {
    fn get_video(&self, id: &str) -> Option<&Video> {
        VideoLibrary::get_video(self, id)
    }

    fn all_videos(&self) -> Vec<&Video> {
        self.videos().collect()
    }
}
