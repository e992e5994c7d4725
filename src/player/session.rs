//! Mutable per-run state: playback cursor, playlists and flags

use crate::model::Playlist;
use std::collections::HashMap;

/// Reason recorded when a video is flagged without one
pub const REASON_NOT_SUPPLIED: &str = "Not supplied";

/// Where the single playback cursor currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus<'a> {
    Stopped,
    Playing(&'a str),
    Paused(&'a str),
}

/// Current video and pause flag
///
/// `paused` is only ever true while a video is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackState {
    current: Option<String>,
    paused: bool,
}

impl PlaybackState {
    pub fn status(&self) -> PlaybackStatus<'_> {
        match (&self.current, self.paused) {
            (None, _) => PlaybackStatus::Stopped,
            (Some(id), false) => PlaybackStatus::Playing(id),
            (Some(id), true) => PlaybackStatus::Paused(id),
        }
    }

    /// ID of the loaded video, playing or paused
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Load a video and start playing it, replacing whatever was loaded
    pub fn start(&mut self, video_id: String) {
        self.current = Some(video_id);
        self.paused = false;
    }

    /// Unload the current video, returning its ID
    pub fn stop(&mut self) -> Option<String> {
        self.paused = false;
        self.current.take()
    }

    /// Pause the loaded video; returns false if nothing is loaded
    pub fn pause(&mut self) -> bool {
        if self.current.is_none() {
            return false;
        }
        self.paused = true;
        true
    }

    /// Clear the pause flag
    pub fn resume(&mut self) {
        self.paused = false;
    }
}

/// Named playlists, addressed case-insensitively
#[derive(Debug, Clone, Default)]
pub struct PlaylistBook {
    /// Playlists by lowercase key
    by_key: HashMap<String, Playlist>,

    /// Keys in creation order
    order: Vec<String>,
}

impl PlaylistBook {
    /// Create a playlist; returns false if the name collides with an existing one
    pub fn create(&mut self, name: &str) -> bool {
        let playlist = Playlist::new(name.to_string());
        if self.by_key.contains_key(&playlist.key) {
            return false;
        }
        self.order.push(playlist.key.clone());
        self.by_key.insert(playlist.key.clone(), playlist);
        true
    }

    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.by_key.get(&Playlist::key_for(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Playlist> {
        self.by_key.get_mut(&Playlist::key_for(name))
    }

    /// Delete a playlist by name (any case)
    pub fn remove(&mut self, name: &str) -> Option<Playlist> {
        let key = Playlist::key_for(name);
        let playlist = self.by_key.remove(&key)?;
        self.order.retain(|k| *k != key);
        Some(playlist)
    }

    /// Playlists in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Playlist> {
        self.order.iter().filter_map(|key| self.by_key.get(key))
    }

    /// Display names sorted case-sensitively
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.iter().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Flagged video IDs with their reasons
#[derive(Debug, Clone, Default)]
pub struct FlagRegistry {
    reasons: HashMap<String, String>,
}

impl FlagRegistry {
    /// Flag a video; returns false if it was already flagged
    pub fn flag(&mut self, video_id: &str, reason: &str) -> bool {
        if self.reasons.contains_key(video_id) {
            return false;
        }
        self.reasons.insert(video_id.to_string(), reason.to_string());
        true
    }

    /// Remove a flag, returning the reason it carried
    pub fn allow(&mut self, video_id: &str) -> Option<String> {
        self.reasons.remove(video_id)
    }

    pub fn reason(&self, video_id: &str) -> Option<&str> {
        self.reasons.get(video_id).map(String::as_str)
    }

    pub fn is_flagged(&self, video_id: &str) -> bool {
        self.reasons.contains_key(video_id)
    }

    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }
}

/// All mutable state of one player run
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub playback: PlaybackState,
    pub playlists: PlaylistBook,
    pub flags: FlagRegistry,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }
}
