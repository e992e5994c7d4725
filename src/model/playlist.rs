use serde::{Deserialize, Serialize};

/// Represents a user playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name, as supplied at creation
    pub name: String,

    /// Lookup key (lowercased name)
    pub key: String,

    /// Video IDs in insertion order, no duplicates
    video_ids: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        let key = Self::key_for(&name);
        Self {
            name,
            key,
            video_ids: Vec::new(),
        }
    }

    /// Lookup key used for every case-insensitive name comparison
    pub fn key_for(name: &str) -> String {
        name.to_lowercase()
    }

    /// Add a video to this playlist
    ///
    /// Returns false (and leaves the playlist untouched) if the video is already in it
    pub fn add_video(&mut self, video_id: &str) -> bool {
        if self.contains(video_id) {
            return false;
        }
        self.video_ids.push(video_id.to_string());
        true
    }

    /// Remove a video, returning whether it was present
    pub fn remove_video(&mut self, video_id: &str) -> bool {
        match self.video_ids.iter().position(|id| id == video_id) {
            Some(index) => {
                self.video_ids.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove all videos
    pub fn clear(&mut self) {
        self.video_ids.clear();
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    /// Video IDs in insertion order
    pub fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_lowercase_name() {
        let playlist = Playlist::new("My COOL Playlist".to_string());
        assert_eq!(playlist.name, "My COOL Playlist");
        assert_eq!(playlist.key, "my cool playlist");
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut playlist = Playlist::new("p".to_string());
        assert!(playlist.add_video("a"));
        assert!(!playlist.add_video("a"));
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut playlist = Playlist::new("p".to_string());
        playlist.add_video("a");
        playlist.add_video("b");
        playlist.add_video("c");

        assert!(playlist.remove_video("b"));
        assert!(!playlist.remove_video("b"));
        assert_eq!(playlist.video_ids(), ["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_clear() {
        let mut playlist = Playlist::new("p".to_string());
        playlist.add_video("a");
        playlist.clear();
        assert!(playlist.is_empty());
    }
}
