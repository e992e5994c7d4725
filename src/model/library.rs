use super::Video;
use std::collections::HashMap;

/// Complete video catalog, indexed by video ID
#[derive(Debug, Clone)]
pub struct VideoLibrary {
    videos: HashMap<String, Video>,
}

impl VideoLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self {
            videos: HashMap::new(),
        }
    }

    /// Add a video to the library, replacing any video with the same ID
    pub fn add_video(&mut self, video: Video) {
        self.videos.insert(video.id.clone(), video);
    }

    /// Get a video by ID
    pub fn get_video(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    /// Get all videos (arbitrary order)
    pub fn videos(&self) -> impl Iterator<Item = &Video> {
        self.videos.values()
    }

    /// Total number of videos
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }
}

impl Default for VideoLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Video> for VideoLibrary {
    fn from_iter<I: IntoIterator<Item = Video>>(iter: I) -> Self {
        let mut library = Self::new();
        for video in iter {
            library.add_video(video);
        }
        library
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_creation() {
        let lib = VideoLibrary::new();
        assert_eq!(lib.video_count(), 0);
    }

    #[test]
    fn test_add_video() {
        let mut lib = VideoLibrary::new();
        lib.add_video(Video::new("funny_dogs_video_id", "Funny Dogs", vec!["#dog".to_string()]));

        assert_eq!(lib.video_count(), 1);
        assert_eq!(lib.get_video("funny_dogs_video_id").unwrap().title, "Funny Dogs");
        assert!(lib.get_video("missing").is_none());
    }

    #[test]
    fn test_collect_from_iterator() {
        let lib: VideoLibrary = vec![
            Video::new("a", "A", Vec::new()),
            Video::new("b", "B", Vec::new()),
        ]
        .into_iter()
        .collect();

        assert_eq!(lib.video_count(), 2);
        assert_eq!(lib.videos().count(), 2);
    }
}
