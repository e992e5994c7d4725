use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a single video with all its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier for this video
    pub id: String,

    /// Video title
    pub title: String,

    /// Tags in catalog order (e.g. `#cat`)
    pub tags: Vec<String>,
}

impl Video {
    /// Create a new video
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
        }
    }

    /// Check whether the video carries the given tag (exact match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Listing line: `title (id) [tag1 tag2]`
impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_tags() {
        let video = Video::new(
            "amazing_cats_video_id",
            "Amazing Cats",
            vec!["#cat".to_string(), "#animal".to_string()],
        );
        assert_eq!(
            video.to_string(),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal]"
        );
    }

    #[test]
    fn test_display_without_tags() {
        let video = Video::new("nothing_video_id", "Video about nothing", Vec::new());
        assert_eq!(video.to_string(), "Video about nothing (nothing_video_id) []");
    }

    #[test]
    fn test_has_tag_is_exact() {
        let video = Video::new("v", "V", vec!["#cat".to_string()]);
        assert!(video.has_tag("#cat"));
        assert!(!video.has_tag("cat"));
        assert!(!video.has_tag("#CAT"));
    }
}
