//! Catalog text format parser

use crate::model::{Video, VideoLibrary};
use std::collections::HashSet;
use thiserror::Error;

/// Catalog parsing errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Line does not have the `title | id` fields
    #[error("line {line}: expected `title | id | tags`, got {content:?}")]
    MalformedLine { line: usize, content: String },

    /// Title or ID field is blank
    #[error("line {line}: video title and id must not be empty")]
    EmptyField { line: usize },

    /// Same ID listed twice
    #[error("line {line}: duplicate video id {id:?}")]
    DuplicateId { line: usize, id: String },
}

/// Parse catalog text into a library
///
/// Each non-blank line is `title | id | tag, tag, ...`; the tags field may be
/// omitted or empty. All fields are trimmed.
pub fn parse_catalog_str(text: &str) -> Result<VideoLibrary, CatalogError> {
    let mut library = VideoLibrary::new();
    let mut seen = HashSet::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let video = parse_line(raw, line)?;
        if !seen.insert(video.id.clone()) {
            return Err(CatalogError::DuplicateId { line, id: video.id });
        }

        log::debug!("Catalog entry {}: {}", line, video);
        library.add_video(video);
    }

    Ok(library)
}

fn parse_line(raw: &str, line: usize) -> Result<Video, CatalogError> {
    let mut fields = raw.splitn(3, '|').map(str::trim);

    let (title, id) = match (fields.next(), fields.next()) {
        (Some(title), Some(id)) => (title, id),
        _ => {
            return Err(CatalogError::MalformedLine {
                line,
                content: raw.to_string(),
            })
        }
    };

    if title.is_empty() || id.is_empty() {
        return Err(CatalogError::EmptyField { line });
    }

    let tags = fields
        .next()
        .map(|tags| {
            tags.split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    Ok(Video::new(id, title, tags))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_fields_and_tags() {
        let lib = parse_catalog_str("  Funny Dogs | funny_dogs_video_id |  #dog , #animal\n").unwrap();
        let video = lib.get_video("funny_dogs_video_id").unwrap();
        assert_eq!(video.title, "Funny Dogs");
        assert_eq!(video.tags, vec!["#dog", "#animal"]);
    }

    #[test]
    fn test_parse_without_tags_field() {
        let lib = parse_catalog_str("Quiet | quiet_id\n\n").unwrap();
        assert!(lib.get_video("quiet_id").unwrap().tags.is_empty());
    }

    #[test]
    fn test_parse_malformed_line() {
        let err = parse_catalog_str("A | a |\njust a title\n").unwrap_err();
        assert_eq!(
            err,
            CatalogError::MalformedLine {
                line: 2,
                content: "just a title".to_string()
            }
        );
    }

    #[test]
    fn test_parse_empty_id() {
        let err = parse_catalog_str("Title |  | #x").unwrap_err();
        assert_eq!(err, CatalogError::EmptyField { line: 1 });
    }

    #[test]
    fn test_parse_duplicate_id() {
        let err = parse_catalog_str("A | same |\nB | same |\n").unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateId {
                line: 2,
                id: "same".to_string()
            }
        );
    }
}
