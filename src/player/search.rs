//! Title and tag search with an optional "play one of these" prompt

use super::io::{LineInput, Output};
use super::VideoPlayer;
use crate::catalog::VideoCatalog;
use crate::model::Video;

impl<C: VideoCatalog> VideoPlayer<C> {
    /// Search titles for `term`, case-insensitively
    pub fn search_videos(&mut self, term: &str, input: &mut dyn LineInput, out: &mut dyn Output) {
        let needle = term.to_lowercase();
        self.search(term, |v| v.title.to_lowercase().contains(&needle), input, out);
    }

    /// Search for videos carrying `tag`
    pub fn search_videos_tag(&mut self, tag: &str, input: &mut dyn LineInput, out: &mut dyn Output) {
        let wanted = tag.to_lowercase();
        self.search(tag, |v| v.has_tag(&wanted), input, out);
    }

    fn search<P>(&mut self, term: &str, predicate: P, input: &mut dyn LineInput, out: &mut dyn Output)
    where
        P: Fn(&Video) -> bool,
    {
        // (listing line, id), ordered by the listing line
        let mut results: Vec<(String, String)> = self
            .catalog
            .all_videos()
            .into_iter()
            .filter(|v| predicate(*v))
            .map(|v| (v.to_string(), v.id.clone()))
            .collect();
        results.sort();

        log::debug!("Search {:?}: {} result(s)", term, results.len());
        if results.is_empty() {
            out.emit(&format!("No search results for {}", term));
            return;
        }

        out.emit(&format!("Here are the results for {}:", term));
        for (position, (line, _)) in results.iter().enumerate() {
            out.emit(&format!("{}) {}", position + 1, line));
        }
        out.emit("Would you like to play any of the above? If yes, specify the number of the video.");
        out.emit("If your answer is not a valid number, we will assume it's a no.");

        let answer = input.next_line();
        let choice = answer
            .as_deref()
            .and_then(|answer| parse_selection(answer, results.len()));

        match choice {
            Some(position) => {
                let video_id = results[position - 1].1.clone();
                self.play_video(&video_id, out);
            }
            None => log::debug!("No search result selected (answer: {:?})", answer),
        }
    }
}

/// Interpret an answer to the search prompt as a 1-based result number
///
/// Reads the full run of leading digits, so `"10"` selects the tenth result and
/// `"2 please"` the second. `"No"`, non-numeric answers and numbers outside
/// `1..=count` select nothing.
pub fn parse_selection(answer: &str, count: usize) -> Option<usize> {
    if answer == "No" {
        return None;
    }

    let answer = answer.trim();
    let digits_end = answer
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(answer.len());

    let position: usize = answer[..digits_end].parse().ok()?;
    (1..=count).contains(&position).then_some(position)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::player;
    use super::parse_selection;

    const PROMPT: [&str; 2] = [
        "Would you like to play any of the above? If yes, specify the number of the video.",
        "If your answer is not a valid number, we will assume it's a no.",
    ];

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1", 3), Some(1));
        assert_eq!(parse_selection("3", 3), Some(3));
        assert_eq!(parse_selection("2 please", 3), Some(2));
        assert_eq!(parse_selection("10", 12), Some(10));
        assert_eq!(parse_selection(" 2 ", 3), Some(2));

        assert_eq!(parse_selection("No", 3), None);
        assert_eq!(parse_selection("0", 3), None);
        assert_eq!(parse_selection("7", 3), None);
        assert_eq!(parse_selection("", 3), None);
        assert_eq!(parse_selection("x1", 3), None);
        assert_eq!(parse_selection("99999999999999999999999", 3), None);
    }

    #[test]
    fn test_search_by_title_plays_selection() {
        let mut p = player();
        let mut input: &[u8] = b"1\n";
        let mut out: Vec<String> = Vec::new();
        p.search_videos("cat", &mut input, &mut out);

        let mut expected = vec![
            "Here are the results for cat:",
            "1) Amazing Cats (amazing_cats_video_id) [#cat #animal]",
            "2) Another Cat Video (another_cat_video_id) [#cat #animal]",
        ];
        expected.extend(PROMPT);
        expected.push("Playing video: Amazing Cats");
        assert_eq!(out, expected);
        assert_eq!(p.now_playing(), Some("amazing_cats_video_id"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut p = player();
        let mut input: &[u8] = b"No\n";
        let mut out: Vec<String> = Vec::new();
        p.search_videos("AMAzing", &mut input, &mut out);

        assert_eq!(out[0], "Here are the results for AMAzing:");
        assert_eq!(out[1], "1) Amazing Cats (amazing_cats_video_id) [#cat #animal]");
        assert_eq!(out.len(), 4);
        assert_eq!(p.now_playing(), None);
    }

    #[test]
    fn test_search_out_of_range_plays_nothing() {
        let mut p = player();
        let mut input: &[u8] = b"7\n";
        let mut out: Vec<String> = Vec::new();
        p.search_videos("cat", &mut input, &mut out);
        assert_eq!(out.len(), 5);
        assert_eq!(p.now_playing(), None);
    }

    #[test]
    fn test_search_at_end_of_input_plays_nothing() {
        let mut p = player();
        let mut input: &[u8] = b"";
        let mut out: Vec<String> = Vec::new();
        p.search_videos("cat", &mut input, &mut out);
        assert_eq!(p.now_playing(), None);
    }

    #[test]
    fn test_search_no_results_reads_nothing() {
        let mut p = player();
        let mut input: &[u8] = b"1\n";
        let mut out: Vec<String> = Vec::new();
        p.search_videos("blah", &mut input, &mut out);
        assert_eq!(out, vec!["No search results for blah"]);
        assert_eq!(input, b"1\n");
    }

    #[test]
    fn test_search_by_tag() {
        let mut p = player();
        let mut input: &[u8] = b"2\n";
        let mut out: Vec<String> = Vec::new();
        p.search_videos_tag("#ANIMAL", &mut input, &mut out);

        let mut expected = vec![
            "Here are the results for #ANIMAL:",
            "1) Amazing Cats (amazing_cats_video_id) [#cat #animal]",
            "2) Another Cat Video (another_cat_video_id) [#cat #animal]",
            "3) Funny Dogs (funny_dogs_video_id) [#dog #animal]",
        ];
        expected.extend(PROMPT);
        expected.push("Playing video: Another Cat Video");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_search_by_tag_requires_exact_tag() {
        let mut p = player();
        let mut input: &[u8] = b"";
        let mut out: Vec<String> = Vec::new();
        p.search_videos_tag("animal", &mut input, &mut out);
        assert_eq!(out, vec!["No search results for animal"]);
    }

    #[test]
    fn test_search_selection_of_flagged_video_is_rejected() {
        let mut p = player();
        p.flag_video("amazing_cats_video_id", "dont_like_cats", &mut Vec::<String>::new());

        let mut input: &[u8] = b"1\n";
        let mut out: Vec<String> = Vec::new();
        p.search_videos("cat", &mut input, &mut out);
        assert_eq!(
            out.last().map(String::as_str),
            Some("Cannot play video: Video is currently flagged (reason: dont_like_cats)")
        );
        assert_eq!(p.now_playing(), None);
    }
}
