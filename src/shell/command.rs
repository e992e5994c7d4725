//! Command line parsing
//!
//! One input line is one command: a case-insensitive command word followed by
//! whitespace-separated arguments.

use thiserror::Error;

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    Stop,
    PlayRandom,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video_id: String },
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowAllPlaylists,
    ShowPlaylist(String),
    SearchVideos(String),
    SearchVideosWithTag(String),
    /// Reason is the rest of the line, possibly empty
    FlagVideo { video_id: String, reason: String },
    AllowVideo(String),
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command line")]
    Empty,

    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("{command} expects {expected}")]
    WrongArity {
        command: &'static str,
        expected: &'static str,
    },
}

/// Usage lines printed by HELP
pub const HELP: &[&str] = &[
    "Available commands:",
    "    NUMBER_OF_VIDEOS - Shows how many videos are in the library.",
    "    SHOW_ALL_VIDEOS - Lists all videos from the library.",
    "    PLAY <video_id> - Plays specified video.",
    "    PLAY_RANDOM - Plays a random video from the library.",
    "    STOP - Stop the current video.",
    "    PAUSE - Pause the current video.",
    "    CONTINUE - Resume the current paused video.",
    "    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).",
    "    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.",
    "    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.",
    "    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist",
    "    CLEAR_PLAYLIST <playlist_name> - Removes all videos from the playlist.",
    "    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.",
    "    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.",
    "    SHOW_ALL_PLAYLISTS - Display all the available playlists.",
    "    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.",
    "    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.",
    "    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.",
    "    ALLOW_VIDEO <video_id> - Removes a flag from a video.",
    "    HELP - Displays help.",
    "    EXIT - Terminates the program execution.",
];

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(ParseError::Empty)?.to_uppercase();
        let args: Vec<&str> = words.collect();

        let command = match name.as_str() {
            "NUMBER_OF_VIDEOS" => no_args(&args, "NUMBER_OF_VIDEOS", Command::NumberOfVideos)?,
            "SHOW_ALL_VIDEOS" => no_args(&args, "SHOW_ALL_VIDEOS", Command::ShowAllVideos)?,
            "PLAY" => Command::Play(one_arg(&args, "PLAY", "a video id")?),
            "STOP" => no_args(&args, "STOP", Command::Stop)?,
            "PLAY_RANDOM" => no_args(&args, "PLAY_RANDOM", Command::PlayRandom)?,
            "PAUSE" => no_args(&args, "PAUSE", Command::Pause)?,
            "CONTINUE" => no_args(&args, "CONTINUE", Command::Continue)?,
            "SHOW_PLAYING" => no_args(&args, "SHOW_PLAYING", Command::ShowPlaying)?,
            "CREATE_PLAYLIST" => {
                Command::CreatePlaylist(one_arg(&args, "CREATE_PLAYLIST", "a playlist name")?)
            }
            "ADD_TO_PLAYLIST" => {
                let (playlist, video_id) =
                    two_args(&args, "ADD_TO_PLAYLIST", "a playlist name and a video id")?;
                Command::AddToPlaylist { playlist, video_id }
            }
            "REMOVE_FROM_PLAYLIST" => {
                let (playlist, video_id) =
                    two_args(&args, "REMOVE_FROM_PLAYLIST", "a playlist name and a video id")?;
                Command::RemoveFromPlaylist { playlist, video_id }
            }
            "CLEAR_PLAYLIST" => {
                Command::ClearPlaylist(one_arg(&args, "CLEAR_PLAYLIST", "a playlist name")?)
            }
            "DELETE_PLAYLIST" => {
                Command::DeletePlaylist(one_arg(&args, "DELETE_PLAYLIST", "a playlist name")?)
            }
            "SHOW_ALL_PLAYLISTS" => no_args(&args, "SHOW_ALL_PLAYLISTS", Command::ShowAllPlaylists)?,
            "SHOW_PLAYLIST" => {
                Command::ShowPlaylist(one_arg(&args, "SHOW_PLAYLIST", "a playlist name")?)
            }
            "SEARCH_VIDEOS" => {
                Command::SearchVideos(one_arg(&args, "SEARCH_VIDEOS", "a search term")?)
            }
            "SEARCH_VIDEOS_WITH_TAG" => {
                Command::SearchVideosWithTag(one_arg(&args, "SEARCH_VIDEOS_WITH_TAG", "a tag")?)
            }
            "FLAG_VIDEO" => match args.split_first() {
                Some((video_id, reason)) => Command::FlagVideo {
                    video_id: video_id.to_string(),
                    reason: reason.join(" "),
                },
                None => {
                    return Err(ParseError::WrongArity {
                        command: "FLAG_VIDEO",
                        expected: "a video id and an optional reason",
                    })
                }
            },
            "ALLOW_VIDEO" => Command::AllowVideo(one_arg(&args, "ALLOW_VIDEO", "a video id")?),
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            _ => return Err(ParseError::UnknownCommand(name)),
        };

        Ok(command)
    }
}

fn no_args(args: &[&str], command: &'static str, parsed: Command) -> Result<Command, ParseError> {
    if args.is_empty() {
        Ok(parsed)
    } else {
        Err(ParseError::WrongArity {
            command,
            expected: "no arguments",
        })
    }
}

fn one_arg(args: &[&str], command: &'static str, expected: &'static str) -> Result<String, ParseError> {
    match args {
        [arg] => Ok(arg.to_string()),
        _ => Err(ParseError::WrongArity { command, expected }),
    }
}

fn two_args(
    args: &[&str],
    command: &'static str,
    expected: &'static str,
) -> Result<(String, String), ParseError> {
    match args {
        [first, second] => Ok((first.to_string(), second.to_string())),
        _ => Err(ParseError::WrongArity { command, expected }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("STOP").unwrap(), Command::Stop);
        assert_eq!(Command::parse("  show_playing ").unwrap(), Command::ShowPlaying);
        assert_eq!(
            Command::parse("PLAY amazing_cats_video_id").unwrap(),
            Command::Play("amazing_cats_video_id".to_string())
        );
    }

    #[test]
    fn test_parse_playlist_commands() {
        assert_eq!(
            Command::parse("ADD_TO_PLAYLIST my_PLAYlist funny_dogs_video_id").unwrap(),
            Command::AddToPlaylist {
                playlist: "my_PLAYlist".to_string(),
                video_id: "funny_dogs_video_id".to_string(),
            }
        );
        assert_eq!(
            Command::parse("delete_playlist Mix").unwrap(),
            Command::DeletePlaylist("Mix".to_string())
        );
    }

    #[test]
    fn test_parse_flag_reason_is_rest_of_line() {
        assert_eq!(
            Command::parse("FLAG_VIDEO amazing_cats_video_id dont like cats").unwrap(),
            Command::FlagVideo {
                video_id: "amazing_cats_video_id".to_string(),
                reason: "dont like cats".to_string(),
            }
        );
        assert_eq!(
            Command::parse("FLAG_VIDEO amazing_cats_video_id").unwrap(),
            Command::FlagVideo {
                video_id: "amazing_cats_video_id".to_string(),
                reason: String::new(),
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Command::parse("   "), Err(ParseError::Empty));
        assert_eq!(
            Command::parse("rewind"),
            Err(ParseError::UnknownCommand("REWIND".to_string()))
        );
        assert!(matches!(
            Command::parse("PLAY"),
            Err(ParseError::WrongArity { command: "PLAY", .. })
        ));
        assert!(matches!(
            Command::parse("STOP now"),
            Err(ParseError::WrongArity { command: "STOP", .. })
        ));
        assert!(matches!(
            Command::parse("ADD_TO_PLAYLIST only_name"),
            Err(ParseError::WrongArity { .. })
        ));
    }
}
