//! Read-dispatch loop

use super::command::{Command, ParseError, HELP};
use super::config::ShellConfig;
use crate::catalog::VideoCatalog;
use crate::model::VideoLibrary;
use crate::player::{LineInput, Output, VideoPlayer};

const WELCOME: &str = "Hello and welcome to the video player, what would you like to do?";
const INVALID: &str = "Please enter a valid command, type HELP for a list of available commands.";
const GOODBYE: &str = "The video player has now terminated its execution. Thank you and goodbye!";

/// Whether the loop should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive shell driving a [`VideoPlayer`]
pub struct Shell<C: VideoCatalog = VideoLibrary> {
    config: ShellConfig,
    player: VideoPlayer<C>,
}

impl<C: VideoCatalog> Shell<C> {
    pub fn new(config: ShellConfig, player: VideoPlayer<C>) -> Self {
        Self { config, player }
    }

    pub fn player(&self) -> &VideoPlayer<C> {
        &self.player
    }

    /// Run until EXIT or end of input
    ///
    /// Commands and search answers are read from the same `input`, so a
    /// script can answer a search prompt on the line after the search.
    /// Returns the number of commands executed.
    pub fn run(&mut self, input: &mut dyn LineInput, out: &mut dyn Output) -> usize {
        out.emit(WELCOME);
        let mut executed = 0;

        loop {
            out.prompt(&self.config.prompt);
            let Some(line) = input.next_line() else {
                log::debug!("End of input after {} commands", executed);
                break;
            };
            if self.config.echo {
                out.emit(&line);
            }

            match Command::parse(&line) {
                Ok(command) => {
                    executed += 1;
                    if self.execute(command, input, out) == Flow::Exit {
                        break;
                    }
                }
                Err(ParseError::Empty) => {}
                Err(e) => {
                    log::debug!("Invalid command line {:?}: {}", line, e);
                    out.emit(INVALID);
                }
            }
        }

        executed
    }

    /// Execute a single command
    pub fn execute(
        &mut self,
        command: Command,
        input: &mut dyn LineInput,
        out: &mut dyn Output,
    ) -> Flow {
        log::debug!("Executing {:?}", command);
        let player = &mut self.player;

        match command {
            Command::NumberOfVideos => player.number_of_videos(out),
            Command::ShowAllVideos => player.show_all_videos(out),
            Command::Play(video_id) => player.play_video(&video_id, out),
            Command::Stop => player.stop_video(out),
            Command::PlayRandom => player.play_random_video(out),
            Command::Pause => player.pause_video(out),
            Command::Continue => player.continue_video(out),
            Command::ShowPlaying => player.show_playing(out),
            Command::CreatePlaylist(name) => player.create_playlist(&name, out),
            Command::AddToPlaylist { playlist, video_id } => {
                player.add_to_playlist(&playlist, &video_id, out)
            }
            Command::RemoveFromPlaylist { playlist, video_id } => {
                player.remove_from_playlist(&playlist, &video_id, out)
            }
            Command::ClearPlaylist(name) => player.clear_playlist(&name, out),
            Command::DeletePlaylist(name) => player.delete_playlist(&name, out),
            Command::ShowAllPlaylists => player.show_all_playlists(out),
            Command::ShowPlaylist(name) => player.show_playlist(&name, out),
            Command::SearchVideos(term) => player.search_videos(&term, input, out),
            Command::SearchVideosWithTag(tag) => player.search_videos_tag(&tag, input, out),
            Command::FlagVideo { video_id, reason } => player.flag_video(&video_id, &reason, out),
            Command::AllowVideo(video_id) => player.allow_video(&video_id, out),
            Command::Help => {
                for line in HELP {
                    out.emit(line);
                }
            }
            Command::Exit => {
                out.emit(GOODBYE);
                return Flow::Exit;
            }
        }

        Flow::Continue
    }
}
