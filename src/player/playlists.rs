//! Playlist management commands
//!
//! Names are matched case-insensitively; messages echo the name exactly as the
//! caller typed it, while listings use the name given at creation.

use super::error::{PlayerError, Reason};
use super::io::Output;
use super::{describe, report, VideoPlayer};
use crate::catalog::VideoCatalog;

impl<C: VideoCatalog> VideoPlayer<C> {
    pub fn create_playlist(&mut self, name: &str, out: &mut dyn Output) {
        let result = if self.session.playlists.create(name) {
            log::debug!("Created playlist {:?}", name);
            out.emit(&format!("Successfully created new playlist: {}", name));
            Ok(())
        } else {
            Err(PlayerError::CreatePlaylist(Reason::PlaylistExists))
        };
        report(result, out);
    }

    /// Append a video to a playlist
    ///
    /// Flagged videos may still be added; only playback is blocked.
    pub fn add_to_playlist(&mut self, name: &str, video_id: &str, out: &mut dyn Output) {
        let result = self.try_add_to_playlist(name, video_id, out);
        report(result, out);
    }

    fn try_add_to_playlist(
        &mut self,
        name: &str,
        video_id: &str,
        out: &mut dyn Output,
    ) -> Result<(), PlayerError> {
        let rejected = |reason: Reason| PlayerError::AddToPlaylist {
            playlist: name.to_string(),
            reason,
        };

        let playlist = self
            .session
            .playlists
            .get_mut(name)
            .ok_or_else(|| rejected(Reason::PlaylistNotFound))?;
        let video = self
            .catalog
            .get_video(video_id)
            .ok_or_else(|| rejected(Reason::VideoNotFound))?;

        if !playlist.add_video(video_id) {
            return Err(rejected(Reason::AlreadyAdded));
        }

        out.emit(&format!("Added video to {}: {}", name, video.title));
        Ok(())
    }

    /// Print all playlist names, sorted
    pub fn show_all_playlists(&self, out: &mut dyn Output) {
        if self.session.playlists.is_empty() {
            out.emit("No playlists exist yet");
            return;
        }

        out.emit("Showing all playlists:");
        for name in self.session.playlists.sorted_names() {
            out.emit(name);
        }
    }

    /// Print the videos of one playlist in the order they were added
    pub fn show_playlist(&self, name: &str, out: &mut dyn Output) {
        let Some(playlist) = self.session.playlists.get(name) else {
            report(
                Err(PlayerError::ShowPlaylist {
                    playlist: name.to_string(),
                    reason: Reason::PlaylistNotFound,
                }),
                out,
            );
            return;
        };

        out.emit(&format!("Showing playlist: {}", name));
        if playlist.is_empty() {
            out.emit("No videos here yet");
            return;
        }
        for video_id in playlist.video_ids() {
            out.emit(&describe(&self.catalog, video_id));
        }
    }

    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str, out: &mut dyn Output) {
        let result = self.try_remove_from_playlist(name, video_id, out);
        report(result, out);
    }

    fn try_remove_from_playlist(
        &mut self,
        name: &str,
        video_id: &str,
        out: &mut dyn Output,
    ) -> Result<(), PlayerError> {
        let rejected = |reason: Reason| PlayerError::RemoveFromPlaylist {
            playlist: name.to_string(),
            reason,
        };

        let playlist = self
            .session
            .playlists
            .get_mut(name)
            .ok_or_else(|| rejected(Reason::PlaylistNotFound))?;

        if playlist.remove_video(video_id) {
            let title = self
                .catalog
                .get_video(video_id)
                .map(|v| v.title.as_str())
                .unwrap_or(video_id);
            out.emit(&format!("Removed video from {}: {}", name, title));
            return Ok(());
        }

        match self.catalog.get_video(video_id) {
            Some(_) => Err(rejected(Reason::NotInPlaylist)),
            None => Err(rejected(Reason::VideoNotFound)),
        }
    }

    /// Remove every video from a playlist, keeping the playlist
    pub fn clear_playlist(&mut self, name: &str, out: &mut dyn Output) {
        let result = match self.session.playlists.get_mut(name) {
            Some(playlist) => {
                playlist.clear();
                out.emit(&format!("Successfully removed all videos from {}", name));
                Ok(())
            }
            None => Err(PlayerError::ClearPlaylist {
                playlist: name.to_string(),
                reason: Reason::PlaylistNotFound,
            }),
        };
        report(result, out);
    }

    pub fn delete_playlist(&mut self, name: &str, out: &mut dyn Output) {
        let result = match self.session.playlists.remove(name) {
            Some(removed) => {
                log::debug!("Deleted playlist {:?} ({} videos)", removed.name, removed.len());
                out.emit(&format!("Deleted playlist: {}", name));
                Ok(())
            }
            None => Err(PlayerError::DeletePlaylist {
                playlist: name.to_string(),
                reason: Reason::PlaylistNotFound,
            }),
        };
        report(result, out);
    }
}
