//! Playback control commands

use super::error::{PlayerError, Reason};
use super::io::Output;
use super::session::PlaybackStatus;
use super::{describe, report, title_of, VideoPlayer};
use crate::catalog::VideoCatalog;
use rand::seq::SliceRandom;

impl<C: VideoCatalog> VideoPlayer<C> {
    /// Play a video, stopping whatever was loaded first
    pub fn play_video(&mut self, video_id: &str, out: &mut dyn Output) {
        let result = self.try_play(video_id, out);
        report(result, out);
    }

    fn try_play(&mut self, video_id: &str, out: &mut dyn Output) -> Result<(), PlayerError> {
        let video = self
            .catalog
            .get_video(video_id)
            .ok_or(PlayerError::Play(Reason::VideoNotFound))?;

        if let Some(reason) = self.session.flags.reason(video_id) {
            return Err(PlayerError::Play(Reason::Flagged(reason.to_string())));
        }

        if let Some(previous) = self.session.playback.stop() {
            out.emit(&format!("Stopping video: {}", title_of(&self.catalog, &previous)));
        }

        out.emit(&format!("Playing video: {}", video.title));
        log::debug!("Now playing {}", video.id);
        self.session.playback.start(video.id.clone());
        Ok(())
    }

    /// Stop the loaded video
    pub fn stop_video(&mut self, out: &mut dyn Output) {
        let result = match self.session.playback.stop() {
            Some(previous) => {
                out.emit(&format!("Stopping video: {}", title_of(&self.catalog, &previous)));
                Ok(())
            }
            None => Err(PlayerError::Stop(Reason::NothingPlaying)),
        };
        report(result, out);
    }

    /// Play a random video that is not flagged
    pub fn play_random_video(&mut self, out: &mut dyn Output) {
        let mut candidates: Vec<String> = self
            .catalog
            .all_videos()
            .into_iter()
            .filter(|v| !self.session.flags.is_flagged(&v.id))
            .map(|v| v.id.clone())
            .collect();

        // Catalog order is arbitrary; sort so seeded runs pick the same video
        candidates.sort_unstable();

        match candidates.choose(&mut self.rng) {
            Some(video_id) => {
                let video_id = video_id.clone();
                self.play_video(&video_id, out);
            }
            None => out.emit("No videos available"),
        }
    }

    /// Pause the playing video
    pub fn pause_video(&mut self, out: &mut dyn Output) {
        let result = match self.session.playback.status() {
            PlaybackStatus::Stopped => Err(PlayerError::Pause(Reason::NothingPlaying)),
            PlaybackStatus::Paused(id) => {
                out.emit(&format!("Video already paused: {}", title_of(&self.catalog, id)));
                Ok(())
            }
            PlaybackStatus::Playing(id) => {
                out.emit(&format!("Pausing video: {}", title_of(&self.catalog, id)));
                self.session.playback.pause();
                Ok(())
            }
        };
        report(result, out);
    }

    /// Resume the paused video
    pub fn continue_video(&mut self, out: &mut dyn Output) {
        let result = match self.session.playback.status() {
            PlaybackStatus::Stopped => Err(PlayerError::Continue(Reason::NothingPlaying)),
            PlaybackStatus::Playing(_) => Err(PlayerError::Continue(Reason::NotPaused)),
            PlaybackStatus::Paused(id) => {
                out.emit(&format!("Continuing video: {}", title_of(&self.catalog, id)));
                self.session.playback.resume();
                Ok(())
            }
        };
        report(result, out);
    }

    /// Print the loaded video and whether it is paused
    pub fn show_playing(&self, out: &mut dyn Output) {
        match self.session.playback.status() {
            PlaybackStatus::Stopped => out.emit("No video is currently playing"),
            PlaybackStatus::Playing(id) => {
                out.emit(&format!("Currently playing: {}", describe(&self.catalog, id)))
            }
            PlaybackStatus::Paused(id) => out.emit(&format!(
                "Currently playing: {} - PAUSED",
                describe(&self.catalog, id)
            )),
        }
    }
}
