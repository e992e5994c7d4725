//! Flagging commands
//!
//! A flagged video stays visible in listings, playlists and search results;
//! it just cannot be played until allowed again.

use super::error::{PlayerError, Reason};
use super::io::Output;
use super::session::REASON_NOT_SUPPLIED;
use super::{report, VideoPlayer};
use crate::catalog::VideoCatalog;

impl<C: VideoCatalog> VideoPlayer<C> {
    /// Flag a video with a reason (empty means "Not supplied")
    pub fn flag_video(&mut self, video_id: &str, reason: &str, out: &mut dyn Output) {
        let result = self.try_flag(video_id, reason, out);
        report(result, out);
    }

    fn try_flag(&mut self, video_id: &str, reason: &str, out: &mut dyn Output) -> Result<(), PlayerError> {
        let video = self
            .catalog
            .get_video(video_id)
            .ok_or(PlayerError::Flag(Reason::VideoNotFound))?;

        let reason = if reason.is_empty() { REASON_NOT_SUPPLIED } else { reason };
        if !self.session.flags.flag(video_id, reason) {
            return Err(PlayerError::Flag(Reason::AlreadyFlagged));
        }

        log::info!("Flagged {} ({})", video_id, reason);
        out.emit(&format!(
            "Successfully flagged video: {} (reason: {})",
            video.title, reason
        ));
        Ok(())
    }

    /// Remove the flag from a video
    pub fn allow_video(&mut self, video_id: &str, out: &mut dyn Output) {
        let result = self.try_allow(video_id, out);
        report(result, out);
    }

    fn try_allow(&mut self, video_id: &str, out: &mut dyn Output) -> Result<(), PlayerError> {
        let video = self
            .catalog
            .get_video(video_id)
            .ok_or(PlayerError::Allow(Reason::VideoNotFound))?;

        if self.session.flags.allow(video_id).is_none() {
            return Err(PlayerError::Allow(Reason::NotFlagged));
        }

        log::info!("Allowed {}", video_id);
        out.emit(&format!("Successfully removed flag from video: {}", video.title));
        Ok(())
    }
}
