//! Command rejection types
//!
//! Every rejected command produces exactly one line of output, which is the
//! `Display` form of a [`PlayerError`].

use thiserror::Error;

/// Why a command was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Reason {
    #[error("Video does not exist")]
    VideoNotFound,

    #[error("Playlist does not exist")]
    PlaylistNotFound,

    #[error("Video is not in playlist")]
    NotInPlaylist,

    #[error("Video is currently flagged (reason: {0})")]
    Flagged(String),

    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video is not paused")]
    NotPaused,

    #[error("Video is not flagged")]
    NotFlagged,

    #[error("A playlist with the same name already exists")]
    PlaylistExists,

    #[error("Video already added")]
    AlreadyAdded,

    #[error("Video is already flagged")]
    AlreadyFlagged,
}

/// Broad classification of a rejection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown video or playlist
    NotFound,

    /// Duplicate name, duplicate playlist entry, already flagged
    StateConflict,

    /// Operation needs a playback or flag state that is absent
    InvalidState,

    /// Playback refused for a flagged video
    Blocked,
}

impl Reason {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Reason::VideoNotFound | Reason::PlaylistNotFound | Reason::NotInPlaylist => {
                ErrorKind::NotFound
            }
            Reason::PlaylistExists | Reason::AlreadyAdded | Reason::AlreadyFlagged => {
                ErrorKind::StateConflict
            }
            Reason::NothingPlaying | Reason::NotPaused | Reason::NotFlagged => {
                ErrorKind::InvalidState
            }
            Reason::Flagged(_) => ErrorKind::Blocked,
        }
    }
}

/// A rejected command, rendered as the user-facing error line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("Cannot play video: {0}")]
    Play(Reason),

    #[error("Cannot stop video: {0}")]
    Stop(Reason),

    #[error("Cannot pause video: {0}")]
    Pause(Reason),

    #[error("Cannot continue video: {0}")]
    Continue(Reason),

    #[error("Cannot create playlist: {0}")]
    CreatePlaylist(Reason),

    #[error("Cannot add video to {playlist}: {reason}")]
    AddToPlaylist { playlist: String, reason: Reason },

    #[error("Cannot show playlist {playlist}: {reason}")]
    ShowPlaylist { playlist: String, reason: Reason },

    #[error("Cannot remove video from {playlist}: {reason}")]
    RemoveFromPlaylist { playlist: String, reason: Reason },

    #[error("Cannot clear playlist {playlist}: {reason}")]
    ClearPlaylist { playlist: String, reason: Reason },

    #[error("Cannot delete playlist {playlist}: {reason}")]
    DeletePlaylist { playlist: String, reason: Reason },

    #[error("Cannot flag video: {0}")]
    Flag(Reason),

    #[error("Cannot allow video: {0}")]
    Allow(Reason),
}

impl PlayerError {
    /// The underlying rejection reason
    pub fn reason(&self) -> &Reason {
        match self {
            PlayerError::Play(reason)
            | PlayerError::Stop(reason)
            | PlayerError::Pause(reason)
            | PlayerError::Continue(reason)
            | PlayerError::CreatePlaylist(reason)
            | PlayerError::Flag(reason)
            | PlayerError::Allow(reason) => reason,
            PlayerError::AddToPlaylist { reason, .. }
            | PlayerError::ShowPlaylist { reason, .. }
            | PlayerError::RemoveFromPlaylist { reason, .. }
            | PlayerError::ClearPlaylist { reason, .. }
            | PlayerError::DeletePlaylist { reason, .. } => reason,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.reason().kind()
    }
}
