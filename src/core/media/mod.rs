//! OS media session bridge.
//!
//! The media transport is an optional, platform-gated capability: when
//! no backend exists the polling loop is never spawned and the UI shows
//! the media bar as unavailable. State changes are detected by an
//! explicit state machine so the UI is only notified on transitions,
//! never on same-state re-entry.

mod bridge;

pub use bridge::media_task;

/// Raw properties read from the OS media session on one poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaProps {
    pub artist: String,
    pub title: String,
    pub is_playing: bool,
}

/// Transport command, fire-and-forget: outcome is never reported back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCommand {
    PlayPause,
    Next,
    Previous,
}

/// Optional capability interface over the platform media session API.
///
/// Implementations are resolved once at startup; `None` means the
/// capability is absent on this system (not an error).
pub trait MediaTransport: Send + Sync {
    /// Query the current session, `None` when no media is registered.
    /// Transient failures also read as `None`.
    fn current_session(&self) -> Option<MediaProps>;

    /// Issue a transport command, best effort.
    fn send(&self, command: MediaCommand);
}

/// State forwarded to the UI when the session changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaState {
    pub artist: String,
    pub title: String,
    pub is_playing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionState {
    NoSession,
    Idle { artist: String, title: String },
    Playing { artist: String, title: String },
}

/// Tracks the last observed media session and reports transitions.
#[derive(Debug)]
pub struct MediaStateMachine {
    state: SessionState,
}

impl Default for MediaStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaStateMachine {
    pub fn new() -> Self {
        Self {
            state: SessionState::NoSession,
        }
    }

    /// Feed one poll result. Returns the state to forward when this
    /// observation is a transition, `None` when nothing changed.
    pub fn observe(&mut self, props: Option<MediaProps>) -> Option<MediaState> {
        let next = match props {
            None => SessionState::NoSession,
            Some(p) if p.is_playing => SessionState::Playing {
                artist: p.artist,
                title: p.title,
            },
            Some(p) => SessionState::Idle {
                artist: p.artist,
                title: p.title,
            },
        };

        if next == self.state {
            return None;
        }

        self.state = next;
        Some(self.as_media_state())
    }

    fn as_media_state(&self) -> MediaState {
        match &self.state {
            SessionState::NoSession => MediaState::default(),
            SessionState::Idle { artist, title } => MediaState {
                artist: artist.clone(),
                title: title.clone(),
                is_playing: false,
            },
            SessionState::Playing { artist, title } => MediaState {
                artist: artist.clone(),
                title: title.clone(),
                is_playing: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(artist: &str, title: &str, playing: bool) -> MediaProps {
        MediaProps {
            artist: artist.to_string(),
            title: title.to_string(),
            is_playing: playing,
        }
    }

    #[test]
    fn same_observation_twice_forwards_once() {
        let mut sm = MediaStateMachine::new();

        let first = sm.observe(Some(props("Nina", "Sinnerman", true)));
        let second = sm.observe(Some(props("Nina", "Sinnerman", true)));

        assert!(first.is_some());
        assert!(second.is_none());
    }

    #[test]
    fn no_session_at_startup_is_not_a_transition() {
        let mut sm = MediaStateMachine::new();
        assert!(sm.observe(None).is_none());
        assert!(sm.observe(None).is_none());
    }

    #[test]
    fn play_state_change_is_a_transition() {
        let mut sm = MediaStateMachine::new();
        sm.observe(Some(props("Nina", "Sinnerman", true)));

        let paused = sm.observe(Some(props("Nina", "Sinnerman", false)));
        assert_eq!(
            paused,
            Some(MediaState {
                artist: "Nina".to_string(),
                title: "Sinnerman".to_string(),
                is_playing: false,
            })
        );
    }

    #[test]
    fn track_change_is_a_transition() {
        let mut sm = MediaStateMachine::new();
        sm.observe(Some(props("Nina", "Sinnerman", true)));

        let next = sm.observe(Some(props("Nina", "Feeling Good", true)));
        assert!(next.is_some());
    }

    #[test]
    fn session_vanishing_forwards_empty_state() {
        let mut sm = MediaStateMachine::new();
        sm.observe(Some(props("Nina", "Sinnerman", true)));

        let cleared = sm.observe(None);
        assert_eq!(cleared, Some(MediaState::default()));

        // and re-entry of NoSession stays quiet
        assert!(sm.observe(None).is_none());
    }
}
