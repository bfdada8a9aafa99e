//! Media transport capability, resolved once at startup.
//!
//! On Unix the MPRIS-speaking `playerctl` helper provides both the
//! session query and the transport commands. Where no helper exists the
//! capability resolves to `None` and the media poll loop never runs.

use std::sync::Arc;

use crate::core::media::{MediaCommand, MediaProps, MediaTransport};

/// Probe for a usable media transport backend.
pub fn detect_media_transport() -> Option<Arc<dyn MediaTransport>> {
    #[cfg(unix)]
    {
        let binary = which::which("playerctl").ok()?;
        log::info!("media transport: playerctl at {:?}", binary);
        Some(Arc::new(PlayerctlTransport { binary }))
    }

    #[cfg(not(unix))]
    {
        None
    }
}

#[cfg(unix)]
struct PlayerctlTransport {
    binary: std::path::PathBuf,
}

#[cfg(unix)]
impl MediaTransport for PlayerctlTransport {
    fn current_session(&self) -> Option<MediaProps> {
        let output = std::process::Command::new(&self.binary)
            .args(["metadata", "--format", "{{status}}\n{{artist}}\n{{title}}"])
            .output()
            .ok()?;

        // playerctl exits nonzero when no player is registered
        if !output.status.success() {
            return None;
        }

        parse_session(&String::from_utf8_lossy(&output.stdout))
    }

    fn send(&self, command: MediaCommand) {
        let arg = match command {
            MediaCommand::PlayPause => "play-pause",
            MediaCommand::Next => "next",
            MediaCommand::Previous => "previous",
        };

        if let Err(e) = std::process::Command::new(&self.binary).arg(arg).output() {
            log::debug!("media command {:?} failed: {}", command, e);
        }
    }
}

/// Parse the status/artist/title triple printed by the query format.
fn parse_session(stdout: &str) -> Option<MediaProps> {
    let mut lines = stdout.lines();
    let status = lines.next()?.trim();

    Some(MediaProps {
        is_playing: status.eq_ignore_ascii_case("Playing"),
        artist: lines.next().unwrap_or_default().trim().to_string(),
        title: lines.next().unwrap_or_default().trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_playing_session() {
        let props = parse_session("Playing\nNina Simone\nSinnerman\n").unwrap();
        assert!(props.is_playing);
        assert_eq!(props.artist, "Nina Simone");
        assert_eq!(props.title, "Sinnerman");
    }

    #[test]
    fn parses_paused_session_with_missing_artist() {
        let props = parse_session("Paused\n\nUntitled\n").unwrap();
        assert!(!props.is_playing);
        assert_eq!(props.artist, "");
        assert_eq!(props.title, "Untitled");
    }

    #[test]
    fn empty_output_is_no_session() {
        assert!(parse_session("").is_none());
    }
}
