//! System volume capability.
//!
//! Backed by `pactl` against the default sink on Unix systems running
//! PulseAudio or PipeWire. Absent backend means the volume control is
//! simply disabled in the UI.

use std::process::Command;

/// Optional capability interface over the system master volume.
pub trait VolumeControl: Send {
    /// Current volume as a fraction in [0, 1], `None` on query failure.
    fn get(&self) -> Option<f32>;

    /// Set the volume; values are clamped to [0, 1]. Best effort.
    fn set(&self, level: f32);
}

/// Probe for a usable volume backend.
pub fn detect_volume_control() -> Option<Box<dyn VolumeControl>> {
    #[cfg(unix)]
    {
        let binary = which::which("pactl").ok()?;
        log::info!("volume control: pactl at {:?}", binary);
        Some(Box::new(PactlVolume { binary }))
    }

    #[cfg(not(unix))]
    {
        None
    }
}

#[cfg(unix)]
struct PactlVolume {
    binary: std::path::PathBuf,
}

#[cfg(unix)]
impl VolumeControl for PactlVolume {
    fn get(&self) -> Option<f32> {
        let output = Command::new(&self.binary)
            .args(["get-sink-volume", "@DEFAULT_SINK@"])
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }

        parse_volume(&String::from_utf8_lossy(&output.stdout))
    }

    fn set(&self, level: f32) {
        let percent = (level.clamp(0.0, 1.0) * 100.0).round() as u32;
        let result = Command::new(&self.binary)
            .args([
                "set-sink-volume",
                "@DEFAULT_SINK@",
                &format!("{}%", percent),
            ])
            .output();

        if let Err(e) = result {
            log::debug!("volume set failed: {}", e);
        }
    }
}

/// Extract the first percentage from pactl's sink-volume output, e.g.
/// "Volume: front-left: 47181 /  72% / -8.60 dB, ..." -> 0.72
fn parse_volume(stdout: &str) -> Option<f32> {
    let token = stdout
        .split_whitespace()
        .find(|tok| tok.ends_with('%'))?;

    let percent: f32 = token.trim_end_matches('%').parse().ok()?;
    Some((percent / 100.0).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_typical_pactl_output() {
        let out = "Volume: front-left: 47181 /  72% / -8.60 dB,   front-right: 47181 /  72% / -8.60 dB";
        assert_eq!(parse_volume(out), Some(0.72));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(parse_volume("Volume: 153%"), Some(1.0));
    }

    #[test]
    fn garbage_yields_none() {
        assert_eq!(parse_volume("no percentages here"), None);
    }
}
