// Platform-specific code module

pub mod dns;
pub mod hardware;
pub mod media;
pub mod temp_dirs;
pub mod volume;

// Re-exports for cleaner imports
pub use hardware::{HardwareInfo, UNAVAILABLE};
pub use media::detect_media_transport;
pub use temp_dirs::temp_root;
pub use volume::{detect_volume_control, VolumeControl};
