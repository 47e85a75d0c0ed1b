//! Platform-specific provider implementations.

#[cfg(unix)]
pub mod unix;

#[cfg(windows)]
pub mod windows;

pub mod shared;

// Re-export platform providers
#[cfg(unix)]
pub use unix::{UnixPlatform, UnixProcessProvider};

#[cfg(windows)]
pub use windows::{WindowsPlatform, WindowsProcessProvider};
