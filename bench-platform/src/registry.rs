//! Selection of the provider for the host this binary was built for.

use crate::traits::PlatformProvider;
use std::sync::Arc;

#[cfg(windows)]
use crate::providers::WindowsPlatform;

#[cfg(unix)]
use crate::providers::UnixPlatform;

pub struct PlatformRegistry;

impl PlatformRegistry {
    /// Provider for the current operating system.
    pub fn current() -> Arc<dyn PlatformProvider> {
        #[cfg(windows)]
        return Arc::new(WindowsPlatform);

        #[cfg(unix)]
        return Arc::new(UnixPlatform);

        #[cfg(not(any(unix, windows)))]
        compile_error!("Unsupported platform - only Unix-like and Windows platforms are supported");
    }
}
