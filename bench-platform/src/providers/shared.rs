//! Shared implementations for platform providers.
//!
//! This module contains default implementations of PlatformProvider methods
//! that are identical across all platforms. Platform-specific implementations
//! can use these or override them as needed.

use crate::traits::PlatformProvider;
use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::path::PathBuf;

/// Provides default implementations for common path operations
pub trait SharedPlatformOps: PlatformProvider {
    /// Default implementation for home_dir
    fn default_home_dir(&self) -> Result<PathBuf> {
        dirs::home_dir().context("Could not determine home directory")
    }

    /// Default implementation for split_path_env
    fn default_split_path_env(&self, path: &OsStr) -> Vec<PathBuf> {
        std::env::split_paths(path).collect()
    }
}

impl<T: PlatformProvider + ?Sized> SharedPlatformOps for T {}
