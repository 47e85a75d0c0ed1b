//! Energy counter sampling through the external `read-energy.sh` helper.
//!
//! The helper prints a monotonically increasing counter for one measurement
//! domain. A single sample carries no meaning; the energy consumed by a run
//! is the difference between a sample taken after it and one taken before.

use bench_core::{find_executable, run_captured};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Name of the helper looked up on `PATH`.
pub const ENERGY_HELPER: &str = "read-energy.sh";

/// Measurement domains understood by the helper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyDomain {
    #[default]
    Cpu,
    Core,
    Uncore,
    External,
}

impl EnergyDomain {
    /// Argument passed to the helper for this domain
    pub fn as_arg(&self) -> &'static str {
        match self {
            EnergyDomain::Cpu => "cpu",
            EnergyDomain::Core => "core",
            EnergyDomain::Uncore => "uncore",
            EnergyDomain::External => "external",
        }
    }
}

impl fmt::Display for EnergyDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergySample {
    pub domain: EnergyDomain,
    pub value: i64,
}

impl EnergySample {
    /// Counter difference from `self` to `later`.
    ///
    /// `None` when the samples come from different domains, the counter
    /// went backwards (wrapped or was reset) or the gap exceeds `i64`.
    pub fn delta(&self, later: &EnergySample) -> Option<i64> {
        if self.domain != later.domain || later.value < self.value {
            return None;
        }
        later.value.checked_sub(self.value)
    }
}

/// A located energy helper bound to one measurement domain.
#[derive(Debug, Clone)]
pub struct EnergyReader {
    helper: PathBuf,
    domain: EnergyDomain,
}

impl EnergyReader {
    /// Locate [`ENERGY_HELPER`] on `PATH`; `None` when measurement is unavailable.
    pub fn discover(domain: EnergyDomain) -> Option<Self> {
        let helper = find_executable(ENERGY_HELPER, None, false)?;
        Some(Self::with_helper(helper, domain))
    }

    pub fn with_helper(helper: impl Into<PathBuf>, domain: EnergyDomain) -> Self {
        Self {
            helper: helper.into(),
            domain,
        }
    }

    pub fn helper(&self) -> &Path {
        &self.helper
    }

    pub fn domain(&self) -> EnergyDomain {
        self.domain
    }

    /// Read the current counter value.
    ///
    /// An abnormal helper exit is logged as a warning; its output is still
    /// used when it parses as an integer.
    pub fn sample(&self) -> Option<EnergySample> {
        let expression = duct::cmd(&self.helper, [self.domain.as_arg()]);
        let output = match run_captured(&expression) {
            Ok(output) => output,
            Err(e) => {
                warn!(helper = %self.helper.display(), error = %e, "error while reading energy");
                return None;
            }
        };

        if !output.success() {
            warn!(
                out = %output.stdout.to_text_lossy(),
                err = %output.stderr.to_text_lossy(),
                retval = ?output.code(),
                "error while reading energy"
            );
        }

        let stdout = output.stdout.to_text_lossy();
        match stdout.trim().parse::<i64>() {
            Ok(value) => Some(EnergySample {
                domain: self.domain,
                value,
            }),
            Err(_) => {
                debug!(domain = %self.domain, output = %stdout, "energy helper output is not a number");
                None
            }
        }
    }
}

/// Current CPU energy counter, or `None` if measurement is not available.
pub fn get_energy() -> Option<i64> {
    EnergyReader::discover(EnergyDomain::Cpu)?
        .sample()
        .map(|sample| sample.value)
}
