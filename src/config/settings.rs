use std::path::Path;

use crate::foundation::error::{ResampleError, ResampleResult};
use crate::kernel::shape::KernelKind;

/// Kernel family used when none is configured.
pub const DEFAULT_KERNEL: &str = "mitchell";

/// User-facing filter settings.
///
/// The kernel tag is kept as written so that an unknown name surfaces as
/// [`ResampleError::InvalidConfiguration`] when the kernel is built.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// One of `mitchell`, `lanczos`, `hamming`, `gaussian`, `triangle`, `box`.
    pub kernel: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            kernel: DEFAULT_KERNEL.to_string(),
        }
    }
}

impl FilterConfig {
    pub fn with_kernel(kernel: impl Into<String>) -> Self {
        Self {
            kernel: kernel.into(),
        }
    }

    pub fn from_json_str(s: &str) -> ResampleResult<Self> {
        serde_json::from_str(s).map_err(|e| ResampleError::serde(format!("filter config: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> ResampleResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ResampleError::Other(anyhow::Error::new(e).context(format!(
                "read filter config '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&text)
    }

    /// Parse the configured tag.
    pub fn kernel_kind(&self) -> ResampleResult<KernelKind> {
        self.kernel.parse()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
