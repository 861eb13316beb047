use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{WarpError, WarpResult},
    warp::style::WarpStyle,
};

/// Construction-time options for a warp texture.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WarpSettings {
    /// Distortion to apply.
    pub style: WarpStyle,
    /// Generate Warp2 columns on a rayon pool. Output is identical either way.
    pub parallel: bool,
    /// Dedicated pool size for `parallel`. `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl WarpSettings {
    /// Sequential settings for `style`.
    pub fn with_style(style: WarpStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Parse settings from JSON text.
    pub fn from_json_str(s: &str) -> WarpResult<Self> {
        let settings: Self =
            serde_json::from_str(s).map_err(|e| WarpError::serde(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and parse a JSON settings file.
    pub fn from_path(path: impl AsRef<Path>) -> WarpResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read warp settings '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Reject settings that cannot be honoured.
    pub fn validate(&self) -> WarpResult<()> {
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(WarpError::validation(
                "warp settings 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

/// Where Warp2 columns get computed.
pub(crate) enum Executor {
    Sequential,
    Global,
    Pool(rayon::ThreadPool),
}

impl Executor {
    pub(crate) fn from_settings(settings: &WarpSettings) -> WarpResult<Self> {
        settings.validate()?;
        if !settings.parallel || settings.style == WarpStyle::Warp1 {
            return Ok(Self::Sequential);
        }
        match settings.threads {
            None => Ok(Self::Global),
            Some(n) => build_thread_pool(n).map(Self::Pool),
        }
    }

    pub(crate) fn is_parallel(&self) -> bool {
        !matches!(self, Self::Sequential)
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sequential => f.write_str("Sequential"),
            Self::Global => f.write_str("Global"),
            Self::Pool(p) => f
                .debug_struct("Pool")
                .field("threads", &p.current_num_threads())
                .finish(),
        }
    }
}

fn build_thread_pool(threads: usize) -> WarpResult<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("warptex-{i}"))
        .build()
        .map_err(|e| WarpError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/warp/settings.rs"]
mod tests;
