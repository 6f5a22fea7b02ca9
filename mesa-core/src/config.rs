//! Explicit ranking configuration, validated once at the boundary.

use std::num::NonZeroUsize;

use thiserror::Error;

use crate::{BoundingBox, BoundingBoxError, Denylist, DenylistError};

/// Leaderboard length used when none is configured.
pub const DEFAULT_TOP_N: usize = 15;

/// Size of the secondary scatter subset used when none is configured.
pub const DEFAULT_SCATTER_SIZE: usize = 100;

/// Errors returned by [`RankingConfigBuilder::build`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The leaderboard length was zero.
    #[error("leaderboard size must be at least 1")]
    ZeroTopN,
    /// The scatter subset size was zero.
    #[error("scatter subset size must be at least 1")]
    ZeroScatterSize,
    /// The bounding box was malformed.
    #[error("invalid bounding box: {0}")]
    InvalidBounds(#[from] BoundingBoxError),
    /// The denylist was empty or held blank entries.
    #[error("invalid denylist: {0}")]
    InvalidDenylist(#[from] DenylistError),
}

/// Settings for one ranking pass.
///
/// Construct through [`RankingConfig::builder`] so that every value is
/// checked before any record is scored.
///
/// # Examples
/// ```
/// use mesa_core::RankingConfig;
///
/// # fn main() -> Result<(), mesa_core::ConfigError> {
/// let config = RankingConfig::builder()
///     .top_n(10)
///     .bounds(32.40, 32.60, -117.15, -116.85)
///     .denylist(["oxxo", "7-eleven"])
///     .build()?;
/// assert_eq!(config.top_n(), 10);
/// assert!(config.bounds().is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RankingConfig {
    top_n: NonZeroUsize,
    scatter_size: NonZeroUsize,
    bounds: Option<BoundingBox>,
    denylist: Option<Denylist>,
}

impl RankingConfig {
    /// Start building a configuration from the defaults.
    #[must_use]
    pub fn builder() -> RankingConfigBuilder {
        RankingConfigBuilder::default()
    }

    /// Number of ranked leaderboard entries.
    #[must_use]
    pub const fn top_n(&self) -> usize {
        self.top_n.get()
    }

    /// Number of entries in the unranked scatter subset.
    #[must_use]
    pub const fn scatter_size(&self) -> usize {
        self.scatter_size.get()
    }

    /// Optional geographic filter.
    #[must_use]
    pub const fn bounds(&self) -> Option<&BoundingBox> {
        self.bounds.as_ref()
    }

    /// Optional name denylist.
    #[must_use]
    pub const fn denylist(&self) -> Option<&Denylist> {
        self.denylist.as_ref()
    }

    /// Copy this configuration with a different leaderboard length.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroTopN`] when `top_n` is zero.
    pub fn with_top_n(&self, top_n: usize) -> Result<Self, ConfigError> {
        let top_n = NonZeroUsize::new(top_n).ok_or(ConfigError::ZeroTopN)?;
        Ok(Self {
            top_n,
            ..self.clone()
        })
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: NonZeroUsize::MIN.saturating_add(DEFAULT_TOP_N - 1),
            scatter_size: NonZeroUsize::MIN.saturating_add(DEFAULT_SCATTER_SIZE - 1),
            bounds: None,
            denylist: None,
        }
    }
}

/// Unvalidated inputs for a [`RankingConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct RankingConfigBuilder {
    top_n: usize,
    scatter_size: usize,
    bounds: Option<[f64; 4]>,
    denylist: Option<Vec<String>>,
}

impl Default for RankingConfigBuilder {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            scatter_size: DEFAULT_SCATTER_SIZE,
            bounds: None,
            denylist: None,
        }
    }
}

impl RankingConfigBuilder {
    /// Set the leaderboard length.
    #[must_use]
    pub fn top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the scatter subset size.
    #[must_use]
    pub fn scatter_size(mut self, scatter_size: usize) -> Self {
        self.scatter_size = scatter_size;
        self
    }

    /// Restrict listings to a latitude/longitude rectangle.
    #[must_use]
    pub fn bounds(
        mut self,
        min_latitude: f64,
        max_latitude: f64,
        min_longitude: f64,
        max_longitude: f64,
    ) -> Self {
        self.bounds = Some([min_latitude, max_latitude, min_longitude, max_longitude]);
        self
    }

    /// Exclude listings whose names contain any of `entries`.
    #[must_use]
    pub fn denylist<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.denylist = Some(entries.into_iter().map(Into::into).collect());
        self
    }

    /// Validate every setting and produce a [`RankingConfig`].
    ///
    /// # Errors
    /// Returns [`ConfigError`] describing the first invalid setting.
    pub fn build(self) -> Result<RankingConfig, ConfigError> {
        let top_n = NonZeroUsize::new(self.top_n).ok_or(ConfigError::ZeroTopN)?;
        let scatter_size =
            NonZeroUsize::new(self.scatter_size).ok_or(ConfigError::ZeroScatterSize)?;
        let bounds = self
            .bounds
            .map(|[min_lat, max_lat, min_lon, max_lon]| {
                BoundingBox::new(min_lat, max_lat, min_lon, max_lon)
            })
            .transpose()?;
        let denylist = self.denylist.map(Denylist::new).transpose()?;
        Ok(RankingConfig {
            top_n,
            scatter_size,
            bounds,
            denylist,
        })
    }
}
