//! Scanner configuration.
//!
//! Each policy the scanner supports is picked once per scanner through
//! [`ScannerConfig`]; a single scan never mixes policies.

use std::fmt;
use std::str::FromStr;

/// Spaces folded into one `Indent` unit unless configured otherwise.
pub const DEFAULT_FOLD_WIDTH: u32 = 4;

/// Invalid scanner configuration.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("fold width must be at least 1")]
    ZeroFoldWidth,
    #[error("unknown space mode `{0}` (expected `fold`, `whitespace` or `skip`)")]
    UnknownSpaceMode(String),
}

/// What the scanner does with space characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpaceMode {
    /// A run of `n` spaces becomes one `Indent` token carrying
    /// `n / fold_width`. The remainder is dropped, and runs shorter than
    /// one unit produce nothing.
    #[default]
    Fold,
    /// Every space becomes its own `Whitespace` token.
    Whitespace,
    /// Spaces are discarded.
    Skip,
}

impl SpaceMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fold => "fold",
            Self::Whitespace => "whitespace",
            Self::Skip => "skip",
        }
    }
}

impl fmt::Display for SpaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpaceMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fold" => Ok(Self::Fold),
            "whitespace" => Ok(Self::Whitespace),
            "skip" => Ok(Self::Skip),
            other => Err(ConfigError::UnknownSpaceMode(other.to_owned())),
        }
    }
}

/// Per-scanner policy choices.
///
/// # Invariant
///
/// `fold_width >= 1`. Every constructor enforces it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScannerConfig {
    fold_width: u32,
    spaces: SpaceMode,
    block_comments: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            fold_width: DEFAULT_FOLD_WIDTH,
            spaces: SpaceMode::Fold,
            block_comments: false,
        }
    }
}

impl ScannerConfig {
    /// Default configuration with a custom fold width.
    pub fn new(fold_width: u32) -> Result<Self, ConfigError> {
        Self::default().with_fold_width(fold_width)
    }

    /// Set how many spaces make one `Indent` unit.
    pub fn with_fold_width(mut self, fold_width: u32) -> Result<Self, ConfigError> {
        if fold_width == 0 {
            return Err(ConfigError::ZeroFoldWidth);
        }
        self.fold_width = fold_width;
        Ok(self)
    }

    #[must_use]
    pub fn with_spaces(mut self, spaces: SpaceMode) -> Self {
        self.spaces = spaces;
        self
    }

    /// Enable or disable `## ... ##` block comments.
    ///
    /// When disabled, `##` starts an ordinary line comment.
    #[must_use]
    pub fn with_block_comments(mut self, enabled: bool) -> Self {
        self.block_comments = enabled;
        self
    }

    #[inline]
    pub fn fold_width(&self) -> u32 {
        self.fold_width
    }

    #[inline]
    pub fn spaces(&self) -> SpaceMode {
        self.spaces
    }

    #[inline]
    pub fn block_comments(&self) -> bool {
        self.block_comments
    }
}

#[cfg(test)]
mod tests;
