//! Configuration options for decoding.
//!
//! - [`CodecOptions`]: main configuration struct
//! - [`TrailingPolicy`]: what to do with text after an empty `{}`
//!
//! ## Examples
//!
//! ```rust
//! use serde_flatjson::{decode_with_options, CodecOptions, TrailingPolicy};
//!
//! let options = CodecOptions::new().with_trailing(TrailingPolicy::LenientAfterEmpty);
//! let map = decode_with_options("{} ignored", &options).unwrap();
//! assert!(map.is_empty());
//! ```

/// Handling of text that follows a closing brace.
///
/// A non-empty object is always checked for trailing text. The policy only
/// changes the empty-object case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TrailingPolicy {
    /// Anything but whitespace after `}` is rejected, for `{}` too.
    #[default]
    Strict,
    /// `{}` is accepted as soon as its closing brace is read; whatever follows
    /// is ignored.
    LenientAfterEmpty,
}

/// Configuration options for the flat JSON codec.
///
/// # Examples
///
/// ```rust
/// use serde_flatjson::{CodecOptions, TrailingPolicy};
///
/// let options = CodecOptions::new();
/// assert_eq!(options.trailing, TrailingPolicy::Strict);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodecOptions {
    pub trailing: TrailingPolicy,
}

impl CodecOptions {
    /// Creates default options (strict trailing-text check).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that accept text after an empty `{}`, as older decoders did.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_flatjson::{CodecOptions, TrailingPolicy};
    ///
    /// assert_eq!(CodecOptions::lenient().trailing, TrailingPolicy::LenientAfterEmpty);
    /// ```
    #[must_use]
    pub fn lenient() -> Self {
        CodecOptions {
            trailing: TrailingPolicy::LenientAfterEmpty,
        }
    }

    #[must_use]
    pub fn with_trailing(mut self, trailing: TrailingPolicy) -> Self {
        self.trailing = trailing;
        self
    }
}
