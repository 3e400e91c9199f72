//! Configuration options for literal rendering.
//!
//! ## Examples
//!
//! ```rust
//! use pg_escape::{FormatOptions, Formatter, Value};
//!
//! // Dollar-quote anything of 16 characters or more
//! let options = FormatOptions::new().with_dollar_quote_threshold(16);
//! let formatter = Formatter::new().with_options(options);
//!
//! let short = formatter.literal(&Value::from("short")).unwrap();
//! assert_eq!(short, "'short'");
//!
//! let long = formatter.literal(&Value::from("a considerably longer string")).unwrap();
//! assert!(long.starts_with('$'));
//! ```

/// Default length, in characters, from which string literals are dollar-quoted.
pub const DEFAULT_DOLLAR_QUOTE_THRESHOLD: usize = 1000;

/// Options controlling how the literal formatter picks a quoting strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    /// Strings with at least this many characters are dollar-quoted instead
    /// of single-quoted.
    pub dollar_quote_threshold: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            dollar_quote_threshold: DEFAULT_DOLLAR_QUOTE_THRESHOLD,
        }
    }
}

impl FormatOptions {
    /// Creates default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pg_escape::FormatOptions;
    ///
    /// let options = FormatOptions::new();
    /// assert_eq!(options.dollar_quote_threshold, 1000);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the length from which strings are dollar-quoted.
    ///
    /// A threshold of `0` dollar-quotes every string literal.
    #[must_use]
    pub fn with_dollar_quote_threshold(mut self, threshold: usize) -> Self {
        self.dollar_quote_threshold = threshold;
        self
    }

    /// Returns `true` if a string of `len` characters should be dollar-quoted.
    #[inline]
    #[must_use]
    pub fn prefers_dollar_quote(&self, len: usize) -> bool {
        len >= self.dollar_quote_threshold
    }
}
