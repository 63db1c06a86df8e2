use std::sync::Arc;

use parking_lot::RwLock;

use crate::charset::Charset;
use crate::checksum;
use crate::config::TokenConfig;
use crate::error::{Result, TokenError};
use crate::normalize;
use crate::sample;

/// Shortest possible token: a one-symbol payload plus its check symbol.
pub const MIN_TOKEN_SIZE: usize = 2;

/// Generates random tokens and validates retyped copies of them.
///
/// The alphabet and alias table are derived from the configuration on first
/// use and cached. Reads share the cache through an [`Arc`], so a token
/// handed out for validation is checked against the alphabet that was
/// current when the call started, even if the codec is reconfigured
/// concurrently by a writer that has exclusive access.
pub struct TokenCodec {
    config: TokenConfig,
    derived: RwLock<Option<Arc<Charset>>>,
}

impl TokenCodec {
    pub fn new(config: TokenConfig) -> Self {
        Self {
            config,
            derived: RwLock::new(None),
        }
    }

    /// The current configuration.
    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    /// Apply a configuration change, then drop the derived alphabet so it is
    /// rebuilt on next use. Reconfiguring can reorder symbols and change the
    /// checksum base, which invalidates previously issued tokens.
    pub fn configure(&mut self, change: impl FnOnce(&mut TokenConfig)) {
        change(&mut self.config);
        self.reset();
    }

    /// Drop the derived alphabet, alias table, and sampling parameters.
    pub fn reset(&mut self) {
        *self.derived.get_mut() = None;
    }

    /// Shared snapshot of the derived alphabet, building it on first use.
    pub fn charset(&self) -> Arc<Charset> {
        if let Some(charset) = self.derived.read().as_ref() {
            return Arc::clone(charset);
        }

        let mut slot = self.derived.write();
        // Another reader may have built it between the two locks
        if let Some(charset) = slot.as_ref() {
            return Arc::clone(charset);
        }
        let charset = Arc::new(Charset::build(&self.config));
        *slot = Some(Arc::clone(&charset));
        charset
    }

    /// Generate a token of the configured default size.
    ///
    /// # Errors
    ///
    /// Returns `SizeBelowMinimum` if the default size is under
    /// [`MIN_TOKEN_SIZE`], or `EntropyFailure` if the operating system
    /// entropy source fails.
    pub fn generate(&self) -> Result<String> {
        self.generate_with_size(self.config.default_size)
    }

    /// Generate a token of exactly `size` symbols, the last of which is the
    /// check symbol.
    ///
    /// # Errors
    ///
    /// Returns `SizeBelowMinimum` if `size` is under [`MIN_TOKEN_SIZE`], or
    /// `EntropyFailure` if the operating system entropy source fails.
    ///
    /// # Panics
    ///
    /// Panics if the configured alphabet is empty.
    pub fn generate_with_size(&self, size: usize) -> Result<String> {
        if size < MIN_TOKEN_SIZE {
            return Err(TokenError::SizeBelowMinimum {
                requested: size,
                minimum: MIN_TOKEN_SIZE,
            });
        }

        let charset = self.charset();
        let payload = sample::sample(&charset, size - 1)?;
        let check = checksum::check_value(&payload, charset.len());

        let mut token: String = payload
            .iter()
            .map(|&index| charset.symbol(index))
            .collect();
        token.push_str(charset.symbol(check));
        Ok(token)
    }

    /// Validate a retyped candidate and return the token in canonical form,
    /// or `None` if no valid token can be read out of it.
    ///
    /// The candidate is uppercased, foreign symbols are dropped, and aliases
    /// are resolved before the checksum runs, so `" h7-l "` validates to
    /// `"H71"`. The returned string is the form to store or compare against.
    pub fn validate(&self, input: &str) -> Option<String> {
        let charset = self.charset();
        let indices = normalize::normalize(input, &charset)?;
        if !checksum::verify(&indices, charset.len()) {
            return None;
        }
        Some(
            indices
                .iter()
                .map(|&index| charset.symbol(index))
                .collect(),
        )
    }

    /// True when `input` validates.
    pub fn is_valid(&self, input: &str) -> bool {
        self.validate(input).is_some()
    }
}

impl Default for TokenCodec {
    fn default() -> Self {
        Self::new(TokenConfig::new())
    }
}
