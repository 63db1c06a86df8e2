pub mod charset;
pub mod checksum;
pub mod codec;
pub mod config;
pub mod error;
pub mod normalize;
pub mod sample;

pub use charset::Charset;
pub use checksum::{check_value, verify};
pub use codec::{MIN_TOKEN_SIZE, TokenCodec};
pub use config::{Substitution, TokenConfig};
pub use error::{Result, TokenError};
pub use normalize::normalize;
pub use sample::sample;

/// Generate a token with the default configuration.
///
/// # Errors
///
/// Returns `EntropyFailure` if the operating system entropy source fails.
pub fn generate() -> Result<String> {
    TokenCodec::default().generate()
}

/// Validate `input` with the default configuration and return the canonical
/// token, or `None` if no valid token can be read out of it.
pub fn validate(input: &str) -> Option<String> {
    TokenCodec::default().validate(input)
}
