// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Services the decoder consumes but does not implement itself.
//!
//! Time-zone lookup, Base64, URI parsing, language tags and media types are
//! delegated to a [`Capabilities`] implementation supplied by the caller.
//! [`DefaultCapabilities`] wires them to `jiff`, `base64`, `url` and `regex`.

use std::fmt;
use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use jiff::tz::TimeZone;
use regex::Regex;

/// Failure reported by a capability.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CapabilityError {
    /// The time zone identifier is unknown to the resolver.
    #[error("unknown time zone '{0}'")]
    UnknownTimezone(String),

    /// The text is not valid Base64.
    #[error("invalid base64: {0}")]
    Base64(String),

    /// The text is not an absolute URI.
    #[error("invalid URI: {0}")]
    Uri(String),

    /// The text is not a language tag.
    #[error("invalid language tag '{0}'")]
    LanguageTag(String),
}

/// External services used while decoding.
///
/// Implementations must be thread-safe so that one instance can be shared
/// by decoders running on several threads.
pub trait Capabilities: fmt::Debug + Send + Sync {
    /// Resolve an IANA time zone identifier to its offset rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is unknown.
    fn resolve_tz(&self, name: &str) -> Result<TimeZone, CapabilityError>;

    /// Decode Base64 text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid Base64.
    fn decode_base64(&self, s: &str) -> Result<Vec<u8>, CapabilityError>;

    /// Parse an absolute URI.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not an absolute URI.
    fn parse_uri(&self, s: &str) -> Result<url::Url, CapabilityError>;

    /// Check the shape of a language tag, returning it unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a language tag.
    fn parse_language_tag<'a>(&self, s: &'a str) -> Result<&'a str, CapabilityError>;

    /// Whether the text is a `type "/" subtype` media type.
    fn is_mime_type(&self, s: &str) -> bool;
}

/// Capabilities backed by the system time-zone database, `base64` and `url`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultCapabilities;

/// A shared instance of [`DefaultCapabilities`].
pub static DEFAULT_CAPABILITIES: DefaultCapabilities = DefaultCapabilities;

static LANGUAGE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    // RFC 5646 shape: primary subtag followed by alphanumeric subtags
    Regex::new(r"^(?i:[a-z]{1,8})(?:-[0-9a-zA-Z]{1,8})*$").unwrap() // SAFETY: literal pattern
});

static MIME_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    // RFC 4288 restricted names
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9!#$&^_.+-]{0,126}/[A-Za-z0-9][A-Za-z0-9!#$&^_.+-]{0,126}$")
        .unwrap() // SAFETY: literal pattern
});

impl Capabilities for DefaultCapabilities {
    fn resolve_tz(&self, name: &str) -> Result<TimeZone, CapabilityError> {
        TimeZone::get(name).map_err(|_| CapabilityError::UnknownTimezone(name.to_string()))
    }

    fn decode_base64(&self, s: &str) -> Result<Vec<u8>, CapabilityError> {
        STANDARD
            .decode(s)
            .map_err(|e| CapabilityError::Base64(e.to_string()))
    }

    fn parse_uri(&self, s: &str) -> Result<url::Url, CapabilityError> {
        url::Url::parse(s).map_err(|e| CapabilityError::Uri(e.to_string()))
    }

    fn parse_language_tag<'a>(&self, s: &'a str) -> Result<&'a str, CapabilityError> {
        if LANGUAGE_TAG.is_match(s) {
            Ok(s)
        } else {
            Err(CapabilityError::LanguageTag(s.to_string()))
        }
    }

    fn is_mime_type(&self, s: &str) -> bool {
        MIME_TYPE.is_match(s)
    }
}
