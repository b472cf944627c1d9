//! Country mask descriptors for phone number entry.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Per-country entry mask supplied to the phone input.
///
/// A mask pairs a dialing prefix (e.g. `+7`) with a pattern string in which
/// every `*` is a single digit cell and every other character run is a
/// literal separator rendered verbatim (see [`crate::parser::parse_mask`]).
///
/// # Validation
///
/// - Key must be unique within a mask set and kebab-case
/// - Name must be non-empty, max 50 characters
/// - Prefix must be non-empty (it is the entire formatted value while no
///   digits are entered)
///
/// The pattern is not validated: a pattern without `*` is a legal zero-cell
/// mask.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryMask {
    /// Unique identifier in kebab-case (e.g., "ru", "us", "uk-mobile")
    pub key: String,
    /// Display name (e.g., "Russia")
    pub name: String,
    /// Display glyph shown on the selector button (e.g., a flag emoji)
    pub emoji: String,
    /// Dialing prefix prepended to every formatted value (e.g., "+7")
    pub prefix: String,
    /// Mask pattern; `*` marks a digit cell, everything else is literal
    pub pattern: String,
}

impl CountryMask {
    /// Creates a new CountryMask with validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use phoneform::models::CountryMask;
    ///
    /// let mask = CountryMask::new("ru", "Russia", "🇷🇺", "+7", "(***) - *** - ** - **").unwrap();
    /// assert_eq!(mask.prefix, "+7");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or not kebab-case, the name is
    /// empty or too long, or the prefix is empty.
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        emoji: impl Into<String>,
        prefix: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Result<Self> {
        let key = key.into();
        let name = name.into();
        let prefix = prefix.into();

        Self::validate_key(&key)?;
        Self::validate_name(&name)?;
        if prefix.is_empty() {
            anyhow::bail!("Mask prefix cannot be empty");
        }

        Ok(Self {
            key,
            name,
            emoji: emoji.into(),
            prefix,
            pattern: pattern.into(),
        })
    }

    /// Validates mask key format (kebab-case).
    fn validate_key(key: &str) -> Result<()> {
        if key.is_empty() {
            anyhow::bail!("Mask key cannot be empty");
        }

        if !key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            anyhow::bail!("Mask key '{key}' must be kebab-case (lowercase, hyphens, and digits only)");
        }

        if key.starts_with('-') || key.ends_with('-') {
            anyhow::bail!("Mask key '{key}' cannot start or end with a hyphen");
        }

        Ok(())
    }

    /// Validates mask display name.
    fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() {
            anyhow::bail!("Mask name cannot be empty");
        }

        if name.len() > 50 {
            anyhow::bail!(
                "Mask name '{}' exceeds maximum length of 50 characters (got {})",
                name,
                name.len()
            );
        }

        Ok(())
    }
}
