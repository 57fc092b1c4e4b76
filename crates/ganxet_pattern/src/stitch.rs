//! Stitch identifiers and the stitch style registry
//!
//! A stitch is identified by a string tag (`"cadeneta"`, `"punt_baix"`, …).
//! A tag may carry a structural modifier suffix, `_increase` or `_decrease`,
//! marking that the stitch changes the next round's count. The registry maps
//! base tags to display styles; modifier-suffixed tags resolve to their base
//! style so a registry never needs suffixed entries.

use ganxet_core::Color;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The stitch every new ring slot starts as (chain stitch).
pub const DEFAULT_STITCH: &str = "cadeneta";

const INCREASE_SUFFIX: &str = "_increase";
const DECREASE_SUFFIX: &str = "_decrease";

/// Structural modifier carried by a stitch tag suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modifier {
    Increase,
    Decrease,
}

/// A stitch type tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StitchId(String);

impl StitchId {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn default_stitch() -> Self {
        Self::new(DEFAULT_STITCH)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The tag with any modifier suffix stripped.
    pub fn base(&self) -> &str {
        self.0
            .strip_suffix(INCREASE_SUFFIX)
            .or_else(|| self.0.strip_suffix(DECREASE_SUFFIX))
            .unwrap_or(&self.0)
    }

    pub fn modifier(&self) -> Option<Modifier> {
        if self.0.ends_with(INCREASE_SUFFIX) {
            Some(Modifier::Increase)
        } else if self.0.ends_with(DECREASE_SUFFIX) {
            Some(Modifier::Decrease)
        } else {
            None
        }
    }

    /// The same base stitch carrying `modifier`.
    pub fn with_modifier(&self, modifier: Modifier) -> StitchId {
        let suffix = match modifier {
            Modifier::Increase => INCREASE_SUFFIX,
            Modifier::Decrease => DECREASE_SUFFIX,
        };
        StitchId(format!("{}{}", self.base(), suffix))
    }
}

/// Display style for one stitch type.
#[derive(Clone, Debug, PartialEq)]
pub struct StitchStyle {
    pub symbol: char,
    pub color: Color,
    pub desc: String,
}

impl StitchStyle {
    pub fn new(symbol: char, color: Color, desc: impl Into<String>) -> Self {
        Self {
            symbol,
            color,
            desc: desc.into(),
        }
    }
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("stitch tag must not be empty")]
    EmptyTag,
    #[error("stitch tag `{0}` embeds a modifier suffix; register the base tag instead")]
    ReservedSuffix(String),
}

/// Lookup from stitch tag to display style.
///
/// Unknown tags resolve to `None`; callers skip rather than fail.
#[derive(Clone, Debug)]
pub struct StitchRegistry {
    styles: FxHashMap<String, StitchStyle>,
}

impl StitchRegistry {
    pub fn empty() -> Self {
        Self {
            styles: FxHashMap::default(),
        }
    }

    /// Build a registry from tag/style pairs, validating each tag.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, StitchStyle)>,
    ) -> anyhow::Result<Self> {
        let mut registry = Self::empty();
        for (tag, style) in entries {
            registry.insert(&tag, style)?;
        }
        anyhow::ensure!(
            !registry.styles.is_empty(),
            "stitch registry requires at least one entry"
        );
        Ok(registry)
    }

    pub fn insert(&mut self, tag: &str, style: StitchStyle) -> Result<(), RegistryError> {
        if tag.is_empty() {
            return Err(RegistryError::EmptyTag);
        }
        if tag.ends_with(INCREASE_SUFFIX) || tag.ends_with(DECREASE_SUFFIX) {
            return Err(RegistryError::ReservedSuffix(tag.to_string()));
        }
        self.styles.insert(tag.to_string(), style);
        Ok(())
    }

    /// Resolve a stitch id to its style. Modifier suffixes resolve to the
    /// base stitch; unknown tags are absent.
    pub fn lookup(&self, id: &StitchId) -> Option<&StitchStyle> {
        self.styles.get(id.base())
    }

    /// A neutral placeholder style collaborators may substitute for unknown
    /// tags when loading external patterns.
    pub fn fallback() -> StitchStyle {
        StitchStyle::new('?', Color::rgba(0.5, 0.5, 0.5, 1.0), "punt desconegut")
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for StitchRegistry {
    /// The palette of the stock editor.
    fn default() -> Self {
        let mut registry = Self::empty();
        let entries = [
            (DEFAULT_STITCH, '⛓', 0xE74C3C, "cadeneta"),
            ("punt_baix", '•', 0x2ECC71, "punt baix"),
            ("punt_mig", '⊤', 0xF39C12, "punt mig"),
            ("punt_alt", '▲', 0x3498DB, "punt alt"),
            ("punt_lliscat", '●', 0x9B59B6, "punt lliscat"),
        ];
        for (tag, symbol, hex, desc) in entries {
            // Stock tags never carry the reserved suffixes.
            registry
                .insert(tag, StitchStyle::new(symbol, Color::from_hex(hex), desc))
                .unwrap();
        }
        registry
    }
}
