//! Identify-user operation mode.
//!
//! Hosts send the mode as free text; the bridge narrows it to two values.

/// How the SDK should apply identify-user attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Replace the stored profile.
    #[default]
    Create,
    /// Merge into the stored profile.
    Update,
}

impl Operation {
    /// Maps a free-form operation string onto the closed set.
    ///
    /// Only `"update"` (compared case-insensitively) selects [`Self::Update`];
    /// anything else, including an absent value, falls back to
    /// [`Self::Create`]. The mapping never fails.
    #[must_use]
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.to_lowercase() == "update" => Self::Update,
            _ => Self::Create,
        }
    }

    /// Returns the canonical lower-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
        }
    }
}
