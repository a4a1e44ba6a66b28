//! Caller-supplied user profile with every field optional.
//!
//! The presentation layer sends whatever onboarding collected, which may be
//! nothing at all. Every consumer goes through the accessors below so the
//! default substituted for an absent field is defined in exactly one place.

use serde::{Deserialize, Serialize};

/// The end user's stated background and goal.
///
/// All fields are optional; an entirely absent profile behaves like
/// [`Profile::default`].
///
/// # Examples
///
/// ```
/// use pathsmith::profile::Profile;
///
/// let profile = Profile {
///     interest: Some("Data Science".into()),
///     level: Some("beginner".into()),
///     ..Profile::default()
/// };
/// assert_eq!(profile.display_interest(), "Data Science");
/// assert_eq!(profile.level_key(), "beginner");
///
/// let empty = Profile::default();
/// assert_eq!(empty.display_interest(), "your chosen field");
/// assert_eq!(empty.interest_or_general(), "General");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    /// The user's name, used only as a lead-in on the answer summary line.
    #[serde(default)]
    pub name: Option<String>,
    /// Education stage (e.g. "Class 12", "Undergraduate").
    #[serde(default)]
    pub standard: Option<String>,
    /// Stated field of interest (e.g. "Data Science", "UX Design").
    #[serde(default)]
    pub interest: Option<String>,
    /// Self-assessed level. Free-form; compared lowercased against
    /// "beginner" where it matters.
    #[serde(default)]
    pub level: Option<String>,
    /// The user's stated goal, echoed on the roadmap.
    #[serde(default)]
    pub goal: Option<String>,
}

impl Profile {
    /// Default shown on the answer summary line when no interest is set.
    pub const DEFAULT_INTEREST_LABEL: &'static str = "your chosen field";
    /// Default interest used for track selection in plans and roadmaps.
    pub const DEFAULT_INTEREST_TRACK: &'static str = "General";
    /// Default level substituted everywhere a level is needed.
    pub const DEFAULT_LEVEL: &'static str = "beginner";
    /// Default goal echoed on the roadmap header.
    pub const DEFAULT_GOAL: &'static str = "Explore and secure an entry opportunity";

    /// Interest as shown in prose ("based on your interest in …").
    #[must_use]
    pub fn display_interest(&self) -> &str {
        self.interest.as_deref().unwrap_or(Self::DEFAULT_INTEREST_LABEL)
    }

    /// Interest used by the plan and roadmap generators.
    #[must_use]
    pub fn interest_or_general(&self) -> &str {
        self.interest.as_deref().unwrap_or(Self::DEFAULT_INTEREST_TRACK)
    }

    /// Level exactly as supplied (for display), defaulting to "beginner".
    #[must_use]
    pub fn level_raw(&self) -> &str {
        self.level.as_deref().unwrap_or(Self::DEFAULT_LEVEL)
    }

    /// Lowercased level for branching comparisons.
    #[must_use]
    pub fn level_key(&self) -> String {
        self.level_raw().to_lowercase()
    }

    /// Goal with the fixed fallback applied.
    #[must_use]
    pub fn goal_or_default(&self) -> &str {
        self.goal.as_deref().unwrap_or(Self::DEFAULT_GOAL)
    }

    /// Education stage, empty when absent (only used inside derived queries).
    #[must_use]
    pub fn standard_or_empty(&self) -> &str {
        self.standard.as_deref().unwrap_or("")
    }
}
