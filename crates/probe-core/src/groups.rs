//! Feature-area groups that partition the check catalog.
//!
//! Group order here mirrors run order; the harness walks them in sequence and
//! gates each one on its [`Requirement`].

use serde::Serialize;

use crate::enums::Requirement;

/// A feature area of the API surface with the credential its checks require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Group {
    /// Stable machine key (`countdowns`, `feature_flags`, ...).
    pub key: &'static str,
    /// Header printed above the group's progress lines.
    pub title: &'static str,
    pub requires: Requirement,
}

impl Group {
    const fn new(key: &'static str, title: &'static str, requires: Requirement) -> Self {
        Self {
            key,
            title,
            requires,
        }
    }

    pub const BASICS: Self = Self::new("basics", "Basics", Requirement::None);
    pub const AUTH: Self = Self::new("auth", "Authentication", Requirement::None);
    pub const PUBLIC: Self = Self::new("public", "Public endpoints", Requirement::None);

    pub const USER: Self = Self::new("user", "User profile", Requirement::Standard);
    pub const REVIEWS: Self = Self::new("reviews", "Reviews", Requirement::Standard);
    pub const COURSE_TABLE: Self =
        Self::new("course_table", "Course table", Requirement::Standard);
    pub const FAIL_RATE: Self = Self::new("fail_rate", "Fail rate", Requirement::Standard);
    pub const POINTS: Self = Self::new("points", "Points", Requirement::Standard);
    pub const CONTRIBUTIONS: Self =
        Self::new("contributions", "Contributions", Requirement::Standard);
    pub const COUNTDOWNS: Self = Self::new("countdowns", "Countdowns", Requirement::Standard);
    pub const STUDY_TASKS: Self = Self::new("study_tasks", "Study tasks", Requirement::Standard);
    pub const USER_FEATURES: Self =
        Self::new("user_features", "User features", Requirement::Standard);

    pub const ADMIN: Self = Self::new("admin", "Administration", Requirement::Admin);
    pub const FEATURE_FLAGS: Self =
        Self::new("feature_flags", "Feature flags", Requirement::Admin);

    pub const IDEMPOTENCY: Self = Self::new("idempotency", "Idempotency", Requirement::Standard);

    /// Groups gated on the standard credential, in run order.
    pub const AUTHENTICATED: [Self; 9] = [
        Self::USER,
        Self::REVIEWS,
        Self::COURSE_TABLE,
        Self::FAIL_RATE,
        Self::POINTS,
        Self::CONTRIBUTIONS,
        Self::COUNTDOWNS,
        Self::STUDY_TASKS,
        Self::USER_FEATURES,
    ];

    /// Groups gated on the admin credential, in run order.
    pub const ADMINISTRATIVE: [Self; 2] = [Self::ADMIN, Self::FEATURE_FLAGS];
}
