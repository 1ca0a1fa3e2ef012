//! Fixed enumerated sets, roles, and the moderation state machine.
//!
//! All enums serialize in `snake_case` and parse case-insensitively from
//! either their display label (`"Most Voted"`) or a kebab/snake spelling
//! (`"most-voted"`, `"most_voted"`). Status enums with state machines provide
//! `allowed_next_states()` to enforce valid transitions at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Fold a user-supplied label to the canonical lookup key:
/// lowercase, with spaces and dashes collapsed to underscores.
fn fold_label(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

fn unknown(kind: &str, value: &str) -> CoreError {
    CoreError::Validation(format!("unknown {kind} '{value}'"))
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Coarse topic bucket derived from a question's tags.
///
/// `General` is offered as a choice but no derivation rule produces it, so
/// selecting it always yields an empty listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Technology,
    Science,
    Programming,
    Design,
    Business,
    General,
}

impl Category {
    /// Every category in filter-bar order.
    pub const ALL: [Self; 6] = [
        Self::Technology,
        Self::Science,
        Self::Programming,
        Self::Design,
        Self::Business,
        Self::General,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Science => "Science",
            Self::Programming => "Programming",
            Self::Design => "Design",
            Self::Business => "Business",
            Self::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = fold_label(s);
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(&key))
            .ok_or_else(|| unknown("category", s))
    }
}

// ---------------------------------------------------------------------------
// Tag
// ---------------------------------------------------------------------------

/// Tags offered by the filter bar.
///
/// Matching against a record's free-form tags is case-insensitive on
/// [`Tag::as_str`], so `Tag::NodeJs` matches `"node.js"` but not `"nodejs"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    React,
    JavaScript,
    TypeScript,
    Css,
    Html,
    #[serde(rename = "node.js")]
    NodeJs,
    Python,
    Api,
}

impl Tag {
    pub const ALL: [Self; 8] = [
        Self::React,
        Self::JavaScript,
        Self::TypeScript,
        Self::Css,
        Self::Html,
        Self::NodeJs,
        Self::Python,
        Self::Api,
    ];

    /// Display label, also the text matched against record tags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::React => "React",
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Css => "CSS",
            Self::Html => "HTML",
            Self::NodeJs => "Node.js",
            Self::Python => "Python",
            Self::Api => "API",
        }
    }

    /// Whether a free-form record tag names this tag.
    #[must_use]
    pub fn matches(self, tag: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(tag)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.matches(s.trim()))
            .ok_or_else(|| unknown("tag", s))
    }
}

// ---------------------------------------------------------------------------
// PrimaryFilter
// ---------------------------------------------------------------------------

/// Primary listing filter chosen by the filter buttons.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryFilter {
    /// Input order, which is newest first.
    #[default]
    Newest,
    /// Only questions with zero answers.
    Unanswered,
    /// Stable sort by vote count, highest first.
    MostVoted,
}

impl PrimaryFilter {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Unanswered => "unanswered",
            Self::MostVoted => "most_voted",
        }
    }
}

impl fmt::Display for PrimaryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrimaryFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_label(s).as_str() {
            "newest" => Ok(Self::Newest),
            "unanswered" => Ok(Self::Unanswered),
            "most_voted" => Ok(Self::MostVoted),
            _ => Err(unknown("filter", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// SortOrder
// ---------------------------------------------------------------------------

/// Secondary ordering applied after the primary filter.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Keep the current order.
    #[default]
    Recent,
    /// Reverse the current order.
    Oldest,
    /// Stable sort by answer count, highest first.
    MostAnswers,
}

impl SortOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Oldest => "oldest",
            Self::MostAnswers => "most_answers",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_label(s).as_str() {
            "recent" => Ok(Self::Recent),
            "oldest" => Ok(Self::Oldest),
            "most_answers" => Ok(Self::MostAnswers),
            _ => Err(unknown("sort order", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// VoteDirection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Change applied to a vote count.
    #[must_use]
    pub const fn delta(self) -> i64 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_label(s).as_str() {
            "up" | "upvote" => Ok(Self::Up),
            "down" | "downvote" => Ok(Self::Down),
            _ => Err(unknown("vote direction", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// ModerationStatus
// ---------------------------------------------------------------------------

/// Review status of a guest submission.
///
/// ```text
/// pending → approved
///         → rejected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ModerationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ModerationStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Approved, Self::Rejected],
            Self::Approved | Self::Rejected => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ModerationTab
// ---------------------------------------------------------------------------

/// Views over the guest moderation queue.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ModerationTab {
    All,
    #[default]
    Pending,
    Approved,
    Rejected,
    /// Submissions the screener flagged, regardless of status.
    Suspected,
}

impl ModerationTab {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Suspected => "suspected",
        }
    }
}

impl fmt::Display for ModerationTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModerationTab {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_label(s).as_str() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "suspected" => Ok(Self::Suspected),
            _ => Err(unknown("moderation tab", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Who is acting on the board. Supplied by the host; never authenticated here.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Guest,
    Member,
    Admin,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Member => "member",
            Self::Admin => "admin",
        }
    }

    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_label(s).as_str() {
            "guest" => Ok(Self::Guest),
            "member" => Ok(Self::Member),
            "admin" => Ok(Self::Admin),
            _ => Err(unknown("role", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Most Voted", PrimaryFilter::MostVoted)]
    #[case("most-voted", PrimaryFilter::MostVoted)]
    #[case("most_voted", PrimaryFilter::MostVoted)]
    #[case("UNANSWERED", PrimaryFilter::Unanswered)]
    #[case(" newest ", PrimaryFilter::Newest)]
    fn filter_parses_labels(#[case] input: &str, #[case] expected: PrimaryFilter) {
        assert_eq!(input.parse::<PrimaryFilter>().unwrap(), expected);
    }

    #[rstest]
    #[case("Most Answers", SortOrder::MostAnswers)]
    #[case("oldest", SortOrder::Oldest)]
    #[case("Recent", SortOrder::Recent)]
    fn sort_parses_labels(#[case] input: &str, #[case] expected: SortOrder) {
        assert_eq!(input.parse::<SortOrder>().unwrap(), expected);
    }

    #[test]
    fn tag_parses_display_label_case_insensitively() {
        assert_eq!("node.js".parse::<Tag>().unwrap(), Tag::NodeJs);
        assert_eq!("JAVASCRIPT".parse::<Tag>().unwrap(), Tag::JavaScript);
        assert!("nodejs".parse::<Tag>().is_err());
    }

    #[test]
    fn category_parses_and_rejects_unknown() {
        assert_eq!("design".parse::<Category>().unwrap(), Category::Design);
        let err = "cooking".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("cooking"));
    }

    #[test]
    fn tag_serializes_with_dotted_node_name() {
        let json = serde_json::to_string(&Tag::NodeJs).unwrap();
        assert_eq!(json, "\"node.js\"");
    }

    #[test]
    fn moderation_transitions_only_leave_pending() {
        assert!(ModerationStatus::Pending.can_transition_to(ModerationStatus::Approved));
        assert!(ModerationStatus::Pending.can_transition_to(ModerationStatus::Rejected));
        assert!(!ModerationStatus::Approved.can_transition_to(ModerationStatus::Rejected));
        assert!(!ModerationStatus::Rejected.can_transition_to(ModerationStatus::Pending));
    }

    #[rstest]
    #[case("admin", Role::Admin)]
    #[case("Member", Role::Member)]
    #[case(" guest", Role::Guest)]
    fn role_parses_labels(#[case] input: &str, #[case] expected: Role) {
        assert_eq!(input.parse::<Role>().unwrap(), expected);
        assert!(expected.to_string().parse::<Role>().is_ok());
    }

    #[test]
    fn vote_deltas() {
        assert_eq!(VoteDirection::Up.delta(), 1);
        assert_eq!(VoteDirection::Down.delta(), -1);
    }

    #[test]
    fn vote_direction_parses() {
        assert_eq!("UP".parse::<VoteDirection>().unwrap(), VoteDirection::Up);
        assert_eq!("downvote".parse::<VoteDirection>().unwrap(), VoteDirection::Down);
        assert!("sideways".parse::<VoteDirection>().is_err());
    }
}
