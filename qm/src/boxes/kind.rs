//! The five review tiers

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A Leitner box, in scheduling order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxKind {
    /// Answered wrong at least once since the last success
    Missed,
    /// Loaded but not yet asked
    Unasked,
    CorrectOnce,
    CorrectTwice,
    /// Retired for the rest of the session
    Known,
}

impl BoxKind {
    /// Every box, indexable by [`BoxKind::index`]
    pub const ALL: [BoxKind; 5] = [
        BoxKind::Missed,
        BoxKind::Unasked,
        BoxKind::CorrectOnce,
        BoxKind::CorrectTwice,
        BoxKind::Known,
    ];

    /// Boxes eligible for selection, highest priority first
    pub const SERVED: [BoxKind; 4] = [
        BoxKind::Missed,
        BoxKind::Unasked,
        BoxKind::CorrectOnce,
        BoxKind::CorrectTwice,
    ];

    /// Position in [`BoxKind::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name of the box
    pub fn name(self) -> &'static str {
        match self {
            Self::Missed => "Missed Questions",
            Self::Unasked => "Unasked Questions",
            Self::CorrectOnce => "Correctly Answered Once",
            Self::CorrectTwice => "Correctly Answered Twice",
            Self::Known => "Known Questions",
        }
    }

    /// Minimum wait before a member is due again; `None` means never
    ///
    /// Carried as metadata only. Selection is purely by box priority.
    pub fn priority_interval(self) -> Option<Duration> {
        match self {
            Self::Missed => Some(Duration::from_secs(60)),
            Self::Unasked => Some(Duration::ZERO),
            Self::CorrectOnce => Some(Duration::from_secs(180)),
            Self::CorrectTwice => Some(Duration::from_secs(360)),
            Self::Known => None,
        }
    }

    /// Box a question moves to after a correct answer
    ///
    /// A missed question jumps straight to `CorrectOnce`; everything else
    /// climbs one tier, and `Known` stays put.
    pub fn promoted(self) -> Self {
        match self {
            Self::Missed => Self::CorrectOnce,
            other => Self::ALL[(other.index() + 1).min(Self::Known.index())],
        }
    }

    /// Box a question moves to after a wrong answer
    pub fn demoted(self) -> Self {
        Self::Missed
    }

    /// Box a question moves to given the outcome of its last answer
    pub fn after(self, answered_correctly: bool) -> Self {
        if answered_correctly { self.promoted() } else { self.demoted() }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Known
    }
}

impl std::fmt::Display for BoxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_position() {
        for (i, kind) in BoxKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_served_excludes_known() {
        assert!(!BoxKind::SERVED.contains(&BoxKind::Known));
        assert_eq!(BoxKind::SERVED[..], BoxKind::ALL[..4]);
    }

    #[test]
    fn test_promotion() {
        assert_eq!(BoxKind::Missed.promoted(), BoxKind::CorrectOnce);
        assert_eq!(BoxKind::Unasked.promoted(), BoxKind::CorrectOnce);
        assert_eq!(BoxKind::CorrectOnce.promoted(), BoxKind::CorrectTwice);
        assert_eq!(BoxKind::CorrectTwice.promoted(), BoxKind::Known);
        assert_eq!(BoxKind::Known.promoted(), BoxKind::Known);
    }

    #[test]
    fn test_demotion_always_missed() {
        for kind in BoxKind::ALL {
            assert_eq!(kind.demoted(), BoxKind::Missed);
            assert_eq!(kind.after(false), BoxKind::Missed);
        }
    }

    #[test]
    fn test_intervals() {
        assert_eq!(BoxKind::Missed.priority_interval(), Some(Duration::from_secs(60)));
        assert_eq!(BoxKind::Unasked.priority_interval(), Some(Duration::ZERO));
        assert_eq!(BoxKind::Known.priority_interval(), None);
        assert!(BoxKind::Known.is_terminal());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&BoxKind::CorrectOnce).unwrap(), "\"correct_once\"");
        let parsed: BoxKind = serde_json::from_str("\"known\"").unwrap();
        assert_eq!(parsed, BoxKind::Known);
    }
}
