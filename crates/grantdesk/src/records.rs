//! Core record types for grantdesk.
//!
//! This module defines the fundamental data structures for maintainer and
//! applicant records and for the binary document sets attached to them.

use serde::{Deserialize, Serialize};

/// Read-time normalization of a maintainer's free-text claim status.
///
/// The stored value is never rewritten; anything outside the two recognized
/// values (case-insensitively) displays as "not yet updated".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    /// The scholarship grant has been claimed.
    Claimed,
    /// The grant is released but not yet claimed.
    Unclaimed,
    /// Unrecognized, empty, or missing stored value.
    NotYetUpdated,
}

impl ClaimStatus {
    /// Normalize a raw stored status value.
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim).map(str::to_lowercase).as_deref() {
            Some("claimed") => Self::Claimed,
            Some("unclaimed") => Self::Unclaimed,
            _ => Self::NotYetUpdated,
        }
    }
}

impl std::fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Claimed => write!(f, "claimed"),
            Self::Unclaimed => write!(f, "unclaimed"),
            Self::NotYetUpdated => write!(f, "not yet updated"),
        }
    }
}

/// Keyword buckets for applicant review status.
///
/// The stored status field is free text with no enumeration guarantee, so
/// bucketing is a case-insensitive match against small fixed keyword sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBucket {
    /// Accepted into the program.
    Accepted,
    /// Still under review.
    Pending,
    /// Turned down.
    Rejected,
}

impl StatusBucket {
    /// All buckets, in display order.
    pub const ALL: [Self; 3] = [Self::Accepted, Self::Pending, Self::Rejected];

    /// The stored-value keywords that map into this bucket.
    #[must_use]
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Accepted => &["accepted", "approve", "approved"],
            Self::Pending => &["pending", "waiting", "in progress"],
            Self::Rejected => &["rejected", "declined", "denied"],
        }
    }

    /// Check whether a raw stored value falls into this bucket.
    #[must_use]
    pub fn matches(&self, raw: &str) -> bool {
        let normalized = raw.trim().to_lowercase();
        self.keywords().contains(&normalized.as_str())
    }

    /// Classify a raw stored value into a bucket, if any matches.
    #[must_use]
    pub fn classify(raw: Option<&str>) -> Option<Self> {
        let raw = raw?;
        Self::ALL.into_iter().find(|bucket| bucket.matches(raw))
    }
}

impl std::fmt::Display for StatusBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accepted => write!(f, "accepted"),
            Self::Pending => write!(f, "pending"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// A scholarship maintainer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maintainer {
    /// Stable unique key (student number).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login handle.
    pub username: String,
    /// Contact address.
    pub email: String,
    /// Read-time normalized claim status.
    pub status: ClaimStatus,
}

/// A scholarship applicant row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    /// Stable unique key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Enrolled course, if recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    /// Raw stored review status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Keyword bucket the raw status falls into, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<StatusBucket>,
}

/// The three document kinds a maintainer can have on file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Certificate of Registration.
    Registration,
    /// Transcript of Records.
    Transcript,
    /// Good Moral Certificate.
    GoodMoral,
}

impl DocumentKind {
    /// All document kinds, in display order.
    pub const ALL: [Self; 3] = [Self::Registration, Self::Transcript, Self::GoodMoral];

    /// Short label used for temp-file names and console output.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Registration => "COR",
            Self::Transcript => "TOR",
            Self::GoodMoral => "GoodMoral",
        }
    }

    /// Column holding this document in the requirements table.
    #[must_use]
    pub fn column(&self) -> &'static str {
        match self {
            Self::Registration => "COR",
            Self::Transcript => "TOR",
            Self::GoodMoral => "Good_Moral",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Registration => write!(f, "Certificate of Registration"),
            Self::Transcript => write!(f, "Transcript of Records"),
            Self::GoodMoral => write!(f, "Good Moral Certificate"),
        }
    }
}

/// The up-to-three binary documents attached to a maintainer.
///
/// A missing requirements row and a row with all three columns NULL are the
/// same valid "nothing uploaded" state; only a store fault is an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachmentSet {
    /// Certificate of Registration payload, if uploaded.
    pub registration: Option<Vec<u8>>,
    /// Transcript of Records payload, if uploaded.
    pub transcript: Option<Vec<u8>>,
    /// Good Moral Certificate payload, if uploaded.
    pub good_moral: Option<Vec<u8>>,
}

impl AttachmentSet {
    /// An attachment set with all three slots absent.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the payload for a document kind, if present.
    #[must_use]
    pub fn get(&self, kind: DocumentKind) -> Option<&[u8]> {
        match kind {
            DocumentKind::Registration => self.registration.as_deref(),
            DocumentKind::Transcript => self.transcript.as_deref(),
            DocumentKind::GoodMoral => self.good_moral.as_deref(),
        }
    }

    /// Check whether no documents are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        DocumentKind::ALL.iter().all(|kind| self.get(*kind).is_none())
    }

    /// The kinds that have a payload, in display order.
    #[must_use]
    pub fn present(&self) -> Vec<DocumentKind> {
        DocumentKind::ALL
            .into_iter()
            .filter(|kind| self.get(*kind).is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_status_normalization() {
        assert_eq!(ClaimStatus::from_raw(Some("CLAIMED")), ClaimStatus::Claimed);
        assert_eq!(
            ClaimStatus::from_raw(Some("Unclaimed")),
            ClaimStatus::Unclaimed
        );
        assert_eq!(
            ClaimStatus::from_raw(Some("")),
            ClaimStatus::NotYetUpdated
        );
        assert_eq!(
            ClaimStatus::from_raw(Some("foo")),
            ClaimStatus::NotYetUpdated
        );
        assert_eq!(ClaimStatus::from_raw(None), ClaimStatus::NotYetUpdated);
    }

    #[test]
    fn test_claim_status_trims_whitespace() {
        assert_eq!(
            ClaimStatus::from_raw(Some("  claimed ")),
            ClaimStatus::Claimed
        );
    }

    #[test]
    fn test_claim_status_display() {
        assert_eq!(ClaimStatus::Claimed.to_string(), "claimed");
        assert_eq!(ClaimStatus::Unclaimed.to_string(), "unclaimed");
        assert_eq!(ClaimStatus::NotYetUpdated.to_string(), "not yet updated");
    }

    #[test]
    fn test_status_bucket_keywords() {
        assert!(StatusBucket::Accepted.matches("Accepted"));
        assert!(StatusBucket::Accepted.matches("approve"));
        assert!(StatusBucket::Accepted.matches("APPROVED"));
        assert!(StatusBucket::Pending.matches("in progress"));
        assert!(StatusBucket::Rejected.matches("Denied"));
        assert!(!StatusBucket::Rejected.matches("accepted"));
    }

    #[test]
    fn test_status_bucket_classify() {
        assert_eq!(
            StatusBucket::classify(Some("Accepted")),
            Some(StatusBucket::Accepted)
        );
        assert_eq!(
            StatusBucket::classify(Some("denied")),
            Some(StatusBucket::Rejected)
        );
        assert_eq!(StatusBucket::classify(Some("enrolled")), None);
        assert_eq!(StatusBucket::classify(None), None);
    }

    #[test]
    fn test_status_bucket_display() {
        assert_eq!(StatusBucket::Accepted.to_string(), "accepted");
        assert_eq!(StatusBucket::Pending.to_string(), "pending");
        assert_eq!(StatusBucket::Rejected.to_string(), "rejected");
    }

    #[test]
    fn test_document_kind_labels() {
        assert_eq!(DocumentKind::Registration.label(), "COR");
        assert_eq!(DocumentKind::Transcript.label(), "TOR");
        assert_eq!(DocumentKind::GoodMoral.label(), "GoodMoral");
    }

    #[test]
    fn test_document_kind_columns() {
        assert_eq!(DocumentKind::Registration.column(), "COR");
        assert_eq!(DocumentKind::Transcript.column(), "TOR");
        assert_eq!(DocumentKind::GoodMoral.column(), "Good_Moral");
    }

    #[test]
    fn test_document_kind_display() {
        assert_eq!(
            DocumentKind::Registration.to_string(),
            "Certificate of Registration"
        );
    }

    #[test]
    fn test_attachment_set_empty() {
        let set = AttachmentSet::empty();
        assert!(set.is_empty());
        assert!(set.present().is_empty());
        for kind in DocumentKind::ALL {
            assert!(set.get(kind).is_none());
        }
    }

    #[test]
    fn test_attachment_set_get() {
        let set = AttachmentSet {
            registration: Some(vec![1, 2, 3]),
            transcript: None,
            good_moral: Some(vec![4]),
        };
        assert_eq!(set.get(DocumentKind::Registration), Some(&[1, 2, 3][..]));
        assert!(set.get(DocumentKind::Transcript).is_none());
        assert_eq!(set.get(DocumentKind::GoodMoral), Some(&[4][..]));
    }

    #[test]
    fn test_attachment_set_present_order() {
        let set = AttachmentSet {
            registration: None,
            transcript: Some(vec![0]),
            good_moral: Some(vec![0]),
        };
        assert!(!set.is_empty());
        assert_eq!(
            set.present(),
            vec![DocumentKind::Transcript, DocumentKind::GoodMoral]
        );
    }

    #[test]
    fn test_maintainer_serialization() {
        let maintainer = Maintainer {
            id: "21-04567".to_string(),
            name: "Ana Reyes".to_string(),
            username: "areyes".to_string(),
            email: "ana@example.edu".to_string(),
            status: ClaimStatus::Claimed,
        };

        let json = serde_json::to_string(&maintainer).unwrap();
        assert!(json.contains("\"claimed\""));

        let deserialized: Maintainer = serde_json::from_str(&json).unwrap();
        assert_eq!(maintainer, deserialized);
    }

    #[test]
    fn test_applicant_serialization_skips_absent_fields() {
        let applicant = Applicant {
            id: "22-00012".to_string(),
            name: "Leo Cruz".to_string(),
            course: None,
            status: None,
            bucket: None,
        };

        let json = serde_json::to_string(&applicant).unwrap();
        assert!(!json.contains("course"));
        assert!(!json.contains("status"));
    }
}
