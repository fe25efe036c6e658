//! Audit trail shared by every entity
//!
//! The common identity-and-audit contract is represented as a value type
//! embedded by composition: each entity owns an [`AuditTrail`] and funnels
//! every successful mutation through [`AuditTrail::mark_modified`].

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::DomainResult;
use crate::validation::{fail_if, validate_actor};

/// Creation/modification timestamps and actor names carried by every entity.
///
/// Invariants: the modification timestamp is never before the creation
/// timestamp, the creation timestamp is never in the future, and actor
/// names (when present) satisfy [`validate_actor`].
#[derive(Debug, Clone, Serialize)]
pub struct AuditTrail {
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
    created_by: Option<String>,
    modified_by: Option<String>,
}

impl AuditTrail {
    /// Fresh stamps for a newly constructed entity: both timestamps at
    /// "now", no modifier yet.
    pub(crate) fn new(created_by: Option<&str>) -> DomainResult<Self> {
        if let Some(name) = created_by {
            validate_actor(name)?;
        }
        let now = Utc::now();
        Ok(Self {
            created_at: now,
            modified_at: now,
            created_by: created_by.map(str::to_owned),
            modified_by: None,
        })
    }

    /// Rebuild stamps for an already-persisted row. The source is trusted,
    /// but the audit invariants still hold.
    pub fn reconstitute(
        created_at: DateTime<Utc>,
        modified_at: DateTime<Utc>,
        created_by: Option<String>,
        modified_by: Option<String>,
    ) -> DomainResult<Self> {
        fail_if(
            created_at > Utc::now(),
            "creation timestamp cannot be in the future",
        )?;
        fail_if(
            modified_at < created_at,
            "modification timestamp cannot precede the creation timestamp",
        )?;
        if let Some(name) = created_by.as_deref() {
            validate_actor(name)?;
        }
        if let Some(name) = modified_by.as_deref() {
            validate_actor(name)?;
        }
        Ok(Self {
            created_at,
            modified_at,
            created_by,
            modified_by,
        })
    }

    /// Stamp a successful mutation: set the modifier and refresh the
    /// modification timestamp. Never touches the creation fields.
    pub(crate) fn mark_modified(&mut self, actor: &str) -> DomainResult<()> {
        validate_actor(actor)?;
        self.modified_by = Some(actor.to_owned());
        self.modified_at = Utc::now();
        Ok(())
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    pub fn created_by(&self) -> Option<&str> {
        self.created_by.as_deref()
    }

    pub fn modified_by(&self) -> Option<&str> {
        self.modified_by.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_stamps_both_timestamps() {
        let audit = AuditTrail::new(Some("admin")).unwrap();
        assert_eq!(audit.created_at(), audit.modified_at());
        assert_eq!(audit.created_by(), Some("admin"));
        assert_eq!(audit.modified_by(), None);
    }

    #[test]
    fn test_new_without_creator() {
        let audit = AuditTrail::new(None).unwrap();
        assert_eq!(audit.created_by(), None);
    }

    #[test]
    fn test_new_rejects_invalid_creator() {
        assert!(AuditTrail::new(Some("")).is_err());
        assert!(AuditTrail::new(Some("ab")).is_err());
        assert!(AuditTrail::new(Some(" admin ")).is_err());
    }

    #[test]
    fn test_mark_modified_is_monotonic_and_preserves_creation() {
        let mut audit = AuditTrail::new(Some("admin")).unwrap();
        let created = audit.created_at();

        audit.mark_modified("editor").unwrap();
        let first = audit.modified_at();
        audit.mark_modified("editor").unwrap();
        let second = audit.modified_at();

        assert!(first >= created);
        assert!(second >= first);
        assert_eq!(audit.created_at(), created);
        assert_eq!(audit.created_by(), Some("admin"));
        assert_eq!(audit.modified_by(), Some("editor"));
    }

    #[test]
    fn test_mark_modified_rejects_invalid_actor() {
        let mut audit = AuditTrail::new(None).unwrap();
        let before = audit.modified_at();
        assert!(audit.mark_modified("ab").is_err());
        assert_eq!(audit.modified_at(), before);
        assert_eq!(audit.modified_by(), None);
    }

    #[test]
    fn test_reconstitute_valid_row() {
        let created = Utc::now() - Duration::days(2);
        let modified = created + Duration::hours(1);
        let audit = AuditTrail::reconstitute(
            created,
            modified,
            Some("admin".to_string()),
            Some("editor".to_string()),
        )
        .unwrap();
        assert_eq!(audit.created_at(), created);
        assert_eq!(audit.modified_at(), modified);
    }

    #[test]
    fn test_reconstitute_rejects_future_creation() {
        let future = Utc::now() + Duration::hours(1);
        assert!(AuditTrail::reconstitute(future, future, None, None).is_err());
    }

    #[test]
    fn test_reconstitute_rejects_modification_before_creation() {
        let created = Utc::now();
        let earlier = created - Duration::minutes(5);
        let err = AuditTrail::reconstitute(created, earlier, None, None).unwrap_err();
        assert_eq!(
            err.message(),
            "modification timestamp cannot precede the creation timestamp"
        );
    }

    #[test]
    fn test_reconstitute_rejects_invalid_actor_names() {
        let now = Utc::now();
        assert!(AuditTrail::reconstitute(now, now, Some("ab".to_string()), None).is_err());
        assert!(AuditTrail::reconstitute(now, now, None, Some("  ".to_string())).is_err());
    }
}
