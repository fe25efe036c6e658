//! User account entity

use serde::{Deserialize, Serialize};

use crate::audit::AuditTrail;
use crate::errors::DomainResult;
use crate::validation::{
    fail_if, validate_actor, validate_avatar, validate_email, validate_id, validate_text,
};

/// Account standing of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Suspended,
    Deactivated,
}

/// User account.
///
/// New accounts start active and unverified; verification and status
/// changes go through the named update operations.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    id: i64,
    name: String,
    email: String,
    #[serde(skip_serializing)]
    password_hash: String,
    avatar: Option<String>,
    status: UserStatus,
    is_verified: bool,
    #[serde(flatten)]
    audit: AuditTrail,
}

fn validate_name(name: &str) -> DomainResult<()> {
    validate_text("name", name, 3, 100)?;
    fail_if(
        !name
            .chars()
            .all(|c| c.is_alphabetic() || c == ' ' || c == '\''),
        "name can only contain letters, spaces, and apostrophes",
    )
}

fn validate_password_hash(password_hash: &str) -> DomainResult<()> {
    validate_text("password hash", password_hash, 8, 500)
}

fn validate_optional_avatar(avatar: Option<&str>) -> DomainResult<()> {
    match avatar {
        Some(value) => validate_avatar(value),
        None => Ok(()),
    }
}

impl User {
    /// Create a new, active, unverified account.
    pub fn new(
        name: &str,
        email: &str,
        password_hash: &str,
        avatar: Option<&str>,
        created_by: &str,
    ) -> DomainResult<Self> {
        validate_name(name)?;
        validate_email(email)?;
        validate_password_hash(password_hash)?;
        validate_optional_avatar(avatar)?;
        let audit = AuditTrail::new(Some(created_by))?;
        Ok(Self {
            id: 0,
            name: name.to_owned(),
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
            avatar: avatar.map(str::to_owned),
            status: UserStatus::Active,
            is_verified: false,
            audit,
        })
    }

    /// Rebuild a persisted account. Rejects non-positive ids.
    #[allow(clippy::too_many_arguments)]
    pub fn existing(
        id: i64,
        name: &str,
        email: &str,
        password_hash: &str,
        avatar: Option<&str>,
        status: UserStatus,
        is_verified: bool,
        audit: AuditTrail,
    ) -> DomainResult<Self> {
        validate_id(id, "user id")?;
        validate_name(name)?;
        validate_email(email)?;
        validate_password_hash(password_hash)?;
        validate_optional_avatar(avatar)?;
        Ok(Self {
            id,
            name: name.to_owned(),
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
            avatar: avatar.map(str::to_owned),
            status,
            is_verified,
            audit,
        })
    }

    /// Change display name and avatar.
    pub fn update_profile(
        &mut self,
        name: &str,
        avatar: Option<&str>,
        actor: &str,
    ) -> DomainResult<()> {
        validate_actor(actor)?;
        validate_name(name)?;
        validate_optional_avatar(avatar)?;
        self.name = name.to_owned();
        self.avatar = avatar.map(str::to_owned);
        self.audit.mark_modified(actor)
    }

    pub fn change_email(&mut self, email: &str, actor: &str) -> DomainResult<()> {
        validate_actor(actor)?;
        validate_email(email)?;
        self.email = email.to_owned();
        self.audit.mark_modified(actor)
    }

    pub fn change_password(&mut self, password_hash: &str, actor: &str) -> DomainResult<()> {
        validate_actor(actor)?;
        validate_password_hash(password_hash)?;
        self.password_hash = password_hash.to_owned();
        self.audit.mark_modified(actor)
    }

    /// Mark the account as verified.
    pub fn verify_account(&mut self, actor: &str) -> DomainResult<()> {
        validate_actor(actor)?;
        self.is_verified = true;
        self.audit.mark_modified(actor)
    }

    pub fn change_status(&mut self, status: UserStatus, actor: &str) -> DomainResult<()> {
        validate_actor(actor)?;
        self.status = status;
        self.audit.mark_modified(actor)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }

    pub fn is_verified(&self) -> bool {
        self.is_verified
    }

    pub fn audit(&self) -> &AuditTrail {
        &self.audit
    }
}
