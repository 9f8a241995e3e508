//! Typed role tags decoded from raw `role.<scope>.<name>` strings.
//!
//! Raw strings are decoded once at the credential boundary so downstream
//! policy is matched exhaustively instead of prefix-scanned. Unrecognized
//! strings are preserved verbatim and grant no staff classification.

use serde::{Deserialize, Serialize};

/// Fine-grained headquarters role (`role.tenant.<name>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TenantRole {
    Admin,
    Finance,
    Operation,
    Hr,
    Other(String),
}

impl TenantRole {
    fn from_name(name: &str) -> Self {
        match name {
            "admin" => Self::Admin,
            "finance" => Self::Finance,
            "operation" => Self::Operation,
            "hr" => Self::Hr,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Finance => "finance",
            Self::Operation => "operation",
            Self::Hr => "hr",
            Self::Other(name) => name,
        }
    }
}

/// Fine-grained campus role (`role.base.<name>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BaseRole {
    /// Campus principal.
    Admin,
    Academic,
    Finance,
    Teacher,
    Other(String),
}

impl BaseRole {
    fn from_name(name: &str) -> Self {
        match name {
            "admin" => Self::Admin,
            "academic" => Self::Academic,
            "finance" => Self::Finance,
            "teacher" => Self::Teacher,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Academic => "academic",
            Self::Finance => "finance",
            Self::Teacher => "teacher",
            Self::Other(name) => name,
        }
    }
}

/// A role tag carried by a credential.
///
/// Decoding is case-sensitive and anchored at the string start: only the
/// `tenant` and `base` scopes classify as staff; everything else (including
/// strings that do not follow the `role.<scope>.<name>` shape) lands in
/// `Other` and round-trips through serde unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Tenant(TenantRole),
    Base(BaseRole),
    Other(String),
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        if let Some(name) = raw.strip_prefix("role.tenant.") {
            Self::Tenant(TenantRole::from_name(name))
        } else if let Some(name) = raw.strip_prefix("role.base.") {
            Self::Base(BaseRole::from_name(name))
        } else {
            Self::Other(raw.to_string())
        }
    }

    /// The raw wire form this role serializes back to.
    pub fn as_raw(&self) -> String {
        match self {
            Self::Tenant(role) => format!("role.tenant.{}", role.name()),
            Self::Base(role) => format!("role.base.{}", role.name()),
            Self::Other(raw) => raw.clone(),
        }
    }

    pub fn tenant_admin() -> Self {
        Self::Tenant(TenantRole::Admin)
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_raw()
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.as_raw())
    }
}
