//! `eduhub-auth` — credential/identity boundary for the admin surface.
//!
//! This crate is intentionally decoupled from HTTP and rendering: it owns
//! claims decoding, role classification, and session state. Signature
//! verification stays with the issuing backend; decisions made here drive
//! routing and display, not security enforcement.

pub mod claims;
pub mod classify;
pub mod role;
pub mod session;
pub mod token;

pub use claims::{Claims, TokenValidationError, validate_claims};
pub use classify::{ActorClass, classify};
pub use role::{BaseRole, Role, TenantRole};
pub use session::{Session, SessionStore};
pub use token::{DecodeError, decode_claims, decode_or_no_access};
