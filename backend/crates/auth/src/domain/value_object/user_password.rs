//! User Password Value Object
//!
//! Wraps the platform hashing primitives so the rest of the auth domain
//! only ever sees hashed material. Plaintext enters through
//! [`platform::password::ClearTextPassword`] and is zeroized on drop.

use platform::password::{ClearTextPassword, HashedPassword, PasswordHashError};

/// Stored password credential (Argon2id PHC string)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password into a storable credential
    pub fn from_raw(
        raw: &ClearTextPassword,
        pepper: Option<&[u8]>,
    ) -> Result<Self, PasswordHashError> {
        Ok(Self(raw.hash(pepper)?))
    }

    /// Restore from the stored PHC string
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        Ok(Self(HashedPassword::from_phc_string(s)?))
    }

    /// Verify a raw password against this credential
    pub fn verify(&self, raw: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw, pepper)
    }

    /// PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }
}
