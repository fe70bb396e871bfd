//! User Name Value Object
//!
//! ユーザー名は、ユーザーを識別するための公開識別子（ハンドル）。
//! 登録、画面表示、投稿の作者表示に使用される。
//!
//! ## 不変条件
//! - 空でないこと（トリム後）
//! - 長さ: 1〜30文字（正規化後）
//! - ASCII文字のみ許可（a-z, A-Z, 0-9, _ . - +）
//!
//! 大文字小文字はそのまま保持する（表示名を兼ねるため）。
//! 一意性はストレージ側の一意インデックスで担保される。

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

use kernel::error::app_error::{AppError, AppResult};

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 30;

/// Allowed special characters in user name
const ALLOWED_SPECIAL_CHARS: &[char] = &['_', '.', '-', '+'];

/// User name value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name with validation
    ///
    /// NFKC-normalizes and trims the input before validation.
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let normalized: String = raw.into().nfkc().collect();
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Err(AppError::bad_request("Username cannot be empty"));
        }

        let char_count = trimmed.chars().count();
        if char_count > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Username must be at most {} characters",
                USER_NAME_MAX_LENGTH
            )));
        }

        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ALLOWED_SPECIAL_CHARS.contains(&c))
        {
            return Err(AppError::bad_request(
                "Username may only contain letters, digits, and _ . - +",
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Get the user name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to string for database storage
    pub fn into_db(self) -> String {
        self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_valid() {
        assert!(UserName::new("alice").is_ok());
        assert!(UserName::new("Alice_B.2024").is_ok());
        assert!(UserName::new("a").is_ok());
        assert!(UserName::new("  padded  ").is_ok()); // trimmed
    }

    #[test]
    fn test_user_name_keeps_case() {
        let name = UserName::new("AliceB").unwrap();
        assert_eq!(name.as_str(), "AliceB");
    }

    #[test]
    fn test_user_name_invalid() {
        assert!(UserName::new("").is_err());
        assert!(UserName::new("   ").is_err());
        assert!(UserName::new("has space").is_err());
        assert!(UserName::new("émile").is_err());
        assert!(UserName::new("x".repeat(USER_NAME_MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_user_name_max_length_boundary() {
        assert!(UserName::new("x".repeat(USER_NAME_MAX_LENGTH)).is_ok());
    }
}
