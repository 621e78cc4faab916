use std::fmt;

use serde::Serialize;

use crate::error::CoreError;

pub const DEFAULT_COUNTRY_CODE: &str = "91";
pub const DEFAULT_LOCAL_DIGITS: usize = 10;

/// Regional default applied to bare local numbers: a number of exactly
/// `local_digits` digits with no leading `+` gets `+<code>` prepended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultCountryCode {
    code: String,
    local_digits: usize,
}

impl DefaultCountryCode {
    pub fn new(code: &str, local_digits: usize) -> Result<Self, CoreError> {
        let trimmed = code.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if digits.is_empty() || digits.len() > 3 || !digits.chars().all(|ch| ch.is_ascii_digit())
        {
            return Err(CoreError::InvalidCountryCode(code.to_string()));
        }
        Ok(Self {
            code: digits.to_string(),
            local_digits,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn local_digits(&self) -> usize {
        self.local_digits
    }
}

impl Default for DefaultCountryCode {
    fn default() -> Self {
        Self {
            code: DEFAULT_COUNTRY_CODE.to_string(),
            local_digits: DEFAULT_LOCAL_DIGITS,
        }
    }
}

/// Phone number reduced to ASCII digits and `+` characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedPhone(String);

impl NormalizedPhone {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits only, as used in the path of a chat link.
    pub fn bare_digits(&self) -> String {
        self.0.replace('+', "")
    }

    pub fn has_country_code(&self) -> bool {
        self.0.starts_with('+')
    }
}

impl fmt::Display for NormalizedPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keeps digits and `+`, then applies the regional default if one is given.
/// Returns `None` when nothing survives.
pub fn normalize_phone(
    raw: &str,
    default: Option<&DefaultCountryCode>,
) -> Option<NormalizedPhone> {
    let mut out: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '+')
        .collect();

    if out.is_empty() {
        return None;
    }

    // length of the stripped value, `+` characters included
    if let Some(default) = default {
        if !out.starts_with('+') && out.len() == default.local_digits {
            out = format!("+{}{}", default.code, out);
        }
    }

    Some(NormalizedPhone(out))
}
