//! CPF (Cadastro de Pessoas Físicas) validation.
//!
//! A CPF is an 11-digit Brazilian taxpayer identifier whose last two digits
//! are check digits computed from the preceding ones. Input may carry the
//! usual `000.000.000-00` punctuation; everything that is not an ASCII digit
//! is ignored.
//!
//! ```
//! use educa_core::cpf;
//!
//! assert!(cpf::validate("111.444.777-35").is_ok());
//! assert_eq!(cpf::validate("123"), Err(cpf::CpfError::InvalidLength));
//! ```

use thiserror::Error;

use crate::errors::AppError;

pub const CPF_LENGTH: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpfError {
    #[error("CPF must have 11 digits")]
    InvalidLength,
    #[error("Invalid CPF")]
    InvalidDigitPattern,
    #[error("Invalid CPF")]
    InvalidCheckDigit,
}

impl From<CpfError> for AppError {
    fn from(err: CpfError) -> Self {
        AppError::bad_request(err)
    }
}

/// Strips every non-digit character.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Computes the check digit for a run of decimal digits.
///
/// Weights start at `len + 1` and decrease by one per position. A remainder
/// below 2 yields `0`, otherwise `11 - remainder`.
pub fn check_digit(digits: &[u8]) -> u8 {
    let weight_base = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| u32::from(*d) * (weight_base - i as u32))
        .sum();

    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

/// Validates a CPF, accepting formatted or bare input.
pub fn validate(raw: &str) -> Result<(), CpfError> {
    if is_raw_repetition(raw) {
        return Err(CpfError::InvalidDigitPattern);
    }

    let normalized = normalize(raw);
    if normalized.len() != CPF_LENGTH {
        return Err(CpfError::InvalidLength);
    }

    let digits: Vec<u8> = normalized.bytes().map(|b| b - b'0').collect();

    if digits.iter().all(|d| *d == digits[0]) {
        return Err(CpfError::InvalidDigitPattern);
    }

    let mut candidate = digits[..9].to_vec();
    candidate.push(check_digit(&candidate));
    candidate.push(check_digit(&candidate));

    if candidate != digits {
        return Err(CpfError::InvalidCheckDigit);
    }

    Ok(())
}

/// Validates and returns the digits-only form for storage.
pub fn normalize_valid(raw: &str) -> Result<String, CpfError> {
    validate(raw)?;
    Ok(normalize(raw))
}

// Raw input that is exactly one digit repeated eleven times. The normalized
// repeated-digit check below is the authoritative one; formatted input such
// as "111.111.111-11" only gets caught there.
fn is_raw_repetition(raw: &str) -> bool {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) if first.is_ascii_digit() => {
            raw.chars().count() == CPF_LENGTH && chars.all(|c| c == first)
        }
        _ => false,
    }
}
