//! Conversion between legacy `av` numbers and 12-character `bv` ids.
//!
//! The `bv` form is a mixed-radix (base 58) rendering of the `av` number after
//! forcing bit 51 on and XOR-ing with a fixed mask. Nine digits are scattered
//! over fixed slots of the template `BV1000000000`; the remaining slots never
//! change.

use crate::domain::validation::ValidationError;

const XOR_MASK: u64 = 0x1552_356C_4CDB;
const SIGN_BIT: u64 = 1 << 51;
const MOD_MASK: u64 = (1 << 51) - 1;

const ALPHABET: &[u8; 58] = b"FcwAPNKTMug3GV5Lj7EJnHpWsx4tb8haYeviqBz6rkCy12mUSDQX9RdoZf";
const BASE: u64 = ALPHABET.len() as u64;

const TEMPLATE: &[u8; BVID_LEN] = b"BV1000000000";

// Least significant digit first.
const DIGIT_POSITIONS_ENCODE: [usize; 9] = [11, 10, 3, 8, 4, 6, 5, 7, 9];
// Most significant digit first.
const DIGIT_POSITIONS_DECODE: [usize; 9] = [9, 7, 5, 6, 4, 8, 3, 10, 11];

/// Length of every `bvid` produced by [`av_to_bv`].
pub const BVID_LEN: usize = 12;

/// Exclusive upper bound of `aid` values that survive a round trip.
pub const MAX_AID: u64 = 1 << 51;

/// Encode an `av` number into its `bvid` form, e.g. `170001` into `"BV17x411w7KC"`.
///
/// No range check is performed: values at or above [`MAX_AID`] still produce a
/// well-formed string, but [`bv_to_av`] will not give the same number back.
pub fn av_to_bv(aid: u64) -> String {
    let mut buf = *TEMPLATE;
    let mut mixed = (SIGN_BIT | aid) ^ XOR_MASK;
    for position in DIGIT_POSITIONS_ENCODE {
        buf[position] = ALPHABET[(mixed % BASE) as usize];
        mixed /= BASE;
    }
    buf.iter().map(|&b| char::from(b)).collect()
}

/// Decode a `bvid` back into its `av` number.
///
/// Only the digit slots are read, so the `BV` tag is not checked and may be in
/// any case.
///
/// Errors:
/// - [`ValidationError::InvalidBvidLength`] when the input is not exactly
///   [`BVID_LEN`] bytes long,
/// - [`ValidationError::InvalidBvidCharacter`] when a digit slot holds a
///   symbol outside the alphabet.
pub fn bv_to_av(bvid: &str) -> Result<u64, ValidationError> {
    let bytes = bvid.as_bytes();
    if bytes.len() != BVID_LEN {
        return Err(ValidationError::InvalidBvidLength {
            input: bvid.to_owned(),
            expected: BVID_LEN,
            actual: bytes.len(),
        });
    }

    let mut acc: u64 = 0;
    for position in DIGIT_POSITIONS_DECODE {
        let digit = digit_value(bytes[position]).ok_or_else(|| {
            ValidationError::InvalidBvidCharacter {
                input: bvid.to_owned(),
                position,
            }
        })?;
        acc = acc * BASE + digit;
    }

    Ok((acc & MOD_MASK) ^ XOR_MASK)
}

fn digit_value(symbol: u8) -> Option<u64> {
    ALPHABET
        .iter()
        .position(|&candidate| candidate == symbol)
        .map(|idx| idx as u64)
}
