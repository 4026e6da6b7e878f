//! The read-only validity pass (§4.3).
//!
//! Unlike [`crate::iter::BlockCursor`], which trusts its input and panics
//! on a corrupted arena, `is_valid` must never panic or read out of
//! bounds: its entire job is to say "no" about a buffer that might be
//! garbage, so every read here goes through the checked accessor.

use crate::sentinel::checked_read_word;

/// Walks `bytes` from offset 0 and confirms every block's head and tail
/// sentinels agree (full signed equality, not magnitude only — see §9)
/// and that the walk lands exactly on `bytes.len()`.
pub(crate) fn is_valid(bytes: &[u8]) -> bool {
  let len = bytes.len();
  let mut offset = 0usize;

  while offset < len {
    let head = match checked_read_word(bytes, offset) {
      Some(s) => s,
      None => return false,
    };
    let magnitude = head.unsigned_abs() as usize;
    if magnitude == 0 || magnitude % 4 != 0 {
      return false;
    }

    let tail_offset = offset + 4 + magnitude;
    let tail = match checked_read_word(bytes, tail_offset) {
      Some(s) => s,
      None => return false,
    };
    if tail != head {
      return false;
    }

    offset = tail_offset + 4;
  }

  offset == len
}
