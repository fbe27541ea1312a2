//! Signed decimal formatting
//!
//! Digits are peeled least-significant first with truncating remainder on
//! the signed value itself, then the buffer is reversed. The magnitude is
//! never computed, so `MIN` of each type formats without overflow.

use heapless::String;

use super::reverse::reverse;
use crate::error::{CompatError, Result};

/// Longest `i32` rendering: sign plus 10 digits
pub const I32_MAX_LEN: usize = 11;

/// Longest `i64` rendering: sign plus 19 digits
pub const I64_MAX_LEN: usize = 20;

/// Signed integer that can be rendered in decimal
pub trait Decimal: Copy {
    /// Longest rendering, in bytes, excluding the terminator
    const MAX_LEN: usize;

    /// Check if the value is zero
    fn is_zero(self) -> bool;

    /// Check if the value is below zero
    fn is_negative(self) -> bool;

    /// Split off the least-significant decimal digit
    ///
    /// Returns the digit (0..=9) and the value truncated toward zero.
    fn split_digit(self) -> (u8, Self);
}

macro_rules! impl_decimal {
    ($($ty:ty => $len:expr),* $(,)?) => {
        $(
            impl Decimal for $ty {
                const MAX_LEN: usize = $len;

                #[inline]
                fn is_zero(self) -> bool {
                    self == 0
                }

                #[inline]
                fn is_negative(self) -> bool {
                    self < 0
                }

                #[inline]
                fn split_digit(self) -> (u8, Self) {
                    // Remainder takes the dividend's sign; unsigned_abs of it is
                    // at most 9 and never overflows.
                    ((self % 10).unsigned_abs() as u8, self / 10)
                }
            }
        )*
    };
}

impl_decimal!(i8 => 4, i16 => 6, i32 => I32_MAX_LEN, i64 => I64_MAX_LEN);

/// Number of bytes `n` renders to, excluding the terminator
fn rendered_len<T: Decimal>(n: T) -> usize {
    if n.is_zero() {
        return 1;
    }

    let mut len = usize::from(n.is_negative());
    let mut value = n;
    while !value.is_zero() {
        value = value.split_digit().1;
        len += 1;
    }
    len
}

/// Render `n` in decimal into `buf`, followed by a NUL terminator
///
/// Output has no leading zeros (except the literal `0`), a single leading
/// `-` for negative values, and no `+`. Returns the rendered text without
/// the terminator.
///
/// # Errors
/// [`CompatError::InvalidArgument`] if `buf` cannot hold the text plus the
/// terminator. `buf` is left untouched in that case.
pub fn format_into<T: Decimal>(n: T, buf: &mut [u8]) -> Result<&str> {
    let len = rendered_len(n);
    if buf.len() < len + 1 {
        return Err(CompatError::InvalidArgument);
    }

    if n.is_zero() {
        buf[0] = b'0';
        buf[1] = 0;
    } else {
        let mut pos = 0;
        let mut value = n;
        while !value.is_zero() {
            let (digit, rest) = value.split_digit();
            buf[pos] = b'0' + digit;
            pos += 1;
            value = rest;
        }
        if n.is_negative() {
            buf[pos] = b'-';
            pos += 1;
        }
        buf[pos] = 0;
        reverse(&mut buf[..=pos])?;
    }

    core::str::from_utf8(&buf[..len]).map_err(|_| CompatError::InvalidArgument)
}

/// Render an `i32` as an owned, fixed-capacity decimal string
pub fn integer_to_string(n: i32) -> String<I32_MAX_LEN> {
    let mut buf = [0u8; I32_MAX_LEN + 1];
    match format_into(n, &mut buf) {
        // Capacity covers i32::MIN, so the conversion cannot fail
        Ok(text) => String::try_from(text).unwrap_or_default(),
        Err(_) => String::new(),
    }
}

/// Render an `i64` as an owned, fixed-capacity decimal string
pub fn i64_to_string(n: i64) -> String<I64_MAX_LEN> {
    let mut buf = [0u8; I64_MAX_LEN + 1];
    match format_into(n, &mut buf) {
        Ok(text) => String::try_from(text).unwrap_or_default(),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero() {
        assert_eq!(integer_to_string(0).as_str(), "0");

        let mut buf = [0xFFu8; 4];
        assert_eq!(format_into(0i32, &mut buf), Ok("0"));
        assert_eq!(&buf[..2], b"0\0");
    }

    #[test]
    fn test_small_values() {
        assert_eq!(integer_to_string(-7).as_str(), "-7");
        assert_eq!(integer_to_string(120).as_str(), "120");
        assert_eq!(integer_to_string(-10).as_str(), "-10");
        assert_eq!(integer_to_string(9).as_str(), "9");
    }

    #[test]
    fn test_i32_boundaries() {
        assert_eq!(integer_to_string(i32::MAX).as_str(), "2147483647");
        assert_eq!(integer_to_string(i32::MIN).as_str(), "-2147483648");
        assert_eq!(integer_to_string(i32::MIN + 1).as_str(), "-2147483647");
    }

    #[test]
    fn test_i64_boundaries() {
        assert_eq!(i64_to_string(i64::MAX).as_str(), "9223372036854775807");
        assert_eq!(i64_to_string(i64::MIN).as_str(), "-9223372036854775808");
    }

    #[test]
    fn test_narrow_types() {
        let mut buf = [0u8; 8];
        assert_eq!(format_into(i8::MIN, &mut buf), Ok("-128"));
        assert_eq!(format_into(i8::MAX, &mut buf), Ok("127"));
        assert_eq!(format_into(i16::MIN, &mut buf), Ok("-32768"));
        assert_eq!(format_into(i16::MAX, &mut buf), Ok("32767"));
    }

    #[test]
    fn test_max_len_matches_min() {
        assert_eq!(rendered_len(i8::MIN), <i8 as Decimal>::MAX_LEN);
        assert_eq!(rendered_len(i16::MIN), <i16 as Decimal>::MAX_LEN);
        assert_eq!(rendered_len(i32::MIN), <i32 as Decimal>::MAX_LEN);
        assert_eq!(rendered_len(i64::MIN), <i64 as Decimal>::MAX_LEN);
    }

    #[test]
    fn test_terminator_written() {
        let mut buf = [0xFFu8; 12];
        assert_eq!(format_into(-42i32, &mut buf), Ok("-42"));
        assert_eq!(&buf[..4], b"-42\0");
        // Bytes past the terminator are not touched
        assert_eq!(buf[4], 0xFF);
    }

    #[test]
    fn test_buffer_too_small() {
        // "-42" needs 4 bytes with the terminator
        let mut buf = [0xFFu8; 3];
        assert_eq!(format_into(-42i32, &mut buf), Err(CompatError::InvalidArgument));
        assert_eq!(buf, [0xFF; 3]);

        assert_eq!(format_into(0i32, &mut []), Err(CompatError::InvalidArgument));
    }

    #[test]
    fn test_exact_fit() {
        let mut buf = [0u8; I32_MAX_LEN + 1];
        assert_eq!(format_into(i32::MIN, &mut buf), Ok("-2147483648"));
        assert_eq!(buf[I32_MAX_LEN], 0);
    }

    #[test]
    fn test_deterministic() {
        let first = integer_to_string(-123_456);
        for _ in 0..4 {
            assert_eq!(integer_to_string(-123_456), first);
        }
    }

    proptest! {
        #[test]
        fn i32_round_trips(n in any::<i32>()) {
            let text = integer_to_string(n);
            prop_assert_eq!(text.as_str().parse::<i32>().unwrap(), n);
            prop_assert_eq!(text.as_str(), n.to_string());
        }

        #[test]
        fn i64_round_trips(n in any::<i64>()) {
            let text = i64_to_string(n);
            prop_assert_eq!(text.as_str().parse::<i64>().unwrap(), n);
        }

        #[test]
        fn i16_round_trips(n in any::<i16>()) {
            let mut buf = [0u8; 7];
            let text = format_into(n, &mut buf).unwrap();
            prop_assert_eq!(text.parse::<i16>().unwrap(), n);
        }
    }
}
