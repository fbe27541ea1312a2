//! In-place buffer reversal

use crate::error::{CompatError, Result};

/// Reverse a NUL-terminated byte buffer in place
///
/// Only the bytes before the first NUL are reversed; the terminator and
/// anything after it stay put. A buffer without a NUL is reversed whole.
/// For odd lengths the middle byte is untouched.
///
/// # Errors
/// [`CompatError::InvalidArgument`] if there is nothing to reverse (empty
/// slice or a leading NUL).
pub fn reverse(buf: &mut [u8]) -> Result<()> {
    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    if len == 0 {
        return Err(CompatError::InvalidArgument);
    }

    let (mut i, mut j) = (0, len - 1);
    while i < j {
        buf.swap(i, j);
        i += 1;
        j -= 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_is_invalid() {
        assert_eq!(reverse(&mut []), Err(CompatError::InvalidArgument));
        assert_eq!(reverse(&mut [0, b'a']), Err(CompatError::InvalidArgument));
    }

    #[test]
    fn test_single() {
        let mut buf = *b"a\0";
        assert_eq!(reverse(&mut buf), Ok(()));
        assert_eq!(&buf, b"a\0");
    }

    #[test]
    fn test_even_length() {
        let mut buf = *b"ab\0";
        reverse(&mut buf).unwrap();
        assert_eq!(&buf, b"ba\0");
    }

    #[test]
    fn test_odd_length_keeps_middle() {
        let mut buf = *b"abc\0";
        reverse(&mut buf).unwrap();
        assert_eq!(&buf, b"cba\0");
    }

    #[test]
    fn test_stops_at_terminator() {
        let mut buf = *b"abc\0xyz";
        reverse(&mut buf).unwrap();
        assert_eq!(&buf, b"cba\0xyz");
    }

    #[test]
    fn test_unterminated_reverses_whole_slice() {
        let mut buf = *b"hello";
        reverse(&mut buf).unwrap();
        assert_eq!(&buf, b"olleh");
    }

    proptest! {
        #[test]
        fn reverse_twice_is_identity(data in proptest::collection::vec(1u8..=255, 1..64)) {
            let mut buf = data.clone();
            reverse(&mut buf).unwrap();
            let mut expected = data.clone();
            expected.reverse();
            prop_assert_eq!(&buf, &expected);

            reverse(&mut buf).unwrap();
            prop_assert_eq!(buf, data);
        }
    }
}
