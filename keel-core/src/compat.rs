//! Small portability helpers
//!
//! Stand-ins for the helpers some embedded toolchains lack.

/// Pi, for code that expects it at the compat layer
pub use core::f64::consts::PI;

/// Smaller of two values
#[inline]
pub fn min(a: i32, b: i32) -> i32 {
    if a < b {
        a
    } else {
        b
    }
}

/// Larger of two values
#[inline]
pub fn max(a: i32, b: i32) -> i32 {
    if a > b {
        a
    } else {
        b
    }
}

/// Zero a buffer
#[inline]
pub fn memclr(buf: &mut [u8]) {
    buf.fill(0);
}

/// Check if a byte is an ASCII decimal digit (`'0'..='9'`)
#[inline]
pub fn is_digit(c: u8) -> bool {
    c > 47 && c < 58
}

/// Upper 8 bits of a 16-bit value
#[inline]
pub fn high(val: u16) -> u8 {
    (val >> 8) as u8
}

/// Lower 8 bits of a 16-bit value
#[inline]
pub fn low(val: u16) -> u8 {
    (val & 0xFF) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max() {
        assert_eq!(min(3, 7), 3);
        assert_eq!(min(-3, -7), -7);
        assert_eq!(max(3, 7), 7);
        assert_eq!(max(5, 5), 5);
        assert_eq!(min(i32::MIN, i32::MAX), i32::MIN);
    }

    #[test]
    fn test_memclr() {
        let mut buf = [0xAAu8; 8];
        memclr(&mut buf[2..6]);
        assert_eq!(buf, [0xAA, 0xAA, 0, 0, 0, 0, 0xAA, 0xAA]);
    }

    #[test]
    fn test_is_digit() {
        for c in b'0'..=b'9' {
            assert!(is_digit(c));
        }
        assert!(!is_digit(b'/'));
        assert!(!is_digit(b':'));
        assert!(!is_digit(b'a'));
        assert!(!is_digit(0));
    }

    #[test]
    fn test_high_low() {
        assert_eq!(high(0xABCD), 0xAB);
        assert_eq!(low(0xABCD), 0xCD);
        assert_eq!(high(0x00FF), 0x00);
        assert_eq!(low(0xFF00), 0x00);
    }
}
