use core::fmt::{self, Write};

fn decimal_digits(mut value: u32) -> u8 {
    let mut count = 1;

    while value >= 10 {
        value /= 10;
        count += 1;
    }

    count
}

/// Writes `value` left-padded with `'0'` to at least `digits` characters.
///
/// Values that already have `digits` or more digits are written unchanged.
pub fn write_zero_padded<W: Write + ?Sized>(w: &mut W, value: u32, digits: u8) -> fmt::Result {
    for _ in 0..digits.saturating_sub(decimal_digits(value)) {
        w.write_char('0')?;
    }

    write!(w, "{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::string::String;

    fn padded(value: u32, digits: u8) -> String {
        let mut out = String::new();
        write_zero_padded(&mut out, value, digits).unwrap();
        out
    }

    #[test]
    fn pads_short_values() {
        assert_eq!(padded(7, 2), "07");
        assert_eq!(padded(42, 4), "0042");
        assert_eq!(padded(999, 4), "0999");
    }

    #[test]
    fn zero_is_one_digit() {
        assert_eq!(padded(0, 1), "0");
        assert_eq!(padded(0, 2), "00");
        assert_eq!(padded(0, 4), "0000");
    }

    #[test]
    fn never_truncates() {
        assert_eq!(padded(12345, 4), "12345");
        assert_eq!(padded(60, 2), "60");
        assert_eq!(padded(u32::MAX, 1), "4294967295");
    }

    proptest! {
        #[test]
        fn short_values_fill_width(value in 1u32..100_000, digits in 6u8..=12) {
            let text = value.to_string();

            let out = padded(value, digits);
            prop_assert_eq!(out.len(), digits as usize);
            prop_assert!(out.ends_with(&text));
            prop_assert!(out[..digits as usize - text.len()].bytes().all(|b| b == b'0'));
        }

        #[test]
        fn zero_pads_one_less_than_width(digits in 1u8..=32) {
            let mut expected = "0".repeat(digits as usize - 1);
            expected.push('0');
            prop_assert_eq!(padded(0, digits), expected);
        }

        #[test]
        fn wide_values_are_plain_decimal(value in 100_000u32..=u32::MAX, digits in 1u8..=6) {
            prop_assert_eq!(padded(value, digits), value.to_string());
        }
    }
}
