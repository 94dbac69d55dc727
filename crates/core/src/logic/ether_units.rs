use crate::prelude::*;

fn ether_unit() -> U256 {
    U256::exp10(ETHER_DECIMALS)
}

/// Reads the longest leading decimal number of `text` the way a lenient
/// float parser does: `"0.5abc"` gives `0.5`, `"1e3"` gives `1000`, `"abc"`
/// gives `None`.
pub fn parse_leading_decimal(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let count_digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let sign_len = end;

    let integer_digits = count_digits(end);
    end += integer_digits;
    let mut digits = integer_digits;

    if bytes.get(end) == Some(&b'.') {
        let fraction_digits = count_digits(end + 1);
        if integer_digits + fraction_digits > 0 {
            end += 1 + fraction_digits;
            digits += fraction_digits;
        }
    }

    if digits == 0 {
        let rest = &text[sign_len..];
        if rest.starts_with("Infinity") {
            let negative = text.starts_with('-');
            return Some(if negative {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            });
        }
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = count_digits(exponent_end);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    text[..end].parse::<f64>().ok()
}

/// Scales a plain decimal string (`"12"`, `"0.5"`, `".25"`, `"3."`) into an
/// integer with `decimals` implied decimal places.
///
/// Trailing fractional zeros are ignored; any other fractional digit past
/// `decimals` is an error rather than being rounded.
pub fn parse_units(text: &str, decimals: usize) -> Result<U256, AmountParseError> {
    let (integer, fraction) = text.split_once('.').unwrap_or((text, ""));
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (integer.is_empty() && fraction.is_empty()) || !is_digits(integer) || !is_digits(fraction)
    {
        return Err(AmountParseError::NotADecimal {
            bad_value: text.to_owned(),
        });
    }

    let fraction = fraction.trim_end_matches('0');
    if fraction.len() > decimals {
        return Err(AmountParseError::TooManyDecimals {
            bad_value: text.to_owned(),
            decimals,
        });
    }

    let digits = format!("{integer}{fraction:0<decimals$}");
    U256::from_dec_str(&digits).map_err(|_| AmountParseError::Overflow {
        bad_value: text.to_owned(),
    })
}

/// Ether decimal string to wei, ignoring surrounding whitespace.
pub fn parse_ether(text: &str) -> Result<U256, AmountParseError> {
    parse_units(text.trim(), ETHER_DECIMALS)
}

/// Wei as an exact ether decimal string without trailing zeros.
pub fn format_ether(wei: U256) -> String {
    let unit = ether_unit();
    let integer = wei / unit;
    let fraction = wei % unit;
    if fraction.is_zero() {
        return integer.to_string();
    }
    let fraction = format!("{:0>width$}", fraction.to_string(), width = ETHER_DECIMALS);
    format!("{integer}.{}", fraction.trim_end_matches('0'))
}

/// Wei as ether with exactly four decimals, rounded half up. Used for
/// summaries.
pub fn format_amount(wei: U256) -> String {
    const DISPLAY_DECIMALS: usize = 4;
    let step = U256::exp10(ETHER_DECIMALS - DISPLAY_DECIMALS);
    let rounded = wei.saturating_add(step / 2) / step;
    let scale = U256::exp10(DISPLAY_DECIMALS);
    format!(
        "{}.{:0>width$}",
        rounded / scale,
        (rounded % scale).to_string(),
        width = DISPLAY_DECIMALS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wei(text: &str) -> U256 {
        U256::from_dec_str(text).unwrap()
    }

    #[test]
    fn leading_decimal_matches_lenient_float_parsing() {
        assert_eq!(parse_leading_decimal("0.5"), Some(0.5));
        assert_eq!(parse_leading_decimal("  12"), Some(12.0));
        assert_eq!(parse_leading_decimal(".25"), Some(0.25));
        assert_eq!(parse_leading_decimal("3."), Some(3.0));
        assert_eq!(parse_leading_decimal("-1"), Some(-1.0));
        assert_eq!(parse_leading_decimal("0.5abc"), Some(0.5));
        assert_eq!(parse_leading_decimal("1e3"), Some(1000.0));
        assert_eq!(parse_leading_decimal("2e"), Some(2.0));
        assert_eq!(parse_leading_decimal("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_leading_decimal("abc"), None);
        assert_eq!(parse_leading_decimal(""), None);
        assert_eq!(parse_leading_decimal("."), None);
        assert_eq!(parse_leading_decimal("-"), None);
    }

    #[test]
    fn parse_ether_scales_to_wei() {
        assert_eq!(parse_ether("1").unwrap(), wei("1000000000000000000"));
        assert_eq!(parse_ether("0.5").unwrap(), wei("500000000000000000"));
        assert_eq!(parse_ether(".25").unwrap(), wei("250000000000000000"));
        assert_eq!(parse_ether("3.").unwrap(), wei("3000000000000000000"));
        assert_eq!(parse_ether("0.000000000000000001").unwrap(), U256::one());
        assert_eq!(parse_ether("1.50000000000000000000").unwrap(), wei("1500000000000000000"));
    }

    #[test]
    fn parse_ether_rejects_non_plain_decimals() {
        for bad in ["1e5", "0.5abc", "-1", "+1", "", ".", "1.2.3", "Infinity", "1 0"] {
            assert!(
                matches!(parse_ether(bad), Err(AmountParseError::NotADecimal { .. })),
                "{bad}"
            );
        }
    }

    #[test]
    fn parse_ether_ignores_surrounding_whitespace() {
        assert_eq!(parse_ether(" 1 ").unwrap(), wei("1000000000000000000"));
        assert_eq!(parse_ether("\t0.5\n").unwrap(), wei("500000000000000000"));
        assert!(matches!(
            parse_units(" 1", ETHER_DECIMALS),
            Err(AmountParseError::NotADecimal { .. })
        ));
    }

    #[test]
    fn parse_ether_rejects_excess_precision() {
        assert_eq!(
            parse_ether("0.0000000000000000001"),
            Err(AmountParseError::TooManyDecimals {
                bad_value: "0.0000000000000000001".to_owned(),
                decimals: 18
            })
        );
    }

    #[test]
    fn parse_ether_rejects_overflow() {
        let huge = "9".repeat(80);
        assert!(matches!(
            parse_ether(&huge),
            Err(AmountParseError::Overflow { .. })
        ));
    }

    #[test]
    fn format_ether_is_exact() {
        assert_eq!(format_ether(U256::zero()), "0");
        assert_eq!(format_ether(wei("750000000000000000")), "0.75");
        assert_eq!(format_ether(wei("3750000000000000")), "0.00375");
        assert_eq!(format_ether(wei("2000000000000000000")), "2");
        assert_eq!(format_ether(U256::one()), "0.000000000000000001");
    }

    #[test]
    fn format_amount_rounds_to_four_decimals() {
        assert_eq!(format_amount(U256::zero()), "0.0000");
        assert_eq!(format_amount(wei("753750000000000000")), "0.7538");
        assert_eq!(format_amount(wei("3750000000000000")), "0.0038");
        assert_eq!(format_amount(wei("12340000000000000000")), "12.3400");
        assert_eq!(format_amount(wei("49999999999999")), "0.0000");
    }
}
