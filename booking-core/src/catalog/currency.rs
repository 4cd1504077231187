//! EUR formatting in German notation

/// Format an amount as euros the way a German locale does: `.` groups
/// thousands, `,` separates cents, a no-break space precedes the sign.
///
/// ```
/// use booking_core::catalog::format_eur;
///
/// assert_eq!(format_eur(1234.5), "1.234,50\u{a0}€");
/// ```
pub fn format_eur(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let negative = cents < 0;
    let cents = cents.unsigned_abs();

    let euros = group_thousands(cents / 100);
    let sign = if negative { "-" } else { "" };
    format!("{}{},{:02}\u{a0}€", sign, euros, cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_small_amounts() {
        assert_eq!(format_eur(0.0), "0,00\u{a0}€");
        assert_eq!(format_eur(2.5), "2,50\u{a0}€");
        assert_eq!(format_eur(12.0), "12,00\u{a0}€");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_eur(1000.0), "1.000,00\u{a0}€");
        assert_eq!(format_eur(1234567.89), "1.234.567,89\u{a0}€");
        assert_eq!(format_eur(999.99), "999,99\u{a0}€");
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(format_eur(0.125), "0,13\u{a0}€");
        assert_eq!(format_eur(19.999), "20,00\u{a0}€");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(format_eur(-1500.5), "-1.500,50\u{a0}€");
    }
}
