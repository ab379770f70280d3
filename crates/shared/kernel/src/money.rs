//! Money helpers. Amounts travel as `f64` pesos, exactly as the backend stores them.

/// Rounds an amount to cents.
#[must_use]
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// `$1,234.50`
#[must_use]
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let (whole, fraction) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_cents_up() {
        assert_eq!(round_cents(10.005_000_1), 10.01);
        assert_eq!(round_cents(566.661), 566.66);
    }

    #[test]
    fn formats_with_thousands_separator() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(1200.0), "$1,200.00");
        assert_eq!(format_money(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_money(-45.5), "-$45.50");
    }
}
