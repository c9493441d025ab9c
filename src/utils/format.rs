use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 120000 -> "120,000".
pub fn group_thousands(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if amount < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

fn dollars(amount: Decimal) -> i64 {
    amount.round().to_i64().unwrap_or(0)
}

/// Display string for a job's salary band: "$120,000 - $150,000",
/// "From $120,000", "Up to $150,000", or empty when no band was given.
pub fn salary_range(min: Option<Decimal>, max: Option<Decimal>) -> String {
    match (min, max) {
        (Some(lo), Some(hi)) => format!(
            "${} - ${}",
            group_thousands(dollars(lo)),
            group_thousands(dollars(hi))
        ),
        (Some(lo), None) => format!("From ${}", group_thousands(dollars(lo))),
        (None, Some(hi)) => format!("Up to ${}", group_thousands(dollars(hi))),
        (None, None) => String::new(),
    }
}

/// Compact "$120k-$150k" form used on recommended-job cards; empty unless
/// both ends of the band are present.
pub fn salary_range_compact(min: Option<Decimal>, max: Option<Decimal>) -> String {
    match (min, max) {
        (Some(lo), Some(hi)) => format!(
            "${}k-${}k",
            group_thousands(dollars(lo) / 1000),
            group_thousands(dollars(hi) / 1000)
        ),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(120000), "120,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-75000), "-75,000");
    }

    #[test]
    fn salary_range_variants() {
        assert_eq!(
            salary_range(Some(dec(120000)), Some(dec(150000))),
            "$120,000 - $150,000"
        );
        assert_eq!(salary_range(Some(dec(60000)), None), "From $60,000");
        assert_eq!(salary_range(None, Some(dec(90000))), "Up to $90,000");
        assert_eq!(salary_range(None, None), "");
    }

    #[test]
    fn compact_salary_range() {
        assert_eq!(
            salary_range_compact(Some(dec(120000)), Some(dec(150000))),
            "$120k-$150k"
        );
        assert_eq!(salary_range_compact(Some(dec(60000)), None), "");
    }
}
