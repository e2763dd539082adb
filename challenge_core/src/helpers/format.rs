/// Inserts en-US thousands separators into a string of ASCII digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

fn split_fixed(value: f64, decimals: usize) -> (String, String) {
    let fixed = format!("{:.*}", decimals, value.abs());
    match fixed.split_once('.') {
        Some((int, frac)) => (int.to_string(), frac.to_string()),
        None => (fixed, String::new()),
    }
}

/// `$1,234.56` style, always two decimals.
pub fn format_currency(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let (int, frac) = split_fixed(value, 2);
    let sign = if value < 0.0 && (int != "0" || frac != "00") {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, group_thousands(&int), frac)
}

/// Signed percentage with two decimals, e.g. `+1.23%`.
pub fn format_percentage(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

/// Token price with precision scaled to its magnitude.
pub fn format_token_price(price: Option<f64>) -> String {
    let price = match price {
        Some(p) if p.is_finite() && p > 0.0 => p,
        _ => return "$0.0000".to_string(),
    };

    if price < 0.00001 {
        let exponent = price.log10().floor();
        let mantissa = price / 10f64.powf(exponent);
        return format!("${:.2}e{}", mantissa, exponent as i32);
    }

    let decimals = if price >= 1.0 {
        2
    } else if price >= 0.01 {
        4
    } else if price >= 0.0001 {
        6
    } else {
        8
    };
    format!("${:.*}", decimals, price)
}

/// en-US grouped number with at most three fraction digits.
pub fn format_number(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let (int, frac) = split_fixed(value, 3);
    let frac = frac.trim_end_matches('0');
    let sign = if value < 0.0 && (int != "0" || !frac.is_empty()) {
        "-"
    } else {
        ""
    };

    if frac.is_empty() {
        format!("{}{}", sign, group_thousands(&int))
    } else {
        format!("{}{}.{}", sign, group_thousands(&int), frac)
    }
}

pub fn vote_label(votes: u64) -> String {
    if votes == 1 {
        "1 vote".to_string()
    } else {
        format!("{} votes", votes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(10_000.0), "$10,000.00");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(-987.654), "-$987.65");
        assert_eq!(format_currency(f64::NAN), "$0.00");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.0), "+0.00%");
        assert_eq!(format_percentage(7.0), "+7.00%");
        assert_eq!(format_percentage(-12.3456), "-12.35%");
    }

    #[test]
    fn test_format_token_price_tiers() {
        assert_eq!(format_token_price(None), "$0.0000");
        assert_eq!(format_token_price(Some(0.0)), "$0.0000");
        assert_eq!(format_token_price(Some(64.2)), "$64.20");
        assert_eq!(format_token_price(Some(0.5)), "$0.5000");
        assert_eq!(format_token_price(Some(0.005)), "$0.005000");
        assert_eq!(format_token_price(Some(0.00005)), "$0.00005000");
        assert_eq!(format_token_price(Some(0.0000034)), "$3.40e-6");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(533902.0), "533,902");
        assert_eq!(format_number(15.97), "15.97");
        assert_eq!(format_number(44.58), "44.58");
        assert_eq!(format_number(1234.5678), "1,234.568");
        assert_eq!(format_number(91.0), "91");
    }

    #[test]
    fn test_vote_label() {
        assert_eq!(vote_label(0), "0 votes");
        assert_eq!(vote_label(1), "1 vote");
        assert_eq!(vote_label(3), "3 votes");
    }
}
