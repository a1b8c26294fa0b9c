use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Amount in minor units (paise, cents).
///
/// The API sends prices either as decimal strings (`"1299.50"`) or as
/// numbers; both are parsed without going through floating point for
/// strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price {
    cents: i64,
}

impl Price {
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Parse a decimal string. More than two fraction digits are truncated.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().replace(',', "");
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest.to_string()),
            None => (false, s),
        };
        let (whole, fraction) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s.as_str(), ""),
        };
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
        let mut fraction: String = fraction.chars().take(2).collect();
        while fraction.len() < 2 {
            fraction.push('0');
        }
        let fraction: i64 = fraction.parse().ok()?;
        let cents = whole.checked_mul(100)?.checked_add(fraction)?;
        Some(Self::from_cents(if negative { -cents } else { cents }))
    }

    pub fn times(&self, quantity: u32) -> Self {
        Self::from_cents(self.cents.saturating_mul(i64::from(quantity)))
    }

    /// `₹1,299.50`
    pub fn format(&self, symbol: &str) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        let whole = (abs / 100).to_string();
        let mut grouped = String::new();
        for (i, c) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        format!("{}{}{}.{:02}", sign, symbol, grouped, abs % 100)
    }
}

impl std::ops::Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price::from_cents(self.cents.saturating_add(rhs.cents))
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::default(), |a, b| a + b)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(""))
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string().replace(',', ""))
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawPrice {
            Text(String),
            Integer(i64),
            Float(f64),
        }

        match RawPrice::deserialize(deserializer)? {
            RawPrice::Text(s) => Price::parse(&s)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid price: {}", s))),
            RawPrice::Integer(n) => n
                .checked_mul(100)
                .map(Price::from_cents)
                .ok_or_else(|| serde::de::Error::custom(format!("price out of range: {}", n))),
            RawPrice::Float(f) => Ok(Price::from_cents((f * 100.0).round() as i64)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Price::parse("1299.50"), Some(Price::from_cents(129_950)));
        assert_eq!(Price::parse("1,299"), Some(Price::from_cents(129_900)));
        assert_eq!(Price::parse("0.5"), Some(Price::from_cents(50)));
        assert_eq!(Price::parse("12.999"), Some(Price::from_cents(1299)));
        assert_eq!(Price::parse("abc"), None);
        assert_eq!(Price::parse(""), None);
    }

    #[test]
    fn test_deserialize_shapes() {
        let prices: Vec<Price> = serde_json::from_str(r#"["49.99", 50, 19.95]"#).unwrap();
        assert_eq!(prices[0].cents(), 4999);
        assert_eq!(prices[1].cents(), 5000);
        assert_eq!(prices[2].cents(), 1995);
    }

    #[test]
    fn test_oversized_amounts_do_not_overflow() {
        assert!(serde_json::from_str::<Price>(&i64::MAX.to_string()).is_err());
        assert_eq!(Price::from_cents(i64::MAX).times(3).cents(), i64::MAX);
        assert_eq!(
            (Price::from_cents(i64::MAX) + Price::from_cents(1)).cents(),
            i64::MAX
        );
    }

    #[test]
    fn test_format() {
        assert_eq!(Price::from_cents(129_950).format("₹"), "₹1,299.50");
        assert_eq!(Price::from_cents(5).format("$"), "$0.05");
        assert_eq!(Price::from_cents(100_000_000).format("$"), "$1,000,000.00");
    }
}
