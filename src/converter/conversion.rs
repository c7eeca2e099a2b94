use super::{Trend, format_rate};
use crate::marketdata::PriceTable;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub from_symbol: String,
    pub to_symbol: String,
    pub amount: f64,
    pub amount_in_usd: f64,
    pub converted: f64,
    pub rate: f64,
    /// change_24h(to) - change_24h(from), in percent.
    pub change: f64,
}

impl Conversion {
    /// `None` when either asset has no entry or `to` has a zero price; the
    /// caller keeps whatever it displayed before.
    pub fn compute(table: &PriceTable, from: &str, to: &str, amount: f64) -> Option<Self> {
        let from_entry = table.get(from)?;
        let to_entry = table.get(to)?;
        if to_entry.price == 0.0 {
            return None;
        }

        let amount_in_usd = amount * from_entry.price;
        let converted = amount_in_usd / to_entry.price;
        let rate = from_entry.price / to_entry.price;

        Some(Self {
            from_symbol: from_entry.symbol.clone(),
            to_symbol: to_entry.symbol.clone(),
            amount,
            amount_in_usd,
            converted,
            rate,
            change: to_entry.change_24h - from_entry.change_24h,
        })
    }

    pub fn converted_text(&self) -> String {
        format_rate(self.converted)
    }

    pub fn rate_text(&self) -> String {
        format!(
            "1 {} = {} {}",
            self.from_symbol,
            format_rate(self.rate),
            self.to_symbol
        )
    }

    pub fn change_trend(&self) -> Trend {
        Trend::of(self.change)
    }

    pub fn change_text(&self) -> String {
        format!("{:.2}%", self.change.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketdata::make_table_;
    use assert_float_eq::*;

    #[test]
    fn convert_a_to_b() {
        let table = make_table_(&[("a", 100.0, 1.0, "A"), ("b", 50.0, 3.5, "B")]);
        let conversion = Conversion::compute(&table, "a", "b", 10.0).unwrap();
        assert_float_absolute_eq!(conversion.amount_in_usd, 1000.0, 1e-9);
        assert_float_absolute_eq!(conversion.converted, 20.0, 1e-9);
        assert_eq!(conversion.converted_text(), "20.00000000");
        assert_eq!(conversion.rate_text(), "1 A = 2.00000000 B");
        assert_float_absolute_eq!(conversion.change, 2.5, 1e-9);
        assert_eq!(conversion.change_trend(), Trend::Up);
        assert_eq!(conversion.change_text(), "2.50%");
    }

    #[test]
    fn negative_change() {
        let table = make_table_(&[("a", 100.0, 4.0, "A"), ("b", 50.0, -1.25, "B")]);
        let conversion = Conversion::compute(&table, "a", "b", 1.0).unwrap();
        assert_float_absolute_eq!(conversion.change, -5.25, 1e-9);
        assert_eq!(conversion.change_trend(), Trend::Down);
        assert_eq!(conversion.change_text(), "5.25%");
    }

    #[test]
    fn convert_to_itself() {
        let table = make_table_(&[("a", 61234.5678, 2.0, "A")]);
        for amount in [0.0, 1.0, 0.12345678, 42.5, 1e6] {
            let conversion = Conversion::compute(&table, "a", "a", amount).unwrap();
            assert_float_absolute_eq!(conversion.converted, amount, 1e-6);
            assert_eq!(conversion.converted_text(), format_rate(amount));
            assert_eq!(conversion.rate_text(), "1 A = 1.00000000 A");
            assert_eq!(conversion.change_trend(), Trend::Up);
        }
    }

    #[test]
    fn round_trip() {
        let table = make_table_(&[("a", 61234.5678, 2.0, "A"), ("b", 0.5123, -1.0, "B")]);
        for amount in [0.0, 1.0, 3.75, 1234.5] {
            let forward = Conversion::compute(&table, "a", "b", amount).unwrap();
            let back = Conversion::compute(&table, "b", "a", forward.converted).unwrap();
            assert_float_absolute_eq!(back.converted, amount, 1e-8);
        }
    }

    #[test]
    fn formula() {
        let table = make_table_(&[("a", 3.0, 0.0, "A"), ("b", 7.0, 0.0, "B")]);
        for amount in [0.0, 0.5, 1.0, 100.0] {
            let conversion = Conversion::compute(&table, "a", "b", amount).unwrap();
            assert_eq!(conversion.converted_text(), format!("{:.8}", amount * 3.0 / 7.0));
        }
    }

    #[test]
    fn missing_or_zero() {
        let table = make_table_(&[("a", 100.0, 0.0, "A"), ("z", 0.0, 0.0, "Z")]);
        assert!(Conversion::compute(&table, "a", "missing", 1.0).is_none());
        assert!(Conversion::compute(&table, "missing", "a", 1.0).is_none());
        assert!(Conversion::compute(&table, "a", "z", 1.0).is_none());

        let conversion = Conversion::compute(&table, "z", "a", 1.0).unwrap();
        assert_eq!(conversion.converted_text(), "0.00000000");
    }
}
