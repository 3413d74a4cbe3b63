use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Search parameters for the third-party booking search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaySearchParams {
    /// Area to search in
    pub location: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u32,
    pub children: u32,
}

impl StaySearchParams {
    /// Two adults, no children
    pub fn new(location: impl Into<String>, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            location: location.into(),
            check_in,
            check_out,
            adults: 2,
            children: 0,
        }
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nights_spans_the_stay() {
        let params = StaySearchParams::new(
            "Sifnos",
            NaiveDate::from_ymd_opt(2026, 7, 10).unwrap(),
            NaiveDate::from_ymd_opt(2026, 7, 17).unwrap(),
        );
        assert_eq!(params.nights(), 7);
        assert_eq!(params.adults, 2);
        assert_eq!(params.children, 0);
    }
}
