use crate::models::Record;

/// Largest and smallest signed amount over a set of records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountRange {
    pub max: f64,
    pub min: f64
}

impl AmountRange {
    pub fn new(amount: f64) -> Self {
        Self { max: amount, min: amount }
    }

    pub fn include(&mut self, amount: f64) {
        self.max = self.max.max(amount);
        self.min = self.min.min(amount);
    }
}

/// Per-user statistics, as printed next to the record table.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UserSummary {
    pub record_count: usize,
    /// `None` when the user only has autopay changes.
    pub amounts: Option<AmountRange>
}

impl UserSummary {
    pub fn observe(&mut self, record: &Record) {
        self.record_count += 1;

        if let Some(amount) = record.amount() {
            match self.amounts.as_mut() {
                Some(range) => range.include(amount),
                None => self.amounts = Some(AmountRange::new(amount))
            }
        }
    }

    pub fn max_amount(&self) -> Option<f64> {
        self.amounts.map(|range| range.max)
    }

    pub fn min_amount(&self) -> Option<f64> {
        self.amounts.map(|range| range.min)
    }
}
