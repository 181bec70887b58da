use super::CountyRecord;

/// result of the county emissions pass, with counts of rows that did not
/// produce a record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CountyEmissions {
    /// county records, sorted by descending annual CO2
    pub records: Vec<CountyRecord>,
    /// rows whose geography is not a county
    pub non_county_rows: usize,
    /// county rows dropped because a required column was missing
    pub malformed_rows: usize,
}

impl CountyEmissions {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_co2_tons(&self) -> f64 {
        self.records.iter().map(|r| r.annual_co2_tons).sum()
    }

    /// the `n` highest-emitting counties
    pub fn top(&self, n: usize) -> &[CountyRecord] {
        &self.records[..n.min(self.records.len())]
    }
}
