/// the source tables read by a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceDataset {
    /// ACS S0802 commuting characteristics
    Commute,
    /// HUD Location Affordability Index
    AffordabilityIndex,
    /// HUD Fair Market Rents
    FairMarketRents,
    /// BLS occupational wages for metro areas
    MetroWages,
    /// BLS occupational wages for non-metro areas
    NonMetroWages,
}

impl SourceDataset {
    pub const ALL: [SourceDataset; 5] = [
        SourceDataset::Commute,
        SourceDataset::AffordabilityIndex,
        SourceDataset::FairMarketRents,
        SourceDataset::MetroWages,
        SourceDataset::NonMetroWages,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            SourceDataset::Commute => "commute data",
            SourceDataset::AffordabilityIndex => "affordability index",
            SourceDataset::FairMarketRents => "fair market rents",
            SourceDataset::MetroWages => "metro wages",
            SourceDataset::NonMetroWages => "non-metro wages",
        }
    }
}
