/// a representative point for a county, in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountyCoordinate {
    pub county: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl CountyCoordinate {
    pub const fn new(county: &'static str, lat: f64, lon: f64) -> CountyCoordinate {
        CountyCoordinate { county, lat, lon }
    }
}

/// coordinates for the most populous Pennsylvania counties. counties missing
/// from this table do not appear on the map.
pub const PA_COUNTY_COORDINATES: [CountyCoordinate; 15] = [
    CountyCoordinate::new("Allegheny", 40.4406, -79.9959),
    CountyCoordinate::new("Philadelphia", 40.0094, -75.1333),
    CountyCoordinate::new("Montgomery", 40.1688, -75.3560),
    CountyCoordinate::new("Bucks", 40.3154, -75.1085),
    CountyCoordinate::new("Delaware", 39.9167, -75.4167),
    CountyCoordinate::new("Chester", 39.9857, -75.7499),
    CountyCoordinate::new("Lancaster", 40.0379, -76.3055),
    CountyCoordinate::new("York", 39.9626, -76.7277),
    CountyCoordinate::new("Berks", 40.4167, -75.9269),
    CountyCoordinate::new("Dauphin", 40.3991, -76.7897),
    CountyCoordinate::new("Westmoreland", 40.3097, -79.5181),
    CountyCoordinate::new("Erie", 42.1292, -80.0851),
    CountyCoordinate::new("Lehigh", 40.6023, -75.5964),
    CountyCoordinate::new("Northampton", 40.7533, -75.3082),
    CountyCoordinate::new("Luzerne", 41.1843, -75.8813),
];
