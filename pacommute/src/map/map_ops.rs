use super::{CountyCoordinate, MapPoint};
use crate::emissions::CountyRecord;
use std::collections::HashMap;

/// joins county records with county coordinates by county name, keeping the
/// order of `records`. records without a coordinate are left out.
pub fn join_county_coordinates(
    records: &[CountyRecord],
    coordinates: &[CountyCoordinate],
) -> Vec<MapPoint> {
    let lookup: HashMap<&str, &CountyCoordinate> =
        coordinates.iter().map(|c| (c.county, c)).collect();
    let points: Vec<MapPoint> = records
        .iter()
        .filter_map(|record| {
            lookup.get(record.county.as_str()).map(|coord| MapPoint {
                county: record.county.clone(),
                lat: coord.lat,
                lon: coord.lon,
                co2_tons: record.annual_co2_tons,
                co2_per_capita: record.co2_per_capita_tons,
                mean_commute: record.mean_commute_minutes,
            })
        })
        .collect();
    log::info!(
        "placed {} of {} counties on the map",
        points.len(),
        records.len()
    );
    points
}
