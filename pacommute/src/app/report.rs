//! human-readable run summaries written to the console.
use super::{PipelineOutputs, WrittenFile};
use crate::{emissions::CountyEmissions, scenario::Scenarios, summary::SummaryStats};
use itertools::Itertools;
use std::io::Write;

/// number of highest-emitting counties listed in the report
const TOP_COUNTIES: usize = 5;

/// formats a number rounded to a whole value with comma thousands separators
pub fn format_thousands(value: f64) -> String {
    let rounded = format!("{value:.0}");
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(d) => ("-", d),
        None => ("", rounded.as_str()),
    };
    let grouped = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| String::from_utf8_lossy(chunk))
        .join(",");
    format!("{sign}{grouped}")
}

pub fn write_run_report<W: Write>(out: &mut W, outputs: &PipelineOutputs) -> std::io::Result<()> {
    write_summary(out, &outputs.summary)?;
    write_emissions_report(out, &outputs.emissions)?;
    write_scenarios(out, &outputs.scenarios)?;

    writeln!(out, "\nPA Metro Comparison:")?;
    for metro in outputs.metros.iter() {
        writeln!(
            out,
            "{}: {:.1} min, {:.2} tons CO2/person",
            metro.metro, metro.avg_commute, metro.co2_per_capita
        )?;
    }

    writeln!(
        out,
        "\nCreated map data for {} counties",
        outputs.map_points.len()
    )?;
    write_generated_files(out, &outputs.written)
}

/// statewide commuter count and mean commute. the mean keeps its shortest
/// round-trip form, so whole minutes print as "30.0".
fn write_summary<W: Write>(out: &mut W, summary: &SummaryStats) -> std::io::Result<()> {
    writeln!(
        out,
        "PA Summary: {} commuters",
        format_thousands(summary.total_commuters as f64)
    )?;
    writeln!(
        out,
        "Average commute: {:?} minutes",
        summary.avg_commute_minutes
    )
}

/// county count, state total, and the highest-emitting counties
pub fn write_emissions_report<W: Write>(
    out: &mut W,
    emissions: &CountyEmissions,
) -> std::io::Result<()> {
    if emissions.is_empty() {
        return writeln!(out, "\nNo county-level data found in the commute table");
    }
    writeln!(out, "\nProcessed {} counties", emissions.records.len())?;
    writeln!(
        out,
        "Total PA CO2: {} tons/year",
        format_thousands(emissions.total_co2_tons())
    )?;
    writeln!(out, "\nTop {TOP_COUNTIES} Emitting Counties:")?;
    for record in emissions.top(TOP_COUNTIES) {
        writeln!(
            out,
            "  {}: {} tons",
            record.county,
            format_thousands(record.annual_co2_tons)
        )?;
    }
    Ok(())
}

fn write_scenarios<W: Write>(out: &mut W, scenarios: &Scenarios) -> std::io::Result<()> {
    writeln!(out, "\nScenario Analysis:")?;
    for scenario in scenarios.values() {
        writeln!(out, "\n{}:", scenario.name)?;
        writeln!(
            out,
            "  Emissions: {} tons CO2",
            format_thousands(scenario.emissions_tons)
        )?;
        if let (Some(reduced), Some(pct)) = (scenario.emissions_reduced, scenario.pct_reduction) {
            writeln!(
                out,
                "  Reduction: {} tons ({pct:.1}%)",
                format_thousands(reduced)
            )?;
        }
    }
    Ok(())
}

fn write_generated_files<W: Write>(out: &mut W, written: &[WrittenFile]) -> std::io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(60))?;
    writeln!(out, "Data processing complete!")?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out, "\nGenerated files:")?;
    for file in written.iter() {
        writeln!(out, "  - {} ({})", file.path.display(), file.description)?;
    }
    Ok(())
}
