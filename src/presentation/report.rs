// Console report for a company and its value chart
use crate::domain::chart::{AsciiChart, sample_labels};
use crate::domain::company::Company;
use crate::domain::history::RenderableSeries;
use std::io::{self, Write};

pub fn write_company<W: Write>(out: &mut W, company: &Company) -> io::Result<()> {
    writeln!(out, "Company: {}", company.name)?;
    writeln!(out, "Rating: {}", company.rating)?;
    writeln!(out, "Value: {:.2}", company.value)?;
    writeln!(out, "Rank: {}", company.rank)?;
    writeln!(out)
}

/// Chart, then a "Dates:" line and the sampled `[index] label` pairs.
/// Writes nothing for an empty series.
pub fn write_value_history<W: Write>(
    out: &mut W,
    series: &RenderableSeries,
    chart: &AsciiChart,
    max_labels: usize,
) -> io::Result<()> {
    if series.is_empty() {
        return Ok(());
    }

    writeln!(out, "{}", chart.plot(&series.values))?;
    writeln!(out, "Dates:")?;

    let labels = sample_labels(&series.dates, max_labels)
        .iter()
        .map(|s| format!("[{}] {}", s.index, s.label))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", labels)
}
