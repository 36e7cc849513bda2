// Fetch command driver
use crate::application::company_service::CompanyService;
use crate::domain::chart::{AsciiChart, DEFAULT_CAPTION, DEFAULT_HEIGHT};
use crate::error::FetchError;
use crate::presentation::cli::Cli;
use crate::presentation::report::{write_company, write_value_history};
use std::io::Write;

/// Run the command, printing the report to `out`. Each failure is printed as
/// a single line. With `--value` the history step runs even when the company
/// step failed; the first failure is returned.
pub async fn execute<W: Write>(
    cli: &Cli,
    service: &CompanyService,
    out: &mut W,
) -> Result<(), FetchError> {
    let Some(query) = cli.company_query() else {
        return Err(report(out, FetchError::MissingFlags));
    };

    let company = match service.company(&query).await {
        Ok(company) => write_company(out, &company).map_err(FetchError::from),
        Err(err) => Err(err),
    }
    .map_err(|err| report(out, err));

    if !cli.value {
        return company;
    }

    let history = match service.value_history(&query).await {
        Ok(series) => write_value_history(
            out,
            &series,
            &AsciiChart::new(DEFAULT_HEIGHT, DEFAULT_CAPTION),
            service.history_settings().max_labels,
        )
        .map_err(FetchError::from),
        Err(err) => Err(err),
    }
    .map_err(|err| report(out, err));

    company.and(history)
}

/// Print `err` as one line and hand it back. A failed write is only logged.
fn report<W: Write>(out: &mut W, err: FetchError) -> FetchError {
    tracing::debug!(kind = ?err.kind(), "fetch failed: {:?}", err);
    if let Err(write_err) = writeln!(out, "{}", err) {
        tracing::warn!("Could not print error: {}", write_err);
    }
    err
}
