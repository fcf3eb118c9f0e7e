use ratings::config::OutputFormat;
use ratings::error::AppError;
use ratings::review::RatingReport;
use std::io::Write;

pub(crate) fn write_report<W: Write>(
    out: &mut W,
    report: &RatingReport,
    format: OutputFormat,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", report.summary_line())?,
        OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
    }
    Ok(())
}
