use crate::core::null_object::wrap;
use crate::domain::model::{Report, ReportFormat};
use crate::utils::error::Result;
use std::fs::File;
use std::io::Write;

/// Writes the report to `path`, or into a [`NullObject`] when there is no path.
///
/// [`NullObject`]: crate::core::null_object::NullObject
pub fn save_report(report: &Report, format: ReportFormat, path: Option<&str>) -> Result<()> {
    let file = path.map(File::create).transpose()?;
    let mut out = wrap(file);
    write_report(report, format, &mut out)
}

pub fn write_report<W: Write>(report: &Report, format: ReportFormat, writer: &mut W) -> Result<()> {
    match format {
        ReportFormat::Text => write_text(report, writer)?,
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, report)?;
            writeln!(writer)?;
        }
    }

    writer.flush()?;
    Ok(())
}

fn write_text<W: Write>(report: &Report, writer: &mut W) -> Result<()> {
    writeln!(
        writer,
        "{} checks, {} passed, {} failed",
        report.total(),
        report.passed.len(),
        report.failed.len()
    )?;

    for name in &report.passed {
        writeln!(writer, "PASS {}", name)?;
    }

    for failure in &report.failed {
        writeln!(writer, "FAIL {}: {}", failure.name, failure.message)?;
    }

    Ok(())
}
