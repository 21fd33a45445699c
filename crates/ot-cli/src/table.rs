//! CSV output for interpolation tables.
//!
//! One column per interpolation step, labelled by the percentage of `t`; one
//! row per discretized-PDF index. Every cell is quoted so the tables load
//! cleanly in external plotting tools.

use std::io::Write;

use anyhow::Result;
use csv::{QuoteStyle, WriterBuilder};
use ot_transport::InterpolatedPdf;

/// Column label for an interpolation parameter, e.g. `25%`.
pub fn percent_label(t: f64) -> String {
    format!("{}%", (t * 100.0).round() as i64)
}

/// Write one interpolation family as a CSV table.
pub fn write_interpolation_csv<W: Write>(writer: W, pdfs: &[InterpolatedPdf]) -> Result<()> {
    let mut wtr = WriterBuilder::new().quote_style(QuoteStyle::Always).from_writer(writer);

    wtr.write_record(pdfs.iter().map(|p| percent_label(p.t)))?;
    let rows = pdfs.first().map(|p| p.values.len()).unwrap_or(0);
    for row in 0..rows {
        wtr.write_record(pdfs.iter().map(|p| p.values[row].to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_labels() {
        assert_eq!(percent_label(0.0), "0%");
        assert_eq!(percent_label(0.25), "25%");
        assert_eq!(percent_label(1.0), "100%");
    }

    #[test]
    fn test_csv_layout() {
        let pdfs = vec![
            InterpolatedPdf { t: 0.0, values: vec![0.5, 0.5] },
            InterpolatedPdf { t: 0.5, values: vec![0.25, 0.75] },
            InterpolatedPdf { t: 1.0, values: vec![0.0, 1.0] },
        ];
        let mut buf = Vec::new();
        write_interpolation_csv(&mut buf, &pdfs).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("\"0%\",\"50%\",\"100%\""));
        assert_eq!(lines.next(), Some("\"0.5\",\"0.25\",\"0\""));
        assert_eq!(lines.next(), Some("\"0.5\",\"0.75\",\"1\""));
        assert_eq!(lines.next(), None);
    }
}
