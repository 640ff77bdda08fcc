//! Tab-separated report emission.

use std::io::Write;

use crate::error::BenchResult;

/// Sink accepting one header and one row per benchmarked size.
pub trait ReportSink {
    /// Write the header line naming the measured series
    fn write_header(&mut self, labels: &[&str]) -> BenchResult<()>;

    /// Write one row: the corpus size followed by microsecond timings
    fn write_row(&mut self, size: usize, timings: &[u128]) -> BenchResult<()>;
}

/// Tab-separated report over any [`Write`] target.
///
/// Format: `n<TAB>label...<NEWLINE>` header, then
/// `size<TAB>t1<TAB>...<TAB>t6<NEWLINE>` per row, timings in microseconds.
#[derive(Debug)]
pub struct TsvReport<W: Write> {
    out: W,
}

impl<W: Write> TsvReport<W> {
    /// Create a report writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Flush and return the underlying writer
    pub fn into_inner(mut self) -> BenchResult<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> ReportSink for TsvReport<W> {
    fn write_header(&mut self, labels: &[&str]) -> BenchResult<()> {
        writeln!(self.out, "n\t{}", labels.join("\t"))?;
        Ok(())
    }

    fn write_row(&mut self, size: usize, timings: &[u128]) -> BenchResult<()> {
        write!(self.out, "{}", size)?;
        for timing in timings {
            write!(self.out, "\t{}", timing)?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_row_layout() {
        let mut report = TsvReport::new(Vec::new());
        report.write_header(&["A", "B", "C"]).unwrap();
        report.write_row(500, &[1, 2, 3]).unwrap();

        let written = String::from_utf8(report.into_inner().unwrap()).unwrap();
        assert_eq!(written, "n\tA\tB\tC\n500\t1\t2\t3\n");
    }

    #[test]
    fn test_row_field_count() {
        let mut report = TsvReport::new(Vec::new());
        report.write_row(600, &[10, 20, 30, 40, 50, 60]).unwrap();

        let written = String::from_utf8(report.into_inner().unwrap()).unwrap();
        let fields: Vec<&str> = written.trim_end().split('\t').collect();
        assert_eq!(fields.len(), 7);
        assert_eq!(fields[0], "600");
        assert_eq!(fields[6], "60");
    }
}
