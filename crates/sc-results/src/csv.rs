//! CSV sink for voltage time series.

use crate::{ResultsError, ResultsResult};
use sc_core::Sample;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

pub const CSV_HEADER: [&str; 2] = ["t_s", "volts"];

pub const DEFAULT_OUTPUT_PATH: &str = "./log.csv";

/// Shortest round-trip form that always keeps a decimal point (`55.0`, not `55`).
///
/// Magnitudes below 1e-4 or at/above 1e16 switch to exponent form without a
/// sign or zero padding on the exponent (`1e-5`, `1e16`), not `1e-05`/`1e+16`.
/// Both parse back to the same value.
pub fn format_value(v: f64) -> String {
    format!("{v:?}")
}

/// Write the header and one row per sample, replacing any existing file.
pub fn write_csv(path: &Path, samples: &[Sample]) -> ResultsResult<()> {
    let io_err = |source| ResultsError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "{}", CSV_HEADER.join(",")).map_err(io_err)?;
    for s in samples {
        writeln!(out, "{},{}", format_value(s.t_s), format_value(s.volts)).map_err(io_err)?;
    }
    out.flush().map_err(io_err)?;

    debug!(path = %path.display(), rows = samples.len(), "wrote csv");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_keep_decimal_point() {
        assert_eq!(format_value(55.0), "55.0");
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(-895.0), "-895.0");
        assert_eq!(format_value(1.5), "1.5");
    }

    #[test]
    fn extreme_magnitudes_use_bare_exponent() {
        assert_eq!(format_value(1e-5), "1e-5");
        assert_eq!(format_value(1e16), "1e16");
        assert_eq!(format_value(0.0001), "0.0001");
        assert_eq!("1e-5".parse::<f64>().unwrap(), 1e-5);
    }
}
