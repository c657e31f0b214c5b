//! Command-line syntax for measurements: `VALUE[,STAT[,SYST]]`.

use ve_value::ValueErrorF64;

/// Parse `VALUE[,STAT[,SYST]]`; missing errors are zero.
///
/// Used as a clap `value_parser`, hence the `String` error.
pub fn parse_measurement(s: &str) -> Result<ValueErrorF64, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() > 3 {
        return Err(format!("expected VALUE[,STAT[,SYST]], got {} fields", parts.len()));
    }

    let mut fields = [0.0_f64; 3];
    for (slot, part) in fields.iter_mut().zip(&parts) {
        *slot = part.parse().map_err(|e| format!("invalid number '{part}': {e}"))?;
    }

    let [value, stat, syst] = fields;
    ValueErrorF64::try_new(value, stat, syst).map_err(|e| e.to_string())
}
