//! Text line codec: one record per line, `<x>,<y>,<z>\n`.
//!
//! Numbers use `f32`'s `Display`, which is locale independent and the
//! shortest form that parses back to the same value.

use gyrofeed_core::SensorRecord;
use gyrofeed_errors::ValidationError;

pub const FIELD_SEPARATOR: char = ',';
pub const LINE_TERMINATOR: char = '\n';

/// Render a record as a single protocol line, terminator included.
pub fn encode_line(record: &SensorRecord) -> String {
    format!(
        "{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}{LINE_TERMINATOR}",
        record.x, record.y, record.z
    )
}

/// Parse one line the way a receiver does: exactly three comma separated
/// floats. A trailing `\n` or `\r\n` is accepted.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidFormat`] for a wrong field count or an
/// unparsable number.
pub fn decode_line(line: &str) -> Result<SensorRecord, ValidationError> {
    let body = line
        .strip_suffix(LINE_TERMINATOR)
        .map_or(line, |rest| rest.strip_suffix('\r').unwrap_or(rest));

    let mut fields = body.split(FIELD_SEPARATOR);
    let mut axes = [0.0_f32; 3];
    for (slot, name) in axes.iter_mut().zip(["x", "y", "z"]) {
        let field = fields.next().ok_or_else(|| {
            ValidationError::invalid_format("line", format!("missing {name} in '{body}'"))
        })?;
        *slot = field.trim().parse().map_err(|e| {
            ValidationError::invalid_format(name, format!("'{field}': {e}"))
        })?;
    }
    if fields.next().is_some() {
        return Err(ValidationError::invalid_format(
            "line",
            format!("expected 3 fields in '{body}'"),
        ));
    }
    Ok(SensorRecord::from(axes))
}
