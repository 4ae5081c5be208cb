//! Read a settings file back into a record and port.
//!
//! The root element must be `<map>`. The `float` entries `x`, `y`, `z` and the
//! `int` entry `socket_port` are required; any other entry is ignored since a
//! shared-preferences file may hold unrelated keys.

use std::fs;
use std::path::Path;

use gyrofeed_core::{SensorRecord, ServicePort};
use gyrofeed_errors::{FeedError, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;

use crate::format::{PORT_ENTRY, ROOT_ELEMENT};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoredSettings {
    pub record: SensorRecord,
    pub port: ServicePort,
}

/// Read and parse the settings file at `path`.
///
/// # Errors
///
/// Returns `SettingsUnreadable` if the file cannot be read and
/// `MalformedSettings` if its content is not a valid settings document.
pub fn read_settings(path: &Path) -> Result<StoredSettings> {
    let raw = fs::read_to_string(path).map_err(|source| FeedError::SettingsUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = parse_settings(&raw).map_err(|reason| FeedError::malformed(path, reason))?;
    debug!(path = ?path, port = settings.port.get(), "settings read");
    Ok(settings)
}

#[derive(Default)]
struct Entries {
    x: Option<f32>,
    y: Option<f32>,
    z: Option<f32>,
    port: Option<ServicePort>,
}

/// Parse a settings document held in memory.
///
/// # Errors
///
/// Returns a description of the first problem found.
pub fn parse_settings(raw: &str) -> std::result::Result<StoredSettings, String> {
    let mut reader = Reader::from_str(raw);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();
    let mut entries = Entries::default();
    let mut depth = 0usize;
    let mut saw_root = false;

    loop {
        match reader
            .read_event_into(&mut buf)
            .map_err(|e| format!("invalid XML: {e}"))?
        {
            Event::Start(element) => {
                depth += 1;
                visit(&element, depth, &mut saw_root, &mut entries)?;
            }
            Event::Empty(element) => {
                visit(&element, depth + 1, &mut saw_root, &mut entries)?;
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !saw_root {
        return Err(format!("missing <{ROOT_ELEMENT}> root element"));
    }
    let record = SensorRecord::new(
        entries.x.ok_or("missing float entry 'x'")?,
        entries.y.ok_or("missing float entry 'y'")?,
        entries.z.ok_or("missing float entry 'z'")?,
    );
    let port = entries
        .port
        .ok_or_else(|| format!("missing int entry '{PORT_ENTRY}'"))?;
    Ok(StoredSettings { record, port })
}

fn visit(
    element: &BytesStart<'_>,
    depth: usize,
    saw_root: &mut bool,
    entries: &mut Entries,
) -> std::result::Result<(), String> {
    let tag = element.name();
    let tag = tag.as_ref();

    if depth == 1 {
        if tag != ROOT_ELEMENT.as_bytes() {
            return Err(format!(
                "root element is <{}>, expected <{ROOT_ELEMENT}>",
                String::from_utf8_lossy(tag)
            ));
        }
        *saw_root = true;
        return Ok(());
    }
    if depth != 2 || !matches!(tag, b"float" | b"int") {
        return Ok(());
    }

    let (name, value) = entry_attributes(element)?;
    let (Some(name), Some(value)) = (name, value) else {
        return Ok(());
    };

    match (tag, name.as_str()) {
        (b"float", axis @ ("x" | "y" | "z")) => {
            let parsed = value
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| format!("entry '{axis}' has invalid float value '{value}'"))?;
            match axis {
                "x" => entries.x = Some(parsed),
                "y" => entries.y = Some(parsed),
                _ => entries.z = Some(parsed),
            }
        }
        (b"int", PORT_ENTRY) => {
            let port = value
                .parse::<ServicePort>()
                .map_err(|e| format!("entry '{PORT_ENTRY}': {e}"))?;
            entries.port = Some(port);
        }
        _ => {}
    }
    Ok(())
}

fn entry_attributes(
    element: &BytesStart<'_>,
) -> std::result::Result<(Option<String>, Option<String>), String> {
    let mut name = None;
    let mut value = None;

    for attr in element.attributes().with_checks(false) {
        let attr = attr.map_err(|e| format!("invalid attribute: {e}"))?;
        let text = std::str::from_utf8(attr.value.as_ref())
            .map_err(|e| format!("attribute is not UTF-8: {e}"))?
            .trim()
            .to_string();
        match attr.key.as_ref() {
            b"name" => name = Some(text),
            b"value" => value = Some(text),
            _ => {}
        }
    }
    Ok((name, value))
}
