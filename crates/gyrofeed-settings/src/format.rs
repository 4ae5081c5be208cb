//! The settings document layout.

use gyrofeed_core::{SensorRecord, ServicePort};

pub const XML_DECLARATION: &str = "<?xml version='1.0' encoding='utf-8' standalone='yes' ?>";
pub const ROOT_ELEMENT: &str = "map";
pub const PORT_ENTRY: &str = "socket_port";

/// Render the complete document for one record.
///
/// Axes are written with six fractional digits and the port as an integer,
/// in the order `x`, `y`, `z`, `socket_port`. There is no newline after the
/// closing `</map>`.
pub fn render_settings(record: &SensorRecord, port: ServicePort) -> String {
    format!(
        "{XML_DECLARATION}\n\
         <{ROOT_ELEMENT}>\n\
         \x20   <float name=\"x\" value=\"{:.6}\" />\n\
         \x20   <float name=\"y\" value=\"{:.6}\" />\n\
         \x20   <float name=\"z\" value=\"{:.6}\" />\n\
         \x20   <int name=\"{PORT_ENTRY}\" value=\"{}\" />\n\
         </{ROOT_ELEMENT}>",
        record.x,
        record.y,
        record.z,
        port.get(),
    )
}
