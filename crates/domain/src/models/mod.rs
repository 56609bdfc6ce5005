//! Domain model definitions.

pub mod asthma_event;
pub mod reading;
pub mod safety_zone;
pub mod zone_overlay;

pub use asthma_event::{AsthmaEvent, AsthmaEventResponse, LogEventRequest};
pub use reading::EnvironmentalReading;
pub use safety_zone::SafetyZone;
pub use zone_overlay::ZoneOverlayLayer;
