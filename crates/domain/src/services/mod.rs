//! Pure domain services.

pub mod classifier;
pub mod zone_renderer;

pub use classifier::{classify, risk_score};
pub use zone_renderer::render_zone;
