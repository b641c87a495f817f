pub mod presets;
pub mod projection;
