//! Per-frame sky controller: tracks the celestial bodies, writes their
//! shader uniforms, and matches the main light to the dominant body.

mod controller;

pub use controller::SkyController;
