//! The transparent overlay window and its render surface.

pub mod surface;
pub mod transparency;
pub mod window;

pub use surface::DotSurface;
