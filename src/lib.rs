//! Procedural robot-face icons for a browser extension manifest
//!
//! [`icon_gen`] renders and writes the PNG icons, [`draw`] holds the raster
//! primitives it paints with, and [`manifest`] builds the `icons` block for
//! manifest.json.

pub mod draw;
pub mod icon_gen;
pub mod manifest;
