//! Quicktools Core - logic behind the browser utilities
//!
//! Each module backs one of the site's single-page tools. They are
//! independent of each other: a page calls into exactly one of them through
//! the wasm bindings, does its one transformation, and renders the result.
//!
//! - [`rotate`] - image rotation geometry and rendering
//! - [`encode`] - flattening rasters to PNG/JPEG downloads
//! - [`pages`] - page-range parsing for the PDF delete/merge tools
//! - [`textcodec`] - Base64 decoding
//! - [`password`] - password generation
//! - [`embed`] - HTML embed snippet generation
//! - [`dns`] - DNS record formatting and batch validation

pub mod dns;
pub mod embed;
pub mod encode;
pub mod pages;
pub mod password;
pub mod raster;
pub mod rotate;
pub mod textcodec;

pub use raster::{ImageDimensions, RasterImage, Rgb, WHITE};
pub use rotate::{rotate_image, rotated_bounds, RotateError};
