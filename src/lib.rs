//! fourcut composites webcam snapshots into a bordered, styled photo strip.
//!
//! The booth UI around this crate captures stills, lets the user pick
//! exactly four of them, and asks for a single raster to print or download.
//! fourcut owns everything between those two moments:
//!
//! 1. **Load**: [`load_all`] resolves each opaque [`ImageSource`] (file,
//!    `data:` URL, raw bytes) into a decoded [`Bitmap`] concurrently with
//!    settle-all semantics — one bad image never sinks its siblings.
//! 2. **Lay out**: [`StripLayout::solve`] turns an [`OutputSpec`] into
//!    exact slot/border/baseline geometry, including aspect-preserving
//!    letterbox placement ([`fit_rect`]).
//! 3. **Compose**: [`Compositor::compose`] draws background, border,
//!    header, the four slots (rounded-corner clipped photos on white
//!    frames) and footer sequentially onto one CPU surface.
//! 4. **Encode**: [`encode_png`] hands lossless bytes to the caller's
//!    print dialog or file sink.
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: a composite is bit-for-bit reproducible for fixed
//!   inputs (bitmaps, style, spec, font bytes).
//! - **No IO in the compositor**: loading is front-loaded by the loader;
//!   drawing is pure and synchronous.
//! - **Graceful slot degradation**: a per-image decode or paint failure
//!   renders as an empty white slot and is surfaced in
//!   [`Composite::skipped`], never as a fatal error.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod composite;
mod foundation;
mod layout;
mod style;

pub use assets::decode::{Bitmap, decode_image};
pub use assets::loader::{LoadedImage, load_all};
pub use assets::source::ImageSource;
pub use composite::compositor::{Composite, Compositor, StripRgba};
pub use composite::encode::{download_file_name, encode_png};
pub use composite::spec::{OutputSpec, SLOT_COUNT, Selection};
pub use composite::text::{ShapedText, TextBrushRgba8, TextLayoutEngine};
pub use foundation::color::Color;
pub use foundation::error::{FourcutError, FourcutResult};
pub use layout::strip::{SlotLayout, StripLayout, fit_rect};
pub use style::catalog::{FrameCatalog, FrameStyle};
