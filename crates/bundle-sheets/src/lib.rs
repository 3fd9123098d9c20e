//! Generated front-matter pages for appendix bundles
//!
//! Renders table-of-contents pages and per-appendix cover sheets as
//! standalone PDF byte buffers. The bundle assembler parses these back
//! and places them alongside the source pages, so nothing here carries
//! a page-number stamp: numbering is a later, uniform pass.

pub mod cover;
pub mod toc;
mod draw;
mod numbering;
mod options;

pub use cover::{CoverSheet, render_cover};
pub use numbering::NumberingStyle;
pub use options::{CoverStyle, SheetOptions};
pub use toc::{TocEntry, render_toc};
