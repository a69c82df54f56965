//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `json/` - Task dump reading and writing
//! - `csv/` - CSV report writer (`ReportSink`)
//! - `image/` - Image download, cache and box drawing (`ImageAnnotator`)
//! - `scale/` - Labeling API client (`TaskSource`)

pub mod csv;
pub mod image;
pub mod json;
pub mod scale;
