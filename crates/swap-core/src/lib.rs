//! Validation and bidirectional text serialization of SWAP model input
//! files.

pub mod codec;
pub mod document;
pub mod domain;
pub mod model;
pub mod parser;
pub mod render;
pub mod result;
pub mod rules;
pub mod schema;
pub mod section;

pub use document::{ConfigDocument, DocumentError};
pub use domain::{BlobKey, BlobRole, SectionKind, SwapError, SwapResult, Table, Value};
pub use model::{SatelliteFile, SwapModel};
pub use parser::{parse, parse_blob};
pub use render::{render, RenderedFiles};
pub use section::{Section, SectionBuilder};
