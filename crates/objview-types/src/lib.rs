pub mod error;
pub mod preview;

pub use error::{Error, Result};
pub use preview::{
    AccessKind, EntryPreview, Mode, Preview, PreviewKind, PreviewSubtype, PropertyPreview,
};
