//! Core analysis engine.
//!
//! ## Module Structure
//!
//! - `comment`: Header comment records and classification
//! - `directive`: Magic comment recognition
//! - `source`: Header scanner producing [`SourceFile`]
//! - `file_scanner`: Ruby file discovery
//! - `context`: [`CheckContext`], loads config and files and runs the rules

pub mod comment;
pub mod context;
pub mod directive;
pub mod file_scanner;
pub mod source;

pub use comment::{Comment, CommentKind};
pub use context::CheckContext;
pub use directive::DirectiveSet;
pub use source::SourceFile;
