//! Actions that turn lint results into file changes.
//!
//! ## Architecture
//!
//! ```text
//! SourceFile (scanned file)
//!     ↓
//! Action (detect + fix → Operation)
//!     ↓
//! Operation (rewrite of one file)
//!     ↓
//! execute (file modification) / preview (dry-run)
//! ```
//!
//! ## Actions
//!
//! - [`Autocorrect`]: Run the autocorrect loop over files (fix)

mod autocorrect;
mod operation;
mod traits;

pub use autocorrect::Autocorrect;
pub use operation::{Operation, OperationResult};
pub use traits::{Action, ActionStats};
