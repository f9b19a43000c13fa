//! The lexical front end for the Lox language, split into submodules
//! according to their functionality.
//! See the crate-level documentation for further information.

// Shared functionality
pub mod errors;
pub mod types;
mod util;

// The one phase this crate implements
pub mod token;

// Book-conformant output formatting
pub mod std;
