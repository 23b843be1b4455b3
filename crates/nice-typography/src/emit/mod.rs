//! Presentation: turning a [`ResolvedStyle`](crate::ResolvedStyle) into CSS
//! declarations.
//!
//! The emitter produces a structured [`DeclarationBlock`] rather than text,
//! so it can feed inline styles, generated stylesheets or anything else
//! that accepts property/value pairs.

mod declaration;
mod emitter;

pub use declaration::{Declaration, DeclarationBlock};
pub use emitter::{Emitter, ANTIALIASING, OPTIMIZED_LEGIBILITY};
