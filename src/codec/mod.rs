//! JASC-PAL codec.
//!
//! A standard file is a three-line header followed by one color per line:
//!
//! ```text
//! JASC-PAL
//! 0100
//! 16
//! 255 0 0
//! ...
//! ```
//!
//! The extended dialect adds three header lines (transparency index or -1,
//! bits per subpixel, `ALPHA` or `NO_ALPHA`), allows any positive count and
//! carries a fourth component per line when alpha is used.

mod parser;
mod writer;

pub use parser::parse;
pub use writer::{render, serialize};
