pub mod depth_ops;
pub mod store;

pub use depth_ops::{rescale_palette, scale_to_header_depth, snap_to_depth};
pub use store::{load_path, load_reader, parse_str, save_palette, save_path, save_writer, serialize};
