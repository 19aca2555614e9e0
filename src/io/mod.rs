//! I/O layer: input discovery over files and directories, decoding through the
//! `image` codecs, and `writers` for the PNG output.
pub mod discovery;
pub use discovery::{Discovery, discover_inputs, output_path_for};

pub mod reader;
pub use reader::load_rgba_image;

pub mod writers;
