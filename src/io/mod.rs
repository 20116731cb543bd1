//! File I/O for ETTV models and settings.
//!
//! Models are written as JSON snapshots (see [`crate::ettv::export`]) and
//! calculation settings as JSON config files.

pub mod export;

pub use export::{
    export_file_name, from_export_string, read_config, read_export, to_export_string,
    write_config, write_export,
};
