//! Schema, codec and process registry for `apptainer.conf`.
//!
//! This crate describes every directive of the global Apptainer configuration
//! file once (see [`schema::CATALOG`]) and derives the canonical renderer, the
//! tolerant parser and the single-directive editing API from that table.

pub mod choice;
pub mod codec;
pub mod constants;
mod context;
pub mod edit;
pub mod error;
pub mod persistence;
pub mod registry;
pub mod schema;
mod template;
pub mod types;

pub use choice::{Choice, EnableOverlay, InvalidChoice, MemoryFsType, MountDev, RootCapabilities};
pub use codec::{Parsed, parse, render};
pub use edit::{get_directive, reset_directive, set_directive, unset_directive};
pub use error::{Accepted, ConfigFileError, EditError, ParseError, UnknownDirective};
pub use persistence::{config_path, load_file, load_or_default, save_file, write_atomic};
pub use registry::{Registry, substitute_binary_path};
pub use schema::{CATALOG, DefaultValue, Emission, Kind, ListStyle, OptionSpec, lookup};
pub use types::{ApptainerConf, FieldView};
