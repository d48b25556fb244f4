// Engine module - scope resolution and rsync argument planning.
// This layer sits between the configuration model (types) and CLI
// presentation; everything here is a pure function of its inputs.

pub mod error;
pub mod resolver;
pub mod rsync;

pub use error::{Error, Result};
pub use resolver::{ResolveRequest, resolve_for_endpoint, resolve_for_link};
pub use rsync::{SyncSpec, append_scope, build_args, build_preview_apply};
