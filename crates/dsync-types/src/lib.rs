pub mod endpoint;
pub mod error;
pub mod link;
pub mod path;
pub mod scope;

pub use endpoint::{Endpoint, EndpointKind};
pub use error::{Error, Result};
pub use link::Link;
pub use path::{clean_abs, ensure_trailing_slash, relative_to};
pub use scope::{Notice, NoticeLevel, Scope, ScopeResolution, ScopeSource};
