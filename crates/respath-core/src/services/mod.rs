//! Resolution services.
//!
//! - [`PathResolver`] probes candidates in plan order
//! - [`discover_locales`] validates locale packs once at startup
//! - [`ResourceManager`] ties both to the injected ports

mod locale_discovery;
mod path_resolver;
mod resource_manager;

pub use locale_discovery::discover_locales;
pub use path_resolver::PathResolver;
pub use resource_manager::{ResourceDeps, ResourceManager};
