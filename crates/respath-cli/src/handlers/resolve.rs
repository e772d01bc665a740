//! Resolve command handler.

use anyhow::Result;
use respath_core::Resolution;

use crate::bootstrap::CliContext;

/// Resolve `name` as a file or directory.
pub fn resolve(ctx: &CliContext, name: &str, dir: bool) -> Resolution {
    if dir {
        ctx.manager.resolve_path_for_directory(name)
    } else {
        ctx.manager.resolve(name)
    }
}

/// Render a resolution; unchecked fallbacks are marked.
pub fn render(resolution: &Resolution) -> String {
    match resolution {
        Resolution::Resolved { path, tier, .. } => format!("{} ({tier})", path.display()),
        Resolution::Fallback { path } => format!("{} (fallback)", path.display()),
    }
}

/// Execute the resolve command.
///
/// Exits successfully even for a fallback, matching the library contract.
pub fn execute(ctx: &CliContext, name: &str, dir: bool) -> Result<()> {
    println!("{}", render(&resolve(ctx, name, dir)));
    Ok(())
}
