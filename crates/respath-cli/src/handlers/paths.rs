//! Paths command handler.
//!
//! Displays the search plan for diagnostics and debugging.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Render the plan in `key = value` format, preceded by the platform,
/// current locale and the layout names used to build candidates.
pub fn render(ctx: &CliContext) -> String {
    format!(
        "platform = {}\nlocale = {}\nlang_dir = {}\nmarker = {}\n{}",
        ctx.platform,
        ctx.manager.current_locale(),
        ctx.layout.lang_dir_name(),
        ctx.layout.marker_file,
        ctx.manager.plan()
    )
}

/// Execute the paths command.
pub fn execute(ctx: &CliContext) -> Result<()> {
    println!("{}", render(ctx));
    Ok(())
}
