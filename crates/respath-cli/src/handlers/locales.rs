//! Locales command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Render discovered locales, one per line or as a JSON array.
pub fn render(ctx: &CliContext, json: bool) -> Result<String> {
    let locales = ctx.manager.discovered_locales();
    if json {
        return Ok(serde_json::to_string(locales)?);
    }

    let current = ctx.manager.current_locale();
    let lines: Vec<String> = locales
        .iter()
        .map(|locale| {
            if *locale == current {
                format!("{locale} *")
            } else {
                locale.to_string()
            }
        })
        .collect();
    Ok(lines.join("\n"))
}

/// Execute the locales command.
pub fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    println!("{}", render(ctx, json)?);
    Ok(())
}
