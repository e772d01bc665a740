//! Candidates command handler.
//!
//! Lists every path the resolver would try, in order, with its existence
//! status. The floor's plain candidate is the unconditional default.

use anyhow::Result;
use respath_core::Candidate;

use crate::bootstrap::CliContext;

pub fn render(ctx: &CliContext, name: &str, dir: bool) -> String {
    let candidates: Vec<Candidate> = if dir {
        ctx.manager.directory_candidates(name)
    } else {
        ctx.manager.candidates(name)
    };

    candidates
        .iter()
        .map(|c| {
            let mark = if ctx.manager.file_exists(&c.path) { "+" } else { "-" };
            let kind = if c.localized { "locale" } else { "plain" };
            format!("{mark} {:<7} {:<6} {}", c.tier.label(), kind, c.path.display())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Execute the candidates command.
pub fn execute(ctx: &CliContext, name: &str, dir: bool) -> Result<()> {
    println!("{}", render(ctx, name, dir));
    Ok(())
}
