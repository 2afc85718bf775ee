use serde_json::json;

use hearth_auth::token_store;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output;

/// `hearth whoami` — show the current session and active data source.
pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let source = if ctx.demo { "demo" } else { "live" };

    if flags.format == OutputFormat::Json {
        let rendered = output::render_json(&json!({
            "identity": ctx.identity,
            "data_source": source,
            "store_configured": ctx.config.store.is_configured(),
            "token_source": token_store::token_source(),
        }))?;
        println!("{rendered}");
        return Ok(());
    }

    match &ctx.identity {
        Some(identity) => {
            match &identity.email {
                Some(email) => println!("Signed in as {email} ({})", identity.user_id),
                None => println!("Signed in as {}", identity.user_id),
            }
            if let Some(tier) = token_store::token_source() {
                println!("Session token from: {tier}");
            }
        }
        None => println!("Not signed in"),
    }
    println!("Data source: {source}");
    if !ctx.config.store.is_configured() {
        println!("Store: not configured (HEARTH_STORE__BASE_URL / HEARTH_STORE__ANON_KEY)");
    }
    Ok(())
}
