use hearth_auth::AuthSession;
use hearth_config::PortalConfig;

use crate::cli::GlobalFlags;

/// `hearth login [--token]` — store a session token handed over by the
/// web sign-in flow. Credential validation stays with the backend.
pub fn run(
    token: Option<&str>,
    config: &PortalConfig,
    _flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let Some(token) = token else {
        println!("Sign in on the web portal, then hand the session token to this CLI:");
        println!();
        println!("    hearth login --token <session-token>");
        if !config.store.is_configured() {
            println!();
            println!(
                "Note: no store is configured yet (HEARTH_STORE__BASE_URL / \
                 HEARTH_STORE__ANON_KEY), so even a signed-in session will show demo data."
            );
        }
        return Ok(());
    };

    let mut auth = AuthSession::new();
    let identity = auth.sign_in_with_token(token)?;
    match identity.email {
        Some(email) => println!("Signed in as {email}."),
        None => println!("Signed in as {}.", identity.user_id),
    }
    Ok(())
}
