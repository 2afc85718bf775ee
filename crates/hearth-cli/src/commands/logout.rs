use hearth_auth::AuthSession;

use crate::cli::GlobalFlags;

/// `hearth logout` — delete the stored session token.
pub fn run(_flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut auth = AuthSession::new();
    auth.sign_out()?;
    println!("Signed out. The portal will show demo data until you sign in again.");
    Ok(())
}
