//! Session commands: login and logout.

use secrecy::SecretString;

use crate::commands::{CliError, boot};

/// Authenticate and open a durable session.
pub async fn login(email: &str, password: String) -> Result<(), CliError> {
    let mut front = boot().await?;

    let logged_in = front
        .authenticate(email, &SecretString::from(password))
        .await?;

    if logged_in {
        // authenticate only returns true with a session in place
        if let Some(session) = front.session() {
            println!("Logged in as {} ({})", session.email, session.access_level);
        }
        Ok(())
    } else {
        Err(CliError::Usage("invalid credentials".to_owned()))
    }
}

/// Close the session. Safe to call when already logged out.
pub async fn logout() -> Result<(), CliError> {
    let mut front = boot().await?;
    front.logout()?;
    println!("Logged out.");
    Ok(())
}
