//! Auth commands

use storefront::{Client, SignInRequest};

use crate::{config::Config, AuthCommands};

pub async fn handle(action: AuthCommands, client: &Client, profile: Option<&str>) -> anyhow::Result<()> {
    match action {
        AuthCommands::SignIn { email, password } => {
            let auth = client
                .auth()
                .sign_in(&SignInRequest::new(email, password))
                .await?;

            let token = auth.access_token.clone();
            Config::update(profile, |config| {
                config.access_token = Some(token);
                Ok(())
            })
            .map_err(anyhow::Error::msg)?;

            match auth.step_active {
                Some(step) => println!("Signed in (activation step: {})", step),
                None => println!("Signed in"),
            }
        }
    }
    Ok(())
}
