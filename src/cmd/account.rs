//! Sign in, registration, and account recovery.

use anyhow::Result;
use console::style;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use regex::Regex;
use std::sync::OnceLock;

use pizzacraft::api::ApiClient;
use pizzacraft::api::auth::AuthClient;
use pizzacraft::config::Config;
use pizzacraft::errors::ApiError;
use pizzacraft::session::SessionStore;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("static regex compiles"))
}

fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

fn print_api_error(err: ApiError, fallback: &str) {
    eprintln!("{}", style(err.user_message(fallback)).red());
}

pub async fn cmd_login(config: &Config) -> Result<()> {
    let theme = ColorfulTheme::default();
    let email: String = Input::with_theme(&theme)
        .with_prompt("Email address")
        .interact_text()?;
    if !is_valid_email(&email) {
        println!("{}", style("Email is invalid").red());
        return Ok(());
    }
    let password: String = Password::with_theme(&theme)
        .with_prompt("Password")
        .interact()?;

    let auth = AuthClient::new(ApiClient::new(config.api_url.clone()));
    match auth.login(&email, &password).await {
        Ok(session) => {
            SessionStore::new(config.session_file.clone()).save(&session)?;
            println!("Welcome back, {}!", style(&session.user.name).bold());
        }
        Err(err) => print_api_error(err, "Failed to sign in"),
    }

    Ok(())
}

pub async fn cmd_register(config: &Config) -> Result<()> {
    let theme = ColorfulTheme::default();
    let name: String = Input::with_theme(&theme)
        .with_prompt("Name")
        .interact_text()?;
    let email: String = Input::with_theme(&theme)
        .with_prompt("Email address")
        .interact_text()?;
    if !is_valid_email(&email) {
        println!("{}", style("Email is invalid").red());
        return Ok(());
    }
    let password: String = Password::with_theme(&theme)
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    let auth = AuthClient::new(ApiClient::new(config.api_url.clone()));
    match auth.register(&name, &email, &password).await {
        Ok(session) => {
            SessionStore::new(config.session_file.clone()).save(&session)?;
            println!(
                "Welcome, {}! Check your inbox to verify your email.",
                style(&session.user.name).bold()
            );
        }
        Err(err) => print_api_error(err, "Failed to create account"),
    }

    Ok(())
}

pub fn cmd_logout(config: &Config) -> Result<()> {
    SessionStore::new(config.session_file.clone()).clear()?;
    println!("Signed out");
    Ok(())
}

pub async fn cmd_forgot_password(config: &Config, email: &str) -> Result<()> {
    if !is_valid_email(email) {
        println!("{}", style("Email is invalid").red());
        return Ok(());
    }
    let auth = AuthClient::new(ApiClient::new(config.api_url.clone()));
    match auth.forgot_password(email).await {
        Ok(resp) => println!("{}", resp.message),
        Err(err) => print_api_error(err, "Failed to request a password reset"),
    }
    Ok(())
}

pub async fn cmd_verify_email(config: &Config, token: &str) -> Result<()> {
    let auth = AuthClient::new(ApiClient::new(config.api_url.clone()));
    match auth.verify_email(token).await {
        Ok(resp) => println!("{}", resp.message),
        Err(err) => print_api_error(err, "Email verification failed"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("priya@example.com"));
        assert!(is_valid_email("a@b.co"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("spaces in@example.com"));
    }
}
