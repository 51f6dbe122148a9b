//! `login`, `logout` and `profile`.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::routes::View;
use crate::core::session::SessionLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success, warning};
use crate::ui::theme::Theme;
use crate::utils::formatting::bold;
use std::io::{self, Write};

use super::{connect, open_storage, require_session};

pub const PASSWORD_ENV: &str = "RTIMESHEET_PASSWORD";

fn read_password() -> AppResult<String> {
    if let Ok(p) = std::env::var(PASSWORD_ENV) {
        return Ok(p);
    }

    warning(format!(
        "The password will be echoed; set {PASSWORD_ENV} to avoid typing it."
    ));
    print!("Password: ");
    io::stdout().flush().ok();
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn login(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { username, password } = cmd {
        let password = match password {
            Some(p) => p.clone(),
            None => read_password()?,
        };
        if username.trim().is_empty() || password.is_empty() {
            return Err(AppError::AuthFailed(
                "Username and password are required".to_string(),
            ));
        }

        let storage = open_storage(cfg)?;
        let api = connect(cfg)?;
        let session = SessionLogic::login(&api, &storage, username, &password)?;

        success(format!("Welcome {}", session.display_name()));
        info(format!("Landing view: {}", View::landing(Some(&session))));
    }
    Ok(())
}

pub fn logout(cfg: &Config) -> AppResult<()> {
    let storage = open_storage(cfg)?;
    if SessionLogic::logout(&storage)? {
        Theme::Light.apply();
        success("Logged out. Local storage cleared.");
    } else {
        info("No active session.");
    }
    Ok(())
}

pub fn profile(cfg: &Config) -> AppResult<()> {
    let storage = open_storage(cfg)?;
    let session = require_session(&storage)?;
    View::Profile.authorize(Some(&session))?;

    header("Profile");
    println!("{}", bold(&format!("Welcome {}", session.display_name())));
    println!("User  : {} (id {})", session.user_name, session.user_id);
    if !session.email.is_empty() {
        println!("Email : {}", session.email);
    }
    println!(
        "Role  : {}",
        if session.is_manager {
            "Manager"
        } else {
            "Employee"
        }
    );
    println!("Home  : {}", View::landing(Some(&session)));
    Ok(())
}
