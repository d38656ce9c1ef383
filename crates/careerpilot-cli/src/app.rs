//! Command execution: session handling, prompts and dispatch to the planner.

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use tracing::{debug, info, warn};

use careerpilot_core::auth::{CredentialStore, Session};
use careerpilot_core::models::RegisterRequest;
use careerpilot_core::{ApiClient, ApiError, Config, FileStore, Planner, RoadmapGeneration};

use crate::cli::{Command, PlanCommand, RoadmapCommand};
use crate::render;

pub struct App {
    config: Config,
    session: Session,
    api: ApiClient,
}

impl App {
    /// Load config and any saved session.
    pub fn new() -> Result<Self> {
        let config = match Config::load() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Config::default()
            }
        };

        let mut session = Session::new(Config::cache_root()?);
        let load_result = session.load();
        debug!(?load_result, has_data = session.data.is_some(), "Session loaded");

        let mut api = ApiClient::new(&config.api_base_url())?;
        if let Some(token) = session.token() {
            api.set_token(token.to_string());
        }
        debug!(base_url = api.base_url(), "API client configured");

        Ok(Self {
            config,
            session,
            api,
        })
    }

    /// Run a command. If the server rejects the stored token, the session
    /// is dropped so the next command prompts for a fresh login.
    pub async fn run(&mut self, command: Command) -> Result<()> {
        let uses_session = !matches!(command, Command::Login { .. } | Command::Register | Command::Logout);
        let result = self.dispatch(command).await;

        match result {
            Err(e) if uses_session && session_rejected(&e) => {
                warn!(error = %e, "Server rejected the session token");
                self.session.clear()?;
                Err(e.context("Session is no longer valid. Run `careerpilot login` to sign in again."))
            }
            other => other,
        }
    }

    async fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Login { username, remember } => self.login(username, remember).await,
            Command::Logout => self.logout(),
            Command::Register => self.register().await,
            Command::Whoami => {
                self.ensure_authenticated().await?;
                let user = self.api.current_user().await?;
                print!("{}", render::render_user(&user));
                Ok(())
            }
            Command::Roadmap(cmd) => {
                self.ensure_authenticated().await?;
                self.run_roadmap(cmd).await
            }
            Command::Plan(cmd) => {
                self.ensure_authenticated().await?;
                self.run_plan(cmd).await
            }
            Command::Sync => {
                self.ensure_authenticated().await?;
                let roster = self.planner()?.refresh().await?;
                print!("{}", render::render_roster(&roster, false));
                Ok(())
            }
            Command::Stats => {
                self.ensure_authenticated().await?;
                let stats = self.planner()?.stats().await?;
                print!("{}", render::render_stats(&stats));
                Ok(())
            }
            Command::Learn { topic, context } => {
                self.ensure_authenticated().await?;
                println!("Asking the tutor about \"{}\"...", topic.trim());
                let response = self
                    .planner()?
                    .teach_topic(&topic, context.as_deref())
                    .await?;
                print!("{}", render::render_topic(&response));
                Ok(())
            }
        }
    }

    async fn run_roadmap(&self, cmd: RoadmapCommand) -> Result<()> {
        let planner = self.planner()?;
        match cmd {
            RoadmapCommand::Generate {
                role,
                days,
                replace,
            } => {
                println!("Generating a {}-day roadmap for {}...", days, role.trim());
                let entry = match planner.generate_roadmap(&role, days, replace).await? {
                    RoadmapGeneration::Created(entry) => entry,
                    RoadmapGeneration::Conflict { existing } => {
                        let question = format!(
                            "A {}-day roadmap for {} already exists. Replace it and reset its progress?",
                            existing.duration_days, existing.role_name
                        );
                        if !confirm(&question)? {
                            println!("Kept the existing roadmap.");
                            return Ok(());
                        }
                        match planner.generate_roadmap(&role, days, true).await? {
                            RoadmapGeneration::Created(entry) => entry,
                            RoadmapGeneration::Conflict { .. } => {
                                bail!("Roadmap for {} could not be replaced", role.trim())
                            }
                        }
                    }
                };
                print!("{}", render::render_roadmap(&entry));
                println!(
                    "\nNext: `careerpilot plan generate {}` to break it into daily tasks.",
                    entry.role_key
                );
                Ok(())
            }
            RoadmapCommand::List => {
                let roadmaps = planner.saved_roadmaps()?;
                print!("{}", render::render_roadmap_list(&roadmaps));
                Ok(())
            }
            RoadmapCommand::Show { role_key } => {
                let entry = planner
                    .saved_roadmap(role_key)?
                    .with_context(|| format!("No saved roadmap for role {}", role_key))?;
                print!("{}", render::render_roadmap(&entry));
                Ok(())
            }
            RoadmapCommand::Delete { role_key, yes } => {
                let question = format!(
                    "Delete the roadmap for role {} along with its daily plan and progress?",
                    role_key
                );
                if !yes && !confirm(&question)? {
                    return Ok(());
                }
                let outcome = planner.delete_roadmap(role_key).await?;
                print!("{}", render::render_delete(&outcome));
                Ok(())
            }
        }
    }

    async fn run_plan(&self, cmd: PlanCommand) -> Result<()> {
        let planner = self.planner()?;
        match cmd {
            PlanCommand::Generate { role_key } => {
                println!("Generating the daily plan for role {}...", role_key);
                let roster = planner.generate_daily_plan(role_key).await?;
                print!("{}", render::render_roster(&roster, false));
                Ok(())
            }
            PlanCommand::List { all } => {
                let roster = planner.refresh().await?;
                print!("{}", render::render_roster(&roster, all));
                Ok(())
            }
            PlanCommand::Toggle { role_key, day } => {
                let toggle = planner.toggle_day(role_key, day).await?;
                print!("{}", render::render_toggle(&toggle));
                Ok(())
            }
            PlanCommand::Reset { yes } => {
                if !yes && !confirm("Forget every completed day for all plans?")? {
                    return Ok(());
                }
                let cleared = planner.reset_progress()?;
                println!("Cleared {} completed days.", cleared);
                Ok(())
            }
            PlanCommand::Delete { role_key, yes } => {
                let question = format!("Delete the daily plan for role {} and its progress?", role_key);
                if !yes && !confirm(&question)? {
                    return Ok(());
                }
                let outcome = planner.delete_plan(role_key).await?;
                print!("{}", render::render_delete(&outcome));
                Ok(())
            }
        }
    }

    /// Planner bound to the logged-in user's cache directory.
    fn planner(&self) -> Result<Planner<ApiClient, FileStore>> {
        let username = self
            .session
            .username()
            .context("Not logged in. Run `careerpilot login` first.")?;
        let store = FileStore::new(Config::user_cache_dir(username)?)?;
        Ok(Planner::new(self.api.clone(), store))
    }

    /// Make sure a valid session exists, logging in silently with a
    /// remembered password if the token has expired.
    async fn ensure_authenticated(&mut self) -> Result<()> {
        if let Some(ref data) = self.session.data {
            if !data.needs_refresh() {
                return Ok(());
            }
            debug!(minutes_left = data.minutes_until_expiry(), "Session close to expiry");
        }

        let username = self
            .session
            .username()
            .map(str::to_string)
            .or_else(|| self.config.last_username.clone());

        if let Some(username) = username {
            if CredentialStore::has_credentials(&username) {
                let password = CredentialStore::get_password(&username)?;
                match self.api.authenticate(&username, &password).await {
                    Ok(data) => {
                        info!(username = %username, "Re-authenticated with stored credentials");
                        self.set_session(data)?;
                        return Ok(());
                    }
                    Err(e) => warn!(error = %e, "Silent re-login failed"),
                }
            }
        }

        if self.session.is_valid() {
            return Ok(());
        }
        bail!("Not logged in or session expired. Run `careerpilot login` first.")
    }

    async fn login(&mut self, username: Option<String>, remember: bool) -> Result<()> {
        println!("\n=== CareerPilot Login ===\n");

        let username = match username {
            Some(u) => u.trim().to_string(),
            None => match self.config.last_username.clone() {
                Some(last_user) => {
                    let input = prompt(&format!("Username [{}]: ", last_user))?;
                    if input.is_empty() {
                        last_user
                    } else {
                        input
                    }
                }
                None => prompt("Username: ")?,
            },
        };
        if username.is_empty() {
            bail!("Username required");
        }

        let password = if CredentialStore::has_credentials(&username)
            && confirm_default_yes("Use stored password?")?
        {
            CredentialStore::get_password(&username)?
        } else {
            rpassword::prompt_password("Password: ")?
        };

        println!("\nAuthenticating...");
        let data = self.api.authenticate(&username, &password).await?;

        if remember {
            if let Err(e) = CredentialStore::store(&username, &password) {
                warn!(error = %e, "Failed to store credentials");
                eprintln!("Warning: could not save the password to the keychain.");
            }
        }

        self.config.last_username = Some(username.clone());
        self.config.save()?;
        let name = data
            .user
            .as_ref()
            .map(|u| u.display_name().to_string())
            .unwrap_or_else(|| username.clone());
        self.set_session(data)?;

        println!("Logged in as {}.", name);
        Ok(())
    }

    fn logout(&mut self) -> Result<()> {
        let username = self
            .session
            .username()
            .map(str::to_string)
            .or_else(|| self.config.last_username.clone());

        self.session.clear()?;
        if let Some(ref username) = username {
            if CredentialStore::has_credentials(username) {
                CredentialStore::delete(username)?;
            }
        }
        info!(?username, "Logged out");
        println!("Logged out.");
        Ok(())
    }

    async fn register(&mut self) -> Result<()> {
        println!("\n=== Create a CareerPilot account ===\n");
        let full_name = prompt("Full name: ")?;
        let email = prompt("Email: ")?;
        let username = prompt("Username: ")?;
        let password = rpassword::prompt_password("Password: ")?;
        let confirmation = rpassword::prompt_password("Confirm password: ")?;

        if email.is_empty() || username.is_empty() || password.is_empty() {
            bail!("Email, username and password are required");
        }
        if password != confirmation {
            bail!("Passwords do not match");
        }

        let request = RegisterRequest {
            email,
            username,
            password,
            full_name,
        };
        let user = self.api.register(&request).await?;

        self.config.last_username = Some(user.username.clone());
        self.config.save()?;

        println!(
            "Account created for {}. Run `careerpilot login` to sign in.",
            user.username
        );
        Ok(())
    }

    fn set_session(&mut self, data: careerpilot_core::auth::SessionData) -> Result<()> {
        self.api.set_token(data.token.clone());
        self.session.update(data);
        self.session.save()
    }
}

fn session_rejected(err: &anyhow::Error) -> bool {
    ApiError::find(err).is_some_and(ApiError::is_auth_error)
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn confirm(question: &str) -> Result<bool> {
    let input = prompt(&format!("{} [y/N]: ", question))?;
    Ok(is_affirmative(&input, false))
}

fn confirm_default_yes(question: &str) -> Result<bool> {
    let input = prompt(&format!("{} [Y/n]: ", question))?;
    Ok(is_affirmative(&input, true))
}

fn is_affirmative(input: &str, default: bool) -> bool {
    match input.trim().to_lowercase().as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    }
}
