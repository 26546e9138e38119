use std::process::ExitCode;

use color_eyre::Result;
use engine::{
    HackerGpt, about,
    config::{self, API_KEY_ENV, Config},
};
use log::debug;

pub mod cli;

use cli::{Action, Cli};

pub async fn run(cli: Cli) -> Result<ExitCode> {
    let action = cli.action();
    let config = match action {
        Action::Help | Action::Version => Config::default(),
        Action::Prompt(_) | Action::Image { .. } => resolve_config(cli.api_key)?,
    };
    Ok(execute(action, &config).await)
}

/// Performs `action` against the endpoints in `config`
pub async fn execute(action: Action, config: &Config) -> ExitCode {
    match action {
        Action::Help => print!("{}", about::help()),
        Action::Version => println!("{}", about::version()),
        Action::Prompt(prompt) => println!("{}", HackerGpt::chat_with(config, &prompt).await),
        Action::Image { prompt, output } => {
            let saved = HackerGpt::generate_image_with(config, &prompt, output.as_deref()).await;
            if saved.is_none() {
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

pub fn resolve_config(api_key: Option<String>) -> Result<Config> {
    let config = merge_config(
        config::load_config()?,
        std::env::var(API_KEY_ENV).ok(),
        api_key,
    );
    debug!("Using endpoints {:?}", config.endpoints());
    Ok(config)
}

/// Config file (or defaults), then the env key, then `--api-key`
fn merge_config(file: Option<Config>, env_key: Option<String>, api_key: Option<String>) -> Config {
    let config = file.unwrap_or_default().with_api_key_override(env_key);
    match api_key {
        Some(key) => config.with_api_key(key),
        None => config,
    }
}
