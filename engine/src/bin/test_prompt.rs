use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use engine::{DEFAULT_API_KEY, HackerGpt};

/// Talks to the live service, bypassing the error rendering of the cli
#[derive(clap::Parser)]
struct Arg {
    prompt: String,
    #[arg(long, default_value = DEFAULT_API_KEY)]
    key: String,
    /// Fetch an image into this file instead of sending a chat prompt
    #[arg(long)]
    image: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();
    color_eyre::install()?;
    let Arg { prompt, key, image } = Arg::parse();
    let gpt = HackerGpt::new(key)?;

    match image {
        Some(path) => {
            let path = gpt.try_generate_image(&prompt, Some(&path)).await?;
            println!("Saved image to {}", path.display());
        }
        None => println!("{}", gpt.try_prompt(&prompt).await?),
    }

    Ok(())
}
