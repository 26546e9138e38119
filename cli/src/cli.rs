use std::path::PathBuf;

/// Help and version are handled by hand so the usage text matches `engine::about`
#[derive(Debug, clap::Parser)]
#[command(name = "syncai", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Start chatting with HackerGpt.
    #[arg(
        short,
        long,
        value_name = "PROMPT",
        conflicts_with = "imager",
        allow_hyphen_values = true
    )]
    pub prompt: Option<String>,

    /// Generate an image from prompt.
    #[arg(short, long, value_name = "PROMPT", allow_hyphen_values = true)]
    pub imager: Option<String>,

    /// Where to save the generated image, defaults to `<PROMPT>.png`
    #[arg(short, long, requires = "imager", conflicts_with = "prompt")]
    pub output: Option<PathBuf>,

    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    #[arg(short, long)]
    pub help: bool,

    #[arg(short, long)]
    pub version: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Prompt(String),
    Image {
        prompt: String,
        output: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Cli {
    /// Help wins over version, version over everything else. No flags at all means help.
    pub fn action(&self) -> Action {
        if self.help {
            Action::Help
        } else if self.version {
            Action::Version
        } else if let Some(prompt) = &self.prompt {
            Action::Prompt(prompt.clone())
        } else if let Some(prompt) = &self.imager {
            Action::Image {
                prompt: prompt.clone(),
                output: self.output.clone(),
            }
        } else {
            Action::Help
        }
    }
}

const VALUE_FLAGS: &[&str] = &[
    "-p",
    "--prompt",
    "-i",
    "--imager",
    "-o",
    "--output",
    "-k",
    "--api-key",
];

/// Rewrites the multi-letter short flag `-img` into `--imager`, which clap can't express.
/// Values of other flags and everything after `--` are left alone.
pub fn normalize_args(args: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut value_pending = false;
    let mut flags_done = false;

    args.into_iter()
        .map(|arg| {
            if flags_done || std::mem::take(&mut value_pending) {
                return arg;
            }

            if arg == "--" {
                flags_done = true;
                arg
            } else if arg == "-img" {
                value_pending = true;
                "--imager".into()
            } else if let Some(value) = arg.strip_prefix("-img=") {
                format!("--imager={value}")
            } else {
                value_pending = VALUE_FLAGS.contains(&arg.as_str());
                arg
            }
        })
        .collect()
}
