pub mod about;
pub mod config;
pub mod hacker_gpt;

pub use hacker_gpt::{Endpoints, HackerGpt, SyncAiError};

pub const DEFAULT_API_KEY: &str = "PyCodz";
pub const DEFAULT_CHAT_URL: &str = "https://dev-pycodz-blackbox.pantheonsite.io/DEvZ44d/Hacker.php";
/// The prompt is appended to this verbatim.
pub const DEFAULT_IMAGE_URL: &str =
    "https://dev-pycodz-blackbox.pantheonsite.io/DEvZ44d/imger.php?img=";
