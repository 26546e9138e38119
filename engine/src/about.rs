const AUTHOR: &str = "PyCodz";

const HELP: &str = r#"
Usage: syncai -[OPTIONS] "[PROMPT]"

Options:
  -p,   --prompt     Start chatting with HackerGpt.
  -img, --imager     Generate an image from prompt.
  -h,   --help       Show this message and exit.
  -v,   --version    Show library version.
"#;

/// Usage text of the `syncai` command
pub fn help() -> &'static str {
    HELP
}

pub fn version() -> String {
    let version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown");
    format!("SyncAi Version: {version}\nAuthor: {AUTHOR}")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn help_text() {
        let help = help();
        assert!(help.starts_with("\nUsage: syncai -[OPTIONS] \"[PROMPT]\"\n\nOptions:\n"));
        assert!(help.ends_with("Show library version.\n"));

        let flags: Vec<_> = help
            .lines()
            .filter_map(|l| l.trim_start().strip_prefix('-'))
            .filter_map(|l| l.split_whitespace().next())
            .collect();
        assert_eq!(flags, ["p,", "img,", "h,", "v,"]);
    }

    #[test]
    fn version_text() {
        assert_eq!(
            version(),
            format!("SyncAi Version: {}\nAuthor: PyCodz", env!("CARGO_PKG_VERSION"))
        );
    }
}
