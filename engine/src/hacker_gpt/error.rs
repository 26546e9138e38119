use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while talking to the HackerGpt service
#[derive(Debug, Error)]
pub enum SyncAiError {
    #[error("Couldn't build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The server answered, but not with a 2xx status
    #[error("{status} for url: {url} - {body}")]
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },

    #[error("Couldn't write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SyncAiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) | Self::ClientBuild(e) => e.status(),
            Self::Write { .. } => None,
        }
    }
}

#[cfg(test)]
mod test {
    use expect_test::expect;

    use super::*;

    #[test]
    fn status_error_display() {
        let err = SyncAiError::Status {
            status: StatusCode::NOT_FOUND,
            url: "http://localhost/Hacker.php".into(),
            body: "nope".into(),
        };
        expect![[r#"404 Not Found for url: http://localhost/Hacker.php - nope"#]]
            .assert_eq(&err.to_string());
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn write_error_display() {
        let err = SyncAiError::Write {
            path: "out/cat.png".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such dir"),
        };
        expect![[r#"Couldn't write out/cat.png: no such dir"#]].assert_eq(&err.to_string());
        assert_eq!(err.status(), None);
    }
}
