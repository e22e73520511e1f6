//! Best-effort git probes.
//!
//! Every probe shells out to `git` with `--no-optional-locks` so we never
//! block on an index lock held by the host process, and a 1-second hard
//! timeout so a hung git cannot stall the statusline. Missing binary,
//! non-zero exit, and timeout all degrade to `None`; the corresponding
//! fragment is simply omitted.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Duration;

use wait_timeout::ChildExt;

const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Capability interface over the version-control tool, so the composer can
/// be tested against a fake without spawning processes.
pub trait VcsProbe {
    /// Abbreviated ref name of HEAD.
    fn branch(&self) -> Option<String>;

    /// `origin` remote as an HTTPS browser URL.
    fn remote_url(&self) -> Option<String>;

    /// Whether a remote-tracking ref exists locally for the branch.
    fn branch_on_remote(&self, branch: &str) -> bool;
}

/// Probe backed by the `git` CLI. A probe without a directory answers
/// `None` to everything without spawning.
pub struct GitCli {
    dir: Option<PathBuf>,
}

impl GitCli {
    pub fn new(dir: Option<&str>) -> Self {
        Self {
            dir: dir.map(PathBuf::from),
        }
    }

    /// Run a git subcommand, returning trimmed stdout on success.
    fn run(&self, args: &[&str]) -> Option<String> {
        let dir = self.dir.as_ref()?;

        let mut child = Command::new("git")
            .arg("-C")
            .arg(dir)
            .arg("--no-optional-locks")
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .ok()?;

        match child.wait_timeout(PROBE_TIMEOUT) {
            Ok(Some(status)) if status.success() => {
                let mut out = String::new();
                child.stdout.take()?.read_to_string(&mut out).ok()?;
                let trimmed = out.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Ok(Some(_)) => None,
            Ok(None) | Err(_) => {
                let _ = child.kill();
                let _ = child.wait();
                None
            }
        }
    }
}

impl VcsProbe for GitCli {
    fn branch(&self) -> Option<String> {
        self.run(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    fn remote_url(&self) -> Option<String> {
        self.run(&["remote", "get-url", "origin"])
            .map(|url| normalize_remote(&url))
    }

    fn branch_on_remote(&self, branch: &str) -> bool {
        self.run(&[
            "rev-parse",
            "--verify",
            &format!("refs/remotes/origin/{branch}"),
        ])
        .is_some()
    }
}

/// Normalize a remote URL to its HTTPS browser form:
/// `git@github.com:org/repo.git` -> `https://github.com/org/repo`.
pub fn normalize_remote(url: &str) -> String {
    let url = if let Some(rest) = url.strip_prefix("git@") {
        format!("https://{}", rest.replacen(':', "/", 1))
    } else {
        url.to_string()
    };
    url.strip_suffix(".git").unwrap_or(&url).to_string()
}

/// Final path component of the project directory. Pure string work, no
/// subprocess.
pub fn repo_name(dir: &str) -> Option<&str> {
    Path::new(dir).file_name().and_then(|name| name.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ssh_remote_becomes_https() {
        assert_eq!(
            normalize_remote("git@github.com:org/repo.git"),
            "https://github.com/org/repo"
        );
    }

    #[test]
    fn https_remote_only_loses_git_suffix() {
        assert_eq!(
            normalize_remote("https://github.com/org/repo.git"),
            "https://github.com/org/repo"
        );
        assert_eq!(
            normalize_remote("https://github.com/org/repo"),
            "https://github.com/org/repo"
        );
    }

    #[test]
    fn only_first_colon_is_rewritten() {
        assert_eq!(
            normalize_remote("git@gitlab.example.com:group/sub:proj.git"),
            "https://gitlab.example.com/group/sub:proj"
        );
    }

    #[test]
    fn repo_name_is_last_component() {
        assert_eq!(repo_name("/home/u/work/my-repo"), Some("my-repo"));
        assert_eq!(repo_name("my-repo"), Some("my-repo"));
        assert_eq!(repo_name("/"), None);
    }

    #[test]
    fn probe_without_dir_answers_none() {
        let probe = GitCli::new(None);
        assert!(probe.branch().is_none());
        assert!(probe.remote_url().is_none());
        assert!(!probe.branch_on_remote("main"));
    }

    #[test]
    fn probe_on_non_repo_dir_answers_none() {
        let dir = tempfile::TempDir::new().unwrap();
        let probe = GitCli::new(dir.path().to_str());
        // Either git is absent or the directory is not a repository; both
        // must degrade to no data.
        assert!(probe.branch().is_none());
        assert!(probe.remote_url().is_none());
    }
}
