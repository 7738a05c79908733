//! Backend that shells out to the `git` CLI.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;

use gitgate_types::{ObjectId, TreeEntry, TypeError};

use crate::error::{BackendError, BackendResult};
use crate::traits::ObjectBackend;

/// Object backend backed by `git` plumbing commands.
///
/// Every invocation passes the repository path with `-C`, so the process
/// working directory is never touched and concurrent calls stay
/// independent.
#[derive(Clone, Debug)]
pub struct GitCliBackend {
    repo_dir: PathBuf,
}

impl GitCliBackend {
    /// Create a backend serving the repository at `repo_dir`.
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }

    /// The repository directory this backend serves.
    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    /// Run `git -C <repo> <args>` and return its stdout.
    async fn git(&self, args: &[&str]) -> BackendResult<Vec<u8>> {
        let command = format!("git {}", args.join(" "));
        tracing::debug!(%command, repo = %self.repo_dir.display(), "invoking git");
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.repo_dir)
            .args(args)
            .output()
            .await
            .map_err(|source| BackendError::Spawn {
                command: command.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(BackendError::CommandFailed {
                command,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output.stdout)
    }
}

/// Parse one `git show-ref` line: `<40-hex-hash> <refname>`, with the
/// refname reported minus its leading `refs/`.
fn parse_ref_line(line: &str) -> BackendResult<String> {
    let malformed = || BackendError::MalformedRefLine {
        line: line.to_string(),
    };
    let (hash, name) = line.split_once(char::is_whitespace).ok_or_else(malformed)?;
    if hash.len() != 40 || !hash.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }
    let name = name.trim_start().strip_prefix("refs/").ok_or_else(malformed)?;
    if name.is_empty() {
        return Err(malformed());
    }
    Ok(name.to_string())
}

/// Parse one `git ls-tree` line: `<decimal-perms> <kind> <hex-id>\t<name>`.
fn parse_tree_line(line: &str) -> BackendResult<TreeEntry> {
    let malformed = || BackendError::MalformedTreeEntry {
        line: line.to_string(),
    };
    let (meta, name) = line.split_once('\t').ok_or_else(malformed)?;
    let mut fields = meta.split_whitespace();
    let perms = fields.next().ok_or_else(malformed)?;
    let kind = fields.next().ok_or_else(malformed)?;
    let id = fields.next().ok_or_else(malformed)?;
    if fields.next().is_some() || name.is_empty() {
        return Err(malformed());
    }
    let perms: u32 = perms.parse().map_err(|_| TypeError::InvalidPermissions {
        field: perms.to_string(),
        name: name.to_string(),
    })?;
    Ok(TreeEntry::new(perms, kind.parse()?, ObjectId::new(id), name))
}

#[async_trait]
impl ObjectBackend for GitCliBackend {
    async fn list_refs(&self) -> BackendResult<Vec<String>> {
        let stdout = self.git(&["show-ref"]).await?;
        String::from_utf8_lossy(&stdout)
            .lines()
            .filter(|line| !line.is_empty())
            .map(parse_ref_line)
            .collect()
    }

    async fn list_tree(&self, id: &ObjectId) -> BackendResult<Vec<TreeEntry>> {
        let stdout = self.git(&["ls-tree", id.as_str()]).await?;
        String::from_utf8_lossy(&stdout)
            .lines()
            .filter(|line| !line.is_empty())
            .map(parse_tree_line)
            .collect()
    }

    async fn read_blob(&self, id: &ObjectId) -> BackendResult<Vec<u8>> {
        self.git(&["show", id.as_str()]).await
    }

    async fn probe_repo(&self) -> BackendResult<()> {
        self.git(&["status"]).await.map(|_| ())
    }
}
