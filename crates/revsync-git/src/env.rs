//! Environment composition for git commands.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Variable pointing git at the repository metadata directory.
pub const GIT_DIR: &str = "GIT_DIR";

/// Variable controlling whether git may prompt for credentials.
pub const GIT_TERMINAL_PROMPT: &str = "GIT_TERMINAL_PROMPT";

/// Returns the metadata directory of the checkout in `working_dir`.
pub fn git_dir(working_dir: &Path) -> PathBuf {
    working_dir.join(".git")
}

/// Returns the current process environment, skipping non-UTF-8 entries.
pub fn ambient() -> HashMap<String, String> {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

/// Builds the environment for commands run against `working_dir`.
///
/// `base` is extended with `GIT_DIR`, so git operates on the checkout no
/// matter where the calling process lives. Unless `terminal_prompt` is set,
/// `GIT_TERMINAL_PROMPT=0` makes git fail instead of waiting for input.
pub fn compose(
    base: HashMap<String, String>,
    working_dir: &Path,
    terminal_prompt: bool,
) -> HashMap<String, String> {
    let mut env = base;
    env.insert(
        GIT_DIR.to_string(),
        git_dir(working_dir).to_string_lossy().into_owned(),
    );
    if !terminal_prompt {
        env.insert(GIT_TERMINAL_PROMPT.to_string(), "0".to_string());
    }
    env
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_adds_git_dir() {
        let mut base = HashMap::new();
        base.insert("PATH".to_string(), "/usr/bin".to_string());

        let env = compose(base, Path::new("/srv/docs"), false);

        assert_eq!(env.get("PATH").map(String::as_str), Some("/usr/bin"));
        assert_eq!(env.get(GIT_DIR).map(String::as_str), Some("/srv/docs/.git"));
        assert_eq!(env.get(GIT_TERMINAL_PROMPT).map(String::as_str), Some("0"));
    }

    #[test]
    fn test_compose_overrides_inherited_git_dir() {
        let mut base = HashMap::new();
        base.insert(GIT_DIR.to_string(), "/elsewhere/.git".to_string());

        let env = compose(base, Path::new("/srv/docs"), true);

        assert_eq!(env.get(GIT_DIR).map(String::as_str), Some("/srv/docs/.git"));
        assert!(!env.contains_key(GIT_TERMINAL_PROMPT));
    }

    #[test]
    fn test_ambient_reflects_process_environment() {
        let env = ambient();
        if let Ok(path) = std::env::var("PATH") {
            assert_eq!(env.get("PATH"), Some(&path));
        }
    }
}
