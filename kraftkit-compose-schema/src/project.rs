use log::debug;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Environment variable naming the project explicitly.
pub const COMPOSE_PROJECT_NAME: &str = "COMPOSE_PROJECT_NAME";

fn disallowed_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^-_a-z0-9]+").expect("valid project name pattern"))
}

/// Lowercase `name`, drop characters outside `[a-z0-9_-]` and trim leading `_`/`-`.
pub fn normalize_project_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    disallowed_chars()
        .replace_all(&lowered, "")
        .trim_start_matches(['_', '-'])
        .to_string()
}

/// A project name and whether it was set imperatively (flag, environment)
/// rather than guessed from a path.
///
/// Both values only ever change together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectName {
    name: String,
    imperatively_set: bool,
}

impl ProjectName {
    pub fn new(name: &str, imperatively_set: bool) -> Self {
        Self {
            name: normalize_project_name(name),
            imperatively_set,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn imperatively_set(&self) -> bool {
        self.imperatively_set
    }

    /// Name inferred for `working_dir` when none was set imperatively.
    ///
    /// `COMPOSE_PROJECT_NAME` counts as imperative; the directory's base name does not.
    pub(crate) fn infer(working_dir: &Path) -> Option<Self> {
        if let Some(name) = std::env::var(COMPOSE_PROJECT_NAME)
            .ok()
            .filter(|n| !n.is_empty())
        {
            debug!("project name taken from {COMPOSE_PROJECT_NAME}");
            return Some(Self::new(&name, true));
        }

        let base = working_dir.file_name()?.to_string_lossy();
        let inferred = Self::new(&base, false);
        if inferred.name.is_empty() {
            return None;
        }
        debug!(
            "project name '{}' inferred from {}",
            inferred.name,
            working_dir.display()
        );
        Some(inferred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serial_test::serial;

    #[rstest]
    #[case("My-Project", "my-project")]
    #[case("my_project", "my_project")]
    #[case("My Project!", "myproject")]
    #[case("__-lead", "lead")]
    #[case("Ünïcode-app", "ncode-app")]
    #[case("", "")]
    fn test_normalize_project_name(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_project_name(input), expected);
    }

    #[test]
    #[serial]
    fn test_infer_from_directory() {
        std::env::remove_var(COMPOSE_PROJECT_NAME);
        let inferred = ProjectName::infer(Path::new("/srv/Web App")).expect("inferred");
        assert_eq!(inferred.name(), "webapp");
        assert!(!inferred.imperatively_set());
    }

    #[test]
    #[serial]
    fn test_infer_prefers_environment() {
        std::env::set_var(COMPOSE_PROJECT_NAME, "FromEnv");
        let inferred = ProjectName::infer(Path::new("/srv/web")).expect("inferred");
        assert_eq!(inferred.name(), "fromenv");
        assert!(inferred.imperatively_set());
        std::env::remove_var(COMPOSE_PROJECT_NAME);
    }

    #[test]
    #[serial]
    fn test_infer_from_root_yields_nothing() {
        std::env::remove_var(COMPOSE_PROJECT_NAME);
        assert_eq!(ProjectName::infer(Path::new("/")), None);
    }
}
