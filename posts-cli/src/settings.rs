use anyhow::{Result, anyhow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) log_level: String,
    pub(crate) seed_posts: bool,
    pub(crate) assume_yes: bool,
}

impl Settings {
    pub(crate) fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `LOG_LEVEL` важнее `RUST_LOG`; без обоих уровень `info`.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup("LOG_LEVEL")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| "info".to_string());
        let seed_posts = parse_bool_var(&lookup, "SEED_POSTS", true)?;
        let assume_yes = parse_bool_var(&lookup, "ASSUME_YES", false)?;

        Ok(Self {
            log_level,
            seed_posts,
            assume_yes,
        })
    }
}

fn parse_bool_var<F>(lookup: &F, key: &str, default: bool) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => parse_bool(key, &raw),
        None => Ok(default),
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!(
            "Failed to parse {key}, expecting boolean (true/false), got '{other}'"
        )),
    }
}
