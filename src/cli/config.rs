pub const DEFAULT_SEPARATOR: &str = " ";
pub const SEPARATOR_ENV: &str = "UNPROMPT_SEPARATOR";
pub const LOG_ENV: &str = "UNPROMPT_LOG";

/// Separator from the command line, then the environment, then the default
pub fn resolve_separator(flag: Option<&str>) -> String {
    resolve_separator_from(flag, std::env::var(SEPARATOR_ENV).ok())
}

pub fn resolve_separator_from(flag: Option<&str>, env: Option<String>) -> String {
    match (flag, env) {
        (Some(separator), _) => separator.to_string(),
        (None, Some(separator)) => separator,
        (None, None) => DEFAULT_SEPARATOR.to_string(),
    }
}

/// Load `.env` if present and start logging to stderr, filtered by `UNPROMPT_LOG`
pub fn init_logging() {
    dotenv::dotenv().ok();
    let env = env_logger::Env::new().filter_or(LOG_ENV, "off");
    env_logger::Builder::from_env(env).try_init().ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_beats_environment() {
        let separator = resolve_separator_from(Some(": "), Some("\t".to_string()));
        assert_eq!(separator, ": ");
    }

    #[test]
    fn test_environment_beats_default() {
        assert_eq!(resolve_separator_from(None, Some("\t".to_string())), "\t");
    }

    #[test]
    fn test_default_separator() {
        assert_eq!(resolve_separator_from(None, None), DEFAULT_SEPARATOR);
    }

    #[test]
    fn test_empty_flag_is_kept() {
        assert_eq!(resolve_separator_from(Some(""), None), "");
    }
}
