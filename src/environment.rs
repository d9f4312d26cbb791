use std::env;

/// Retrieves an environment variable, falling back to `default` when the
/// variable is unset or empty.
pub fn env_or(var: &str, default: &str) -> String {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

/// Retrieves an environment variable and splits it into a vector of strings
/// based on a delimiter, falling back to `default` when unset or empty.
pub fn env_list_or(var: &str, delimiter: char, default: &[&str]) -> Vec<String> {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => value
            .split(delimiter)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        _ => default.iter().map(|s| s.to_string()).collect(),
    }
}

/// Retrieves an environment variable only when it is set and non-empty.
pub fn env_opt(var: &str) -> Option<String> {
    env::var(var).ok().filter(|value| !value.trim().is_empty())
}
