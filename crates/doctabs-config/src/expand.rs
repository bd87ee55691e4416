//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a configuration value.
///
/// `field` names the config field being expanded and is included in the error
/// so a failing value can be located in the file.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let context = |name: &str| -> Result<Option<String>, std::env::VarError> {
        // shellexpand hands over the raw text between the braces; the
        // `${VAR:-default}` form is split off here.
        if let Some((var, default)) = name.split_once(":-") {
            return match std::env::var(var) {
                Ok(value) => Ok(Some(value)),
                Err(std::env::VarError::NotPresent) => Ok(Some(default.to_owned())),
                Err(err) => Err(err),
            };
        }
        std::env::var(name).map(Some)
    };

    shellexpand::env_with_context(value, context)
        .map(std::borrow::Cow::into_owned)
        .map_err(|err| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}}: {}", err.var_name, err.cause),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_unchanged() {
        let expanded = expand_env("http://localhost:8001", "endpoints.rest_url").unwrap();
        assert_eq!(expanded, "http://localhost:8001");
    }

    #[test]
    fn test_expands_set_variable() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCTABS_TEST_REST", "https://api.shop.dev");
        }

        let expanded = expand_env("${DOCTABS_TEST_REST}", "endpoints.rest_url").unwrap();
        assert_eq!(expanded, "https://api.shop.dev");

        unsafe {
            std::env::remove_var("DOCTABS_TEST_REST");
        }
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCTABS_TEST_MISSING");
        }

        let expanded = expand_env(
            "${DOCTABS_TEST_MISSING:-http://localhost:8000}",
            "endpoints.graphql_url",
        )
        .unwrap();
        assert_eq!(expanded, "http://localhost:8000");
    }

    #[test]
    fn test_set_variable_beats_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCTABS_TEST_SET", "https://graphql.shop.dev");
        }

        let expanded = expand_env("${DOCTABS_TEST_SET:-fallback}", "endpoints.graphql_url").unwrap();
        assert_eq!(expanded, "https://graphql.shop.dev");

        unsafe {
            std::env::remove_var("DOCTABS_TEST_SET");
        }
    }

    #[test]
    fn test_missing_required_variable_errors() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCTABS_TEST_ABSENT");
        }

        let err = expand_env("${DOCTABS_TEST_ABSENT}", "endpoints.rest_url").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("DOCTABS_TEST_ABSENT"));
        assert!(err.to_string().contains("endpoints.rest_url"));
    }

    #[test]
    fn test_expansion_inside_larger_string() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCTABS_TEST_HOST", "shop.dev");
        }

        let expanded = expand_env("https://${DOCTABS_TEST_HOST}/api", "endpoints.rest_url").unwrap();
        assert_eq!(expanded, "https://shop.dev/api");

        unsafe {
            std::env::remove_var("DOCTABS_TEST_HOST");
        }
    }
}
