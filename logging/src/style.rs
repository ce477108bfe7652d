use std::ffi::OsString;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextColoring {
    On,
    Off,
    Auto,
}

/// Output style of the subscriber, chosen through the `LOG_STYLE` env var.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogStyle {
    Text(TextColoring),
    Json,
}

impl LogStyle {
    pub fn parse(s: &str) -> Result<LogStyle, LogStyleError> {
        match s.to_lowercase().as_str() {
            "json" => Ok(LogStyle::Json),
            "text" => Ok(LogStyle::Text(TextColoring::Auto)),
            "text-colored" => Ok(LogStyle::Text(TextColoring::On)),
            "text-uncolored" => Ok(LogStyle::Text(TextColoring::Off)),
            other => Err(LogStyleError::UnrecognizedStyle(other.to_owned())),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LogStyleError {
    #[error("Unrecognized log style: {0}")]
    UnrecognizedStyle(String),
    #[error("Env var {var_name}'s contents are not valid unicode: {data:?}")]
    NotUnicode { var_name: String, data: OsString },
}

pub fn log_style_from_env(var_name: &str) -> Result<Option<LogStyle>, LogStyleError> {
    match std::env::var(var_name) {
        Ok(value) => LogStyle::parse(&value).map(Some),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(data)) => Err(LogStyleError::NotUnicode {
            var_name: var_name.to_owned(),
            data,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Verbose name, so it cannot collide with env vars used by other tests.
    static TEST_ENV_VAR: &str = "UNIFORM_CHECK_LOG_STYLE_TEST_ENV_VAR";

    // All checks live in one test; separate tests would race on the env var
    // when run in parallel.
    #[test]
    fn parse_env_var() {
        unsafe {
            std::env::set_var(TEST_ENV_VAR, "text");
            assert_eq!(
                log_style_from_env(TEST_ENV_VAR),
                Ok(Some(LogStyle::Text(TextColoring::Auto)))
            );

            std::env::set_var(TEST_ENV_VAR, "TEXT-Colored");
            assert_eq!(
                log_style_from_env(TEST_ENV_VAR),
                Ok(Some(LogStyle::Text(TextColoring::On)))
            );

            std::env::set_var(TEST_ENV_VAR, "text-uncolored");
            assert_eq!(
                log_style_from_env(TEST_ENV_VAR),
                Ok(Some(LogStyle::Text(TextColoring::Off)))
            );

            std::env::set_var(TEST_ENV_VAR, "jSoN");
            assert_eq!(log_style_from_env(TEST_ENV_VAR), Ok(Some(LogStyle::Json)));

            std::env::set_var(TEST_ENV_VAR, "fancy");
            assert_eq!(
                log_style_from_env(TEST_ENV_VAR),
                Err(LogStyleError::UnrecognizedStyle("fancy".to_owned()))
            );

            std::env::remove_var(TEST_ENV_VAR);
            assert_eq!(log_style_from_env(TEST_ENV_VAR), Ok(None));
        }
    }
}
