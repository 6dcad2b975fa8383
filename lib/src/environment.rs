use crate::error::BootstrapError;
use std::env;
use std::str::FromStr;

pub struct Environment;

impl Environment {
    pub fn string(
        env_name: &str,
        default: &str,
    ) -> String {
        env::var(env_name).ok().unwrap_or(default.to_string())
    }

    pub fn optional_string(env_name: &str) -> Option<String> {
        env::var(env_name).ok().filter(|value| !value.is_empty())
    }

    pub fn u64(
        env_name: &str,
        default: u64,
    ) -> Result<u64, BootstrapError> {
        Self::parse(env_name, default)
    }

    fn parse<T>(
        env_name: &str,
        default: T,
    ) -> Result<T, BootstrapError>
    where
        T: FromStr,
        T::Err: ToString,
    {
        match Self::optional_string(env_name) {
            Some(value) => value
                .parse::<T>()
                .map_err(|error| BootstrapError::new(&error.to_string(), &format!("Failed to parse {env_name}={value}"))),
            None => Ok(default),
        }
    }
}
