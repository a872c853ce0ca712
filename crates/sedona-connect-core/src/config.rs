//! Configuration for building and encoding Sedona function calls.
//!
//! Build a [`SedonaConnectConfig`] in code, or read it from the environment with
//! [`SedonaConnectConfig::from_env`]:
//!
//! - `SEDONA_CONNECT_VALIDATE_FUNCTION_NAMES`: `true`/`false` (default `false`)
//! - `SEDONA_CONNECT_FUNCTION_ENCODING`: `call_function` (default) or `unresolved`

/// How a named Sedona call is written to the Spark Connect wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FunctionEncoding {
    /// `Expression.CallFunction` (Spark 3.5+).
    #[default]
    CallFunction,
    /// `Expression.UnresolvedFunction` with `is_user_defined_function` set, for
    /// servers that predate `CallFunction`.
    UnresolvedUserDefined,
}

impl FunctionEncoding {
    /// Parse the env/config spelling. Returns `None` for unknown values.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "call_function" | "callfunction" => Some(FunctionEncoding::CallFunction),
            "unresolved" | "unresolved_function" => Some(FunctionEncoding::UnresolvedUserDefined),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SedonaConnectConfig {
    /// Reject empty or non-identifier function names when building calls.
    /// Off by default: names are sent as given and the server resolves them.
    pub validate_function_names: bool,
    pub function_encoding: FunctionEncoding,
}

impl Default for SedonaConnectConfig {
    fn default() -> Self {
        SedonaConnectConfig {
            validate_function_names: false,
            function_encoding: FunctionEncoding::CallFunction,
        }
    }
}

impl SedonaConnectConfig {
    pub const ENV_VALIDATE_FUNCTION_NAMES: &'static str = "SEDONA_CONNECT_VALIDATE_FUNCTION_NAMES";
    pub const ENV_FUNCTION_ENCODING: &'static str = "SEDONA_CONNECT_FUNCTION_ENCODING";

    /// Read the config from process environment variables; unset or unparsable
    /// values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a caller-supplied lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SedonaConnectConfig::default();
        if let Some(raw) = lookup(Self::ENV_VALIDATE_FUNCTION_NAMES) {
            match parse_bool(&raw) {
                Some(b) => config.validate_function_names = b,
                None => tracing::warn!(
                    key = Self::ENV_VALIDATE_FUNCTION_NAMES,
                    value = %raw,
                    "ignoring unparsable boolean config value"
                ),
            }
        }
        if let Some(raw) = lookup(Self::ENV_FUNCTION_ENCODING) {
            match FunctionEncoding::parse(&raw) {
                Some(enc) => config.function_encoding = enc,
                None => tracing::warn!(
                    key = Self::ENV_FUNCTION_ENCODING,
                    value = %raw,
                    "ignoring unknown function encoding"
                ),
            }
        }
        config
    }

    pub fn with_validate_function_names(mut self, validate: bool) -> Self {
        self.validate_function_names = validate;
        self
    }

    pub fn with_function_encoding(mut self, encoding: FunctionEncoding) -> Self {
        self.function_encoding = encoding;
        self
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
