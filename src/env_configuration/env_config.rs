use crate::common::*;

#[doc = r#"
    Reads an environment variable and treats a missing value as a fatal error.

    Every required setting of this application is referenced through an
    environment variable, so a missing key means the process cannot run in a
    meaningful way and is terminated immediately.

    # Arguments
    * `key` - Environment variable name to look up

    # Returns
    * `String` - The environment variable value

    # Panics
    Terminates the application when the variable is not set
"#]
fn get_env_or_panic(key: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = r#"
    Path of the server configuration file, taken from the `SERVER_CONFIG_PATH`
    environment variable.

    The file is TOML and carries the HTTP bind address, the storage backend
    selection (local file or remote GitHub repository), the chart rendering
    settings and the system settings (timezone offset, retention).
    Initialized lazily on first access and cached afterwards.

    # Panics
    When `SERVER_CONFIG_PATH` is not set
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("SERVER_CONFIG_PATH"));
