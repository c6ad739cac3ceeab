use crate::common::*;

#[doc = r#"
    Reads a TOML configuration file and deserializes it into the given
    structure type.

    1. Reads the file at `file_path` into a string
    2. Parses the TOML text with `toml::from_str()` into the generic type T
    3. Returns an error when the file cannot be read or does not match the
       expected structure

    # Type Parameters
    * `T` - Target structure implementing `DeserializeOwned`

    # Arguments
    * `file_path` - Path of the TOML file to read

    # Returns
    * `Result<T, anyhow::Error>` - Parsed structure on success
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content = std::fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}
