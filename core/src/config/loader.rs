use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use super::AboxConfig;

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AboxConfig> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).with_context(|| format!("Cannot read config {path:?}"))?;
    let config: AboxConfig =
        toml::from_str(&content).with_context(|| format!("Invalid config {path:?}"))?;
    debug!("Loaded config from {path:?}: {config:?}");
    Ok(config)
}

/// Loads `path` when it exists, defaults otherwise.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<AboxConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        Ok(AboxConfig::default())
    }
}

pub fn save_config<P: AsRef<Path>>(config: &AboxConfig, path: P) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    fs::write(path, toml_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::exec::DispatchConfig;
    use crate::util::test_util::gen_unique_temp_dir;

    #[test]
    fn test_save_and_load_config() {
        let (_temp_dir, root) = gen_unique_temp_dir();
        let config_path = root.join("config.toml");

        let mut test_config = AboxConfig::default();
        test_config.dispatch.force_noexec = true;
        test_config.log.level = "debug".into();
        save_config(&test_config, &config_path).unwrap();
        let loaded_config = load_config(&config_path).unwrap();
        assert_eq!(test_config, loaded_config);
    }

    #[test]
    fn test_partial_config_takes_defaults() {
        let (_temp_dir, root) = gen_unique_temp_dir();
        let config_path = root.join("config.toml");
        fs::write(&config_path, "[dispatch]\nforce_applets = true\n").unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(
            config.dispatch,
            DispatchConfig { prefer_applets: true, force_applets: true, force_noexec: false }
        );
        assert_eq!(config.log, Default::default());
    }

    #[test]
    fn test_missing_file_is_default() {
        let (_temp_dir, root) = gen_unique_temp_dir();
        let config = load_config_or_default(root.join("absent.toml")).unwrap();
        assert_eq!(config, AboxConfig::default());
        assert!(load_config(root.join("absent.toml")).is_err());
    }

    #[test]
    fn test_invalid_config() {
        let (_temp_dir, root) = gen_unique_temp_dir();
        let config_path = root.join("config.toml");
        fs::write(&config_path, "[dispatch]\nprefer_applets = \"maybe\"\n").unwrap();
        assert!(load_config(&config_path).is_err());
    }

    #[test]
    fn test_invalid_path() {
        let result = save_config(&AboxConfig::default(), "/home/user/\0file.txt");
        assert!(result.is_err());
    }
}
