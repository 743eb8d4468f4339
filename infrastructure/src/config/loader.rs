//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_FILES: [&str; 2] = ["responder.toml", ".responder.toml"];
const ENV_PREFIX: &str = "RESPONDER_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `RESPONDER_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./responder.toml` or `./.responder.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/responder/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("responder").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Every configuration source in priority order, with whether it is present
    pub fn config_sources(config_path: Option<&Path>) -> Vec<ConfigSource> {
        let mut sources = vec![ConfigSource {
            label: "Environment",
            location: format!("{}*", ENV_PREFIX),
            found: std::env::vars_os()
                .any(|(key, _)| key.to_string_lossy().starts_with(ENV_PREFIX)),
        }];

        if let Some(path) = config_path {
            sources.push(ConfigSource {
                label: "Explicit",
                location: path.display().to_string(),
                found: path.exists(),
            });
        }

        sources.push(match Self::project_config_path() {
            Some(path) => ConfigSource {
                label: "Project",
                location: path.display().to_string(),
                found: true,
            },
            None => ConfigSource {
                label: "Project",
                location: PROJECT_CONFIG_FILES.map(|f| format!("./{f}")).join(" or "),
                found: false,
            },
        });

        if let Some(path) = Self::global_config_path() {
            sources.push(ConfigSource {
                label: "Global",
                found: path.exists(),
                location: path.display().to_string(),
            });
        }

        sources.push(ConfigSource {
            label: "Default",
            location: "built-in defaults".to_string(),
            found: true,
        });
        sources
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        for source in Self::config_sources(config_path) {
            let marker = if source.found { "FOUND" } else { "     " };
            let label = format!("{}:", source.label);
            println!("  [{}] {:<12} {}", marker, label, source.location);
        }
    }
}

/// One place configuration can come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub label: &'static str,
    pub location: String,
    pub found: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.path, PathBuf::from("questions.json"));
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("responder"));
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "responder.toml",
                r#"
[server]
port = 4000
"#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.server.port, 4000);
            assert_eq!(config.server.host, "127.0.0.1");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("responder.toml", "[server]\nport = 4000\n")?;
            jail.create_file("custom.toml", "[server]\nport = 5000\n")?;

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).map_err(|e| *e)?;
            assert_eq!(config.server.port, 5000);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("responder.toml", "[storage]\npath = \"a.json\"\n")?;
            jail.set_env("RESPONDER_STORAGE__PATH", "b.json");
            jail.set_env("RESPONDER_SERVER__PORT", "9000");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.storage.path, PathBuf::from("b.json"));
            assert_eq!(config.server.port, 9000);
            Ok(())
        });
    }

    #[test]
    fn test_config_sources_lists_explicit_path() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "[server]\nport = 5000\n")?;

            let sources = ConfigLoader::config_sources(Some(Path::new("custom.toml")));
            let explicit = sources.iter().find(|s| s.label == "Explicit").unwrap();
            assert_eq!(explicit.location, "custom.toml");
            assert!(explicit.found);

            let sources = ConfigLoader::config_sources(Some(Path::new("absent.toml")));
            let explicit = sources.iter().find(|s| s.label == "Explicit").unwrap();
            assert!(!explicit.found);

            let sources = ConfigLoader::config_sources(None);
            assert!(sources.iter().all(|s| s.label != "Explicit"));
            Ok(())
        });
    }

    #[test]
    fn test_config_sources_marks_environment_when_set() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let sources = ConfigLoader::config_sources(None);
            assert_eq!(sources[0].label, "Environment");
            assert!(!sources[0].found);

            jail.set_env("RESPONDER_SERVER__PORT", "9000");
            let sources = ConfigLoader::config_sources(None);
            assert!(sources[0].found);
            Ok(())
        });
    }

    #[test]
    fn test_config_sources_project_file() {
        Jail::expect_with(|jail| {
            let sources = ConfigLoader::config_sources(None);
            let project = sources.iter().find(|s| s.label == "Project").unwrap();
            assert!(!project.found);

            jail.create_file(".responder.toml", "")?;
            let sources = ConfigLoader::config_sources(None);
            let project = sources.iter().find(|s| s.label == "Project").unwrap();
            assert!(project.found);
            assert_eq!(project.location, ".responder.toml");
            Ok(())
        });
    }
}
