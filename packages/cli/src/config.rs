use anyhow::bail;
use methodsynth_method::presets::is_valid_receiver;
use methodsynth_method::Imports;
use methodsynth_model::Kind;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_NAME: &str = "methodsynth.config.json";

/// Methodsynth configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Comment written at the top of every generated file
    #[serde(default = "default_header")]
    pub header: String,

    /// Packages referenced by generated methods
    #[serde(default)]
    pub imports: Imports,

    /// Receiver variable names, per kind
    #[serde(default)]
    pub receivers: PerKind,

    /// Generated file names, per kind
    #[serde(default = "default_outputs")]
    pub outputs: PerKind,
}

fn default_header() -> String {
    "Code generated by methodsynth. DO NOT EDIT.".to_string()
}

/// One string setting for each kind of type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerKind {
    pub managed: String,
    pub claim: String,
    pub non_portable_class: String,
    pub portable_class_list: String,
}

impl PerKind {
    pub fn get(&self, kind: Kind) -> &str {
        match kind {
            Kind::Managed => &self.managed,
            Kind::Claim => &self.claim,
            Kind::NonPortableClass => &self.non_portable_class,
            Kind::PortableClassList => &self.portable_class_list,
        }
    }
}

impl Default for PerKind {
    fn default() -> Self {
        Self {
            managed: "mg".to_string(),
            claim: "cm".to_string(),
            non_portable_class: "cs".to_string(),
            portable_class_list: "pcl".to_string(),
        }
    }
}

fn default_outputs() -> PerKind {
    PerKind {
        managed: "zz_generated.managed.go".to_string(),
        claim: "zz_generated.claim.go".to_string(),
        non_portable_class: "zz_generated.nonportableclass.go".to_string(),
        portable_class_list: "zz_generated.portableclasslist.go".to_string(),
    }
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Reject receiver names that would not compile in generated methods
    pub fn validate(&self) -> anyhow::Result<()> {
        for kind in Kind::ALL {
            let receiver = self.receivers.get(kind);
            if !is_valid_receiver(receiver) {
                bail!(
                    "Invalid receiver '{}' for {} types: it must be a Go identifier \
                     that is not a keyword or a name used in generated bodies",
                    receiver,
                    kind
                );
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header: default_header(),
            imports: Imports::default(),
            receivers: PerKind::default(),
            outputs: default_outputs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "header": "Generated.",
            "imports": { "core": "example.org/core/v1" },
            "receivers": {
                "managed": "r",
                "claim": "c",
                "nonPortableClass": "nc",
                "portableClassList": "l"
            }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.header, "Generated.");
        assert_eq!(config.imports.core, "example.org/core/v1");
        assert_eq!(config.imports.runtime, Imports::default().runtime);
        assert_eq!(config.receivers.get(Kind::Managed), "r");
        assert_eq!(config.receivers.get(Kind::PortableClassList), "l");
        assert_eq!(config.outputs.get(Kind::Claim), "zz_generated.claim.go");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.header, "Code generated by methodsynth. DO NOT EDIT.");
        assert_eq!(config.receivers.get(Kind::NonPortableClass), "cs");
        assert_eq!(config.outputs.get(Kind::Managed), "zz_generated.managed.go");
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.receivers, PerKind::default());
    }

    #[test]
    fn test_default_receivers_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_load_rejects_clashing_receiver() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "receivers": {
                "managed": "mg",
                "claim": "cm",
                "nonPortableClass": "cs",
                "portableClassList": "items"
            } }"#,
        )
        .unwrap();

        let err = Config::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("'items'"));
        assert!(err.to_string().contains("portableclasslist"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "header": "Custom header." }"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.header, "Custom header.");
        assert_eq!(config.outputs.get(Kind::Managed), "zz_generated.managed.go");
    }
}
