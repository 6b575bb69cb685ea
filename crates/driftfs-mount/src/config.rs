//! Mount configuration.

use serde::{Deserialize, Serialize};

/// Configuration for one mount session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MountConfig {
    /// Filesystem mount point.
    #[serde(default)]
    pub mountpoint: String,

    /// Permission-bit mask cleared from requested modes on create.
    /// Note TOML has no octal literals; `18` is `0o022`.
    #[serde(default = "default_umask")]
    pub umask: u32,
}

fn default_umask() -> u32 {
    0o022
}

impl Default for MountConfig {
    fn default() -> Self {
        MountConfig {
            mountpoint: String::new(),
            umask: default_umask(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = MountConfig::default();
        assert_eq!(cfg.mountpoint, "");
        assert_eq!(cfg.umask, 0o022);
    }

    #[test]
    fn test_from_toml() {
        let cfg: MountConfig = toml::from_str(
            r#"
            mountpoint = "/mnt/drift"
            umask = 18
        "#,
        )
        .unwrap();
        assert_eq!(cfg.mountpoint, "/mnt/drift");
        assert_eq!(cfg.umask, 0o022);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let cfg: MountConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.umask, 0o022);
    }
}
