use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// 应用设置（TOML 文件结构）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub effects: EffectsConfig,
}

/// 胜利效果开关
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub confetti: bool,
    pub sound: bool,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            confetti: true,
            sound: true,
        }
    }
}

/// 从TOML文件加载设置
///
/// 文件不存在时写入默认设置；内容损坏时退回默认值并记录警告。
pub fn load_config(path: &Path) -> io::Result<Config> {
    if !path.exists() {
        let config = Config::default();
        save_config(&config, path)?;
        return Ok(config);
    }

    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            log::warn!("config.toml inválido, usando valores por defecto: {}", e);
            Ok(Config::default())
        }
    }
}

/// 保存设置到TOML文件
pub fn save_config(config: &Config, path: &Path) -> io::Result<()> {
    let content = toml::to_string_pretty(config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    fs::write(path, content)
}
