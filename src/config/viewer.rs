//! # 查看器配置
//!
//! 窗口几何与默认贴图路径，编译期内嵌 `assets/viewer.json`。
//! 贴图路径留空时由运行时状态 / 文件对话框决定（见 `ui::app`）。

use serde::Deserialize;

use crate::config::ConfigError;

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

const VIEWER_JSON: &str = include_str!("../assets/viewer.json");

#[derive(Debug, Clone, Deserialize)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub image: ImageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageConfig {
    /// 固定使用的贴图路径；`null` 表示未固定
    pub default_path: Option<String>,
}

pub fn load_viewer_config() -> Result<ViewerConfig, ConfigError> {
    let config: ViewerConfig = serde_json::from_str(VIEWER_JSON)?;
    Ok(config)
}
