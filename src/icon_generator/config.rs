//! # 配置模块
//!
//! ## 设计思路
//!
//! 原本散落在流程里的源图路径、输出路径与目标尺寸统一收敛到 `IconConfig`，
//! 生成器只接收配置，不再内嵌任何字面量。
//!
//! ## 实现思路
//!
//! - `Default` 即生产配置：`public/logo_new.jpg` → 三个固定 PNG。
//! - `rooted_at` 把所有相对路径挂到指定目录下，测试可直接指向临时目录。
//! - 资源上限沿用图片链路的默认值，防止异常大图拖垮进程。

use std::path::{Path, PathBuf};

use image::imageops::FilterType;

/// 默认源图（相对工作目录）。
pub const DEFAULT_SOURCE_PATH: &str = "public/logo_new.jpg";

/// 单个输出图标的目标描述。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTarget {
    /// 图标名称，仅用于日志与报告。
    pub name: &'static str,
    /// 目标宽度（像素）。
    pub width: u32,
    /// 目标高度（像素）。
    pub height: u32,
    /// PNG 输出路径。
    pub output_path: PathBuf,
}

impl IconTarget {
    pub fn new(name: &'static str, width: u32, height: u32, output_path: impl Into<PathBuf>) -> Self {
        Self {
            name,
            width,
            height,
            output_path: output_path.into(),
        }
    }
}

/// 图标生成配置。
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// 源图路径。
    pub source_path: PathBuf,
    /// 需要生成的图标列表，按顺序处理。
    pub targets: Vec<IconTarget>,
    /// 源文件允许的最大体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 解码阶段允许的预计内存上限（按 RGBA 估算，字节）。
    pub max_decoded_bytes: u64,
    /// 缩放滤镜，必须是抗锯齿的卷积滤镜。
    pub resize_filter: FilterType,
    /// 带透明通道的源图合成到该底色上（RGB）。
    pub background: [u8; 3],
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            targets: default_targets(),
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
            max_decoded_bytes: 160 * 1024 * 1024,
            resize_filter: FilterType::Lanczos3,
            background: [255, 255, 255],
        }
    }
}

/// apple-touch-icon（180）、Android/Chrome 192 与 512 三个固定目标。
pub fn default_targets() -> Vec<IconTarget> {
    vec![
        IconTarget::new("apple-touch-icon", 180, 180, "public/apple-touch-icon.png"),
        IconTarget::new("icon-192", 192, 192, "public/icon-192.png"),
        IconTarget::new("icon-512", 512, 512, "public/icon-512.png"),
    ]
}

impl IconConfig {
    /// 以 `root` 为根目录重写源图与所有输出路径。
    ///
    /// 绝对路径保持不变（`Path::join` 的语义）。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use pwa_icons::icon_generator::IconConfig;
    ///
    /// let config = IconConfig::default().rooted_at("/tmp/site");
    /// assert!(config.source_path.ends_with("public/logo_new.jpg"));
    /// ```
    pub fn rooted_at(mut self, root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        self.source_path = root.join(&self.source_path);
        for target in &mut self.targets {
            target.output_path = root.join(&target.output_path);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_three_fixed_targets() {
        let config = IconConfig::default();
        let sizes: Vec<(u32, u32)> = config.targets.iter().map(|t| (t.width, t.height)).collect();

        assert_eq!(config.source_path, PathBuf::from("public/logo_new.jpg"));
        assert_eq!(sizes, vec![(180, 180), (192, 192), (512, 512)]);
        assert_eq!(config.targets[0].output_path, PathBuf::from("public/apple-touch-icon.png"));
        assert_eq!(config.targets[1].output_path, PathBuf::from("public/icon-192.png"));
        assert_eq!(config.targets[2].output_path, PathBuf::from("public/icon-512.png"));
        assert_eq!(config.resize_filter, FilterType::Lanczos3);
    }

    #[test]
    fn rooted_at_rebases_every_path() {
        let config = IconConfig::default().rooted_at("/srv/site");

        assert_eq!(config.source_path, PathBuf::from("/srv/site/public/logo_new.jpg"));
        for target in &config.targets {
            assert!(target.output_path.starts_with("/srv/site/public"));
        }
    }
}
