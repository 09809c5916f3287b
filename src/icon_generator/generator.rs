//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconGenerator` 只负责流程编排，不直接做解码或写盘。
//! 处理链路固定为：
//! 1. 检查源图是否存在（不存在时返回 `SourceMissing`，不触碰任何文件）
//! 2. 加载原始字节
//! 3. 解码、归一化（此时输出“已加载”）
//! 4. 渲染全部目标
//! 5. 逐个写盘
//!
//! ## 实现思路
//!
//! - 全部目标在写盘前渲染完毕，解码/缩放/编码失败时不会留下任何输出。
//! - 记录 `load/decode/render/write/total` 阶段耗时，便于性能诊断。

use std::time::Instant;

use super::source::{GenerationOutcome, GenerationReport};
use super::{IconConfig, IconError, loader, pipeline, writer};

/// 图标生成器。
pub struct IconGenerator {
    config: IconConfig,
}

impl IconGenerator {
    pub fn new(config: IconConfig) -> Self {
        Self { config }
    }

    /// 生成主入口：源图 → 全部目标图标。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use pwa_icons::icon_generator::{GenerationOutcome, IconConfig, IconGenerator};
    ///
    /// let generator = IconGenerator::new(IconConfig::default());
    /// match generator.generate()? {
    ///     GenerationOutcome::Generated(report) => assert_eq!(report.icons.len(), 3),
    ///     GenerationOutcome::SourceMissing(path) => eprintln!("{} 不存在", path.display()),
    /// }
    /// # Ok::<(), pwa_icons::icon_generator::IconError>(())
    /// ```
    pub fn generate(&self) -> Result<GenerationOutcome, IconError> {
        let config = &self.config;
        let source_path = &config.source_path;

        // 缺失时由调用方负责提示，这里只返回结果
        if !source_path.exists() {
            return Ok(GenerationOutcome::SourceMissing(source_path.clone()));
        }

        let total_start = Instant::now();

        let load_start = Instant::now();
        let raw = loader::load_from_file(source_path, config)?;
        let load_elapsed = load_start.elapsed();

        let decode_start = Instant::now();
        let (source, normalized) = pipeline::prepare_source(&raw.bytes, config)?;
        let decode_elapsed = decode_start.elapsed();

        log::info!(
            "📥 已加载 {}：尺寸 {}x{}，颜色模式 {:?}",
            raw.path.display(),
            source.width,
            source.height,
            source.color
        );

        let render_start = Instant::now();
        let icons = pipeline::render_targets(&normalized, &config.targets, config)?;
        let render_elapsed = render_start.elapsed();

        let write_start = Instant::now();
        let written = writer::write_icons(icons)?;
        let write_elapsed = write_start.elapsed();

        log::info!(
            "✅ 图标生成完成 - {} 个 load={}ms decode={}ms render={}ms write={}ms total={}ms",
            written.len(),
            load_elapsed.as_millis(),
            decode_elapsed.as_millis(),
            render_elapsed.as_millis(),
            write_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(GenerationOutcome::Generated(GenerationReport {
            source,
            icons: written,
        }))
    }
}
