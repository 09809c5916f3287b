//! # 数据源与中间模型
//!
//! - `RawImageData`：已读取但未解码的源文件字节
//! - `SourceInfo`：解码后源图的尺寸与颜色模式
//! - `RenderedIcon`：已缩放并编码为 PNG 的图标
//! - `GenerationOutcome` / `GenerationReport`：一次生成的最终结果

use std::path::PathBuf;

use image::ColorType;

use super::IconTarget;

/// 加载阶段输出：原始字节与来源路径。
pub(crate) struct RawImageData {
    pub(crate) bytes: Vec<u8>,
    /// 来源路径（用于日志与诊断）。
    pub(crate) path: PathBuf,
}

/// 源图解码信息。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceInfo {
    pub width: u32,
    pub height: u32,
    /// 解码时的原始颜色模式（归一化之前）。
    pub color: ColorType,
}

/// 渲染阶段输出：一个目标对应的 PNG 字节。
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    pub target: IconTarget,
    /// RGB8 PNG 编码结果。
    pub png: Vec<u8>,
}

/// 已写入磁盘的图标记录。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenIcon {
    pub name: &'static str,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub bytes: usize,
}

/// 成功生成后的汇总。
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub source: SourceInfo,
    pub icons: Vec<WrittenIcon>,
}

/// 一次生成的结果。
///
/// 源文件不存在是正常、可预期的情况，因此作为结果值而非错误返回。
#[derive(Debug, Clone)]
pub enum GenerationOutcome {
    /// 所有图标均已写入。
    Generated(GenerationReport),
    /// 源文件不存在，未触碰任何文件。
    SourceMissing(PathBuf),
}

impl GenerationOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }
}
