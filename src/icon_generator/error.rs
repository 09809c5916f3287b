//! # 错误模型模块
//!
//! 使用单一错误枚举承载生成链路中的所有失败来源。
//! 源文件缺失属于预期结果，不在这里，见 `GenerationOutcome::SourceMissing`。

/// 图标生成统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("缩放错误：{0}")]
    Resize(String),

    #[error("编码错误：{0}")]
    Encode(String),
}

