//! # 图标生成模块（icon_generator）
//!
//! ## 设计思路
//!
//! 把“存在性检查 → 加载校验 → 解码归一化 → 缩放编码 → 写盘”按职责拆分，
//! 其中 `pipeline` 不接触文件系统，可以直接用内存字节测试。
//!
//! - `config`：源图路径、目标列表与资源上限
//! - `generator`：编排整条流程 + 阶段耗时日志
//! - `loader`：读取源文件与签名校验
//! - `pipeline`：解码、像素限制、RGB 归一化、缩放、PNG 编码
//! - `writer`：写盘与目录创建
//! - `error/source`：错误与中间数据模型
//!
//! ## 调用链
//!
//! ```text
//! main.rs
//!    ↓
//! generator.rs（存在性检查 + 阶段耗时日志）
//!    ├─ loader.rs（体积 + 签名校验）
//!    ├─ pipeline.rs（解码 + 归一化 + 缩放 + 编码）
//!    └─ writer.rs（覆盖写入）
//!    ↓
//! GenerationOutcome / IconError
//! ```

mod config;
mod error;
mod generator;
mod loader;
pub mod pipeline;
mod source;
mod writer;

pub use config::{DEFAULT_SOURCE_PATH, IconConfig, IconTarget, default_targets};
pub use error::IconError;
pub use generator::IconGenerator;
pub use source::{GenerationOutcome, GenerationReport, RenderedIcon, SourceInfo, WrittenIcon};
