//! # PWA 图标生成工具 — 命令入口
//!
//! 无参数运行一次生成。所有图标写入成功返回 0，
//! 源图缺失或任一步骤失败返回 1。

use std::process::ExitCode;

use pwa_icons::icon_generator::{GenerationOutcome, IconConfig, IconGenerator};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let generator = IconGenerator::new(IconConfig::default());

    match generator.generate() {
        Ok(GenerationOutcome::Generated(_)) => ExitCode::SUCCESS,
        Ok(GenerationOutcome::SourceMissing(path)) => {
            log::error!("❌ 未找到源图 {}，未生成任何图标", path.display());
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("❌ 生成图标失败：{err}");
            ExitCode::FAILURE
        }
    }
}
