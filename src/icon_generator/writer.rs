//! # 写盘模块
//!
//! 逐个写入已渲染的 PNG，直接覆盖同名文件。
//! 任一写入失败立即返回，已写入的文件保留在磁盘上。

use std::fs;

use super::IconError;
use super::source::{RenderedIcon, WrittenIcon};

/// 按顺序写入所有图标。
pub(crate) fn write_icons(icons: Vec<RenderedIcon>) -> Result<Vec<WrittenIcon>, IconError> {
    let mut written = Vec::with_capacity(icons.len());
    for icon in icons {
        written.push(write_icon(icon)?);
    }
    Ok(written)
}

fn write_icon(icon: RenderedIcon) -> Result<WrittenIcon, IconError> {
    let path = icon.target.output_path;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                IconError::FileSystem(format!("创建输出目录 '{}' 失败：{}", parent.display(), e))
            })?;
        }
    }

    fs::write(&path, &icon.png)
        .map_err(|e| IconError::FileSystem(format!("写入 {} 失败：{}", path.display(), e)))?;

    log::info!(
        "🖼️ 已生成 {}（{}x{}）",
        path.display(),
        icon.target.width,
        icon.target.height
    );

    Ok(WrittenIcon {
        name: icon.target.name,
        width: icon.target.width,
        height: icon.target.height,
        bytes: icon.png.len(),
        path,
    })
}
