//! # PWA 图标生成工具 — 库入口
//!
//! 从单张源图（`public/logo_new.jpg`）生成三份固定尺寸的 PNG 图标：
//!
//! | 文件 | 尺寸 | 用途 |
//! |------|------|------|
//! | `public/apple-touch-icon.png` | 180×180 | iOS 主屏幕 |
//! | `public/icon-192.png` | 192×192 | Android / Chrome |
//! | `public/icon-512.png` | 512×512 | Android / Chrome 启动画面 |
//!
//! 所有输出均为不带透明通道的 RGB PNG。
//! 详见 [`icon_generator`]。

pub mod icon_generator;
