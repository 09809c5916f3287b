//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 在解码之前尽早拒绝明显不合法的输入：体积超限、空文件、非图片签名。
//! 存在性检查由编排层负责，这里假定路径已存在。
//!
//! ## 实现思路
//!
//! metadata 体积限制 → 读取字节 → magic bytes 签名校验。

use std::path::Path;

use super::source::RawImageData;
use super::{IconConfig, IconError};

/// 从本地路径加载源图原始字节。
pub(crate) fn load_from_file(path: &Path, config: &IconConfig) -> Result<RawImageData, IconError> {
    log::debug!("📁 开始读取源图 - 路径: {}", path.display());

    let metadata = std::fs::metadata(path)
        .map_err(|e| IconError::FileSystem(format!("无法读取文件信息 {}：{}", path.display(), e)))?;

    if !metadata.is_file() {
        return Err(IconError::FileSystem(format!("不是普通文件：{}", path.display())));
    }

    if metadata.len() > config.max_file_size {
        return Err(IconError::ResourceLimit(format!(
            "文件过大：{:.2} MB（限制：{:.2} MB）",
            metadata.len() as f64 / 1024.0 / 1024.0,
            config.max_file_size as f64 / 1024.0 / 1024.0
        )));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| IconError::FileSystem(format!("无法读取图片文件 {}：{}", path.display(), e)))?;
    validate_image_signature(&bytes)?;

    Ok(RawImageData {
        bytes,
        path: path.to_path_buf(),
    })
}

/// 通过文件签名（magic bytes）校验输入是否为图片。
///
/// `infer` 明确识别为非图片时直接拒绝；识别不出时交给 `image` 的格式探测，
/// PNM、QOI、TGA 等 `infer` 不认识的格式由后者兜底。
fn validate_image_signature(bytes: &[u8]) -> Result<(), IconError> {
    if bytes.is_empty() {
        return Err(IconError::InvalidFormat("图片内容为空".to_string()));
    }

    match infer::get(bytes) {
        Some(kind) if kind.matcher_type() != infer::MatcherType::Image => {
            Err(IconError::InvalidFormat(format!(
                "文件签名不是图片类型：{}",
                kind.mime_type()
            )))
        }
        Some(_) => Ok(()),
        None => image::guess_format(bytes)
            .map(|_| ())
            .map_err(|e| IconError::InvalidFormat(format!("无法识别图片类型：{}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn signature_accepts_png_header() {
        assert!(validate_image_signature(&PNG_MAGIC).is_ok());
    }

    #[test]
    fn signature_rejects_empty_and_text() {
        assert!(matches!(validate_image_signature(&[]), Err(IconError::InvalidFormat(_))));
        assert!(matches!(
            validate_image_signature(b"definitely not an image"),
            Err(IconError::InvalidFormat(_))
        ));
    }

    #[test]
    fn signature_falls_back_to_image_probe() {
        // infer 不认识 PNM / QOI，但 image 可以解码
        assert!(validate_image_signature(b"P6\n4 4\n255\n").is_ok());
        assert!(validate_image_signature(b"qoif\x00\x00\x00\x04\x00\x00\x00\x04\x03\x00").is_ok());
    }

    #[test]
    fn signature_rejects_non_image_kind() {
        let zip = [0x50, 0x4B, 0x03, 0x04, 0x14, 0x00, 0x00, 0x00];
        assert!(matches!(validate_image_signature(&zip), Err(IconError::InvalidFormat(_))));
    }

    #[test]
    fn load_rejects_file_over_size_limit() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let path = dir.path().join("big.png");
        let mut bytes = PNG_MAGIC.to_vec();
        bytes.resize(4096, 0);
        std::fs::write(&path, &bytes).expect("write failed");

        let config = IconConfig {
            max_file_size: 1024,
            ..IconConfig::default()
        };

        let result = load_from_file(&path, &config);
        assert!(matches!(result, Err(IconError::ResourceLimit(_))));
    }

    #[test]
    fn load_rejects_directory() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let result = load_from_file(dir.path(), &IconConfig::default());
        assert!(matches!(result, Err(IconError::FileSystem(_))));
    }

    #[test]
    fn load_returns_bytes_and_path() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let path = dir.path().join("logo.png");
        std::fs::write(&path, PNG_MAGIC).expect("write failed");

        let raw = load_from_file(&path, &IconConfig::default()).expect("load should succeed");
        assert_eq!(raw.bytes, PNG_MAGIC.to_vec());
        assert_eq!(raw.path, path);
    }
}
