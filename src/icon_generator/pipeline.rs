//! # 解码与变换流水线模块
//!
//! ## 设计思路
//!
//! 将“字节 → 图像 → RGB → 各尺寸 PNG”的过程集中管理，且不接触文件系统，
//! 整条链路可以直接用内存字节测试。
//! 优先做尺寸检查，再进行完整解码，降低超大输入触发高内存开销的风险。
//!
//! ## 实现思路
//!
//! 1. 猜测格式并读取 header 尺寸
//! 2. 按像素 / 内存上限快速拒绝
//! 3. 完整解码
//! 4. 归一化为 RGB8（带透明通道的合成到底色上）
//! 5. 对每个目标独立做精确缩放（不保持宽高比）
//! 6. 编码为 PNG

use std::io::Cursor;

use fast_image_resize as fr;
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, GenericImageView, ImageEncoder, Rgb, RgbImage};

use super::source::{RenderedIcon, SourceInfo};
use super::{IconConfig, IconError, IconTarget};

/// 纯内存渲染入口：源图字节 → 每个目标一份 PNG。
///
/// 所有目标都从同一个只读的归一化源图缩放得到，互不影响。
///
/// # 示例
/// ```rust,ignore
/// use pwa_icons::icon_generator::{IconConfig, pipeline};
///
/// let config = IconConfig::default();
/// let bytes = std::fs::read("public/logo_new.jpg")?;
/// let (_info, icons) = pipeline::render_icons(&bytes, &config.targets, &config)?;
/// assert_eq!(icons.len(), 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_icons(
    bytes: &[u8],
    targets: &[IconTarget],
    config: &IconConfig,
) -> Result<(SourceInfo, Vec<RenderedIcon>), IconError> {
    let (info, source) = prepare_source(bytes, config)?;
    let icons = render_targets(&source, targets, config)?;
    Ok((info, icons))
}

/// 解码并归一化源图，返回原始信息与 RGB8 缓冲。
pub fn prepare_source(bytes: &[u8], config: &IconConfig) -> Result<(SourceInfo, RgbImage), IconError> {
    let decoded = decode_source(bytes, config)?;
    let (width, height) = decoded.dimensions();
    let info = SourceInfo {
        width,
        height,
        color: decoded.color(),
    };

    Ok((info, normalize_to_rgb(decoded, config.background)))
}

/// 对同一个只读源图逐个缩放并编码。
pub fn render_targets(
    source: &RgbImage,
    targets: &[IconTarget],
    config: &IconConfig,
) -> Result<Vec<RenderedIcon>, IconError> {
    let mut icons = Vec::with_capacity(targets.len());
    for target in targets {
        let resized = resize_exact(source, target.width, target.height, config.resize_filter)?;
        let png = encode_png(&resized)?;
        log::debug!(
            "🧩 {}：{}x{} -> {}x{}（filter={:?}，{} 字节）",
            target.name,
            source.width(),
            source.height(),
            target.width,
            target.height,
            config.resize_filter,
            png.len()
        );
        icons.push(RenderedIcon {
            target: target.clone(),
            png,
        });
    }

    Ok(icons)
}

/// 在内存中解码源图，并在完整解码前后各做一次资源上限检查。
pub(crate) fn decode_source(bytes: &[u8], config: &IconConfig) -> Result<DynamicImage, IconError> {
    image::guess_format(bytes)
        .map_err(|e| IconError::InvalidFormat(format!("不支持的图片格式：{}", e)))?;

    let (header_width, header_height) = inspect_dimensions_from_memory(bytes)?;
    validate_pixel_limits(config, header_width, header_height)?;
    validate_decoded_memory_limits(config, header_width, header_height)?;

    let decoded = image::load_from_memory(bytes)
        .map_err(|e| IconError::Decode(format!("图片解码失败：{}", e)))?;

    let (width, height) = decoded.dimensions();
    validate_pixel_limits(config, width, height)?;
    validate_decoded_memory_limits(config, width, height)?;

    Ok(decoded)
}

/// 仅通过内存中的图片头信息读取宽高。
fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), IconError> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| IconError::InvalidFormat(format!("无法识别图片格式：{}", e)))?;

    reader
        .into_dimensions()
        .map_err(|e| IconError::Decode(format!("无法读取图片尺寸：{}", e)))
}

fn validate_pixel_limits(config: &IconConfig, width: u32, height: u32) -> Result<(), IconError> {
    let pixels = (width as u64)
        .checked_mul(height as u64)
        .ok_or_else(|| IconError::ResourceLimit("图片像素数溢出".to_string()))?;

    if pixels > config.max_decoded_pixels {
        return Err(IconError::ResourceLimit(format!(
            "图片像素过大：{} 像素（限制：{} 像素）",
            pixels, config.max_decoded_pixels
        )));
    }

    Ok(())
}

fn validate_decoded_memory_limits(config: &IconConfig, width: u32, height: u32) -> Result<(), IconError> {
    let estimated = (width as u64)
        .checked_mul(height as u64)
        .and_then(|pixels| pixels.checked_mul(4))
        .ok_or_else(|| IconError::ResourceLimit("图片解码内存估算溢出".to_string()))?;

    if estimated > config.max_decoded_bytes {
        return Err(IconError::ResourceLimit(format!(
            "图片解码预计内存过大：{:.2} MB（限制：{:.2} MB）",
            estimated as f64 / 1024.0 / 1024.0,
            config.max_decoded_bytes as f64 / 1024.0 / 1024.0
        )));
    }

    Ok(())
}

/// 归一化为 RGB8。
///
/// 已是 RGB8 的直接取出；带透明通道的按 alpha 合成到 `background` 上；
/// 其余模式（灰度、16 位、浮点等）直接转换。
pub fn normalize_to_rgb(image: DynamicImage, background: [u8; 3]) -> RgbImage {
    match image {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other if other.color().has_alpha() => {
            log::debug!("🎨 源图颜色模式 {:?}，合成到底色 {:?}", other.color(), background);
            flatten_onto(&other, background)
        }
        other => {
            log::debug!("🎨 源图颜色模式 {:?}，转换为 RGB8", other.color());
            other.to_rgb8()
        }
    }
}

fn flatten_onto(image: &DynamicImage, background: [u8; 3]) -> RgbImage {
    let rgba = image.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let alpha = a as u32;
        let blend = |fg: u8, bg: u8| -> u8 {
            ((fg as u32 * alpha + bg as u32 * (255 - alpha) + 127) / 255) as u8
        };
        Rgb([
            blend(r, background[0]),
            blend(g, background[1]),
            blend(b, background[2]),
        ])
    })
}

/// 精确缩放到目标宽高，不保持宽高比。
///
/// 优先使用 `fast_image_resize` 卷积缩放，失败时回退 `image::imageops::resize`。
pub fn resize_exact(
    source: &RgbImage,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<RgbImage, IconError> {
    if target_width == 0 || target_height == 0 {
        return Err(IconError::Resize(format!(
            "目标尺寸非法：{}x{}",
            target_width, target_height
        )));
    }
    if source.width() == 0 || source.height() == 0 {
        return Err(IconError::Resize("源图尺寸为空".to_string()));
    }

    match resize_with_fast_image_resize(source, target_width, target_height, filter) {
        Ok(resized) => Ok(resized),
        Err(err) => {
            log::warn!("⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}", err);
            Ok(image::imageops::resize(
                source,
                target_width,
                target_height,
                to_fallback_filter(filter),
            ))
        }
    }
}

fn resize_with_fast_image_resize(
    source: &RgbImage,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<RgbImage, IconError> {
    let src_image = fr::images::Image::from_vec_u8(
        source.width(),
        source.height(),
        source.as_raw().clone(),
        fr::PixelType::U8x3,
    )
    .map_err(|e| IconError::Resize(format!("构建源图像缓冲失败：{}", e)))?;

    let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x3);

    let mut resizer = fr::Resizer::new();
    let options = fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(to_fast_filter(filter)));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| IconError::Resize(format!("fast_image_resize 执行失败：{}", e)))?;

    RgbImage::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| IconError::Resize("fast_image_resize 输出缓冲长度异常".to_string()))
}

/// 最近邻映射为 Box（面积平均），保证始终是抗锯齿缩放。
fn to_fast_filter(filter: FilterType) -> fr::FilterType {
    match filter {
        FilterType::Nearest => fr::FilterType::Box,
        FilterType::Triangle => fr::FilterType::Bilinear,
        FilterType::CatmullRom => fr::FilterType::CatmullRom,
        FilterType::Gaussian => fr::FilterType::Mitchell,
        FilterType::Lanczos3 => fr::FilterType::Lanczos3,
    }
}

/// 回退路径同样不允许最近邻采样。
fn to_fallback_filter(filter: FilterType) -> FilterType {
    match filter {
        FilterType::Nearest => FilterType::Triangle,
        other => other,
    }
}

/// 编码为 RGB8 PNG。
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, IconError> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(image.as_raw(), image.width(), image.height(), ExtendedColorType::Rgb8)
        .map_err(|e| IconError::Encode(format!("PNG 编码失败：{}", e)))?;
    Ok(png)
}
