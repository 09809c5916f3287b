// Property checks for the in-memory rendering path
use image::imageops::FilterType;
use image::{GenericImageView, ImageBuffer, Rgb, RgbImage};
use proptest::prelude::*;
use pwa_icons::icon_generator::{IconConfig, IconTarget, pipeline};

fn patterned(width: u32, height: u32, seed: u8) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([
            (x as u8).wrapping_mul(7).wrapping_add(seed),
            (y as u8).wrapping_mul(13),
            ((x ^ y) as u8).wrapping_add(seed),
        ])
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn resize_hits_target_dimensions(
        src_w in 1u32..80,
        src_h in 1u32..80,
        dst_w in 1u32..120,
        dst_h in 1u32..120,
        seed in any::<u8>(),
    ) {
        let source = patterned(src_w, src_h, seed);
        let resized = pipeline::resize_exact(&source, dst_w, dst_h, FilterType::Lanczos3)
            .expect("resize failed");
        prop_assert_eq!(resized.dimensions(), (dst_w, dst_h));
    }

    #[test]
    fn targets_render_independently(
        src_w in 8u32..96,
        src_h in 8u32..96,
        seed in any::<u8>(),
    ) {
        let source = patterned(src_w, src_h, seed);
        let mut png = Vec::new();
        image::DynamicImage::ImageRgb8(source)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .expect("encode failed");

        let config = IconConfig::default();
        let big = IconTarget::new("big", 64, 64, "big.png");
        let small = IconTarget::new("small", 16, 16, "small.png");

        let (_, together) = pipeline::render_icons(&png, &[big.clone(), small.clone()], &config)
            .expect("render failed");
        let (_, alone) = pipeline::render_icons(&png, &[small], &config)
            .expect("render failed");

        // 先渲染大图不应影响后面小图的结果
        prop_assert_eq!(&together[1].png, &alone[0].png);
        let decoded = image::load_from_memory(&together[0].png).expect("decode failed");
        prop_assert_eq!(decoded.dimensions(), (big.width, big.height));
    }
}
