//! SVG rasterization and raster encoding.
//!
//! The source is rendered once into a master bitmap large enough for the
//! biggest target, and every output is a downscale of that master. Encoding
//! is deterministic, so the same SVG always produces the same bytes.

use crate::utils::error::{FaviconError, Result};
use image::codecs::ico::IcoEncoder;
use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use resvg::{tiny_skia, usvg};
use std::sync::Arc;

/// Density at which one SVG user unit is one pixel.
pub const BASE_DPI: f32 = 72.0;

pub struct SvgRasterizer {
    tree: usvg::Tree,
    density: f32,
}

impl SvgRasterizer {
    pub fn from_svg(data: &[u8], density: f32) -> Result<Self> {
        let mut opt = usvg::Options::default();
        Arc::make_mut(&mut opt.fontdb).load_system_fonts();

        let tree = usvg::Tree::from_data(data, &opt).map_err(|e| FaviconError::SvgError {
            message: e.to_string(),
        })?;

        Ok(Self { tree, density })
    }

    /// Intrinsic (width, height) of the document in user units.
    pub fn intrinsic_size(&self) -> (f32, f32) {
        let size = self.tree.size();
        (size.width(), size.height())
    }

    /// Renders at the configured density, raised if needed so the shorter
    /// side is at least `min_side` pixels. The result stays premultiplied;
    /// `fit_square` converts it to straight alpha after resampling.
    pub fn render_master(&self, min_side: u32) -> Result<RgbaImage> {
        let (svg_w, svg_h) = self.intrinsic_size();
        let density_scale = self.density / BASE_DPI;
        let fit_scale = min_side as f32 / svg_w.min(svg_h);
        let scale = density_scale.max(fit_scale);

        let width = (svg_w * scale).round().max(1.0) as u32;
        let height = (svg_h * scale).round().max(1.0) as u32;
        tracing::debug!(
            "Rendering {}x{} master ({:.0}x{:.0} SVG, scale {:.3})",
            width,
            height,
            svg_w,
            svg_h,
            scale
        );

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or(FaviconError::PixmapError { width, height })?;
        resvg::render(
            &self.tree,
            tiny_skia::Transform::from_scale(scale, scale),
            &mut pixmap.as_mut(),
        );

        RgbaImage::from_raw(width, height, pixmap.take())
            .ok_or(FaviconError::PixmapError { width, height })
    }
}

/// Cover-fits a premultiplied `master` into a `size`x`size` square (centre
/// crop, then Lanczos3) and returns it with straight alpha, ready to encode.
pub fn fit_square(master: &RgbaImage, size: u32) -> RgbaImage {
    let (width, height) = master.dimensions();

    let mut icon = if width == size && height == size {
        master.clone()
    } else if width == height {
        imageops::resize(master, size, size, FilterType::Lanczos3)
    } else {
        let side = width.min(height);
        let cropped =
            imageops::crop_imm(master, (width - side) / 2, (height - side) / 2, side, side)
                .to_image();
        imageops::resize(&cropped, size, size, FilterType::Lanczos3)
    };

    demultiply(&mut icon);
    icon
}

/// Converts a premultiplied image to straight alpha in place.
fn demultiply(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let alpha = pixel.0[3] as u32;
        if alpha == 0 {
            pixel.0 = [0, 0, 0, 0];
            continue;
        }
        for channel in &mut pixel.0[..3] {
            // Lanczos 的振鈴可能讓顏色略高於 alpha
            *channel = ((*channel as u32 * 255 + alpha / 2) / alpha).min(255) as u8;
        }
    }
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(buffer)
}

pub fn encode_ico(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    IcoEncoder::new(&mut buffer).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;

    const SQUARE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="40" viewBox="0 0 40 40"><rect width="40" height="40" fill="#050810"/><circle cx="20" cy="20" r="12" fill="#00D9FF"/></svg>"##;
    const WIDE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="80" height="40" viewBox="0 0 80 40"><rect width="80" height="40" fill="#FF007F"/></svg>"##;

    #[test]
    fn test_master_honours_density() {
        let rasterizer = SvgRasterizer::from_svg(SQUARE_SVG.as_bytes(), 144.0).unwrap();
        let master = rasterizer.render_master(1).unwrap();
        assert_eq!(master.dimensions(), (80, 80));
    }

    #[test]
    fn test_master_grows_to_largest_target() {
        let rasterizer = SvgRasterizer::from_svg(SQUARE_SVG.as_bytes(), 72.0).unwrap();
        let master = rasterizer.render_master(128).unwrap();
        assert_eq!(master.dimensions(), (128, 128));
    }

    #[test]
    fn test_fit_square_crops_wide_master() {
        let rasterizer = SvgRasterizer::from_svg(WIDE_SVG.as_bytes(), 72.0).unwrap();
        let master = rasterizer.render_master(40).unwrap();
        assert_eq!(master.dimensions(), (80, 40));

        let icon = fit_square(&master, 16);
        assert_eq!(icon.dimensions(), (16, 16));
        let centre = icon.get_pixel(8, 8);
        assert_eq!(centre.0[3], 255);
    }

    #[test]
    fn test_transparent_edges_keep_their_colour() {
        let disc = r##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64" viewBox="0 0 64 64"><circle cx="32" cy="32" r="24" fill="#FFFFFF"/></svg>"##;
        let rasterizer = SvgRasterizer::from_svg(disc.as_bytes(), 72.0).unwrap();
        let master = rasterizer.render_master(512).unwrap();
        let icon = fit_square(&master, 16);

        let mut visible = 0;
        for pixel in icon.pixels() {
            let [red, green, blue, alpha] = pixel.0;
            if alpha >= 32 {
                visible += 1;
                assert!(
                    red >= 250 && green >= 250 && blue >= 250,
                    "edge pixel darkened: rgb=({red},{green},{blue}) alpha={alpha}"
                );
            }
        }
        assert!(visible > 0);
        // 角落完全透明
        assert_eq!(icon.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_png_and_ico_decode() {
        let rasterizer = SvgRasterizer::from_svg(SQUARE_SVG.as_bytes(), 300.0).unwrap();
        let master = rasterizer.render_master(32).unwrap();
        let icon = fit_square(&master, 32);

        let png = encode_png(&icon).unwrap();
        let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (32, 32));

        let ico = encode_ico(&icon).unwrap();
        let decoded = image::load_from_memory_with_format(&ico, ImageFormat::Ico).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (32, 32));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let render = || {
            let rasterizer = SvgRasterizer::from_svg(SQUARE_SVG.as_bytes(), 300.0).unwrap();
            let master = rasterizer.render_master(64).unwrap();
            encode_png(&fit_square(&master, 48)).unwrap()
        };
        assert_eq!(render(), render());
    }

    #[test]
    fn test_invalid_svg() {
        let result = SvgRasterizer::from_svg(b"not an svg", 300.0);
        assert!(matches!(result, Err(FaviconError::SvgError { .. })));
    }
}
