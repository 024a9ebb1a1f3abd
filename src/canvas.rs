//! In-memory RGB888 render surface.
//!
//! [`Canvas`] is the pixel buffer both widgets paint into and the exporter reads
//! from. It implements the `embedded-graphics` [`DrawTarget`] trait, so every
//! primitive, font and text style of that crate draws onto it directly.
//!
//! `embedded-graphics` colors carry no alpha channel. Two adapters add the
//! compositing the vintage look needs:
//!
//! - [`AlphaLayer`]: draws any primitive at a fixed opacity (shadows, texture,
//!   the weathered rim).
//! - [`GradientLayer`]: ignores the primitive's color and paints each covered
//!   pixel with a [`Gradient`] sample instead (brass arc, dial face, discs).
//!
//! Both adapters are themselves draw targets, so they compose with
//! `DrawTargetExt::clipped` for half-disc shapes.

use std::convert::Infallible;

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::prelude::*;

use crate::gradient::Gradient;

// =============================================================================
// Canvas
// =============================================================================

/// Fixed-size RGB888 pixel buffer, row-major.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Canvas {
    size: Size,
    pixels: Vec<Rgb888>,
}

impl Canvas {
    /// Create a black canvas of `size`.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![Rgb888::BLACK; size.width as usize * size.height as usize],
        }
    }

    /// Width in pixels.
    #[inline]
    pub const fn width(&self) -> u32 { self.size.width }

    /// Height in pixels.
    #[inline]
    pub const fn height(&self) -> u32 { self.size.height }

    /// Change the canvas size. Contents are reset to black when the size changes.
    pub fn resize(
        &mut self,
        size: Size,
    ) {
        if size != self.size {
            *self = Self::new(size);
        }
    }

    /// Row-major buffer index of `point`, `None` outside the canvas.
    #[inline]
    fn index_of(
        &self,
        point: Point,
    ) -> Option<usize> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as u32, point.y as u32);
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some(y as usize * self.size.width as usize + x as usize)
    }

    /// Color at `point`, `None` outside the canvas.
    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb888> {
        self.index_of(point).map(|i| self.pixels[i])
    }

    /// Overwrite one pixel. Points outside the canvas are ignored.
    #[inline]
    pub fn set_pixel(
        &mut self,
        point: Point,
        color: Rgb888,
    ) {
        if let Some(i) = self.index_of(point) {
            self.pixels[i] = color;
        }
    }

    /// Composite `color` over the existing pixel with opacity `alpha` (0.0-1.0).
    pub fn blend_pixel(
        &mut self,
        point: Point,
        color: Rgb888,
        alpha: f32,
    ) {
        let Some(i) = self.index_of(point) else {
            return;
        };
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha >= 1.0 {
            self.pixels[i] = color;
            return;
        }
        if alpha <= 0.0 {
            return;
        }
        self.pixels[i] = mix(self.pixels[i], color, alpha);
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb888] { &self.pixels }

    /// Pixels paired with their coordinates, ready for another draw target.
    pub fn iter_pixels(&self) -> impl Iterator<Item = Pixel<Rgb888>> + '_ {
        let width = self.size.width as usize;
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, &c)| Pixel(Point::new((i % width) as i32, (i / width) as i32), c))
    }

    /// Packed `RGBRGB...` bytes, row-major.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for c in &self.pixels {
            bytes.extend_from_slice(&[c.r(), c.g(), c.b()]);
        }
        bytes
    }

    /// Draw target that blends everything at opacity `alpha`.
    pub const fn alpha(
        &mut self,
        alpha: f32,
    ) -> AlphaLayer<'_> {
        AlphaLayer { canvas: self, alpha }
    }

    /// Draw target that paints covered pixels with `gradient`.
    pub const fn gradient<'a, G: Gradient>(
        &'a mut self,
        gradient: &'a G,
    ) -> GradientLayer<'a, G> {
        GradientLayer { canvas: self, gradient }
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point, color);
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.pixels.fill(color);
        Ok(())
    }
}

/// Linear mix of `under` toward `over` by `alpha`.
pub fn mix(
    under: Rgb888,
    over: Rgb888,
    alpha: f32,
) -> Rgb888 {
    let channel = |u: u8, o: u8| -> u8 {
        let v = f32::from(o).mul_add(alpha, f32::from(u) * (1.0 - alpha));
        v.round().clamp(0.0, 255.0) as u8
    };
    Rgb888::new(
        channel(under.r(), over.r()),
        channel(under.g(), over.g()),
        channel(under.b(), over.b()),
    )
}

// =============================================================================
// Compositing Adapters
// =============================================================================

/// Draws onto a [`Canvas`] at a fixed opacity.
pub struct AlphaLayer<'a> {
    canvas: &'a mut Canvas,
    alpha: f32,
}

impl OriginDimensions for AlphaLayer<'_> {
    fn size(&self) -> Size { self.canvas.size }
}

impl DrawTarget for AlphaLayer<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.canvas.blend_pixel(point, color, self.alpha);
        }
        Ok(())
    }
}

/// Paints covered pixels of a [`Canvas`] with gradient samples.
pub struct GradientLayer<'a, G: Gradient> {
    canvas: &'a mut Canvas,
    gradient: &'a G,
}

impl<G: Gradient> OriginDimensions for GradientLayer<'_, G> {
    fn size(&self) -> Size { self.canvas.size }
}

impl<G: Gradient> DrawTarget for GradientLayer<'_, G> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, _) in pixels {
            let (color, alpha) = self.gradient.sample(point);
            self.canvas.blend_pixel(point, color, alpha);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    use super::*;
    use crate::gradient::{ColorStop, LinearGradient};

    #[test]
    fn test_new_canvas_is_black() {
        let canvas = Canvas::new(Size::new(4, 3));
        assert_eq!(canvas.size(), Size::new(4, 3));
        assert_eq!(canvas.pixels().len(), 12);
        assert!(canvas.pixels().iter().all(|&c| c == Rgb888::BLACK));
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut canvas = Canvas::new(Size::new(2, 2));
        canvas.set_pixel(Point::new(-1, 0), Rgb888::WHITE);
        canvas.set_pixel(Point::new(2, 0), Rgb888::WHITE);
        canvas.blend_pixel(Point::new(0, 5), Rgb888::WHITE, 0.5);
        assert!(canvas.pixels().iter().all(|&c| c == Rgb888::BLACK));
        assert_eq!(canvas.pixel(Point::new(5, 5)), None);
    }

    #[test]
    fn test_blend_half() {
        let mut canvas = Canvas::new(Size::new(1, 1));
        canvas.blend_pixel(Point::zero(), Rgb888::WHITE, 0.5);
        let c = canvas.pixel(Point::zero()).unwrap();
        assert!((127..=128).contains(&c.r()), "Half white over black should be mid gray, got {c:?}");
    }

    #[test]
    fn test_blend_extremes() {
        let mut canvas = Canvas::new(Size::new(1, 1));
        canvas.blend_pixel(Point::zero(), Rgb888::RED, 0.0);
        assert_eq!(canvas.pixel(Point::zero()), Some(Rgb888::BLACK));
        canvas.blend_pixel(Point::zero(), Rgb888::RED, 1.0);
        assert_eq!(canvas.pixel(Point::zero()), Some(Rgb888::RED));
    }

    #[test]
    fn test_draw_target_fill() {
        let mut canvas = Canvas::new(Size::new(10, 10));
        Rectangle::new(Point::new(2, 2), Size::new(3, 3))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::GREEN))
            .draw(&mut canvas)
            .ok();
        assert_eq!(canvas.pixel(Point::new(3, 3)), Some(Rgb888::GREEN));
        assert_eq!(canvas.pixel(Point::new(6, 6)), Some(Rgb888::BLACK));
    }

    #[test]
    fn test_alpha_layer_blends() {
        let mut canvas = Canvas::new(Size::new(4, 4));
        canvas.clear(Rgb888::WHITE).ok();
        Rectangle::new(Point::zero(), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::BLACK))
            .draw(&mut canvas.alpha(0.25))
            .ok();
        let c = canvas.pixel(Point::new(1, 1)).unwrap();
        assert!((190..=192).contains(&c.r()), "25% black over white, got {c:?}");
    }

    #[test]
    fn test_gradient_layer_ignores_primitive_color() {
        const STOPS: [ColorStop; 2] = [ColorStop::opaque(0.0, Rgb888::RED), ColorStop::opaque(1.0, Rgb888::BLUE)];
        let gradient = LinearGradient::new((0.0, 0.0), (10.0, 0.0), &STOPS);
        let mut canvas = Canvas::new(Size::new(10, 1));
        Rectangle::new(Point::zero(), Size::new(10, 1))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::GREEN))
            .draw(&mut canvas.gradient(&gradient))
            .ok();
        let left = canvas.pixel(Point::new(0, 0)).unwrap();
        let right = canvas.pixel(Point::new(9, 0)).unwrap();
        assert_eq!(left.g(), 0);
        assert!(left.r() > left.b());
        assert!(right.b() > right.r());
    }

    #[test]
    fn test_rgb_bytes_layout() {
        let mut canvas = Canvas::new(Size::new(2, 1));
        canvas.set_pixel(Point::new(1, 0), Rgb888::new(1, 2, 3));
        assert_eq!(canvas.to_rgb_bytes(), vec![0, 0, 0, 1, 2, 3]);
    }

    #[test]
    fn test_iter_pixels_coordinates() {
        let canvas = Canvas::new(Size::new(3, 2));
        let last = canvas.iter_pixels().last().unwrap();
        assert_eq!(last.0, Point::new(2, 1));
    }

    #[test]
    fn test_resize_resets() {
        let mut canvas = Canvas::new(Size::new(2, 2));
        canvas.clear(Rgb888::WHITE).ok();
        canvas.resize(Size::new(2, 2));
        assert_eq!(canvas.pixel(Point::zero()), Some(Rgb888::WHITE), "Same size keeps contents");
        canvas.resize(Size::new(3, 3));
        assert_eq!(canvas.pixel(Point::zero()), Some(Rgb888::BLACK));
    }
}
