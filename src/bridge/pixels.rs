//! ### English
//! Pixel layout helpers: bytes per pixel, the client-memory layout of an upload, and vertical
//! flipping for `UNPACK_FLIP_Y_WEBGL`.
//!
//! ### 中文
//! 像素布局辅助：每像素字节数、上传数据在客户端内存中的布局，以及 `UNPACK_FLIP_Y_WEBGL` 所需的
//! 垂直翻转。

use gleam::gl::GLenum;

use super::constants::*;

/// ### English
/// Bytes occupied by one pixel of `format`/`ty`, or 0 for combinations the bridge does not know.
///
/// Packed types have a fixed size regardless of format.
///
/// ### 中文
/// `format`/`ty` 组合下单个像素占用的字节数；桥接层不认识的组合返回 0。
///
/// 打包类型的大小固定，与格式无关。
pub fn bytes_per_pixel(ty: GLenum, format: GLenum) -> usize {
    let bytes_per_component = match ty {
        UNSIGNED_BYTE | BYTE => 1,
        UNSIGNED_SHORT | SHORT | HALF_FLOAT | HALF_FLOAT_OES => 2,
        UNSIGNED_INT | INT | FLOAT => 4,
        UNSIGNED_SHORT_5_6_5 | UNSIGNED_SHORT_4_4_4_4 | UNSIGNED_SHORT_5_5_5_1 => return 2,
        UNSIGNED_INT_2_10_10_10_REV
        | UNSIGNED_INT_10F_11F_11F_REV
        | UNSIGNED_INT_5_9_9_9_REV
        | UNSIGNED_INT_24_8 => return 4,
        FLOAT_32_UNSIGNED_INT_24_8_REV => return 8,
        _ => 0,
    };
    let components = match format {
        LUMINANCE | ALPHA | RED | RED_INTEGER | DEPTH_COMPONENT => 1,
        LUMINANCE_ALPHA | RG | RG_INTEGER => 2,
        RGB | RGB_INTEGER => 3,
        RGBA | RGBA_INTEGER => 4,
        _ => 0,
    };
    bytes_per_component * components
}

/// ### English
/// How GL walks client memory for an upload: each row starts on a multiple of
/// `UNPACK_ALIGNMENT`, layers follow each other without extra padding.
///
/// ### 中文
/// GL 上传时遍历客户端内存的方式：每行起始于 `UNPACK_ALIGNMENT` 的倍数处，各层之间没有额外填充。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnpackLayout {
    pub bytes_per_row: usize,
    pub stride: usize,
    pub rows: usize,
    pub layers: usize,
}

impl UnpackLayout {
    /// ### English
    /// Returns `None` when a size overflows `usize` or `alignment` is 0.
    ///
    /// ### 中文
    /// 尺寸溢出 `usize` 或 `alignment` 为 0 时返回 `None`。
    pub fn new(
        bytes_per_pixel: usize,
        width: usize,
        rows: usize,
        layers: usize,
        alignment: usize,
    ) -> Option<Self> {
        let bytes_per_row = width.checked_mul(bytes_per_pixel)?;
        let stride = bytes_per_row.checked_next_multiple_of(alignment)?;
        Some(Self {
            bytes_per_row,
            stride,
            rows,
            layers,
        })
    }

    /// ### English
    /// Bytes GL reads. Every row is padded to `stride` except the very last one.
    ///
    /// ### 中文
    /// GL 读取的字节数；除最后一行外，每行都填充到 `stride`。
    pub fn required_len(&self) -> Option<usize> {
        let rows = self.rows.checked_mul(self.layers)?;
        if rows == 0 || self.bytes_per_row == 0 {
            return Some(0);
        }
        self.stride.checked_mul(rows - 1)?.checked_add(self.bytes_per_row)
    }

    /// Length with the last row padded as well.
    pub fn padded_len(&self) -> Option<usize> {
        self.stride.checked_mul(self.rows)?.checked_mul(self.layers)
    }
}

/// ### English
/// Reverses the row order of a tightly packed image in place.
///
/// Rows beyond `bytes_per_row * rows` are left untouched; a short buffer only flips the complete
/// rows it holds.
///
/// ### 中文
/// 原地反转紧密排列图像的行顺序。
///
/// 超出 `bytes_per_row * rows` 的部分保持不变；缓冲区不足时只翻转其中完整的行。
pub fn flip_rows(pixels: &mut [u8], bytes_per_row: usize, rows: usize) {
    if bytes_per_row == 0 {
        return;
    }
    let rows = rows.min(pixels.len() / bytes_per_row);
    let image = &mut pixels[..rows * bytes_per_row];
    let (mut top, mut bottom) = (0, rows);
    while top + 1 < bottom {
        bottom -= 1;
        let (head, tail) = image.split_at_mut(bottom * bytes_per_row);
        head[top * bytes_per_row..(top + 1) * bytes_per_row]
            .swap_with_slice(&mut tail[..bytes_per_row]);
        top += 1;
    }
}

/// ### English
/// Flips every depth layer of a 3D image independently.
///
/// ### 中文
/// 对 3D 图像的每个深度层分别进行翻转。
pub fn flip_layers(pixels: &mut [u8], bytes_per_row: usize, rows: usize, layers: usize) {
    let layer_len = bytes_per_row * rows;
    if layer_len == 0 {
        return;
    }
    for layer in pixels.chunks_exact_mut(layer_len).take(layers) {
        flip_rows(layer, bytes_per_row, rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_per_pixel_matches_format_and_type() {
        assert_eq!(bytes_per_pixel(UNSIGNED_BYTE, RGBA), 4);
        assert_eq!(bytes_per_pixel(UNSIGNED_BYTE, RGB), 3);
        assert_eq!(bytes_per_pixel(FLOAT, RGBA), 16);
        assert_eq!(bytes_per_pixel(HALF_FLOAT, LUMINANCE_ALPHA), 4);
        assert_eq!(bytes_per_pixel(UNSIGNED_SHORT_5_6_5, RGB), 2);
        assert_eq!(bytes_per_pixel(UNSIGNED_SHORT_4_4_4_4, 0xDEAD), 2);
        assert_eq!(bytes_per_pixel(UNSIGNED_BYTE, 0xDEAD), 0);
        assert_eq!(bytes_per_pixel(0xDEAD, RGBA), 0);
    }

    #[test]
    fn webgl2_formats_and_packed_types_have_a_size() {
        assert_eq!(bytes_per_pixel(UNSIGNED_BYTE, RGBA_INTEGER), 4);
        assert_eq!(bytes_per_pixel(FLOAT, RG), 8);
        assert_eq!(bytes_per_pixel(UNSIGNED_INT, RED_INTEGER), 4);
        assert_eq!(bytes_per_pixel(UNSIGNED_INT_24_8, DEPTH_STENCIL), 4);
        assert_eq!(bytes_per_pixel(FLOAT_32_UNSIGNED_INT_24_8_REV, DEPTH_STENCIL), 8);
    }

    #[test]
    fn unpack_rows_are_padded_to_the_alignment_except_the_last() {
        let rgb = UnpackLayout::new(3, 1, 2, 1, 4).unwrap();
        assert_eq!((rgb.bytes_per_row, rgb.stride), (3, 4));
        assert_eq!(rgb.required_len(), Some(7));
        assert_eq!(rgb.padded_len(), Some(8));

        let tight = UnpackLayout::new(3, 1, 2, 1, 1).unwrap();
        assert_eq!(tight.required_len(), Some(6));

        let volume = UnpackLayout::new(4, 2, 2, 3, 4).unwrap();
        assert_eq!(volume.required_len(), Some(48));

        assert_eq!(UnpackLayout::new(4, 0, 9, 1, 4).unwrap().required_len(), Some(0));
        assert_eq!(UnpackLayout::new(4, 8, 0, 1, 4).unwrap().required_len(), Some(0));
        assert!(UnpackLayout::new(4, usize::MAX, 1, 1, 4).is_none());
        assert_eq!(
            UnpackLayout::new(4, 1 << 20, usize::MAX, 1, 4).unwrap().required_len(),
            None
        );
    }

    #[test]
    fn flip_rows_reverses_row_order() {
        let mut pixels = vec![1, 1, 2, 2, 3, 3];
        flip_rows(&mut pixels, 2, 3);
        assert_eq!(pixels, vec![3, 3, 2, 2, 1, 1]);

        let mut even = vec![1, 2, 3, 4];
        flip_rows(&mut even, 1, 4);
        assert_eq!(even, vec![4, 3, 2, 1]);
    }

    #[test]
    fn flip_twice_is_identity() {
        let original: Vec<u8> = (0..60).collect();
        let mut pixels = original.clone();
        flip_rows(&mut pixels, 12, 5);
        assert_ne!(pixels, original);
        flip_rows(&mut pixels, 12, 5);
        assert_eq!(pixels, original);
    }

    #[test]
    fn flip_ignores_degenerate_shapes() {
        let mut pixels = vec![1, 2, 3];
        flip_rows(&mut pixels, 0, 3);
        flip_rows(&mut pixels, 3, 1);
        assert_eq!(pixels, vec![1, 2, 3]);

        // Claims more rows than the buffer holds.
        let mut short = vec![1, 2, 3, 4, 9];
        flip_rows(&mut short, 2, 10);
        assert_eq!(short, vec![3, 4, 1, 2, 9]);
    }

    #[test]
    fn layers_flip_independently() {
        let mut pixels = vec![1, 2, 3, 4];
        flip_layers(&mut pixels, 1, 2, 2);
        assert_eq!(pixels, vec![2, 1, 4, 3]);
    }
}
