//! ### English
//! Texture objects and pixel uploads.
//!
//! Uploads honour `UNPACK_FLIP_Y_WEBGL` as it is when the call is made: the rows are flipped once,
//! before the operation is queued, so later `pixelStorei` calls never affect it.
//!
//! Pixel data must cover every byte GL will read for the declared size, format, type and
//! `UNPACK_ALIGNMENT`; shorter sources are rejected before anything is queued.
//!
//! ### 中文
//! 纹理对象与像素上传。
//!
//! 上传遵循调用时刻的 `UNPACK_FLIP_Y_WEBGL`：行在操作入队之前翻转一次，之后的 `pixelStorei` 调用
//! 不会影响已排队的上传。
//!
//! 像素数据必须覆盖 GL 按声明的尺寸、格式、类型与 `UNPACK_ALIGNMENT` 读取的全部字节；不足的数据源
//! 在入队前即被拒绝。

use std::sync::Arc;

use gleam::gl::{GLenum, GLint};
use log::debug;

use super::{PixelSource, TexImage, TexRegion, first_handle};
use crate::bridge::constants::{TEXTURE_MAX_LOD, TEXTURE_MIN_LOD};
use crate::bridge::context::BridgeContext;
use crate::bridge::error::{BridgeError, Result};
use crate::bridge::image_asset::{self, DecodedImage};
use crate::bridge::object_table::{ObjectId, ObjectKind};
use crate::bridge::pixels::{UnpackLayout, bytes_per_pixel, flip_layers};
use crate::bridge::value::{TypedArray, Value};

fn extent(value: GLint) -> usize {
    usize::try_from(value).unwrap_or(0)
}

/// Size of a decoded asset as GL dimensions.
fn asset_size(image: &DecodedImage) -> Result<(GLint, GLint)> {
    let width = GLint::try_from(image.size.width).map_err(|_| BridgeError::InvalidPixelData)?;
    let height = GLint::try_from(image.size.height).map_err(|_| BridgeError::InvalidPixelData)?;
    Ok((width, height))
}

impl BridgeContext {
    pub fn create_texture(&self) -> Result<ObjectId> {
        self.enqueue_future(ObjectKind::Texture, |gl| first_handle(gl.gen_textures(1)))
    }

    pub fn delete_texture(&self, id: Option<ObjectId>) {
        let Some(id) = id else { return };
        self.enqueue(move |session| {
            if let Some(handle) = session.forget(id, ObjectKind::Texture) {
                session.gl.delete_textures(&[handle]);
            }
            Ok(())
        });
    }

    pub fn bind_texture(&self, target: GLenum, id: Option<ObjectId>) {
        self.enqueue(move |session| {
            let handle = session.resolve(id);
            session.gl.bind_texture(target, handle);
            Ok(())
        });
    }

    pub fn is_texture(&self, id: Option<ObjectId>) -> Result<bool> {
        self.enqueue_blocking(move |session| Ok(session.is_object(id, ObjectKind::Texture)))
    }

    /// ### English
    /// `getTexParameter`; the LOD clamps are floats, everything else an integer.
    ///
    /// ### 中文
    /// `getTexParameter`；LOD 范围为浮点数，其余为整数。
    pub fn get_tex_parameter(&self, target: GLenum, pname: GLenum) -> Result<Value> {
        self.enqueue_blocking(move |session| {
            let gl = session.gl;
            Ok(match pname {
                TEXTURE_MIN_LOD | TEXTURE_MAX_LOD => gl.get_tex_parameter_fv(target, pname).into(),
                _ => gl.get_tex_parameter_iv(target, pname).into(),
            })
        })
    }

    /// ### English
    /// `texImage2D`.
    ///
    /// An image asset is decoded to RGBA8 right away and its size replaces `width`/`height`.
    ///
    /// #### Parameters
    /// - `image`: upload shape; `depth` is ignored.
    /// - `source`: `null`, a typed array, or an asset's `localUri`.
    ///
    /// ### 中文
    /// `texImage2D`。
    ///
    /// 图像资源会立即解码为 RGBA8，其尺寸替代 `width`/`height`。
    ///
    /// #### 参数
    /// - `image`：上传形状；忽略 `depth`。
    /// - `source`：`null`、typed array 或资源的 `localUri`。
    pub fn tex_image_2d(&self, image: TexImage, source: PixelSource<'_>) -> Result<()> {
        let mut image = image;
        let pixels = match source {
            PixelSource::Null => None,
            PixelSource::Data(array) => Some(self.unpack(
                array,
                image.width,
                image.height,
                1,
                image.format,
                image.ty,
            )?),
            PixelSource::Asset(uri) => {
                let decoded = image_asset::load(uri)?;
                (image.width, image.height) = asset_size(&decoded)?;
                Some(self.unpack_owned(
                    decoded.rgba,
                    image.width,
                    image.height,
                    1,
                    image.format,
                    image.ty,
                )?)
            }
        };
        self.enqueue(move |session| {
            let TexImage {
                target,
                level,
                internal_format,
                width,
                height,
                border,
                format,
                ty,
                ..
            } = image;
            session.gl.tex_image_2d(
                target,
                level,
                internal_format,
                width,
                height,
                border,
                format,
                ty,
                pixels.as_deref(),
            );
            Ok(())
        });
        Ok(())
    }

    /// ### English
    /// `texSubImage2D`; a `null` source uploads zeros over the region.
    ///
    /// ### 中文
    /// `texSubImage2D`；数据源为 `null` 时向该区域上传全零数据。
    pub fn tex_sub_image_2d(&self, region: TexRegion, source: PixelSource<'_>) -> Result<()> {
        let mut region = region;
        let pixels = match source {
            PixelSource::Null => self.zeroed(region.width, region.height, 1, region.format, region.ty)?,
            PixelSource::Data(array) => self.unpack(
                array,
                region.width,
                region.height,
                1,
                region.format,
                region.ty,
            )?,
            PixelSource::Asset(uri) => {
                let decoded = image_asset::load(uri)?;
                (region.width, region.height) = asset_size(&decoded)?;
                self.unpack_owned(
                    decoded.rgba,
                    region.width,
                    region.height,
                    1,
                    region.format,
                    region.ty,
                )?
            }
        };
        self.enqueue(move |session| {
            let r = region;
            session.gl.tex_sub_image_2d(
                r.target, r.level, r.x, r.y, r.width, r.height, r.format, r.ty, &pixels,
            );
            Ok(())
        });
        Ok(())
    }

    /// ### English
    /// `texImage3D`; each depth layer is flipped separately.
    ///
    /// ### 中文
    /// `texImage3D`；每个深度层分别翻转。
    pub fn tex_image_3d(&self, image: TexImage, data: Option<&TypedArray>) -> Result<()> {
        let pixels = match data {
            Some(array) => Some(self.unpack(
                array,
                image.width,
                image.height,
                image.depth,
                image.format,
                image.ty,
            )?),
            None => None,
        };
        self.enqueue(move |session| {
            let i = image;
            session.gl.tex_image_3d(
                i.target,
                i.level,
                i.internal_format,
                i.width,
                i.height,
                i.depth,
                i.border,
                i.format,
                i.ty,
                pixels.as_deref(),
            );
            Ok(())
        });
        Ok(())
    }

    pub fn tex_sub_image_3d(&self, region: TexRegion, data: Option<&TypedArray>) -> Result<()> {
        let r = region;
        let pixels = match data {
            Some(array) => self.unpack(array, r.width, r.height, r.depth, r.format, r.ty)?,
            None => self.zeroed(r.width, r.height, r.depth, r.format, r.ty)?,
        };
        self.enqueue(move |session| {
            session.gl.tex_sub_image_3d(
                r.target, r.level, r.x, r.y, r.z, r.width, r.height, r.depth, r.format, r.ty,
                &pixels,
            );
            Ok(())
        });
        Ok(())
    }

    /// Layout GL will read the upload with, given the current `UNPACK_ALIGNMENT`.
    fn unpack_layout(
        &self,
        width: GLint,
        height: GLint,
        depth: GLint,
        format: GLenum,
        ty: GLenum,
    ) -> Result<UnpackLayout> {
        let bpp = bytes_per_pixel(ty, format);
        if bpp == 0 {
            debug!("no pixel size for format 0x{format:04X} type 0x{ty:04X}");
            return Err(BridgeError::InvalidPixelData);
        }
        UnpackLayout::new(
            bpp,
            extent(width),
            extent(height),
            extent(depth),
            self.flags().unpack_alignment(),
        )
        .ok_or(BridgeError::InvalidPixelData)
    }

    /// Layout of an upload whose source holds `len` bytes; fails if GL would read past them.
    fn checked_layout(
        &self,
        len: usize,
        width: GLint,
        height: GLint,
        depth: GLint,
        format: GLenum,
        ty: GLenum,
    ) -> Result<UnpackLayout> {
        let layout = self.unpack_layout(width, height, depth, format, ty)?;
        let required = layout
            .required_len()
            .ok_or(BridgeError::InvalidPixelData)?;
        if len < required {
            debug!("upload of {width}x{height}x{depth} needs {required} bytes, got {len}");
            return Err(BridgeError::InvalidPixelData);
        }
        Ok(layout)
    }

    /// Captures upload bytes, flipping them into a private copy when `UNPACK_FLIP_Y_WEBGL` is set.
    fn unpack(
        &self,
        array: &TypedArray,
        width: GLint,
        height: GLint,
        depth: GLint,
        format: GLenum,
        ty: GLenum,
    ) -> Result<Arc<[u8]>> {
        let layout = self.checked_layout(array.bytes.len(), width, height, depth, format, ty)?;
        if !self.flags().unpack_flip_y() {
            return Ok(self.capture(array));
        }
        Ok(Arc::from(flipped(array.bytes.to_vec(), layout)))
    }

    fn unpack_owned(
        &self,
        bytes: Vec<u8>,
        width: GLint,
        height: GLint,
        depth: GLint,
        format: GLenum,
        ty: GLenum,
    ) -> Result<Arc<[u8]>> {
        let layout = self.checked_layout(bytes.len(), width, height, depth, format, ty)?;
        if !self.flags().unpack_flip_y() {
            return Ok(Arc::from(bytes));
        }
        Ok(Arc::from(flipped(bytes, layout)))
    }

    fn zeroed(
        &self,
        width: GLint,
        height: GLint,
        depth: GLint,
        format: GLenum,
        ty: GLenum,
    ) -> Result<Arc<[u8]>> {
        let len = self
            .unpack_layout(width, height, depth, format, ty)?
            .required_len()
            .ok_or(BridgeError::InvalidPixelData)?;
        Ok(Arc::from(vec![0u8; len]))
    }
}

/// Reverses the rows of every layer; the last row is padded first so every row is a full stride.
fn flipped(mut bytes: Vec<u8>, layout: UnpackLayout) -> Vec<u8> {
    if let Some(padded) = layout.padded_len() {
        if bytes.len() < padded {
            bytes.resize(padded, 0);
        }
    }
    flip_layers(&mut bytes, layout.stride, layout.rows, layout.layers);
    bytes
}
