//! ### English
//! The WebGL-shaped call surface of [`BridgeContext`](super::BridgeContext), grouped by area.
//!
//! ### 中文
//! [`BridgeContext`](super::BridgeContext) 的 WebGL 形态调用面，按领域分组。

mod buffers;
mod framebuffers;
mod programs;
mod state;
mod textures;
mod uniforms;
mod webgl2;

use gleam::gl::{GLenum, GLint, GLuint};

use crate::bridge::value::{TypedArray, Value};

pub use programs::{ActiveInfo, PrecisionFormat};

/// ### English
/// Where the pixels of a texture upload come from.
///
/// ### 中文
/// 纹理上传的像素来源。
#[derive(Clone, Copy, Debug)]
pub enum PixelSource<'a> {
    /// `null`: allocate storage without initializing it.
    Null,
    Data(&'a TypedArray),
    /// An image asset's `localUri`; its decoded size overrides the declared one.
    Asset(&'a str),
}

/// ### English
/// Shape of a `texImage2D`/`texImage3D` upload. `depth` is ignored for 2D targets.
///
/// ### 中文
/// `texImage2D`/`texImage3D` 上传的形状；2D 目标忽略 `depth`。
#[derive(Clone, Copy, Debug)]
pub struct TexImage {
    pub target: GLenum,
    pub level: GLint,
    pub internal_format: GLint,
    pub width: GLint,
    pub height: GLint,
    pub depth: GLint,
    pub border: GLint,
    pub format: GLenum,
    pub ty: GLenum,
}

/// ### English
/// Region updated by `texSubImage2D`/`texSubImage3D`. `z`/`depth` are ignored for 2D targets.
///
/// ### 中文
/// `texSubImage2D`/`texSubImage3D` 更新的区域；2D 目标忽略 `z`/`depth`。
#[derive(Clone, Copy, Debug)]
pub struct TexRegion {
    pub target: GLenum,
    pub level: GLint,
    pub x: GLint,
    pub y: GLint,
    pub z: GLint,
    pub width: GLint,
    pub height: GLint,
    pub depth: GLint,
    pub format: GLenum,
    pub ty: GLenum,
}

/// First handle of a `glGen*` result, or 0 if the driver returned none.
fn first_handle(handles: Vec<GLuint>) -> GLuint {
    handles.first().copied().unwrap_or(0)
}

fn bool_param(value: GLint) -> Value {
    Value::Bool(value != 0)
}
