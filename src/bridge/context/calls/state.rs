//! ### English
//! Context information, error/state queries and `pixelStorei`.
//!
//! ### 中文
//! 上下文信息、错误/状态查询以及 `pixelStorei`。

use gleam::gl::{GLenum, GLint, GLuint};
use log::warn;

use crate::bridge::constants::*;
use crate::bridge::context::BridgeContext;
use crate::bridge::error::{BridgeError, Result};
use crate::bridge::object_table::ObjectKind;
use crate::bridge::session::GlSession;
use crate::bridge::value::{TypedArray, Value};

impl BridgeContext {
    /// ### English
    /// Attributes of the drawing buffer. These are fixed by the embedder's surface.
    ///
    /// ### 中文
    /// 绘制缓冲的属性；由宿主的 surface 决定，固定不变。
    pub fn get_context_attributes(&self) -> Value {
        Value::object([
            ("alpha", true.into()),
            ("depth", true.into()),
            ("stencil", false.into()),
            ("antialias", false.into()),
            ("premultipliedAlpha", false.into()),
        ])
    }

    pub fn is_context_lost(&self) -> bool {
        false
    }

    /// ### English
    /// Blocking `glGetError`; everything queued before it has run when it returns.
    ///
    /// ### 中文
    /// 阻塞的 `glGetError`；返回时之前排队的操作均已执行。
    pub fn get_error(&self) -> Result<GLenum> {
        self.enqueue_blocking(|session| Ok(session.gl.get_error()))
    }

    pub fn is_enabled(&self, cap: GLenum) -> Result<bool> {
        self.enqueue_blocking(move |session| Ok(session.gl.is_enabled(cap)))
    }

    /// ### English
    /// `UNPACK_FLIP_Y_WEBGL` is recorded on the calling thread and applied to later uploads only.
    /// The other WebGL-only parameters are ignored. Row-length, skip and image-height parameters
    /// are rejected; everything else goes to GL.
    ///
    /// ### 中文
    /// `UNPACK_FLIP_Y_WEBGL` 记录在调用线程上，仅作用于之后的上传。其余 WebGL 专有参数被忽略。
    /// 行长度、跳过与图像高度类参数会被拒绝；其它参数转发给 GL。
    pub fn pixel_store_i(&self, pname: GLenum, param: GLint) -> Result<()> {
        match pname {
            UNPACK_FLIP_Y_WEBGL => self.flags().set_unpack_flip_y(param != 0),
            UNPACK_PREMULTIPLY_ALPHA_WEBGL | UNPACK_COLORSPACE_CONVERSION_WEBGL => {
                warn!("pixelStorei: ignoring WebGL parameter 0x{pname:04X} = {param}");
            }
            UNPACK_ROW_LENGTH | UNPACK_SKIP_ROWS | UNPACK_SKIP_PIXELS | UNPACK_SKIP_IMAGES
            | UNPACK_IMAGE_HEIGHT | PACK_ROW_LENGTH | PACK_SKIP_ROWS | PACK_SKIP_PIXELS => {
                return Err(BridgeError::UnsupportedParameter(pname));
            }
            _ => {
                if pname == UNPACK_ALIGNMENT {
                    self.flags().set_unpack_alignment(param);
                }
                self.enqueue(move |session| {
                    session.gl.pixel_store_i(pname, param);
                    Ok(())
                });
            }
        }
        Ok(())
    }

    /// ### English
    /// `getParameter`, shaped the way WebGL returns each parameter.
    ///
    /// WebGL-only parameters are answered on the calling thread; binding queries for object kinds
    /// the bridge does not track are rejected; everything else is a blocking GL query.
    ///
    /// ### 中文
    /// `getParameter`，按 WebGL 对各参数的返回形态构造结果。
    ///
    /// WebGL 专有参数在调用线程上直接回答；桥接层不跟踪的对象类型的 binding 查询会被拒绝；
    /// 其余参数为阻塞的 GL 查询。
    pub fn get_parameter(&self, pname: GLenum) -> Result<Value> {
        match pname {
            COMPRESSED_TEXTURE_FORMATS => Ok(TypedArray::from_f32(&[]).into()),
            UNPACK_FLIP_Y_WEBGL => Ok(self.flags().unpack_flip_y().into()),
            UNPACK_PREMULTIPLY_ALPHA_WEBGL | UNPACK_COLORSPACE_CONVERSION_WEBGL => {
                Ok(false.into())
            }
            COPY_READ_BUFFER_BINDING
            | COPY_WRITE_BUFFER_BINDING
            | FRAMEBUFFER_BINDING
            | READ_FRAMEBUFFER_BINDING
            | RENDERBUFFER_BINDING
            | SAMPLER_BINDING
            | TEXTURE_BINDING_2D
            | TEXTURE_BINDING_2D_ARRAY
            | TEXTURE_BINDING_3D
            | TEXTURE_BINDING_CUBE_MAP
            | TRANSFORM_FEEDBACK_BINDING
            | TRANSFORM_FEEDBACK_BUFFER_BINDING
            | UNIFORM_BUFFER_BINDING
            | VERTEX_ARRAY_BINDING => Err(BridgeError::UnsupportedParameter(pname)),
            _ => self.enqueue_blocking(move |session| Ok(query_parameter(session, pname))),
        }
    }
}

fn query_parameter(session: &GlSession<'_>, pname: GLenum) -> Value {
    let gl = session.gl;
    let floats = |n: usize| Value::from(TypedArray::from_f32(&gl.get_float_v(pname)[..n]));
    let ints = |n: usize| Value::from(TypedArray::from_i32(&gl.get_integer_v(pname)[..n]));
    let bound = |kind: ObjectKind| {
        let handle = gl.get_integer_v(pname)[0] as GLuint;
        Value::from(session.state.objects.find(handle, kind))
    };
    match pname {
        ALIASED_LINE_WIDTH_RANGE | ALIASED_POINT_SIZE_RANGE | DEPTH_RANGE => floats(2),
        BLEND_COLOR | COLOR_CLEAR_VALUE => floats(4),
        MAX_VIEWPORT_DIMS => ints(2),
        SCISSOR_BOX | VIEWPORT => ints(4),
        COLOR_WRITEMASK => Value::Array(
            gl.get_boolean_v(pname)
                .iter()
                .map(|&b| Value::Bool(b != 0))
                .collect(),
        ),
        RASTERIZER_DISCARD
        | SAMPLE_ALPHA_TO_COVERAGE
        | SAMPLE_COVERAGE
        | TRANSFORM_FEEDBACK_ACTIVE
        | TRANSFORM_FEEDBACK_PAUSED => Value::Bool(gl.get_integer_v(pname)[0] != 0),
        RENDERER | SHADING_LANGUAGE_VERSION | VENDOR | VERSION => {
            Value::String(gl.get_string(pname))
        }
        DEPTH_CLEAR_VALUE
        | LINE_WIDTH
        | POLYGON_OFFSET_FACTOR
        | POLYGON_OFFSET_UNITS
        | SAMPLE_COVERAGE_VALUE
        | MAX_TEXTURE_LOD_BIAS => Value::from(gl.get_float_v(pname)[0]),
        ARRAY_BUFFER_BINDING | ELEMENT_ARRAY_BUFFER_BINDING => bound(ObjectKind::Buffer),
        CURRENT_PROGRAM => bound(ObjectKind::Program),
        _ => Value::from(gl.get_integer_v(pname)[0]),
    }
}
