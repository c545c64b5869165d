//! ### English
//! Decoders for every method that takes objects, arrays, strings or pixel data, or that returns a
//! value. Each one reads its wire arguments and forwards to the typed [`BridgeContext`] surface.
//!
//! ### 中文
//! 所有接收对象、数组、字符串或像素数据，或有返回值的方法的解码器。每个解码器读取线上参数并转发到
//! 类型化的 [`BridgeContext`] 调用面。

use gleam::gl::GLint;

use super::MethodTable;
use crate::bridge::context::{BridgeContext, PixelSource, TexImage, TexRegion};
use crate::bridge::error::{BridgeError, Result};
use crate::bridge::image_asset;
use crate::bridge::value::{Args, TypedArray, Value};

const DONE: Result<Value> = Ok(Value::Undefined);

/// Uniform location argument; `null` becomes `-1`.
fn location(args: Args<'_>, index: usize) -> Result<GLint> {
    if args.get(index).is_nullish() {
        Ok(-1)
    } else {
        args.i32(index)
    }
}

/// ### English
/// Reads a texture pixel source. Only `null` means "no data"; typed arrays are accepted only where
/// WebGL allows an explicit size.
///
/// ### 中文
/// 读取纹理像素来源。只有 `null` 表示"无数据"；只有在 WebGL 允许显式尺寸的形式下才接受 typed
/// array。
fn pixel_source(value: &Value, allow_data: bool) -> Result<PixelSource<'_>> {
    match value {
        Value::Null => Ok(PixelSource::Null),
        Value::TypedArray(array) if allow_data => Ok(PixelSource::Data(array)),
        _ => image_asset::local_uri(value)
            .map(PixelSource::Asset)
            .ok_or(BridgeError::InvalidPixelData),
    }
}

/// Optional typed array for 3D uploads; anything but `null` or a typed array is rejected.
fn optional_data(value: &Value) -> Result<Option<&TypedArray>> {
    match value {
        Value::Null => Ok(None),
        Value::TypedArray(array) => Ok(Some(array)),
        _ => Err(BridgeError::InvalidPixelData),
    }
}

fn list<T: Into<Value>>(items: Vec<T>) -> Value {
    Value::Array(items.into_iter().map(Into::into).collect())
}

fn buffer_data(cx: &BridgeContext, a: Args<'_>) -> Result<Value> {
    let target = a.u32(0)?;
    let usage = a.u32(2)?;
    match a.get(1) {
        Value::TypedArray(data) => cx.buffer_data(target, data, usage),
        Value::Null | Value::Undefined => cx.buffer_data_size(target, 0, usage),
        _ => cx.buffer_data_size(target, a.f64(1)? as isize, usage),
    }
    DONE
}

fn buffer_sub_data(cx: &BridgeContext, a: Args<'_>) -> Result<Value> {
    let data = match a.get(2) {
        Value::Null | Value::Undefined => None,
        _ => Some(a.typed_array(2)?),
    };
    cx.buffer_sub_data(a.u32(0)?, a.f64(1)? as isize, data);
    DONE
}

fn read_pixels(cx: &BridgeContext, a: Args<'_>) -> Result<Value> {
    let destination = a.typed_array(6)?;
    let bytes = cx.read_pixels(
        a.i32(0)?,
        a.i32(1)?,
        a.i32(2)?,
        a.i32(3)?,
        a.u32(4)?,
        a.u32(5)?,
    )?;
    Ok(TypedArray::new(destination.kind, bytes).into())
}

/// `texImage2D` in its 9-argument (explicit size) and 6-argument (image source) forms.
fn tex_image_2d(cx: &BridgeContext, a: Args<'_>) -> Result<Value> {
    let (image, source) = if a.len() >= 9 {
        let image = TexImage {
            target: a.u32(0)?,
            level: a.i32(1)?,
            internal_format: a.i32(2)?,
            width: a.i32(3)?,
            height: a.i32(4)?,
            depth: 1,
            border: a.i32(5)?,
            format: a.u32(6)?,
            ty: a.u32(7)?,
        };
        (image, pixel_source(a.get(8), true)?)
    } else {
        let image = TexImage {
            target: a.u32(0)?,
            level: a.i32(1)?,
            internal_format: a.i32(2)?,
            width: 0,
            height: 0,
            depth: 1,
            border: 0,
            format: a.u32(3)?,
            ty: a.u32(4)?,
        };
        (image, pixel_source(a.get(5), false)?)
    };
    cx.tex_image_2d(image, source)?;
    DONE
}

/// `texSubImage2D` in its 9-argument and 7-argument forms.
fn tex_sub_image_2d(cx: &BridgeContext, a: Args<'_>) -> Result<Value> {
    let (region, source) = if a.len() >= 9 {
        let region = TexRegion {
            target: a.u32(0)?,
            level: a.i32(1)?,
            x: a.i32(2)?,
            y: a.i32(3)?,
            z: 0,
            width: a.i32(4)?,
            height: a.i32(5)?,
            depth: 1,
            format: a.u32(6)?,
            ty: a.u32(7)?,
        };
        (region, pixel_source(a.get(8), true)?)
    } else {
        let region = TexRegion {
            target: a.u32(0)?,
            level: a.i32(1)?,
            x: a.i32(2)?,
            y: a.i32(3)?,
            z: 0,
            width: 0,
            height: 0,
            depth: 1,
            format: a.u32(4)?,
            ty: a.u32(5)?,
        };
        (region, pixel_source(a.get(6), false)?)
    };
    cx.tex_sub_image_2d(region, source)?;
    DONE
}

fn tex_image_3d(cx: &BridgeContext, a: Args<'_>) -> Result<Value> {
    let image = TexImage {
        target: a.u32(0)?,
        level: a.i32(1)?,
        internal_format: a.i32(2)?,
        width: a.i32(3)?,
        height: a.i32(4)?,
        depth: a.i32(5)?,
        border: a.i32(6)?,
        format: a.u32(7)?,
        ty: a.u32(8)?,
    };
    cx.tex_image_3d(image, optional_data(a.get(9))?)?;
    DONE
}

fn tex_sub_image_3d(cx: &BridgeContext, a: Args<'_>) -> Result<Value> {
    let region = TexRegion {
        target: a.u32(0)?,
        level: a.i32(1)?,
        x: a.i32(2)?,
        y: a.i32(3)?,
        z: a.i32(4)?,
        width: a.i32(5)?,
        height: a.i32(6)?,
        depth: a.i32(7)?,
        format: a.u32(8)?,
        ty: a.u32(9)?,
    };
    cx.tex_sub_image_3d(region, optional_data(a.get(10))?)?;
    DONE
}

fn uniform_fv<const N: usize>(cx: &BridgeContext, a: Args<'_>) -> Result<Value> {
    cx.uniform_fv(N, location(a, 0)?, a.f32_list(1)?);
    DONE
}

fn uniform_iv<const N: usize>(cx: &BridgeContext, a: Args<'_>) -> Result<Value> {
    cx.uniform_iv(N, location(a, 0)?, a.i32_list(1)?);
    DONE
}

fn uniform_matrix_fv<const N: usize>(cx: &BridgeContext, a: Args<'_>) -> Result<Value> {
    cx.uniform_matrix_fv(N, location(a, 0)?, a.bool(1)?, a.f32_list(2)?);
    DONE
}

fn vertex_attrib_fv<const N: usize>(cx: &BridgeContext, a: Args<'_>) -> Result<Value> {
    cx.vertex_attrib_fv(N, a.u32(0)?, &a.f32_list(1)?);
    DONE
}

pub(super) fn register(t: &mut MethodTable) {
    // Context and extensions.
    t.call("getContextAttributes", 0, |cx, _| Ok(cx.get_context_attributes()));
    t.call("isContextLost", 0, |cx, _| Ok(cx.is_context_lost().into()));
    t.call("getSupportedExtensions", 0, |_, _| Ok(Value::Array(Vec::new())));
    t.call("getExtension", 1, |_, _| Ok(Value::Null));
    t.call("endFrameEXP", 0, |cx, _| {
        cx.end_frame();
        DONE
    });
    t.call("flushEXP", 0, |cx, _| {
        cx.flush_exp()?;
        DONE
    });

    // State.
    t.call("getError", 0, |cx, _| Ok(cx.get_error()?.into()));
    t.call("isEnabled", 1, |cx, a| Ok(cx.is_enabled(a.u32(0)?)?.into()));
    t.call("pixelStorei", 2, |cx, a| {
        cx.pixel_store_i(a.u32(0)?, a.i32(1)?)?;
        DONE
    });
    t.call("getParameter", 1, |cx, a| cx.get_parameter(a.u32(0)?));

    // Buffers.
    t.call("createBuffer", 0, |cx, _| Ok(cx.create_buffer()?.into()));
    t.call("deleteBuffer", 1, |cx, a| {
        cx.delete_buffer(a.object_id(0)?);
        DONE
    });
    t.call("bindBuffer", 2, |cx, a| {
        cx.bind_buffer(a.u32(0)?, a.object_id(1)?);
        DONE
    });
    t.call("isBuffer", 1, |cx, a| Ok(cx.is_buffer(a.object_id(0)?)?.into()));
    t.call("bufferData", 3, buffer_data);
    t.call("bufferSubData", 3, buffer_sub_data);
    t.call("getBufferParameter", 2, |cx, a| {
        Ok(cx.get_buffer_parameter(a.u32(0)?, a.u32(1)?)?.into())
    });

    // Framebuffers.
    t.call("createFramebuffer", 0, |cx, _| Ok(cx.create_framebuffer()?.into()));
    t.call("deleteFramebuffer", 1, |cx, a| {
        cx.delete_framebuffer(a.object_id(0)?);
        DONE
    });
    t.call("bindFramebuffer", 2, |cx, a| {
        cx.bind_framebuffer(a.u32(0)?, a.object_id(1)?);
        DONE
    });
    t.call("isFramebuffer", 1, |cx, a| {
        Ok(cx.is_framebuffer(a.object_id(0)?)?.into())
    });
    t.call("checkFramebufferStatus", 1, |cx, a| {
        Ok(cx.check_framebuffer_status(a.u32(0)?)?.into())
    });
    t.call("framebufferRenderbuffer", 4, |cx, a| {
        cx.framebuffer_renderbuffer(a.u32(0)?, a.u32(1)?, a.u32(2)?, a.object_id(3)?);
        DONE
    });
    t.call("framebufferTexture2D", 5, |cx, a| {
        cx.framebuffer_texture_2d(a.u32(0)?, a.u32(1)?, a.u32(2)?, a.object_id(3)?, a.i32(4)?);
        DONE
    });
    t.call("getFramebufferAttachmentParameter", 3, |cx, a| {
        cx.get_framebuffer_attachment_parameter(a.u32(0)?, a.u32(1)?, a.u32(2)?)
    });
    t.call("readPixels", 7, read_pixels);
    t.call2("framebufferTextureLayer", 5, |cx, a| {
        cx.framebuffer_texture_layer(a.u32(0)?, a.u32(1)?, a.object_id(2)?, a.i32(3)?, a.i32(4)?);
        DONE
    });
    t.call2("invalidateFramebuffer", 2, |cx, a| {
        cx.invalidate_framebuffer(a.u32(0)?, a.u32_list(1)?);
        DONE
    });
    t.call2("invalidateSubFramebuffer", 6, |cx, a| {
        cx.invalidate_sub_framebuffer(
            a.u32(0)?,
            a.u32_list(1)?,
            a.i32(2)?,
            a.i32(3)?,
            a.i32(4)?,
            a.i32(5)?,
        );
        DONE
    });

    // Renderbuffers.
    t.call("createRenderbuffer", 0, |cx, _| Ok(cx.create_renderbuffer()?.into()));
    t.call("deleteRenderbuffer", 1, |cx, a| {
        cx.delete_renderbuffer(a.object_id(0)?);
        DONE
    });
    t.call("bindRenderbuffer", 2, |cx, a| {
        cx.bind_renderbuffer(a.u32(0)?, a.object_id(1)?);
        DONE
    });
    t.call("isRenderbuffer", 1, |cx, a| {
        Ok(cx.is_renderbuffer(a.object_id(0)?)?.into())
    });
    t.call("getRenderbufferParameter", 2, |cx, a| {
        Ok(cx.get_renderbuffer_parameter(a.u32(0)?, a.u32(1)?)?.into())
    });

    // Textures.
    t.call("createTexture", 0, |cx, _| Ok(cx.create_texture()?.into()));
    t.call("deleteTexture", 1, |cx, a| {
        cx.delete_texture(a.object_id(0)?);
        DONE
    });
    t.call("bindTexture", 2, |cx, a| {
        cx.bind_texture(a.u32(0)?, a.object_id(1)?);
        DONE
    });
    t.call("isTexture", 1, |cx, a| Ok(cx.is_texture(a.object_id(0)?)?.into()));
    t.call("getTexParameter", 2, |cx, a| cx.get_tex_parameter(a.u32(0)?, a.u32(1)?));
    t.call("texImage2D", 6, tex_image_2d);
    t.call("texSubImage2D", 7, tex_sub_image_2d);
    t.call2("texImage3D", 10, tex_image_3d);
    t.call2("texSubImage3D", 11, tex_sub_image_3d);

    // Programs and shaders.
    t.call("createProgram", 0, |cx, _| Ok(cx.create_program()?.into()));
    t.call("deleteProgram", 1, |cx, a| {
        cx.delete_program(a.object_id(0)?);
        DONE
    });
    t.call("isProgram", 1, |cx, a| Ok(cx.is_program(a.object_id(0)?)?.into()));
    t.call("createShader", 1, |cx, a| Ok(cx.create_shader(a.u32(0)?)?.into()));
    t.call("deleteShader", 1, |cx, a| {
        cx.delete_shader(a.object_id(0)?);
        DONE
    });
    t.call("isShader", 1, |cx, a| Ok(cx.is_shader(a.object_id(0)?)?.into()));
    t.call("shaderSource", 2, |cx, a| {
        cx.shader_source(a.object_id(0)?, a.string(1)?.to_owned());
        DONE
    });
    t.call("getShaderSource", 1, |cx, a| {
        Ok(cx.get_shader_source(a.object_id(0)?)?.into())
    });
    t.call("compileShader", 1, |cx, a| {
        cx.compile_shader(a.object_id(0)?);
        DONE
    });
    t.call("getShaderParameter", 2, |cx, a| {
        cx.get_shader_parameter(a.object_id(0)?, a.u32(1)?)
    });
    t.call("getShaderInfoLog", 1, |cx, a| {
        Ok(cx.get_shader_info_log(a.object_id(0)?)?.into())
    });
    t.call("getShaderPrecisionFormat", 2, |cx, a| {
        Ok(cx.get_shader_precision_format(a.u32(0)?, a.u32(1)?)?.into())
    });
    t.call("attachShader", 2, |cx, a| {
        cx.attach_shader(a.object_id(0)?, a.object_id(1)?);
        DONE
    });
    t.call("detachShader", 2, |cx, a| {
        cx.detach_shader(a.object_id(0)?, a.object_id(1)?);
        DONE
    });
    t.call("getAttachedShaders", 1, |cx, a| {
        Ok(list(cx.get_attached_shaders(a.object_id(0)?)?))
    });
    t.call("linkProgram", 1, |cx, a| {
        cx.link_program(a.object_id(0)?);
        DONE
    });
    t.call("validateProgram", 1, |cx, a| {
        cx.validate_program(a.object_id(0)?);
        DONE
    });
    t.call("useProgram", 1, |cx, a| {
        cx.use_program(a.object_id(0)?);
        DONE
    });
    t.call("getProgramParameter", 2, |cx, a| {
        cx.get_program_parameter(a.object_id(0)?, a.u32(1)?)
    });
    t.call("getProgramInfoLog", 1, |cx, a| {
        Ok(cx.get_program_info_log(a.object_id(0)?)?.into())
    });
    t.call2("getFragDataLocation", 2, |cx, a| {
        Ok(cx.get_frag_data_location(a.object_id(0)?, a.string(1)?.to_owned())?.into())
    });

    // Attributes and uniforms.
    t.call("bindAttribLocation", 3, |cx, a| {
        cx.bind_attrib_location(a.object_id(0)?, a.u32(1)?, a.string(2)?.to_owned());
        DONE
    });
    t.call("getAttribLocation", 2, |cx, a| {
        Ok(cx.get_attrib_location(a.object_id(0)?, a.string(1)?.to_owned())?.into())
    });
    t.call("getUniformLocation", 2, |cx, a| {
        Ok(cx.get_uniform_location(a.object_id(0)?, a.string(1)?.to_owned())?.into())
    });
    t.call("getActiveAttrib", 2, |cx, a| {
        Ok(cx.get_active_attrib(a.object_id(0)?, a.u32(1)?)?.into())
    });
    t.call("getActiveUniform", 2, |cx, a| {
        Ok(cx.get_active_uniform(a.object_id(0)?, a.u32(1)?)?.into())
    });
    t.call("uniform1fv", 2, uniform_fv::<1>);
    t.call("uniform2fv", 2, uniform_fv::<2>);
    t.call("uniform3fv", 2, uniform_fv::<3>);
    t.call("uniform4fv", 2, uniform_fv::<4>);
    t.call("uniform1iv", 2, uniform_iv::<1>);
    t.call("uniform2iv", 2, uniform_iv::<2>);
    t.call("uniform3iv", 2, uniform_iv::<3>);
    t.call("uniform4iv", 2, uniform_iv::<4>);
    t.call("uniformMatrix2fv", 3, uniform_matrix_fv::<2>);
    t.call("uniformMatrix3fv", 3, uniform_matrix_fv::<3>);
    t.call("uniformMatrix4fv", 3, uniform_matrix_fv::<4>);
    t.call("vertexAttrib1fv", 2, vertex_attrib_fv::<1>);
    t.call("vertexAttrib2fv", 2, vertex_attrib_fv::<2>);
    t.call("vertexAttrib3fv", 2, vertex_attrib_fv::<3>);
    t.call("vertexAttrib4fv", 2, vertex_attrib_fv::<4>);

    // Drawing.
    t.call2("drawBuffers", 1, |cx, a| {
        cx.draw_buffers(a.u32_list(0)?);
        DONE
    });

    // Queries.
    t.call2("createQuery", 0, |cx, _| Ok(cx.create_query()?.into()));
    t.call2("deleteQuery", 1, |cx, a| {
        cx.delete_query(a.object_id(0)?);
        DONE
    });
    t.call2("isQuery", 1, |cx, a| Ok(cx.is_query(a.object_id(0)?)?.into()));
    t.call2("beginQuery", 2, |cx, a| {
        cx.begin_query(a.u32(0)?, a.object_id(1)?);
        DONE
    });
    t.call2("getQueryParameter", 2, |cx, a| {
        Ok(cx.get_query_parameter(a.object_id(0)?, a.u32(1)?)?.into())
    });

    // Uniform buffers.
    t.call2("bindBufferBase", 3, |cx, a| {
        cx.bind_buffer_base(a.u32(0)?, a.u32(1)?, a.object_id(2)?);
        DONE
    });
    t.call2("bindBufferRange", 5, |cx, a| {
        cx.bind_buffer_range(
            a.u32(0)?,
            a.u32(1)?,
            a.object_id(2)?,
            a.f64(3)? as isize,
            a.f64(4)? as isize,
        );
        DONE
    });
    t.call2("getUniformBlockIndex", 2, |cx, a| {
        Ok(cx.get_uniform_block_index(a.object_id(0)?, a.string(1)?.to_owned())?.into())
    });
    t.call2("getUniformIndices", 2, |cx, a| {
        Ok(list(cx.get_uniform_indices(a.object_id(0)?, a.string_list(1)?)?))
    });
    t.call2("getActiveUniforms", 3, |cx, a| {
        Ok(list(cx.get_active_uniforms(a.object_id(0)?, a.u32_list(1)?, a.u32(2)?)?))
    });
    t.call2("getActiveUniformBlockName", 2, |cx, a| {
        Ok(cx.get_active_uniform_block_name(a.object_id(0)?, a.u32(1)?)?.into())
    });
    t.call2("uniformBlockBinding", 3, |cx, a| {
        cx.uniform_block_binding(a.object_id(0)?, a.u32(1)?, a.u32(2)?);
        DONE
    });

    // Vertex arrays.
    t.call2("createVertexArray", 0, |cx, _| Ok(cx.create_vertex_array()?.into()));
    t.call2("deleteVertexArray", 1, |cx, a| {
        cx.delete_vertex_array(a.object_id(0)?);
        DONE
    });
    t.call2("isVertexArray", 1, |cx, a| {
        Ok(cx.is_vertex_array(a.object_id(0)?)?.into())
    });
    t.call2("bindVertexArray", 1, |cx, a| {
        cx.bind_vertex_array(a.object_id(0)?);
        DONE
    });

    t.unsupported(&[
        "getBufferSubData",
        "copyBufferSubData",
        "compressedTexImage2D",
        "compressedTexSubImage2D",
        "compressedTexImage3D",
        "compressedTexSubImage3D",
        "renderbufferStorageMultisample",
        "getInternalformatParameter",
        "getUniform",
        "getVertexAttrib",
        "getVertexAttribOffset",
        "getActiveUniformBlockParameter",
        "getQuery",
        "uniform1uiv",
        "uniform2uiv",
        "uniform3uiv",
        "uniform4uiv",
        "uniformMatrix2x3fv",
        "uniformMatrix3x2fv",
        "uniformMatrix2x4fv",
        "uniformMatrix4x2fv",
        "uniformMatrix3x4fv",
        "uniformMatrix4x3fv",
        "vertexAttribI4i",
        "vertexAttribI4ui",
        "vertexAttribI4iv",
        "vertexAttribI4uiv",
        "drawRangeElements",
        "clearBufferfv",
        "clearBufferiv",
        "clearBufferuiv",
        "clearBufferfi",
        "createSampler",
        "deleteSampler",
        "isSampler",
        "bindSampler",
        "samplerParameteri",
        "samplerParameterf",
        "getSamplerParameter",
        "createTransformFeedback",
        "deleteTransformFeedback",
        "isTransformFeedback",
        "bindTransformFeedback",
        "beginTransformFeedback",
        "endTransformFeedback",
        "pauseTransformFeedback",
        "resumeTransformFeedback",
        "transformFeedbackVaryings",
        "getTransformFeedbackVarying",
        "fenceSync",
        "isSync",
        "deleteSync",
        "clientWaitSync",
        "waitSync",
        "getSyncParameter",
    ]);
}
