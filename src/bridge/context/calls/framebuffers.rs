//! ### English
//! Framebuffers, renderbuffers and pixel read-back.
//!
//! ### 中文
//! Framebuffer、renderbuffer 以及像素回读。

use gleam::gl::{GLenum, GLint, GLsizei};

use super::first_handle;
use crate::bridge::constants::{
    ALPHA, DEPTH_COMPONENT, FLOAT, FRAMEBUFFER_ATTACHMENT_OBJECT_NAME,
    FRAMEBUFFER_ATTACHMENT_OBJECT_TYPE, LUMINANCE, RED, RENDERBUFFER, RGB, RGBA, SHORT, TEXTURE,
    UNSIGNED_BYTE, UNSIGNED_SHORT,
};
use crate::bridge::context::BridgeContext;
use crate::bridge::error::{BridgeError, Result};
use crate::bridge::object_table::{ObjectId, ObjectKind};
use crate::bridge::value::Value;

impl BridgeContext {
    pub fn create_framebuffer(&self) -> Result<ObjectId> {
        self.enqueue_future(ObjectKind::Framebuffer, |gl| {
            first_handle(gl.gen_framebuffers(1))
        })
    }

    pub fn delete_framebuffer(&self, id: Option<ObjectId>) {
        let Some(id) = id else { return };
        self.enqueue(move |session| {
            if let Some(handle) = session.forget(id, ObjectKind::Framebuffer) {
                session.gl.delete_framebuffers(&[handle]);
            }
            Ok(())
        });
    }

    /// ### English
    /// Binds a framebuffer; `null` (or an id that no longer maps) binds the default framebuffer.
    ///
    /// ### 中文
    /// 绑定 framebuffer；`null`（或已失去映射的 ID）绑定默认 framebuffer。
    pub fn bind_framebuffer(&self, target: GLenum, id: Option<ObjectId>) {
        self.enqueue(move |session| {
            let handle = session.resolve_framebuffer(id);
            session.gl.bind_framebuffer(target, handle);
            Ok(())
        });
    }

    pub fn is_framebuffer(&self, id: Option<ObjectId>) -> Result<bool> {
        self.enqueue_blocking(move |session| Ok(session.is_object(id, ObjectKind::Framebuffer)))
    }

    pub fn check_framebuffer_status(&self, target: GLenum) -> Result<GLenum> {
        self.enqueue_blocking(move |session| Ok(session.gl.check_frame_buffer_status(target)))
    }

    pub fn framebuffer_renderbuffer(
        &self,
        target: GLenum,
        attachment: GLenum,
        renderbuffer_target: GLenum,
        renderbuffer: Option<ObjectId>,
    ) {
        self.enqueue(move |session| {
            let handle = session.resolve(renderbuffer);
            session
                .gl
                .framebuffer_renderbuffer(target, attachment, renderbuffer_target, handle);
            Ok(())
        });
    }

    pub fn framebuffer_texture_2d(
        &self,
        target: GLenum,
        attachment: GLenum,
        tex_target: GLenum,
        texture: Option<ObjectId>,
        level: GLint,
    ) {
        self.enqueue(move |session| {
            let handle = session.resolve(texture);
            session
                .gl
                .framebuffer_texture_2d(target, attachment, tex_target, handle, level);
            Ok(())
        });
    }

    pub fn framebuffer_texture_layer(
        &self,
        target: GLenum,
        attachment: GLenum,
        texture: Option<ObjectId>,
        level: GLint,
        layer: GLint,
    ) {
        self.enqueue(move |session| {
            let handle = session.resolve(texture);
            session
                .gl
                .framebuffer_texture_layer(target, attachment, handle, level, layer);
            Ok(())
        });
    }

    /// ### English
    /// `getFramebufferAttachmentParameter`.
    ///
    /// `FRAMEBUFFER_ATTACHMENT_OBJECT_NAME` is answered with the id of the attached renderbuffer or
    /// texture (or `null`); every other parameter is returned as a number.
    ///
    /// ### 中文
    /// `getFramebufferAttachmentParameter`。
    ///
    /// `FRAMEBUFFER_ATTACHMENT_OBJECT_NAME` 返回所附着 renderbuffer 或纹理的 ID（或 `null`）；
    /// 其它参数均以数值返回。
    pub fn get_framebuffer_attachment_parameter(
        &self,
        target: GLenum,
        attachment: GLenum,
        pname: GLenum,
    ) -> Result<Value> {
        self.enqueue_blocking(move |session| {
            let gl = session.gl;
            let value = gl.get_framebuffer_attachment_parameter_iv(target, attachment, pname);
            if pname != FRAMEBUFFER_ATTACHMENT_OBJECT_NAME {
                return Ok(Value::from(value));
            }
            let object_type = gl.get_framebuffer_attachment_parameter_iv(
                target,
                attachment,
                FRAMEBUFFER_ATTACHMENT_OBJECT_TYPE,
            ) as GLenum;
            let kind = match object_type {
                RENDERBUFFER => ObjectKind::Renderbuffer,
                TEXTURE => ObjectKind::Texture,
                _ => return Ok(Value::Null),
            };
            Ok(session.state.objects.find(value as u32, kind).into())
        })
    }

    pub fn invalidate_framebuffer(&self, target: GLenum, attachments: Vec<GLenum>) {
        self.enqueue(move |session| {
            session.gl.invalidate_framebuffer(target, &attachments);
            Ok(())
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn invalidate_sub_framebuffer(
        &self,
        target: GLenum,
        attachments: Vec<GLenum>,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    ) {
        self.enqueue(move |session| {
            session
                .gl
                .invalidate_sub_framebuffer(target, &attachments, x, y, width, height);
            Ok(())
        });
    }

    /// ### English
    /// Blocking `readPixels` from the bound read framebuffer; returns the tightly packed bytes.
    ///
    /// Only single-channel, `RGB` and `RGBA` formats with `UNSIGNED_BYTE`, `SHORT`,
    /// `UNSIGNED_SHORT` or `FLOAT` components are read back. Anything else, negative sizes and
    /// results larger than `GLsizei::MAX` bytes are rejected before the GL thread is involved.
    ///
    /// ### 中文
    /// 从当前绑定的读 framebuffer 阻塞读取像素；返回紧密排列的字节。
    ///
    /// 仅支持单通道、`RGB` 与 `RGBA` 格式，分量类型为 `UNSIGNED_BYTE`、`SHORT`、`UNSIGNED_SHORT`
    /// 或 `FLOAT`。其他组合、负尺寸以及超过 `GLsizei::MAX` 字节的结果在进入 GL 线程之前即被拒绝。
    pub fn read_pixels(
        &self,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        ty: GLenum,
    ) -> Result<Vec<u8>> {
        read_back_len(width, height, format, ty)?;
        self.enqueue_blocking(move |session| {
            Ok(session.gl.read_pixels(x, y, width, height, format, ty))
        })
    }

    pub fn create_renderbuffer(&self) -> Result<ObjectId> {
        self.enqueue_future(ObjectKind::Renderbuffer, |gl| {
            first_handle(gl.gen_renderbuffers(1))
        })
    }

    pub fn delete_renderbuffer(&self, id: Option<ObjectId>) {
        let Some(id) = id else { return };
        self.enqueue(move |session| {
            if let Some(handle) = session.forget(id, ObjectKind::Renderbuffer) {
                session.gl.delete_renderbuffers(&[handle]);
            }
            Ok(())
        });
    }

    pub fn bind_renderbuffer(&self, target: GLenum, id: Option<ObjectId>) {
        self.enqueue(move |session| {
            let handle = session.resolve(id);
            session.gl.bind_renderbuffer(target, handle);
            Ok(())
        });
    }

    pub fn is_renderbuffer(&self, id: Option<ObjectId>) -> Result<bool> {
        self.enqueue_blocking(move |session| Ok(session.is_object(id, ObjectKind::Renderbuffer)))
    }

    pub fn renderbuffer_storage(
        &self,
        target: GLenum,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        self.enqueue(move |session| {
            session
                .gl
                .renderbuffer_storage(target, internal_format, width, height);
            Ok(())
        });
    }

    pub fn get_renderbuffer_parameter(&self, target: GLenum, pname: GLenum) -> Result<GLint> {
        self.enqueue_blocking(move |session| {
            Ok(session.gl.get_renderbuffer_parameter_iv(target, pname))
        })
    }
}

/// Byte length of a `readPixels` result, or why it cannot be read back.
fn read_back_len(width: GLsizei, height: GLsizei, format: GLenum, ty: GLenum) -> Result<GLsizei> {
    let components = match format {
        ALPHA | LUMINANCE | RED | DEPTH_COMPONENT => 1,
        RGB => 3,
        RGBA => 4,
        _ => return Err(BridgeError::UnsupportedParameter(format)),
    };
    let component_size = match ty {
        UNSIGNED_BYTE => 1,
        SHORT | UNSIGNED_SHORT => 2,
        FLOAT => 4,
        _ => return Err(BridgeError::UnsupportedParameter(ty)),
    };
    if width < 0 {
        return Err(BridgeError::InvalidArgument {
            index: 2,
            expected: "a non-negative width",
        });
    }
    if height < 0 {
        return Err(BridgeError::InvalidArgument {
            index: 3,
            expected: "a non-negative height",
        });
    }
    width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(components * component_size))
        .ok_or(BridgeError::InvalidArgument {
            index: 2,
            expected: "a read-back area that fits in memory",
        })
}
