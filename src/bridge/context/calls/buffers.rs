//! ### English
//! Buffer objects, including the indexed uniform-buffer bindings.
//!
//! ### 中文
//! Buffer 对象，包括带索引的 uniform buffer 绑定。

use gleam::gl::{GLenum, GLint, GLuint};

use super::first_handle;
use crate::bridge::context::BridgeContext;
use crate::bridge::error::Result;
use crate::bridge::object_table::{ObjectId, ObjectKind};
use crate::bridge::value::TypedArray;

impl BridgeContext {
    pub fn create_buffer(&self) -> Result<ObjectId> {
        self.enqueue_future(ObjectKind::Buffer, |gl| first_handle(gl.gen_buffers(1)))
    }

    /// ### English
    /// Deletes the buffer behind `id`. Null, foreign and already-deleted ids are ignored.
    ///
    /// ### 中文
    /// 删除 `id` 对应的 buffer。null、其它类型以及已删除的 ID 会被忽略。
    pub fn delete_buffer(&self, id: Option<ObjectId>) {
        let Some(id) = id else { return };
        self.enqueue(move |session| {
            if let Some(handle) = session.forget(id, ObjectKind::Buffer) {
                session.gl.delete_buffers(&[handle]);
            }
            Ok(())
        });
    }

    pub fn bind_buffer(&self, target: GLenum, id: Option<ObjectId>) {
        self.enqueue(move |session| {
            let handle = session.resolve(id);
            session.gl.bind_buffer(target, handle);
            Ok(())
        });
    }

    pub fn is_buffer(&self, id: Option<ObjectId>) -> Result<bool> {
        self.enqueue_blocking(move |session| Ok(session.is_object(id, ObjectKind::Buffer)))
    }

    /// ### English
    /// `bufferData(target, size, usage)`: allocates `size` uninitialized bytes.
    ///
    /// ### 中文
    /// `bufferData(target, size, usage)`：分配 `size` 字节的未初始化存储。
    pub fn buffer_data_size(&self, target: GLenum, size: isize, usage: GLenum) {
        self.enqueue(move |session| {
            session.gl.buffer_data(target, size, None, usage);
            Ok(())
        });
    }

    /// ### English
    /// `bufferData(target, data, usage)`: the array's bytes are captured now.
    ///
    /// ### 中文
    /// `bufferData(target, data, usage)`：数组字节在调用时即被捕获。
    pub fn buffer_data(&self, target: GLenum, data: &TypedArray, usage: GLenum) {
        let bytes = self.capture(data);
        self.enqueue(move |session| {
            session
                .gl
                .buffer_data(target, bytes.len() as isize, Some(&bytes), usage);
            Ok(())
        });
    }

    /// ### English
    /// `bufferSubData`; a null source is a no-op.
    ///
    /// ### 中文
    /// `bufferSubData`；数据源为 null 时为 no-op。
    pub fn buffer_sub_data(&self, target: GLenum, offset: isize, data: Option<&TypedArray>) {
        let Some(data) = data else { return };
        let bytes = self.capture(data);
        self.enqueue(move |session| {
            session.gl.buffer_sub_data(target, offset, &bytes);
            Ok(())
        });
    }

    pub fn get_buffer_parameter(&self, target: GLenum, pname: GLenum) -> Result<GLint> {
        self.enqueue_blocking(move |session| Ok(session.gl.get_buffer_parameter_iv(target, pname)))
    }

    pub fn bind_buffer_base(&self, target: GLenum, index: GLuint, id: Option<ObjectId>) {
        self.enqueue(move |session| {
            let handle = session.resolve(id);
            session.gl.bind_buffer_base(target, index, handle);
            Ok(())
        });
    }

    pub fn bind_buffer_range(
        &self,
        target: GLenum,
        index: GLuint,
        id: Option<ObjectId>,
        offset: isize,
        size: isize,
    ) {
        self.enqueue(move |session| {
            let handle = session.resolve(id);
            session
                .gl
                .bind_buffer_range(target, index, handle, offset, size);
            Ok(())
        });
    }
}
