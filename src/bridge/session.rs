//! ### English
//! State that lives on the GL thread, and the view of it handed to each queued operation.
//!
//! ### 中文
//! 位于 GL 线程上的状态，以及交给每个队列操作的状态视图。

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use gleam::gl::GLuint;

use super::backend::GlApi;
use super::object_table::{ObjectId, ObjectIdTable, ObjectKind};
use super::u32_hash::U32HashMap;

/// ### English
/// Everything only the GL thread reads or writes.
///
/// ### 中文
/// 只有 GL 线程读写的全部状态。
#[derive(Default)]
pub(crate) struct GlThreadState {
    pub(crate) objects: ObjectIdTable,
    /// ### English
    /// Framebuffer bound for `bindFramebuffer(null)`; 0 unless the embedder renders offscreen.
    ///
    /// ### 中文
    /// `bindFramebuffer(null)` 时绑定的 framebuffer；除非宿主离屏渲染，否则为 0。
    pub(crate) default_framebuffer: GLuint,
    /// Last source uploaded per GL shader handle.
    pub(crate) shader_sources: U32HashMap<String>,
    /// GL program handle → attached GL shader handles, in attach order.
    pub(crate) attached_shaders: U32HashMap<Vec<GLuint>>,
}

/// ### English
/// Flags shared between the calling thread and the GL thread.
///
/// ### 中文
/// 调用线程与 GL 线程之间共享的标志。
#[derive(Default)]
pub(crate) struct ContextFlags {
    /// Set by `endFrame` once the frame's batch is queued; cleared by the embedder.
    pub(crate) needs_redraw: AtomicBool,
    /// Set by the initialization operation when the context is GLES 3.0 or newer.
    pub(crate) supports_webgl2: AtomicBool,
    /// `UNPACK_FLIP_Y_WEBGL`; read and written on the calling thread only.
    pub(crate) unpack_flip_y: AtomicBool,
    /// `UNPACK_ALIGNMENT` as last forwarded to GL; 0 stands for GL's initial value of 4.
    pub(crate) unpack_alignment: AtomicU8,
}

impl ContextFlags {
    pub(crate) fn needs_redraw(&self) -> bool {
        self.needs_redraw.load(Ordering::Acquire)
    }

    pub(crate) fn set_needs_redraw(&self, value: bool) {
        self.needs_redraw.store(value, Ordering::Release);
    }

    pub(crate) fn supports_webgl2(&self) -> bool {
        self.supports_webgl2.load(Ordering::Acquire)
    }

    pub(crate) fn unpack_flip_y(&self) -> bool {
        self.unpack_flip_y.load(Ordering::Relaxed)
    }

    pub(crate) fn set_unpack_flip_y(&self, value: bool) {
        self.unpack_flip_y.store(value, Ordering::Relaxed);
    }

    pub(crate) fn unpack_alignment(&self) -> usize {
        match self.unpack_alignment.load(Ordering::Relaxed) {
            0 => 4,
            alignment => usize::from(alignment),
        }
    }

    /// ### English
    /// Records a new `UNPACK_ALIGNMENT`. GL rejects anything but 1, 2, 4 and 8 and keeps the old
    /// value, so those are ignored here too.
    ///
    /// ### 中文
    /// 记录新的 `UNPACK_ALIGNMENT`。GL 只接受 1、2、4、8，其余值会被拒绝并保留旧值，这里同样忽略。
    pub(crate) fn set_unpack_alignment(&self, value: i32) {
        if let Ok(alignment @ (1 | 2 | 4 | 8)) = u8::try_from(value) {
            self.unpack_alignment.store(alignment, Ordering::Relaxed);
        }
    }
}

/// ### English
/// What a queued operation sees while it runs on the GL thread.
///
/// ### 中文
/// 队列操作在 GL 线程上运行时可见的内容。
pub(crate) struct GlSession<'a> {
    pub(crate) gl: &'a dyn GlApi,
    pub(crate) state: &'a mut GlThreadState,
    pub(crate) flags: &'a ContextFlags,
}

impl GlSession<'_> {
    /// ### English
    /// Resolves an optional object reference; null, unrealized and deleted ids resolve to 0.
    ///
    /// ### 中文
    /// 解析可选的对象引用；null、尚未实现或已删除的 ID 均解析为 0。
    pub(crate) fn resolve(&self, id: Option<ObjectId>) -> GLuint {
        self.state.objects.resolve_opt(id)
    }

    /// ### English
    /// Resolves a framebuffer reference; null and unknown ids map to the default framebuffer.
    ///
    /// ### 中文
    /// 解析 framebuffer 引用；null 与未知 ID 映射到默认 framebuffer。
    pub(crate) fn resolve_framebuffer(&self, id: Option<ObjectId>) -> GLuint {
        match self.resolve(id) {
            0 => self.state.default_framebuffer,
            handle => handle,
        }
    }

    pub(crate) fn realize(&mut self, id: ObjectId, kind: ObjectKind, handle: GLuint) {
        self.state.objects.map_kind(id, kind, handle);
    }

    /// ### English
    /// Drops the mapping for `id` if it was realized as `kind`; returns the released handle.
    ///
    /// ### 中文
    /// 若 `id` 被实现为 `kind`，则移除其映射并返回释放的句柄。
    pub(crate) fn forget(&mut self, id: ObjectId, kind: ObjectKind) -> Option<GLuint> {
        self.state.objects.resolve_kind(id, kind)?;
        self.state.objects.erase(id)
    }

    /// ### English
    /// Whether `id` is currently realized as a live object of `kind`.
    ///
    /// ### 中文
    /// `id` 当前是否被实现为 `kind` 类型的存活对象。
    pub(crate) fn is_object(&self, id: Option<ObjectId>, kind: ObjectKind) -> bool {
        let Some(handle) = id.and_then(|id| self.state.objects.resolve_kind(id, kind)) else {
            return false;
        };
        match kind {
            ObjectKind::Framebuffer => self.gl.is_framebuffer(handle),
            ObjectKind::Renderbuffer => self.gl.is_renderbuffer(handle),
            ObjectKind::Shader => self.gl.is_shader(handle),
            ObjectKind::Texture => self.gl.is_texture(handle),
            ObjectKind::Buffer => self.gl.is_buffer(handle),
            ObjectKind::Program => self.gl.is_program(handle),
            ObjectKind::Query => self.gl.is_query(handle),
            ObjectKind::VertexArray => self.gl.is_vertex_array(handle),
        }
    }
}
