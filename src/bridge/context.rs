//! ### English
//! `BridgeContext`: the calling-thread façade of one GL context.
//!
//! Every call is translated into an operation on the context's command queue. Object creation
//! returns a reserved [`ObjectId`] immediately; queries block until the GL thread has flushed.
//! The call surface itself is split by area under `context/calls/`.
//!
//! ### 中文
//! `BridgeContext`：单个 GL 上下文在调用线程上的门面。
//!
//! 每个调用都被翻译为上下文命令队列中的一个操作。创建对象会立即返回预留的 [`ObjectId`]；
//! 查询会阻塞直到 GL 线程完成 flush。调用面按领域拆分在 `context/calls/` 下。

mod calls;
mod init;

pub use calls::{ActiveInfo, PixelSource, PrecisionFormat, TexImage, TexRegion};

use std::sync::{Arc, Mutex};

use gleam::gl::GLuint;
use log::{debug, trace};

use super::backend::GlApi;
use super::error::Result;
use super::flags::ContextOptions;
use super::object_table::{ObjectId, ObjectKind, allocate_object_id};
use super::queue::{CommandQueue, FlushHook, lock, run_batches};
use super::session::{ContextFlags, GlSession, GlThreadState};
use super::value::TypedArray;

/// ### English
/// One GL context as seen from the calling thread.
///
/// Calling-thread methods (the call surface, `end_frame`) and GL-thread methods (`flush`,
/// `set_default_framebuffer`, the object-mapping primitives) may run concurrently; each side must
/// stay on its own thread.
///
/// ### 中文
/// 从调用线程视角看到的单个 GL 上下文。
///
/// 调用线程方法（调用面、`end_frame`）与 GL 线程方法（`flush`、`set_default_framebuffer`、
/// 对象映射原语）可以并发执行；两侧都必须留在各自的线程上。
pub struct BridgeContext {
    queue: CommandQueue,
    gl_state: Mutex<GlThreadState>,
    flags: ContextFlags,
    options: ContextOptions,
}

impl BridgeContext {
    /// ### English
    /// Creates a context and queues its initialization for the first flush.
    ///
    /// ### 中文
    /// 创建上下文，并将其初始化操作排入第一次 flush。
    pub fn new(options: ContextOptions) -> Self {
        let context = Self {
            queue: CommandQueue::new(),
            gl_state: Mutex::new(GlThreadState::default()),
            flags: ContextFlags::default(),
            options,
        };
        context.enqueue(init::initialize);
        context
    }

    pub fn options(&self) -> ContextOptions {
        self.options
    }

    /// ### English
    /// Whether the GL thread has seen a GLES 3.0+ (or GL 3.0+) context.
    ///
    /// Stays `false` until the first flush has run the initialization operation.
    ///
    /// ### 中文
    /// GL 线程是否检测到 GLES 3.0+（或 GL 3.0+）上下文。
    ///
    /// 在首次 flush 执行初始化操作之前始终为 `false`。
    pub fn supports_webgl2(&self) -> bool {
        self.flags.supports_webgl2()
    }

    // GL thread.

    /// ### English
    /// Executes every batch ended so far, in order.
    ///
    /// Returns the number of operations run. The first failing operation aborts the flush and its
    /// error is returned; the rest of the drained batches are dropped.
    ///
    /// #### Parameters
    /// - `gl`: GL API of the context current on this thread.
    ///
    /// ### 中文
    /// 按顺序执行到目前为止已结束的全部批次。
    ///
    /// 返回执行的操作数。第一个失败的操作会中止本次 flush 并返回其错误；其余已换出的批次被丢弃。
    ///
    /// #### 参数
    /// - `gl`：当前线程上 current 上下文的 GL API。
    pub fn flush(&self, gl: &dyn GlApi) -> Result<usize> {
        let batches = self.queue.take_backlog();
        if batches.is_empty() {
            return Ok(0);
        }
        let batch_count = batches.len();
        let mut state = lock(&self.gl_state);
        let mut session = GlSession {
            gl,
            state: &mut state,
            flags: &self.flags,
        };
        let executed = run_batches(batches, &mut session)?;
        trace!("flushed {executed} GL operations in {batch_count} batches");
        Ok(executed)
    }

    /// ### English
    /// Sets the framebuffer `bindFramebuffer(null)` binds (for offscreen rendering).
    ///
    /// ### 中文
    /// 设置 `bindFramebuffer(null)` 绑定的 framebuffer（用于离屏渲染）。
    pub fn set_default_framebuffer(&self, framebuffer: GLuint) {
        lock(&self.gl_state).default_framebuffer = framebuffer;
    }

    /// ### English
    /// Reserves an id for an object the embedder will map itself.
    ///
    /// ### 中文
    /// 为宿主将自行映射的对象预留一个 ID。
    pub fn create_object(&self) -> Result<ObjectId> {
        allocate_object_id()
    }

    pub fn destroy_object(&self, id: ObjectId) {
        lock(&self.gl_state).objects.erase(id);
    }

    pub fn map_object(&self, id: ObjectId, handle: GLuint) {
        lock(&self.gl_state).objects.map(id, handle);
    }

    pub fn get_object(&self, id: ObjectId) -> GLuint {
        lock(&self.gl_state).objects.resolve(id)
    }

    // Frame signalling.

    /// ### English
    /// Installs (or clears) the callback asking the embedder to schedule a GL-thread flush.
    ///
    /// ### 中文
    /// 安装（或清除）请求宿主调度 GL 线程 flush 的回调。
    pub fn set_flush_hook(&self, hook: Option<FlushHook>) {
        self.queue.set_flush_hook(hook);
    }

    /// ### English
    /// Ends the frame: queues the redraw signal, ends the batch and requests a flush.
    ///
    /// ### 中文
    /// 结束一帧：排入重绘信号、结束批次并请求 flush。
    pub fn end_frame(&self) {
        self.enqueue(|session| {
            session.flags.set_needs_redraw(true);
            Ok(())
        });
        self.queue.end_batch();
        self.queue.request_flush();
    }

    /// ### English
    /// Blocking no-op round trip through the queue.
    ///
    /// ### 中文
    /// 经过队列的阻塞空操作往返。
    pub fn flush_exp(&self) -> Result<()> {
        self.enqueue_blocking(|_| Ok(()))
    }

    pub fn needs_redraw(&self) -> bool {
        self.flags.needs_redraw()
    }

    pub fn draw_ended(&self) {
        self.flags.set_needs_redraw(false);
    }

    /// ### English
    /// Drops all queued work; pending blocking calls fail with `ContextLost`.
    ///
    /// ### 中文
    /// 丢弃全部排队工作；等待中的阻塞调用以 `ContextLost` 失败。
    pub(crate) fn discard_pending(&self) -> usize {
        let dropped = self.queue.discard();
        debug!("context torn down with {dropped} pending operations");
        dropped
    }

    #[cfg(test)]
    pub(crate) fn backlog_len(&self) -> usize {
        self.queue.backlog_len()
    }

    // Queue plumbing shared by the call surface.

    pub(crate) fn enqueue<F>(&self, op: F)
    where
        F: FnOnce(&mut GlSession<'_>) -> Result<()> + Send + 'static,
    {
        self.queue.enqueue(Box::new(op));
    }

    pub(crate) fn enqueue_blocking<R, F>(&self, op: F) -> Result<R>
    where
        R: Send + 'static,
        F: FnOnce(&mut GlSession<'_>) -> Result<R> + Send + 'static,
    {
        self.queue.enqueue_blocking(op)
    }

    /// ### English
    /// Reserves an id now and queues `create` to realize it on the GL thread.
    ///
    /// ### 中文
    /// 立即预留 ID，并排入 `create` 以在 GL 线程上实现该对象。
    pub(crate) fn enqueue_future<F>(&self, kind: ObjectKind, create: F) -> Result<ObjectId>
    where
        F: FnOnce(&dyn GlApi) -> GLuint + Send + 'static,
    {
        let id = allocate_object_id()?;
        self.enqueue(move |session| {
            let handle = create(session.gl);
            session.realize(id, kind, handle);
            Ok(())
        });
        Ok(id)
    }

    /// ### English
    /// Captures typed-array bytes for a queued operation, sharing or copying per configuration.
    ///
    /// ### 中文
    /// 为队列操作捕获 typed array 字节，按配置选择共享或拷贝。
    pub(crate) fn capture(&self, array: &TypedArray) -> Arc<[u8]> {
        if self.options.share_typed_arrays {
            Arc::clone(&array.bytes)
        } else {
            Arc::from(&array.bytes[..])
        }
    }

    pub(crate) fn flags(&self) -> &ContextFlags {
        &self.flags
    }

    #[cfg(test)]
    pub(crate) fn with_gl_state<R>(&self, f: impl FnOnce(&GlThreadState) -> R) -> R {
        f(&lock(&self.gl_state))
    }
}

impl Drop for BridgeContext {
    fn drop(&mut self) {
        self.queue.discard();
    }
}
