//! ### English
//! C ABI bindings for context lifecycle, flushing and frame signalling.
//!
//! ### 中文
//! 上下文生命周期、flush 与帧信号相关的 C ABI 绑定。

use std::ffi::c_void;
use std::sync::Arc;

use super::gl_thread::with_gl;
use crate::bridge::{ContextId, ContextOptions, FlushHook, registry};

/// ### English
/// Embedder callback asking for `exgl_context_flush` to be scheduled on the GL thread.
///
/// ### 中文
/// 宿主回调：请求在 GL 线程上调度 `exgl_context_flush`。
pub type ExglFlushMethod = unsafe extern "C" fn(user_data: *mut c_void);

/// Callback plus the opaque pointer the embedder registered with it.
struct FlushMethod {
    callback: ExglFlushMethod,
    user_data: *mut c_void,
}

// The embedder guarantees `user_data` may be used from any thread for the callback's lifetime.
unsafe impl Send for FlushMethod {}
unsafe impl Sync for FlushMethod {}

impl FlushMethod {
    fn call(&self) {
        unsafe { (self.callback)(self.user_data) }
    }
}

#[unsafe(no_mangle)]
/// ### English
/// Creates a context and returns its id, or `0` on failure.
///
/// #### Parameters
/// - `flags`: Bitmask of `EXGL_CONTEXT_FLAG_*` values; unknown bits are ignored.
///
/// ### 中文
/// 创建上下文并返回其 ID，失败时返回 `0`。
///
/// #### 参数
/// - `flags`：`EXGL_CONTEXT_FLAG_*` 位掩码；未知位会被忽略。
pub extern "C" fn exgl_context_create(flags: u32) -> ContextId {
    match registry().create(ContextOptions::from_flags(flags)) {
        Ok(id) => id,
        Err(err) => {
            log::error!("exgl_context_create failed: {err}");
            0
        }
    }
}

#[unsafe(no_mangle)]
/// ### English
/// Destroys a context. Queued work is dropped; calls blocked on it fail.
///
/// ### 中文
/// 销毁上下文；排队的工作被丢弃，阻塞在其上的调用会失败。
pub extern "C" fn exgl_context_destroy(id: ContextId) {
    registry().destroy(id);
}

#[unsafe(no_mangle)]
/// ### English
/// Executes the context's pending batches. GL-thread function.
///
/// Failures (no GL loaded on this thread, or an operation error) are logged, never raised.
///
/// ### 中文
/// 执行上下文待处理的批次。GL 线程函数。
///
/// 失败（本线程未加载 GL，或操作出错）只记录日志，不会抛出。
pub extern "C" fn exgl_context_flush(id: ContextId) {
    match with_gl(|gl| registry().flush(id, gl)) {
        None => log::error!("exgl_context_flush({id}): no GL loaded on this thread"),
        Some(Err(err)) => log::error!("exgl_context_flush({id}) failed: {err}"),
        Some(Ok(_)) => {}
    }
}

#[unsafe(no_mangle)]
/// ### English
/// Sets the framebuffer that `bindFramebuffer(null)` binds. GL-thread function.
///
/// ### 中文
/// 设置 `bindFramebuffer(null)` 绑定的 framebuffer。GL 线程函数。
pub extern "C" fn exgl_context_set_default_framebuffer(id: ContextId, framebuffer: u32) {
    if let Some(context) = super::context(id) {
        context.set_default_framebuffer(framebuffer);
    }
}

#[unsafe(no_mangle)]
/// ### English
/// Installs the callback invoked whenever the context wants a flush; `NULL` removes it.
///
/// The callback may run on any thread that issues calls on the context.
///
/// ### 中文
/// 安装在上下文需要 flush 时调用的回调；传入 `NULL` 则移除。
///
/// 回调可能在任何向该上下文发起调用的线程上执行。
pub unsafe extern "C" fn exgl_context_set_flush_method(
    id: ContextId,
    callback: Option<ExglFlushMethod>,
    user_data: *mut c_void,
) {
    let Some(context) = super::context(id) else {
        return;
    };
    let hook = callback.map(|callback| {
        let method = FlushMethod {
            callback,
            user_data,
        };
        Arc::new(move || method.call()) as FlushHook
    });
    context.set_flush_hook(hook);
}

#[unsafe(no_mangle)]
/// ### English
/// Whether a frame ended since the last `exgl_context_draw_ended`.
///
/// ### 中文
/// 自上次 `exgl_context_draw_ended` 以来是否有帧结束。
pub extern "C" fn exgl_context_needs_redraw(id: ContextId) -> bool {
    super::context(id).is_some_and(|context| context.needs_redraw())
}

#[unsafe(no_mangle)]
/// ### English
/// Acknowledges the redraw request.
///
/// ### 中文
/// 确认重绘请求。
pub extern "C" fn exgl_context_draw_ended(id: ContextId) {
    if let Some(context) = super::context(id) {
        context.draw_ended();
    }
}
