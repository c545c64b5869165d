//! ### English
//! C ABI bindings that load the GL function table on the GL thread.
//!
//! ### 中文
//! 在 GL 线程上加载 GL 函数表的 C ABI 绑定。

use std::cell::RefCell;
use std::ffi::{c_char, c_void};

use crate::bridge::{GlApi, GleamBackend};

/// ### English
/// Resolves a NUL-terminated GL symbol name; `user_data` is passed back unchanged.
///
/// ### 中文
/// 解析 NUL 结尾的 GL 符号名；`user_data` 原样传回。
pub type ExglGetProcAddress =
    unsafe extern "C" fn(name: *const c_char, user_data: *mut c_void) -> *const c_void;

thread_local! {
    static GL: RefCell<Option<GleamBackend>> = const { RefCell::new(None) };
}

/// ### English
/// Runs `f` with the GL loaded on this thread, or returns `None` if none is loaded.
///
/// ### 中文
/// 使用本线程已加载的 GL 执行 `f`；未加载时返回 `None`。
pub(super) fn with_gl<R>(f: impl FnOnce(&dyn GlApi) -> R) -> Option<R> {
    GL.with(|gl| gl.borrow().as_ref().map(|gl| f(gl)))
}

#[unsafe(no_mangle)]
/// ### English
/// Loads the GL function table for the context current on the calling thread.
///
/// Must be called on the GL thread with the target context current, before the first
/// `exgl_context_flush` on that thread. Loading again replaces the previous table.
///
/// Returns `true` on success.
///
/// #### Parameters
/// - `get_proc_address`: Symbol resolver (e.g. `eglGetProcAddress` wrapped with user data).
/// - `user_data`: Passed back to every `get_proc_address` call while loading.
/// - `is_gles`: Whether the current context is OpenGL ES.
///
/// ### 中文
/// 为调用线程上 current 的上下文加载 GL 函数表。
///
/// 必须在 GL 线程、目标上下文 current 时调用，并早于该线程上的第一次 `exgl_context_flush`。
/// 重复加载会替换之前的函数表。
///
/// 成功返回 `true`。
///
/// #### 参数
/// - `get_proc_address`：符号解析函数（例如带用户数据包装的 `eglGetProcAddress`）。
/// - `user_data`：加载期间原样传给每次 `get_proc_address` 调用。
/// - `is_gles`：当前上下文是否为 OpenGL ES。
pub unsafe extern "C" fn exgl_gl_thread_load(
    get_proc_address: Option<ExglGetProcAddress>,
    user_data: *mut c_void,
    is_gles: bool,
) -> bool {
    let Some(get_proc_address) = get_proc_address else {
        return false;
    };
    let backend = GleamBackend::load_with(
        |name| unsafe { get_proc_address(name.as_ptr(), user_data) },
        is_gles,
    );
    GL.with(|gl| *gl.borrow_mut() = Some(backend));
    log::debug!("GL function table loaded (gles: {is_gles})");
    true
}

#[unsafe(no_mangle)]
/// ### English
/// Drops the GL function table loaded on the calling thread, if any.
///
/// ### 中文
/// 释放调用线程上已加载的 GL 函数表（如有）。
pub extern "C" fn exgl_gl_thread_unload() {
    GL.with(|gl| gl.borrow_mut().take());
}
