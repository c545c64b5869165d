//! ### English
//! C ABI surface for `exgl_bridge`.
//!
//! All exported symbols are `extern "C"` functions. Contexts are addressed by the `u32` ids of the
//! process-wide registry; `0` is never a valid id. Functions documented as GL-thread functions
//! must be called on the thread where the context's GL context is current.
//!
//! ### 中文
//! `exgl_bridge` 的 C ABI 接口层。
//!
//! 所有导出符号均为 `extern "C"` 函数。上下文通过进程级注册表的 `u32` ID 引用；`0` 永远不是合法
//! ID。标注为 GL 线程函数的接口必须在该上下文的 GL 上下文 current 的线程上调用。
mod abi;
mod context;
mod gl_thread;
mod objects;

use std::sync::Arc;

use crate::bridge::{BridgeContext, ContextId, registry};

/// ### English
/// Version of this C ABI; bumped on any incompatible change.
///
/// ### 中文
/// 本 C ABI 的版本号；任何不兼容改动都会递增。
pub const EXGL_ABI_VERSION: u32 = 1;

/// ### English
/// Looks up a live context; logs and returns `None` for unknown ids.
///
/// ### 中文
/// 查找存活的上下文；ID 未知时记录日志并返回 `None`。
fn context(id: ContextId) -> Option<Arc<BridgeContext>> {
    let context = registry().get(id);
    if context.is_none() {
        log::warn!("unknown EXGL context {id}");
    }
    context
}
