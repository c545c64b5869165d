//! ### English
//! C ABI bindings that let the embedder share GL objects with a context.
//!
//! The embedder reserves an id, maps it to a GL name it created itself, and passes the id to
//! script code. `exgl_context_map_object`, `exgl_context_destroy_object` and
//! `exgl_context_get_object` are GL-thread functions.
//!
//! ### 中文
//! 让宿主与上下文共享 GL 对象的 C ABI 绑定。
//!
//! 宿主预留一个 ID，将其映射到自己创建的 GL 名称，再把 ID 交给脚本代码。
//! `exgl_context_map_object`、`exgl_context_destroy_object` 与 `exgl_context_get_object` 为 GL
//! 线程函数。

use crate::bridge::{ContextId, ObjectId};

#[unsafe(no_mangle)]
/// ### English
/// Reserves a fresh object id; returns `0` for an unknown context or when ids are exhausted.
///
/// ### 中文
/// 预留一个新的对象 ID；上下文未知或 ID 耗尽时返回 `0`。
pub extern "C" fn exgl_context_create_object(id: ContextId) -> u32 {
    let Some(context) = super::context(id) else {
        return 0;
    };
    match context.create_object() {
        Ok(object) => object.get(),
        Err(err) => {
            log::error!("exgl_context_create_object({id}) failed: {err}");
            0
        }
    }
}

#[unsafe(no_mangle)]
/// ### English
/// Forgets the mapping of `object`. The GL object itself is left to the embedder.
///
/// ### 中文
/// 移除 `object` 的映射；GL 对象本身由宿主负责。
pub extern "C" fn exgl_context_destroy_object(id: ContextId, object: u32) {
    let (Some(context), Some(object)) = (super::context(id), ObjectId::from_raw(object)) else {
        return;
    };
    context.destroy_object(object);
}

#[unsafe(no_mangle)]
/// ### English
/// Maps `object` to the GL name `handle`.
///
/// ### 中文
/// 将 `object` 映射到 GL 名称 `handle`。
pub extern "C" fn exgl_context_map_object(id: ContextId, object: u32, handle: u32) {
    let (Some(context), Some(object)) = (super::context(id), ObjectId::from_raw(object)) else {
        return;
    };
    context.map_object(object, handle);
}

#[unsafe(no_mangle)]
/// ### English
/// Returns the GL name mapped to `object`, or `0` if there is none.
///
/// ### 中文
/// 返回 `object` 映射的 GL 名称，没有映射时返回 `0`。
pub extern "C" fn exgl_context_get_object(id: ContextId, object: u32) -> u32 {
    let (Some(context), Some(object)) = (super::context(id), ObjectId::from_raw(object)) else {
        return 0;
    };
    context.get_object(object)
}
