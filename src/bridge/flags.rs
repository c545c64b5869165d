//! ### English
//! Bitflags controlling optional context behaviors, and the options they decode into.
//!
//! These are passed through the C ABI as a `u32` bitmask.
//!
//! ### 中文
//! 控制上下文可选行为的位标志，以及解码后的选项。
//!
//! 通过 C ABI 以 `u32` 位掩码传入。

/// ### English
/// The scripting runtime can hand out immutable shared byte buffers for typed arrays.
///
/// When set, bulk data (buffer contents and texture pixels) is captured by sharing the
/// runtime's buffer. When clear, each upload copies the bytes at enqueue time so the runtime may
/// reuse its storage immediately.
///
/// ### 中文
/// 脚本运行时可以为 typed array 提供不可变的共享字节缓冲。
///
/// 设置时，批量数据（buffer 内容与纹理像素）通过共享运行时缓冲捕获；未设置时，
/// 每次上传在入队时拷贝字节，运行时可立即复用其存储。
pub const EXGL_CONTEXT_FLAG_SHARE_TYPED_ARRAYS: u32 = 1 << 0;

/// ### English
/// Per-context configuration, resolved once at construction.
///
/// ### 中文
/// 每个上下文的配置，在构造时确定一次。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContextOptions {
    pub share_typed_arrays: bool,
}

impl ContextOptions {
    /// ### English
    /// Decodes a C ABI bitmask; unknown bits are ignored.
    ///
    /// ### 中文
    /// 解码 C ABI 位掩码；未知位会被忽略。
    pub fn from_flags(flags: u32) -> Self {
        Self {
            share_typed_arrays: flags & EXGL_CONTEXT_FLAG_SHARE_TYPED_ARRAYS != 0,
        }
    }

    pub fn flags(self) -> u32 {
        if self.share_typed_arrays {
            EXGL_CONTEXT_FLAG_SHARE_TYPED_ARRAYS
        } else {
            0
        }
    }
}
