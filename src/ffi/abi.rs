use crate::bridge::EXGL_CONTEXT_FLAG_SHARE_TYPED_ARRAYS;

#[unsafe(no_mangle)]
/// ### English
/// Returns the C ABI version.
///
/// ### 中文
/// 返回 C ABI 版本号。
pub extern "C" fn exgl_abi_version() -> u32 {
    super::EXGL_ABI_VERSION
}

#[unsafe(no_mangle)]
/// ### English
/// Returns the context flag bit that lets typed-array bytes be shared instead of copied.
///
/// ### 中文
/// 返回允许共享（而非拷贝）typed array 字节的上下文标志位。
pub extern "C" fn exgl_context_flag_share_typed_arrays() -> u32 {
    EXGL_CONTEXT_FLAG_SHARE_TYPED_ARRAYS
}
