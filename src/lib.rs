//! ### English
//! `exgl_bridge` crate root.
//! Lets a scripting thread drive a GL context owned by another thread through a WebGL-shaped call
//! surface. The core lives under `bridge`; `ffi` exposes the embedder's C ABI.
//!
//! ### 中文
//! `exgl_bridge` 的 crate 根。
//! 让脚本线程通过 WebGL 形态的调用面驱动另一个线程持有的 GL 上下文。核心实现位于 `bridge`；
//! `ffi` 导出供宿主使用的 C ABI。

pub mod bridge;
mod ffi;
