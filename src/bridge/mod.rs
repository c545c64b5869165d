//! ### English
//! The GL command bridge: contexts, their command queues, the WebGL call surface and the
//! GL-thread backend seam.
//!
//! ### 中文
//! GL 命令桥接层：上下文及其命令队列、WebGL 调用面，以及 GL 线程后端接口。

mod backend;
pub mod constants;
mod context;
mod dispatch;
mod error;
mod flags;
mod image_asset;
mod object_table;
pub mod pixels;
mod queue;
mod registry;
mod session;
mod u32_hash;
mod value;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{GlApi, GleamBackend};
pub use context::{ActiveInfo, BridgeContext, PixelSource, PrecisionFormat, TexImage, TexRegion};
pub use dispatch::is_known_method;
pub use error::{BridgeError, Result};
pub use flags::{ContextOptions, EXGL_CONTEXT_FLAG_SHARE_TYPED_ARRAYS};
pub use object_table::{ObjectId, ObjectKind};
pub use queue::FlushHook;
pub use registry::{ContextId, ContextRegistry, registry};
pub use value::{Args, TypedArray, TypedArrayKind, Value};
