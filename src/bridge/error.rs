//! ### English
//! Error type shared by the call surface, the command queue and the C ABI.
//!
//! ### 中文
//! 调用面、命令队列与 C ABI 共用的错误类型。

use std::fmt;

/// ### English
/// Everything that can go wrong while translating or executing a GL call.
///
/// Translation errors are raised synchronously on the calling thread before anything is enqueued.
/// Execution errors surface from [`crate::bridge::BridgeContext::flush`] on the GL thread.
///
/// ### 中文
/// 翻译或执行 GL 调用时可能出现的全部错误。
///
/// 翻译错误在入队前于调用线程同步抛出；执行错误由 GL 线程上的
/// [`crate::bridge::BridgeContext::flush`] 返回。
#[derive(Debug)]
pub enum BridgeError {
    /// ### English
    /// A call received fewer arguments than its minimum arity.
    ///
    /// ### 中文
    /// 调用收到的参数数量少于最小参数个数。
    TooFewArguments {
        method: &'static str,
        expected: usize,
        actual: usize,
    },
    /// ### English
    /// An argument had the wrong wire type.
    ///
    /// ### 中文
    /// 参数的线上类型不正确。
    InvalidArgument { index: usize, expected: &'static str },
    /// ### English
    /// Pixel source was neither null, a typed array nor an image asset.
    ///
    /// ### 中文
    /// 像素数据既不是 null，也不是 typed array 或图片资源。
    InvalidPixelData,
    /// ### English
    /// The method exists in WebGL but is not implemented by the bridge.
    ///
    /// ### 中文
    /// WebGL 中存在但桥接层未实现的方法。
    Unsupported(&'static str),
    /// ### English
    /// A parameter name the bridge cannot answer (e.g. an unsupported binding query).
    ///
    /// ### 中文
    /// 桥接层无法回答的参数名（例如不支持的 binding 查询）。
    UnsupportedParameter(u32),
    /// ### English
    /// A WebGL2 entry point was called on a context without GLES 3.0.
    ///
    /// ### 中文
    /// 在不支持 GLES 3.0 的上下文中调用了 WebGL2 入口。
    RequiresWebGL2(&'static str),
    /// ### English
    /// No method with this wire name exists.
    ///
    /// ### 中文
    /// 不存在该线上名称的方法。
    UnknownMethod(String),
    /// ### English
    /// The process-wide object id counter cannot advance any further.
    ///
    /// ### 中文
    /// 进程级对象 ID 计数器已无法继续递增。
    ObjectIdsExhausted,
    /// ### English
    /// The registry cannot hand out any more context ids.
    ///
    /// ### 中文
    /// 注册表无法再分配新的上下文 ID。
    ContextIdsExhausted,
    /// ### English
    /// A blocking call was dropped before the GL thread ran it (context destroyed).
    ///
    /// ### 中文
    /// 阻塞调用在 GL 线程执行前被丢弃（上下文已销毁）。
    ContextLost,
    /// ### English
    /// A `localUri` could not be turned into a file path.
    ///
    /// ### 中文
    /// `localUri` 无法转换为文件路径。
    InvalidUri(String),
    /// ### English
    /// Image asset failed to open or decode.
    ///
    /// ### 中文
    /// 图片资源打开或解码失败。
    ImageDecode(image::ImageError),
    /// ### English
    /// GL returned a handle that no `ObjectId` is mapped to.
    ///
    /// ### 中文
    /// GL 返回的句柄没有映射到任何 `ObjectId`。
    UnknownGlObject(u32),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewArguments {
                method,
                expected,
                actual,
            } => write!(
                f,
                "{method}: expected at least {expected} arguments, got {actual}"
            ),
            Self::InvalidArgument { index, expected } => {
                write!(f, "argument {index}: expected {expected}")
            }
            Self::InvalidPixelData => f.write_str("Invalid pixel data argument"),
            Self::Unsupported(method) => write!(f, "{method} is not supported"),
            Self::UnsupportedParameter(pname) => {
                write!(f, "parameter 0x{pname:04X} is not supported")
            }
            Self::RequiresWebGL2(method) => write!(f, "{method} requires a WebGL2 context"),
            Self::UnknownMethod(method) => write!(f, "unknown method {method}"),
            Self::ObjectIdsExhausted => f.write_str("object ids exhausted"),
            Self::ContextIdsExhausted => f.write_str("context ids exhausted"),
            Self::ContextLost => f.write_str("context was destroyed before the call completed"),
            Self::InvalidUri(uri) => write!(f, "invalid localUri {uri:?}"),
            Self::ImageDecode(err) => write!(f, "failed to load image: {err}"),
            Self::UnknownGlObject(handle) => {
                write!(f, "GL object {handle} has no matching object id")
            }
        }
    }
}

impl std::error::Error for BridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageDecode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<image::ImageError> for BridgeError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageDecode(err)
    }
}

/// ### English
/// Result alias used throughout the bridge.
///
/// ### 中文
/// 桥接层通用的 Result 别名。
pub type Result<T, E = BridgeError> = std::result::Result<T, E>;
