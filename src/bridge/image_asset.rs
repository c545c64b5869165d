//! ### English
//! Decoding of `{ localUri: "file://..." }` image assets passed as pixel sources.
//!
//! Decoding happens on the calling thread before anything is enqueued, so the GL thread only ever
//! sees plain RGBA8 rows.
//!
//! ### 中文
//! 解码作为像素源传入的 `{ localUri: "file://..." }` 图片资源。
//!
//! 解码在入队之前于调用线程完成，GL 线程只会看到普通的 RGBA8 行数据。

use std::path::PathBuf;

use dpi::PhysicalSize;
use image::ImageReader;
use log::debug;
use url::Url;

use super::error::{BridgeError, Result};
use super::value::Value;

/// ### English
/// A decoded image, always tightly packed RGBA8 with the first row at the top.
///
/// ### 中文
/// 解码后的图像：始终为紧密排列的 RGBA8，首行位于顶部。
pub(crate) struct DecodedImage {
    pub(crate) size: PhysicalSize<u32>,
    pub(crate) rgba: Vec<u8>,
}

/// ### English
/// Returns the `localUri` string if `value` is an asset object.
///
/// ### 中文
/// 若 `value` 为资源对象，返回其 `localUri` 字符串。
pub(crate) fn local_uri(value: &Value) -> Option<&str> {
    value.field("localUri")?.as_str()
}

/// ### English
/// Converts a `file://` URI into a filesystem path (percent-decoded).
///
/// ### 中文
/// 将 `file://` URI 转换为文件系统路径（已做百分号解码）。
fn file_path(uri: &str) -> Result<PathBuf> {
    let invalid = || BridgeError::InvalidUri(uri.to_owned());
    let url = Url::parse(uri).map_err(|_| invalid())?;
    if url.scheme() != "file" {
        return Err(invalid());
    }
    url.to_file_path().map_err(|()| invalid())
}

/// ### English
/// Opens and decodes the asset behind `uri` into RGBA8.
///
/// #### Parameters
/// - `uri`: A `file://` URI as provided in the asset's `localUri` field.
///
/// ### 中文
/// 打开并将 `uri` 指向的资源解码为 RGBA8。
///
/// #### 参数
/// - `uri`：资源 `localUri` 字段中的 `file://` URI。
pub(crate) fn load(uri: &str) -> Result<DecodedImage> {
    let path = file_path(uri)?;
    let image = ImageReader::open(&path)
        .map_err(image::ImageError::IoError)?
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?
        .decode()?
        .into_rgba8();
    let size = PhysicalSize::new(image.width(), image.height());
    debug!(
        "decoded {} ({}x{})",
        path.display(),
        size.width,
        size.height
    );
    Ok(DecodedImage {
        size,
        rgba: image.into_raw(),
    })
}
