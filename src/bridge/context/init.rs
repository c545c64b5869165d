//! ### English
//! First operation every context runs on the GL thread.
//!
//! ### 中文
//! 每个上下文在 GL 线程上执行的第一个操作。

use std::sync::atomic::Ordering;

use dpi::PhysicalSize;
use log::debug;

use crate::bridge::constants::{
    COLOR_BUFFER_BIT, DEPTH_BUFFER_BIT, FRAMEBUFFER, FRAMEBUFFER_UNDEFINED, STENCIL_BUFFER_BIT,
    VERSION,
};
use crate::bridge::error::Result;
use crate::bridge::session::GlSession;

/// ### English
/// Viewport used when there is no default framebuffer to size it from (WebGL's canvas default).
///
/// ### 中文
/// 没有默认 framebuffer 可供推导尺寸时使用的视口（WebGL 画布默认尺寸）。
const HEADLESS_VIEWPORT: PhysicalSize<i32> = PhysicalSize {
    width: 300,
    height: 150,
};

/// ### English
/// Parses the `(major, minor)` version out of a `GL_VERSION` string.
///
/// Expected forms: `"4.6.0 ..."` or `"OpenGL ES 3.2 ..."`.
///
/// ### 中文
/// 从 `GL_VERSION` 字符串中解析 `(major, minor)` 版本。
///
/// 期望的版本字符串形式：`"4.6.0 ..."` 或 `"OpenGL ES 3.2 ..."`。
pub(super) fn parse_gl_version(version: &str) -> (u32, u32) {
    let Some(token) = version
        .split_whitespace()
        .find(|token| token.starts_with(|c: char| c.is_ascii_digit()))
    else {
        return (0, 0);
    };
    let mut parts = token
        .split(|c: char| !c.is_ascii_digit())
        .map(|part| part.parse::<u32>().unwrap_or(0));
    let major = parts.next().unwrap_or(0);
    let minor = parts.next().unwrap_or(0);
    (major, minor)
}

/// ### English
/// Detects WebGL2 support and prepares the default framebuffer.
///
/// A complete default framebuffer is cleared to transparent black; a headless context (status
/// `FRAMEBUFFER_UNDEFINED`) gets the canvas-default viewport instead.
///
/// ### 中文
/// 检测 WebGL2 支持并准备默认 framebuffer。
///
/// 完整的默认 framebuffer 会被清为透明黑；无头上下文（状态为 `FRAMEBUFFER_UNDEFINED`）则设置
/// 画布默认视口。
pub(super) fn initialize(session: &mut GlSession<'_>) -> Result<()> {
    let version = session.gl.get_string(VERSION);
    let (major, minor) = parse_gl_version(&version);
    let webgl2 = major >= 3;
    session
        .flags
        .supports_webgl2
        .store(webgl2, Ordering::Release);
    debug!("GL context {version:?} ({major}.{minor}), WebGL2: {webgl2}");

    let gl = session.gl;
    gl.bind_framebuffer(FRAMEBUFFER, session.state.default_framebuffer);
    if gl.check_frame_buffer_status(FRAMEBUFFER) != FRAMEBUFFER_UNDEFINED {
        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        gl.clear_depth(1.0);
        gl.clear_stencil(0);
        gl.clear(COLOR_BUFFER_BIT | DEPTH_BUFFER_BIT | STENCIL_BUFFER_BIT);
    } else {
        gl.viewport(0, 0, HEADLESS_VIEWPORT.width, HEADLESS_VIEWPORT.height);
    }
    Ok(())
}
