//! ### English
//! Test doubles: a software [`GlApi`] and a GL-thread harness driving contexts through it.
//!
//! `FakeGl` keeps just enough state for round trips to be observable (object names, buffer and
//! texture contents, a colour attachment per framebuffer) and records every call in order.
//!
//! ### 中文
//! 测试替身：软件实现的 [`GlApi`]，以及通过它驱动上下文的 GL 线程测试夹具。
//!
//! `FakeGl` 只保存足以观察往返结果的状态（对象名、buffer 与纹理内容、每个 framebuffer 的颜色
//! 附件），并按顺序记录每一次调用。

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::thread;

use crossbeam_channel::{Sender, unbounded};
use gleam::gl::{GLboolean, GLenum, GLfloat, GLint, GLsizei, GLuint};

use super::backend::GlApi;
use super::constants::*;
use super::context::BridgeContext;
use super::flags::ContextOptions;

const INVALID_OPERATION: GLenum = 0x0502;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct FakeImage {
    pub(crate) width: usize,
    pub(crate) height: usize,
    /// RGBA8 rows in upload order.
    pub(crate) pixels: Vec<u8>,
}

#[derive(Default)]
struct FakeState {
    calls: Vec<String>,
    next_name: GLuint,
    error: GLenum,
    enabled: HashSet<GLenum>,
    viewport: [GLint; 4],
    clear_color: [GLfloat; 4],
    buffers: HashMap<GLuint, (Vec<u8>, GLenum)>,
    bound_buffers: HashMap<GLenum, GLuint>,
    textures: HashMap<GLuint, FakeImage>,
    bound_textures: HashMap<GLenum, GLuint>,
    tex_parameters: HashMap<(GLuint, GLenum), GLfloat>,
    framebuffers: HashMap<GLuint, Option<GLuint>>,
    bound_framebuffer: GLuint,
    renderbuffers: HashMap<GLuint, (GLsizei, GLsizei)>,
    bound_renderbuffer: GLuint,
    programs: HashMap<GLuint, bool>,
    current_program: GLuint,
    shaders: HashMap<GLuint, (GLenum, bool)>,
    vertex_arrays: HashSet<GLuint>,
    queries: HashMap<GLuint, GLuint>,
    active_query: GLuint,
    /// Names bound (or begun) at least once; `glIs*` only reports those for buffers, vertex
    /// arrays and queries.
    bound_once: HashSet<GLuint>,
}

impl FakeState {
    fn next_name(&mut self) -> GLuint {
        self.next_name += 1;
        self.next_name
    }

    fn bound_texture(&self, target: GLenum) -> GLuint {
        self.bound_textures.get(&target).copied().unwrap_or(0)
    }

    fn color_target(&self) -> Option<GLuint> {
        self.framebuffers
            .get(&self.bound_framebuffer)
            .copied()
            .flatten()
    }
}

/// ### English
/// Software GL used by unit tests. Thread-safe so a test can inspect it while a harness thread
/// flushes into it.
///
/// ### 中文
/// 单元测试使用的软件 GL。线程安全，测试可在夹具线程向其 flush 的同时进行检查。
pub(crate) struct FakeGl {
    version: String,
    headless: bool,
    state: Mutex<FakeState>,
}

impl FakeGl {
    /// A GLES 3.0 context with a complete default framebuffer.
    pub(crate) fn new() -> Self {
        Self {
            version: "OpenGL ES 3.0 FakeGl".to_owned(),
            headless: false,
            state: Mutex::default(),
        }
    }

    pub(crate) fn gles2() -> Self {
        Self {
            version: "OpenGL ES 2.0 FakeGl".to_owned(),
            ..Self::new()
        }
    }

    /// No default framebuffer: its status reads `FRAMEBUFFER_UNDEFINED`.
    pub(crate) fn headless(mut self) -> Self {
        self.headless = true;
        self
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    fn record(&self, call: String) {
        self.state().calls.push(call);
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    /// Recorded calls whose name starts with `prefix`.
    pub(crate) fn calls_to(&self, prefix: &str) -> Vec<String> {
        self.state()
            .calls
            .iter()
            .filter(|call| call.starts_with(prefix))
            .cloned()
            .collect()
    }

    pub(crate) fn set_error(&self, error: GLenum) {
        self.state().error = error;
    }

    pub(crate) fn buffer_contents(&self, handle: GLuint) -> Option<Vec<u8>> {
        self.state().buffers.get(&handle).map(|(bytes, _)| bytes.clone())
    }

    pub(crate) fn texture_image(&self, handle: GLuint) -> Option<FakeImage> {
        self.state().textures.get(&handle).cloned()
    }

    pub(crate) fn live_buffers(&self) -> usize {
        self.state().buffers.len()
    }

    pub(crate) fn live_textures(&self) -> usize {
        self.state().textures.len()
    }
}

impl GlApi for FakeGl {
    fn get_error(&self) -> GLenum {
        std::mem::replace(&mut self.state().error, NO_ERROR)
    }

    fn get_string(&self, name: GLenum) -> String {
        match name {
            VERSION => self.version.clone(),
            VENDOR => "exgl-bridge".to_owned(),
            RENDERER => "FakeGl".to_owned(),
            SHADING_LANGUAGE_VERSION => "OpenGL ES GLSL ES 3.00".to_owned(),
            _ => String::new(),
        }
    }

    fn get_integer_v(&self, name: GLenum) -> [GLint; 4] {
        let state = self.state();
        let bound_buffer =
            |target: GLenum| state.bound_buffers.get(&target).copied().unwrap_or(0) as GLint;
        match name {
            VIEWPORT => state.viewport,
            SCISSOR_BOX => [0, 0, 300, 150],
            MAX_VIEWPORT_DIMS => [4096, 4096, 0, 0],
            MAX_TEXTURE_SIZE => [4096, 0, 0, 0],
            UNPACK_ALIGNMENT | PACK_ALIGNMENT => [4, 0, 0, 0],
            ARRAY_BUFFER_BINDING => [bound_buffer(ARRAY_BUFFER), 0, 0, 0],
            ELEMENT_ARRAY_BUFFER_BINDING => [bound_buffer(ELEMENT_ARRAY_BUFFER), 0, 0, 0],
            CURRENT_PROGRAM => [state.current_program as GLint, 0, 0, 0],
            _ => [0; 4],
        }
    }

    fn get_float_v(&self, name: GLenum) -> [GLfloat; 4] {
        match name {
            COLOR_CLEAR_VALUE => self.state().clear_color,
            DEPTH_RANGE | ALIASED_LINE_WIDTH_RANGE | ALIASED_POINT_SIZE_RANGE => [0.0, 1.0, 0.0, 0.0],
            LINE_WIDTH | DEPTH_CLEAR_VALUE => [1.0, 0.0, 0.0, 0.0],
            _ => [0.0; 4],
        }
    }

    fn get_boolean_v(&self, name: GLenum) -> [GLboolean; 4] {
        match name {
            COLOR_WRITEMASK => [1, 1, 1, 0],
            _ => [0; 4],
        }
    }

    fn is_enabled(&self, cap: GLenum) -> bool {
        self.state().enabled.contains(&cap)
    }

    fn active_texture(&self, texture: GLenum) {
        self.record(format!("active_texture({texture:#x})"));
    }

    fn blend_color(&self, r: GLfloat, g: GLfloat, b: GLfloat, a: GLfloat) {
        self.record(format!("blend_color({r}, {g}, {b}, {a})"));
    }

    fn blend_equation(&self, mode: GLenum) {
        self.record(format!("blend_equation({mode:#x})"));
    }

    fn blend_equation_separate(&self, mode_rgb: GLenum, mode_alpha: GLenum) {
        self.record(format!("blend_equation_separate({mode_rgb:#x}, {mode_alpha:#x})"));
    }

    fn blend_func(&self, sfactor: GLenum, dfactor: GLenum) {
        self.record(format!("blend_func({sfactor:#x}, {dfactor:#x})"));
    }

    fn blend_func_separate(
        &self,
        src_rgb: GLenum,
        dst_rgb: GLenum,
        src_alpha: GLenum,
        dst_alpha: GLenum,
    ) {
        self.record(format!(
            "blend_func_separate({src_rgb:#x}, {dst_rgb:#x}, {src_alpha:#x}, {dst_alpha:#x})"
        ));
    }

    fn clear_color(&self, r: GLfloat, g: GLfloat, b: GLfloat, a: GLfloat) {
        self.state().clear_color = [r, g, b, a];
        self.record(format!("clear_color({r}, {g}, {b}, {a})"));
    }

    fn clear_depth(&self, depth: f64) {
        self.record(format!("clear_depth({depth})"));
    }

    fn clear_stencil(&self, s: GLint) {
        self.record(format!("clear_stencil({s})"));
    }

    fn color_mask(&self, r: bool, g: bool, b: bool, a: bool) {
        self.record(format!("color_mask({r}, {g}, {b}, {a})"));
    }

    fn cull_face(&self, mode: GLenum) {
        self.record(format!("cull_face({mode:#x})"));
    }

    fn depth_func(&self, func: GLenum) {
        self.record(format!("depth_func({func:#x})"));
    }

    fn depth_mask(&self, flag: bool) {
        self.record(format!("depth_mask({flag})"));
    }

    fn depth_range(&self, near: f64, far: f64) {
        self.record(format!("depth_range({near}, {far})"));
    }

    fn disable(&self, cap: GLenum) {
        self.state().enabled.remove(&cap);
        self.record(format!("disable({cap:#x})"));
    }

    fn enable(&self, cap: GLenum) {
        self.state().enabled.insert(cap);
        self.record(format!("enable({cap:#x})"));
    }

    fn front_face(&self, mode: GLenum) {
        self.record(format!("front_face({mode:#x})"));
    }

    fn hint(&self, target: GLenum, mode: GLenum) {
        self.record(format!("hint({target:#x}, {mode:#x})"));
    }

    fn line_width(&self, width: GLfloat) {
        self.record(format!("line_width({width})"));
    }

    fn pixel_store_i(&self, name: GLenum, param: GLint) {
        self.record(format!("pixel_store_i({name:#x}, {param})"));
    }

    fn polygon_offset(&self, factor: GLfloat, units: GLfloat) {
        self.record(format!("polygon_offset({factor}, {units})"));
    }

    fn sample_coverage(&self, value: GLfloat, invert: bool) {
        self.record(format!("sample_coverage({value}, {invert})"));
    }

    fn scissor(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        self.record(format!("scissor({x}, {y}, {width}, {height})"));
    }

    fn stencil_func(&self, func: GLenum, reference: GLint, mask: GLuint) {
        self.record(format!("stencil_func({func:#x}, {reference}, {mask:#x})"));
    }

    fn stencil_func_separate(&self, face: GLenum, func: GLenum, reference: GLint, mask: GLuint) {
        self.record(format!(
            "stencil_func_separate({face:#x}, {func:#x}, {reference}, {mask:#x})"
        ));
    }

    fn stencil_mask(&self, mask: GLuint) {
        self.record(format!("stencil_mask({mask:#x})"));
    }

    fn stencil_mask_separate(&self, face: GLenum, mask: GLuint) {
        self.record(format!("stencil_mask_separate({face:#x}, {mask:#x})"));
    }

    fn stencil_op(&self, sfail: GLenum, dpfail: GLenum, dppass: GLenum) {
        self.record(format!("stencil_op({sfail:#x}, {dpfail:#x}, {dppass:#x})"));
    }

    fn stencil_op_separate(&self, face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum) {
        self.record(format!(
            "stencil_op_separate({face:#x}, {sfail:#x}, {dpfail:#x}, {dppass:#x})"
        ));
    }

    fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        self.state().viewport = [x, y, width, height];
        self.record(format!("viewport({x}, {y}, {width}, {height})"));
    }

    fn gen_buffers(&self, n: GLsizei) -> Vec<GLuint> {
        let mut state = self.state();
        (0..n)
            .map(|_| {
                let name = state.next_name();
                state.buffers.insert(name, (Vec::new(), STATIC_DRAW));
                name
            })
            .collect()
    }

    fn delete_buffers(&self, buffers: &[GLuint]) {
        let mut state = self.state();
        for name in buffers {
            state.buffers.remove(name);
            state.bound_buffers.retain(|_, bound| bound != name);
        }
        drop(state);
        self.record(format!("delete_buffers({buffers:?})"));
    }

    fn bind_buffer(&self, target: GLenum, buffer: GLuint) {
        {
            let mut state = self.state();
            if buffer != 0 && !state.buffers.contains_key(&buffer) {
                state.error = INVALID_OPERATION;
            } else {
                state.bound_buffers.insert(target, buffer);
                state.bound_once.insert(buffer);
            }
        }
        self.record(format!("bind_buffer({target:#x}, {buffer})"));
    }

    fn is_buffer(&self, buffer: GLuint) -> bool {
        self.record(format!("is_buffer({buffer})"));
        let state = self.state();
        state.buffers.contains_key(&buffer) && state.bound_once.contains(&buffer)
    }

    fn buffer_data(&self, target: GLenum, size: isize, data: Option<&[u8]>, usage: GLenum) {
        {
            let mut state = self.state();
            let bound = state.bound_buffers.get(&target).copied().unwrap_or(0);
            let bytes = data.map_or_else(|| vec![0; size.max(0) as usize], <[u8]>::to_vec);
            if let Some(buffer) = state.buffers.get_mut(&bound) {
                *buffer = (bytes, usage);
            }
        }
        self.record(format!("buffer_data({target:#x}, {size}, {usage:#x})"));
    }

    fn buffer_sub_data(&self, target: GLenum, offset: isize, data: &[u8]) {
        {
            let mut state = self.state();
            let bound = state.bound_buffers.get(&target).copied().unwrap_or(0);
            if let Some((bytes, _)) = state.buffers.get_mut(&bound) {
                let start = offset.max(0) as usize;
                if let Some(dst) = bytes.get_mut(start..start + data.len()) {
                    dst.copy_from_slice(data);
                }
            }
        }
        self.record(format!("buffer_sub_data({target:#x}, {offset}, {})", data.len()));
    }

    fn get_buffer_parameter_iv(&self, target: GLenum, pname: GLenum) -> GLint {
        let state = self.state();
        let bound = state.bound_buffers.get(&target).copied().unwrap_or(0);
        let Some((bytes, usage)) = state.buffers.get(&bound) else {
            return 0;
        };
        match pname {
            BUFFER_SIZE => bytes.len() as GLint,
            BUFFER_USAGE => *usage as GLint,
            _ => 0,
        }
    }

    fn gen_framebuffers(&self, n: GLsizei) -> Vec<GLuint> {
        let mut state = self.state();
        (0..n)
            .map(|_| {
                let name = state.next_name();
                state.framebuffers.insert(name, None);
                name
            })
            .collect()
    }

    fn delete_framebuffers(&self, framebuffers: &[GLuint]) {
        let mut state = self.state();
        for name in framebuffers {
            state.framebuffers.remove(name);
            if state.bound_framebuffer == *name {
                state.bound_framebuffer = 0;
            }
        }
    }

    fn bind_framebuffer(&self, target: GLenum, framebuffer: GLuint) {
        self.state().bound_framebuffer = framebuffer;
        self.record(format!("bind_framebuffer({target:#x}, {framebuffer})"));
    }

    fn is_framebuffer(&self, framebuffer: GLuint) -> bool {
        self.state().framebuffers.contains_key(&framebuffer)
    }

    fn check_frame_buffer_status(&self, _target: GLenum) -> GLenum {
        let state = self.state();
        match state.bound_framebuffer {
            0 if self.headless => FRAMEBUFFER_UNDEFINED,
            0 => FRAMEBUFFER_COMPLETE,
            _ if state.color_target().is_some() => FRAMEBUFFER_COMPLETE,
            _ => FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT,
        }
    }

    fn framebuffer_renderbuffer(
        &self,
        target: GLenum,
        attachment: GLenum,
        renderbuffer_target: GLenum,
        renderbuffer: GLuint,
    ) {
        self.record(format!(
            "framebuffer_renderbuffer({target:#x}, {attachment:#x}, {renderbuffer_target:#x}, {renderbuffer})"
        ));
    }

    fn framebuffer_texture_2d(
        &self,
        target: GLenum,
        attachment: GLenum,
        tex_target: GLenum,
        texture: GLuint,
        level: GLint,
    ) {
        {
            let mut state = self.state();
            let bound = state.bound_framebuffer;
            if attachment == COLOR_ATTACHMENT0 {
                if let Some(slot) = state.framebuffers.get_mut(&bound) {
                    *slot = (texture != 0).then_some(texture);
                }
            }
        }
        self.record(format!(
            "framebuffer_texture_2d({target:#x}, {attachment:#x}, {tex_target:#x}, {texture}, {level})"
        ));
    }

    fn framebuffer_texture_layer(
        &self,
        target: GLenum,
        attachment: GLenum,
        texture: GLuint,
        level: GLint,
        layer: GLint,
    ) {
        self.record(format!(
            "framebuffer_texture_layer({target:#x}, {attachment:#x}, {texture}, {level}, {layer})"
        ));
    }

    fn get_framebuffer_attachment_parameter_iv(
        &self,
        _target: GLenum,
        attachment: GLenum,
        pname: GLenum,
    ) -> GLint {
        let state = self.state();
        let texture = if attachment == COLOR_ATTACHMENT0 {
            state.color_target()
        } else {
            None
        };
        match (pname, texture) {
            (FRAMEBUFFER_ATTACHMENT_OBJECT_TYPE, Some(_)) => TEXTURE as GLint,
            (FRAMEBUFFER_ATTACHMENT_OBJECT_NAME, Some(texture)) => texture as GLint,
            _ => 0,
        }
    }

    fn blit_framebuffer(
        &self,
        src_x0: GLint,
        src_y0: GLint,
        src_x1: GLint,
        src_y1: GLint,
        dst_x0: GLint,
        dst_y0: GLint,
        dst_x1: GLint,
        dst_y1: GLint,
        mask: GLenum,
        filter: GLenum,
    ) {
        self.record(format!(
            "blit_framebuffer({src_x0}, {src_y0}, {src_x1}, {src_y1}, {dst_x0}, {dst_y0}, {dst_x1}, {dst_y1}, {mask:#x}, {filter:#x})"
        ));
    }

    fn invalidate_framebuffer(&self, target: GLenum, attachments: &[GLenum]) {
        self.record(format!("invalidate_framebuffer({target:#x}, {attachments:?})"));
    }

    fn invalidate_sub_framebuffer(
        &self,
        target: GLenum,
        attachments: &[GLenum],
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    ) {
        self.record(format!(
            "invalidate_sub_framebuffer({target:#x}, {attachments:?}, {x}, {y}, {width}, {height})"
        ));
    }

    fn read_buffer(&self, mode: GLenum) {
        self.record(format!("read_buffer({mode:#x})"));
    }

    /// Reads RGBA8 from the colour attachment of the bound framebuffer; zeros elsewhere.
    fn read_pixels(
        &self,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        ty: GLenum,
    ) -> Vec<u8> {
        self.record(format!(
            "read_pixels({x}, {y}, {width}, {height}, {format:#x}, {ty:#x})"
        ));
        let (width, height) = (width.max(0) as usize, height.max(0) as usize);
        let mut out = vec![0; width * height * 4];
        let state = self.state();
        let Some(image) = state.color_target().and_then(|tex| state.textures.get(&tex)) else {
            return out;
        };
        for row in 0..height {
            for col in 0..width {
                let (sx, sy) = (x as usize + col, y as usize + row);
                if sx >= image.width || sy >= image.height {
                    continue;
                }
                let src = (sy * image.width + sx) * 4;
                let dst = (row * width + col) * 4;
                out[dst..dst + 4].copy_from_slice(&image.pixels[src..src + 4]);
            }
        }
        out
    }

    fn gen_renderbuffers(&self, n: GLsizei) -> Vec<GLuint> {
        let mut state = self.state();
        (0..n)
            .map(|_| {
                let name = state.next_name();
                state.renderbuffers.insert(name, (0, 0));
                name
            })
            .collect()
    }

    fn delete_renderbuffers(&self, renderbuffers: &[GLuint]) {
        let mut state = self.state();
        for name in renderbuffers {
            state.renderbuffers.remove(name);
        }
    }

    fn bind_renderbuffer(&self, target: GLenum, renderbuffer: GLuint) {
        self.state().bound_renderbuffer = renderbuffer;
        self.record(format!("bind_renderbuffer({target:#x}, {renderbuffer})"));
    }

    fn is_renderbuffer(&self, renderbuffer: GLuint) -> bool {
        self.state().renderbuffers.contains_key(&renderbuffer)
    }

    fn renderbuffer_storage(
        &self,
        target: GLenum,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        {
            let mut state = self.state();
            let bound = state.bound_renderbuffer;
            if let Some(size) = state.renderbuffers.get_mut(&bound) {
                *size = (width, height);
            }
        }
        self.record(format!(
            "renderbuffer_storage({target:#x}, {internal_format:#x}, {width}, {height})"
        ));
    }

    fn get_renderbuffer_parameter_iv(&self, _target: GLenum, pname: GLenum) -> GLint {
        let state = self.state();
        let (width, height) = state
            .renderbuffers
            .get(&state.bound_renderbuffer)
            .copied()
            .unwrap_or_default();
        match pname {
            RENDERBUFFER_WIDTH => width,
            RENDERBUFFER_HEIGHT => height,
            _ => 0,
        }
    }

    fn gen_textures(&self, n: GLsizei) -> Vec<GLuint> {
        let mut state = self.state();
        (0..n)
            .map(|_| {
                let name = state.next_name();
                state.textures.insert(name, FakeImage::default());
                name
            })
            .collect()
    }

    fn delete_textures(&self, textures: &[GLuint]) {
        let mut state = self.state();
        for name in textures {
            state.textures.remove(name);
        }
        drop(state);
        self.record(format!("delete_textures({textures:?})"));
    }

    fn bind_texture(&self, target: GLenum, texture: GLuint) {
        self.state().bound_textures.insert(target, texture);
        self.record(format!("bind_texture({target:#x}, {texture})"));
    }

    fn is_texture(&self, texture: GLuint) -> bool {
        self.state().textures.contains_key(&texture)
    }

    fn tex_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        internal_format: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        format: GLenum,
        ty: GLenum,
        data: Option<&[u8]>,
    ) {
        {
            let mut state = self.state();
            let bound = state.bound_texture(target);
            let (w, h) = (width.max(0) as usize, height.max(0) as usize);
            let pixels = data.map_or_else(|| vec![0; w * h * 4], <[u8]>::to_vec);
            if let Some(image) = state.textures.get_mut(&bound) {
                *image = FakeImage {
                    width: w,
                    height: h,
                    pixels,
                };
            }
        }
        self.record(format!(
            "tex_image_2d({target:#x}, {level}, {internal_format:#x}, {width}, {height}, {border}, {format:#x}, {ty:#x}, {})",
            data.map_or(0, <[u8]>::len)
        ));
    }

    fn tex_sub_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        ty: GLenum,
        data: &[u8],
    ) {
        {
            let mut state = self.state();
            let bound = state.bound_texture(target);
            if let Some(image) = state.textures.get_mut(&bound) {
                let w = width.max(0) as usize;
                for row in 0..height.max(0) as usize {
                    for col in 0..w {
                        let (dx, dy) = (x as usize + col, y as usize + row);
                        let src = (row * w + col) * 4;
                        if dx >= image.width || dy >= image.height || src + 4 > data.len() {
                            continue;
                        }
                        let dst = (dy * image.width + dx) * 4;
                        image.pixels[dst..dst + 4].copy_from_slice(&data[src..src + 4]);
                    }
                }
            }
        }
        self.record(format!(
            "tex_sub_image_2d({target:#x}, {level}, {x}, {y}, {width}, {height}, {format:#x}, {ty:#x}, {})",
            data.len()
        ));
    }

    fn tex_image_3d(
        &self,
        target: GLenum,
        level: GLint,
        internal_format: GLint,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        border: GLint,
        format: GLenum,
        ty: GLenum,
        data: Option<&[u8]>,
    ) {
        self.record(format!(
            "tex_image_3d({target:#x}, {level}, {internal_format:#x}, {width}, {height}, {depth}, {border}, {format:#x}, {ty:#x}, {})",
            data.map_or(0, <[u8]>::len)
        ));
    }

    fn tex_sub_image_3d(
        &self,
        target: GLenum,
        level: GLint,
        x: GLint,
        y: GLint,
        z: GLint,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        format: GLenum,
        ty: GLenum,
        data: &[u8],
    ) {
        self.record(format!(
            "tex_sub_image_3d({target:#x}, {level}, {x}, {y}, {z}, {width}, {height}, {depth}, {format:#x}, {ty:#x}, {})",
            data.len()
        ));
    }

    fn tex_storage_2d(
        &self,
        target: GLenum,
        levels: GLint,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        self.record(format!(
            "tex_storage_2d({target:#x}, {levels}, {internal_format:#x}, {width}, {height})"
        ));
    }

    fn tex_storage_3d(
        &self,
        target: GLenum,
        levels: GLint,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
    ) {
        self.record(format!(
            "tex_storage_3d({target:#x}, {levels}, {internal_format:#x}, {width}, {height}, {depth})"
        ));
    }

    fn copy_tex_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        internal_format: GLenum,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
    ) {
        self.record(format!(
            "copy_tex_image_2d({target:#x}, {level}, {internal_format:#x}, {x}, {y}, {width}, {height}, {border})"
        ));
    }

    fn copy_tex_sub_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    ) {
        self.record(format!(
            "copy_tex_sub_image_2d({target:#x}, {level}, {xoffset}, {yoffset}, {x}, {y}, {width}, {height})"
        ));
    }

    fn copy_tex_sub_image_3d(
        &self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        zoffset: GLint,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    ) {
        self.record(format!(
            "copy_tex_sub_image_3d({target:#x}, {level}, {xoffset}, {yoffset}, {zoffset}, {x}, {y}, {width}, {height})"
        ));
    }

    fn generate_mipmap(&self, target: GLenum) {
        self.record(format!("generate_mipmap({target:#x})"));
    }

    fn tex_parameter_i(&self, target: GLenum, pname: GLenum, param: GLint) {
        {
            let mut state = self.state();
            let bound = state.bound_texture(target);
            state.tex_parameters.insert((bound, pname), param as GLfloat);
        }
        self.record(format!("tex_parameter_i({target:#x}, {pname:#x}, {param})"));
    }

    fn tex_parameter_f(&self, target: GLenum, pname: GLenum, param: GLfloat) {
        {
            let mut state = self.state();
            let bound = state.bound_texture(target);
            state.tex_parameters.insert((bound, pname), param);
        }
        self.record(format!("tex_parameter_f({target:#x}, {pname:#x}, {param})"));
    }

    fn get_tex_parameter_iv(&self, target: GLenum, pname: GLenum) -> GLint {
        self.get_tex_parameter_fv(target, pname) as GLint
    }

    fn get_tex_parameter_fv(&self, target: GLenum, pname: GLenum) -> GLfloat {
        let state = self.state();
        let bound = state.bound_texture(target);
        state
            .tex_parameters
            .get(&(bound, pname))
            .copied()
            .unwrap_or(0.0)
    }

    fn create_program(&self) -> GLuint {
        let mut state = self.state();
        let name = state.next_name();
        state.programs.insert(name, false);
        name
    }

    fn delete_program(&self, program: GLuint) {
        self.state().programs.remove(&program);
        self.record(format!("delete_program({program})"));
    }

    fn is_program(&self, program: GLuint) -> bool {
        self.record(format!("is_program({program})"));
        self.state().programs.contains_key(&program)
    }

    fn create_shader(&self, shader_type: GLenum) -> GLuint {
        let mut state = self.state();
        let name = state.next_name();
        state.shaders.insert(name, (shader_type, false));
        name
    }

    fn delete_shader(&self, shader: GLuint) {
        self.state().shaders.remove(&shader);
        self.record(format!("delete_shader({shader})"));
    }

    fn is_shader(&self, shader: GLuint) -> bool {
        self.state().shaders.contains_key(&shader)
    }

    fn shader_source(&self, shader: GLuint, source: &str) {
        self.record(format!("shader_source({shader}, {source:?})"));
    }

    fn compile_shader(&self, shader: GLuint) {
        if let Some((_, compiled)) = self.state().shaders.get_mut(&shader) {
            *compiled = true;
        }
        self.record(format!("compile_shader({shader})"));
    }

    fn attach_shader(&self, program: GLuint, shader: GLuint) {
        self.record(format!("attach_shader({program}, {shader})"));
    }

    fn detach_shader(&self, program: GLuint, shader: GLuint) {
        self.record(format!("detach_shader({program}, {shader})"));
    }

    fn link_program(&self, program: GLuint) {
        if let Some(linked) = self.state().programs.get_mut(&program) {
            *linked = true;
        }
        self.record(format!("link_program({program})"));
    }

    fn validate_program(&self, program: GLuint) {
        self.record(format!("validate_program({program})"));
    }

    fn use_program(&self, program: GLuint) {
        self.state().current_program = program;
        self.record(format!("use_program({program})"));
    }

    fn bind_attrib_location(&self, program: GLuint, index: GLuint, name: &str) {
        self.record(format!("bind_attrib_location({program}, {index}, {name:?})"));
    }

    fn get_program_iv(&self, program: GLuint, pname: GLenum) -> GLint {
        let linked = self.state().programs.get(&program).copied().unwrap_or(false);
        match pname {
            LINK_STATUS => GLint::from(linked),
            ACTIVE_UNIFORMS | ACTIVE_ATTRIBUTES => GLint::from(linked),
            _ => 0,
        }
    }

    fn get_shader_iv(&self, shader: GLuint, pname: GLenum) -> GLint {
        let Some((shader_type, compiled)) = self.state().shaders.get(&shader).copied() else {
            return 0;
        };
        match pname {
            COMPILE_STATUS => GLint::from(compiled),
            SHADER_TYPE => shader_type as GLint,
            _ => 0,
        }
    }

    fn get_program_info_log(&self, program: GLuint) -> String {
        match self.state().programs.get(&program) {
            Some(false) => "program not linked".to_owned(),
            _ => String::new(),
        }
    }

    fn get_shader_info_log(&self, _shader: GLuint) -> String {
        String::new()
    }

    fn get_shader_precision_format(
        &self,
        _shader_type: GLenum,
        precision_type: GLenum,
    ) -> (GLint, GLint, GLint) {
        match precision_type {
            HIGH_FLOAT => (127, 127, 23),
            _ => (15, 15, 10),
        }
    }

    fn get_active_attrib(&self, _program: GLuint, index: GLuint) -> (GLint, GLenum, String) {
        match index {
            0 => (1, FLOAT_VEC4, "a_position".to_owned()),
            _ => (0, 0, String::new()),
        }
    }

    fn get_active_uniform(&self, _program: GLuint, index: GLuint) -> (GLint, GLenum, String) {
        match index {
            0 => (1, FLOAT_VEC4, "u_color".to_owned()),
            _ => (0, 0, String::new()),
        }
    }

    fn get_attrib_location(&self, _program: GLuint, name: &str) -> GLint {
        if name == "a_position" { 0 } else { -1 }
    }

    fn get_uniform_location(&self, _program: GLuint, name: &str) -> GLint {
        if name == "u_color" { 0 } else { -1 }
    }

    fn get_frag_data_location(&self, _program: GLuint, name: &str) -> GLint {
        if name == "fragColor" { 0 } else { -1 }
    }

    fn uniform_fv(&self, dim: usize, location: GLint, values: &[GLfloat]) {
        self.record(format!("uniform_fv({dim}, {location}, {values:?})"));
    }

    fn uniform_iv(&self, dim: usize, location: GLint, values: &[GLint]) {
        self.record(format!("uniform_iv({dim}, {location}, {values:?})"));
    }

    fn uniform_ui(&self, dim: usize, location: GLint, values: &[GLuint]) {
        self.record(format!("uniform_ui({dim}, {location}, {values:?})"));
    }

    fn uniform_matrix_fv(&self, dim: usize, location: GLint, transpose: bool, values: &[GLfloat]) {
        self.record(format!(
            "uniform_matrix_fv({dim}, {location}, {transpose}, {values:?})"
        ));
    }

    fn enable_vertex_attrib_array(&self, index: GLuint) {
        self.record(format!("enable_vertex_attrib_array({index})"));
    }

    fn disable_vertex_attrib_array(&self, index: GLuint) {
        self.record(format!("disable_vertex_attrib_array({index})"));
    }

    fn vertex_attrib_4f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) {
        self.record(format!("vertex_attrib_4f({index}, {x}, {y}, {z}, {w})"));
    }

    fn vertex_attrib_pointer(
        &self,
        index: GLuint,
        size: GLint,
        ty: GLenum,
        normalized: bool,
        stride: GLsizei,
        offset: GLuint,
    ) {
        self.record(format!(
            "vertex_attrib_pointer({index}, {size}, {ty:#x}, {normalized}, {stride}, {offset})"
        ));
    }

    fn vertex_attrib_i_pointer(
        &self,
        index: GLuint,
        size: GLint,
        ty: GLenum,
        stride: GLsizei,
        offset: GLuint,
    ) {
        self.record(format!(
            "vertex_attrib_i_pointer({index}, {size}, {ty:#x}, {stride}, {offset})"
        ));
    }

    fn vertex_attrib_divisor(&self, index: GLuint, divisor: GLuint) {
        self.record(format!("vertex_attrib_divisor({index}, {divisor})"));
    }

    /// Clearing the colour buffer fills the bound framebuffer's texture with the clear colour.
    fn clear(&self, mask: GLenum) {
        {
            let mut state = self.state();
            let color = state.clear_color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
            if mask & COLOR_BUFFER_BIT != 0 {
                if let Some(texture) = state.color_target() {
                    if let Some(image) = state.textures.get_mut(&texture) {
                        for pixel in image.pixels.chunks_exact_mut(4) {
                            pixel.copy_from_slice(&color);
                        }
                    }
                }
            }
        }
        self.record(format!("clear({mask:#x})"));
    }

    fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLsizei) {
        self.record(format!("draw_arrays({mode:#x}, {first}, {count})"));
    }

    fn draw_elements(&self, mode: GLenum, count: GLsizei, ty: GLenum, offset: GLuint) {
        self.record(format!("draw_elements({mode:#x}, {count}, {ty:#x}, {offset})"));
    }

    fn draw_arrays_instanced(
        &self,
        mode: GLenum,
        first: GLint,
        count: GLsizei,
        instances: GLsizei,
    ) {
        self.record(format!(
            "draw_arrays_instanced({mode:#x}, {first}, {count}, {instances})"
        ));
    }

    fn draw_elements_instanced(
        &self,
        mode: GLenum,
        count: GLsizei,
        ty: GLenum,
        offset: GLuint,
        instances: GLsizei,
    ) {
        self.record(format!(
            "draw_elements_instanced({mode:#x}, {count}, {ty:#x}, {offset}, {instances})"
        ));
    }

    fn draw_buffers(&self, buffers: &[GLenum]) {
        self.record(format!("draw_buffers({buffers:?})"));
    }

    fn flush(&self) {
        self.record("flush()".to_owned());
    }

    fn finish(&self) {
        self.record("finish()".to_owned());
    }

    fn gen_vertex_arrays(&self, n: GLsizei) -> Vec<GLuint> {
        let mut state = self.state();
        (0..n)
            .map(|_| {
                let name = state.next_name();
                state.vertex_arrays.insert(name);
                name
            })
            .collect()
    }

    fn delete_vertex_arrays(&self, arrays: &[GLuint]) {
        let mut state = self.state();
        for name in arrays {
            state.vertex_arrays.remove(name);
        }
    }

    fn bind_vertex_array(&self, array: GLuint) {
        self.state().bound_once.insert(array);
        self.record(format!("bind_vertex_array({array})"));
    }

    fn is_vertex_array(&self, array: GLuint) -> bool {
        self.record(format!("is_vertex_array({array})"));
        let state = self.state();
        state.vertex_arrays.contains(&array) && state.bound_once.contains(&array)
    }

    fn gen_queries(&self, n: GLsizei) -> Vec<GLuint> {
        let mut state = self.state();
        (0..n)
            .map(|_| {
                let name = state.next_name();
                state.queries.insert(name, 0);
                name
            })
            .collect()
    }

    fn delete_queries(&self, queries: &[GLuint]) {
        let mut state = self.state();
        for name in queries {
            state.queries.remove(name);
        }
    }

    fn is_query(&self, query: GLuint) -> bool {
        self.record(format!("is_query({query})"));
        let state = self.state();
        state.queries.contains_key(&query) && state.bound_once.contains(&query)
    }

    fn begin_query(&self, target: GLenum, query: GLuint) {
        {
            let mut state = self.state();
            state.active_query = query;
            state.bound_once.insert(query);
        }
        self.record(format!("begin_query({target:#x}, {query})"));
    }

    /// Every ended query reports one sample passed.
    fn end_query(&self, target: GLenum) {
        {
            let mut state = self.state();
            let active = std::mem::take(&mut state.active_query);
            if let Some(result) = state.queries.get_mut(&active) {
                *result = 1;
            }
        }
        self.record(format!("end_query({target:#x})"));
    }

    fn get_query_object_uiv(&self, query: GLuint, _pname: GLenum) -> GLuint {
        self.state().queries.get(&query).copied().unwrap_or(0)
    }

    fn bind_buffer_base(&self, target: GLenum, index: GLuint, buffer: GLuint) {
        self.record(format!("bind_buffer_base({target:#x}, {index}, {buffer})"));
    }

    fn bind_buffer_range(
        &self,
        target: GLenum,
        index: GLuint,
        buffer: GLuint,
        offset: isize,
        size: isize,
    ) {
        self.record(format!(
            "bind_buffer_range({target:#x}, {index}, {buffer}, {offset}, {size})"
        ));
    }

    fn get_uniform_block_index(&self, _program: GLuint, name: &str) -> GLuint {
        if name == "Block" { 0 } else { INVALID_INDEX }
    }

    fn get_uniform_indices(&self, _program: GLuint, names: &[&str]) -> Vec<GLuint> {
        names
            .iter()
            .map(|&name| if name == "u_color" { 0 } else { INVALID_INDEX })
            .collect()
    }

    fn get_active_uniforms_iv(
        &self,
        _program: GLuint,
        indices: Vec<GLuint>,
        _pname: GLenum,
    ) -> Vec<GLint> {
        indices.into_iter().map(|index| index as GLint).collect()
    }

    fn get_active_uniform_block_name(&self, _program: GLuint, index: GLuint) -> String {
        match index {
            0 => "Block".to_owned(),
            _ => String::new(),
        }
    }

    fn uniform_block_binding(&self, program: GLuint, block_index: GLuint, binding: GLuint) {
        self.record(format!(
            "uniform_block_binding({program}, {block_index}, {binding})"
        ));
    }
}

/// Routes `log` output through the test harness; safe to call from every test.
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// ### English
/// A GL thread for tests: flushes every context attached to it whenever that context asks.
///
/// ### 中文
/// 测试用的 GL 线程：在所附着的上下文请求时对其执行 flush。
pub(crate) struct GlThread {
    gl: Arc<FakeGl>,
    requests: Sender<Weak<BridgeContext>>,
}

impl GlThread {
    pub(crate) fn spawn(gl: FakeGl) -> Self {
        init_logging();
        let gl = Arc::new(gl);
        let (requests, incoming) = unbounded::<Weak<BridgeContext>>();
        let worker_gl = Arc::clone(&gl);
        thread::spawn(move || {
            for context in incoming {
                if let Some(context) = context.upgrade() {
                    if let Err(err) = context.flush(&*worker_gl) {
                        log::warn!("test flush failed: {err}");
                    }
                }
            }
        });
        Self { gl, requests }
    }

    /// Creates a context whose flush requests are served by this thread.
    pub(crate) fn context(&self, options: ContextOptions) -> Arc<BridgeContext> {
        let context = Arc::new(BridgeContext::new(options));
        let requests = self.requests.clone();
        let weak = Arc::downgrade(&context);
        context.set_flush_hook(Some(Arc::new(move || {
            let _ = requests.send(weak.clone());
        })));
        context
    }

    pub(crate) fn gl(&self) -> &FakeGl {
        &self.gl
    }
}
