//! ### English
//! [`GlApi`] implementation backed by a `gleam` function table.
//!
//! ### 中文
//! 基于 `gleam` 函数表的 [`GlApi`] 实现。

use std::ffi::{CStr, CString, c_void};
use std::rc::Rc;

use gleam::gl::{self, GLboolean, GLenum, GLfloat, GLint, GLsizei, GLuint, Gl};
use log::warn;

use super::GlApi;

/// ### English
/// Scratch size for `glGet*v` reads; larger than any parameter the bridge queries.
///
/// ### 中文
/// `glGet*v` 读取使用的临时缓冲大小；大于桥接层查询的任何参数。
const GET_SCRATCH_LEN: usize = 16;

/// `glIs*` entry point taking an object name.
type IsObjectFn = unsafe extern "system" fn(GLuint) -> GLboolean;

/// ### English
/// `glIs*` queries `gleam::gl::Gl` does not expose, loaded from the same `get_proc_address`.
///
/// A missing entry point (e.g. `glIsQuery` on GLES 2.0) falls back to "mapped means alive".
///
/// ### 中文
/// `gleam::gl::Gl` 未提供的 `glIs*` 查询，从同一个 `get_proc_address` 加载。
///
/// 缺失的入口（例如 GLES 2.0 上的 `glIsQuery`）退化为“已映射即存活”。
#[derive(Clone, Copy, Default)]
struct IsObjectFns {
    buffer: Option<IsObjectFn>,
    program: Option<IsObjectFn>,
    query: Option<IsObjectFn>,
    vertex_array: Option<IsObjectFn>,
}

impl IsObjectFns {
    fn load(loader: &mut impl FnMut(&str) -> *const c_void) -> Self {
        let mut load = |name: &str| -> Option<IsObjectFn> {
            let ptr = loader(name);
            if ptr.is_null() {
                warn!("{name} is not available, falling back to the object table");
                return None;
            }
            Some(unsafe { std::mem::transmute::<*const c_void, IsObjectFn>(ptr) })
        };
        Self {
            buffer: load("glIsBuffer"),
            program: load("glIsProgram"),
            query: load("glIsQuery"),
            vertex_array: load("glIsVertexArray"),
        }
    }

    fn call(entry: Option<IsObjectFn>, name: GLuint) -> bool {
        match entry {
            Some(is_object) => unsafe { is_object(name) != 0 },
            None => name != 0,
        }
    }
}

/// ### English
/// Real GL, loaded through a platform `get_proc_address`.
///
/// ### 中文
/// 通过平台 `get_proc_address` 加载的真实 GL。
pub struct GleamBackend {
    gl: Rc<dyn Gl>,
    is_object: IsObjectFns,
}

impl GleamBackend {
    /// ### English
    /// Loads the GL (or GLES) function table for the context current on this thread.
    ///
    /// #### Parameters
    /// - `get_proc_address`: Resolves a NUL-terminated GL symbol name to a function pointer.
    /// - `is_gles`: Whether the current context is OpenGL ES.
    ///
    /// ### 中文
    /// 为当前线程上 current 的上下文加载 GL（或 GLES）函数表。
    ///
    /// #### 参数
    /// - `get_proc_address`：将 NUL 结尾的 GL 符号名解析为函数指针。
    /// - `is_gles`：当前上下文是否为 OpenGL ES。
    pub fn load_with(get_proc_address: impl Fn(&CStr) -> *const c_void, is_gles: bool) -> Self {
        let mut loader = |name: &str| match CString::new(name) {
            Ok(name) => get_proc_address(name.as_c_str()),
            Err(_) => std::ptr::null(),
        };
        let is_object = IsObjectFns::load(&mut loader);
        let gl: Rc<dyn Gl> = unsafe {
            if is_gles {
                gl::GlesFns::load_with(loader)
            } else {
                gl::GlFns::load_with(loader)
            }
        };
        Self { gl, is_object }
    }

    /// ### English
    /// Wraps an already loaded table. The `glIs*` queries gleam lacks fall back to the object
    /// table.
    ///
    /// ### 中文
    /// 包装已加载的函数表；gleam 缺少的 `glIs*` 查询退化为对象表判断。
    pub fn from_gl(gl: Rc<dyn Gl>) -> Self {
        Self {
            gl,
            is_object: IsObjectFns::default(),
        }
    }
}

impl GlApi for GleamBackend {
    fn get_error(&self) -> GLenum {
        self.gl.get_error()
    }

    fn get_string(&self, name: GLenum) -> String {
        self.gl.get_string(name)
    }

    fn get_integer_v(&self, name: GLenum) -> [GLint; 4] {
        let mut scratch = [0; GET_SCRATCH_LEN];
        unsafe { self.gl.get_integer_v(name, &mut scratch) };
        [scratch[0], scratch[1], scratch[2], scratch[3]]
    }

    fn get_float_v(&self, name: GLenum) -> [GLfloat; 4] {
        let mut scratch = [0.0; GET_SCRATCH_LEN];
        unsafe { self.gl.get_float_v(name, &mut scratch) };
        [scratch[0], scratch[1], scratch[2], scratch[3]]
    }

    fn get_boolean_v(&self, name: GLenum) -> [GLboolean; 4] {
        let mut scratch = [0; GET_SCRATCH_LEN];
        unsafe { self.gl.get_boolean_v(name, &mut scratch) };
        [scratch[0], scratch[1], scratch[2], scratch[3]]
    }

    fn is_enabled(&self, cap: GLenum) -> bool {
        self.gl.is_enabled(cap) != 0
    }

    fn active_texture(&self, texture: GLenum) {
        self.gl.active_texture(texture)
    }

    fn blend_color(&self, r: GLfloat, g: GLfloat, b: GLfloat, a: GLfloat) {
        self.gl.blend_color(r, g, b, a)
    }

    fn blend_equation(&self, mode: GLenum) {
        self.gl.blend_equation(mode)
    }

    fn blend_equation_separate(&self, mode_rgb: GLenum, mode_alpha: GLenum) {
        self.gl.blend_equation_separate(mode_rgb, mode_alpha)
    }

    fn blend_func(&self, sfactor: GLenum, dfactor: GLenum) {
        self.gl.blend_func(sfactor, dfactor)
    }

    fn blend_func_separate(
        &self,
        src_rgb: GLenum,
        dst_rgb: GLenum,
        src_alpha: GLenum,
        dst_alpha: GLenum,
    ) {
        self.gl
            .blend_func_separate(src_rgb, dst_rgb, src_alpha, dst_alpha)
    }

    fn clear_color(&self, r: GLfloat, g: GLfloat, b: GLfloat, a: GLfloat) {
        self.gl.clear_color(r, g, b, a)
    }

    fn clear_depth(&self, depth: f64) {
        self.gl.clear_depth(depth)
    }

    fn clear_stencil(&self, s: GLint) {
        self.gl.clear_stencil(s)
    }

    fn color_mask(&self, r: bool, g: bool, b: bool, a: bool) {
        self.gl.color_mask(r, g, b, a)
    }

    fn cull_face(&self, mode: GLenum) {
        self.gl.cull_face(mode)
    }

    fn depth_func(&self, func: GLenum) {
        self.gl.depth_func(func)
    }

    fn depth_mask(&self, flag: bool) {
        self.gl.depth_mask(flag)
    }

    fn depth_range(&self, near: f64, far: f64) {
        self.gl.depth_range(near, far)
    }

    fn disable(&self, cap: GLenum) {
        self.gl.disable(cap)
    }

    fn enable(&self, cap: GLenum) {
        self.gl.enable(cap)
    }

    fn front_face(&self, mode: GLenum) {
        self.gl.front_face(mode)
    }

    fn hint(&self, target: GLenum, mode: GLenum) {
        self.gl.hint(target, mode)
    }

    fn line_width(&self, width: GLfloat) {
        self.gl.line_width(width)
    }

    fn pixel_store_i(&self, name: GLenum, param: GLint) {
        self.gl.pixel_store_i(name, param)
    }

    fn polygon_offset(&self, factor: GLfloat, units: GLfloat) {
        self.gl.polygon_offset(factor, units)
    }

    fn sample_coverage(&self, value: GLfloat, invert: bool) {
        self.gl.sample_coverage(value, invert)
    }

    fn scissor(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        self.gl.scissor(x, y, width, height)
    }

    fn stencil_func(&self, func: GLenum, reference: GLint, mask: GLuint) {
        self.gl.stencil_func(func, reference, mask)
    }

    fn stencil_func_separate(&self, face: GLenum, func: GLenum, reference: GLint, mask: GLuint) {
        self.gl.stencil_func_separate(face, func, reference, mask)
    }

    fn stencil_mask(&self, mask: GLuint) {
        self.gl.stencil_mask(mask)
    }

    fn stencil_mask_separate(&self, face: GLenum, mask: GLuint) {
        self.gl.stencil_mask_separate(face, mask)
    }

    fn stencil_op(&self, sfail: GLenum, dpfail: GLenum, dppass: GLenum) {
        self.gl.stencil_op(sfail, dpfail, dppass)
    }

    fn stencil_op_separate(&self, face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum) {
        self.gl.stencil_op_separate(face, sfail, dpfail, dppass)
    }

    fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        self.gl.viewport(x, y, width, height)
    }

    fn gen_buffers(&self, n: GLsizei) -> Vec<GLuint> {
        self.gl.gen_buffers(n)
    }

    fn delete_buffers(&self, buffers: &[GLuint]) {
        self.gl.delete_buffers(buffers)
    }

    fn bind_buffer(&self, target: GLenum, buffer: GLuint) {
        self.gl.bind_buffer(target, buffer)
    }

    fn is_buffer(&self, buffer: GLuint) -> bool {
        IsObjectFns::call(self.is_object.buffer, buffer)
    }

    fn buffer_data(&self, target: GLenum, size: isize, data: Option<&[u8]>, usage: GLenum) {
        let ptr = data.map_or(std::ptr::null(), |data| data.as_ptr().cast::<c_void>());
        self.gl.buffer_data_untyped(target, size, ptr, usage)
    }

    fn buffer_sub_data(&self, target: GLenum, offset: isize, data: &[u8]) {
        self.gl.buffer_sub_data_untyped(
            target,
            offset,
            data.len() as isize,
            data.as_ptr().cast::<c_void>(),
        )
    }

    fn get_buffer_parameter_iv(&self, target: GLenum, pname: GLenum) -> GLint {
        self.gl.get_buffer_parameter_iv(target, pname)
    }

    fn gen_framebuffers(&self, n: GLsizei) -> Vec<GLuint> {
        self.gl.gen_framebuffers(n)
    }

    fn delete_framebuffers(&self, framebuffers: &[GLuint]) {
        self.gl.delete_framebuffers(framebuffers)
    }

    fn bind_framebuffer(&self, target: GLenum, framebuffer: GLuint) {
        self.gl.bind_framebuffer(target, framebuffer)
    }

    fn is_framebuffer(&self, framebuffer: GLuint) -> bool {
        self.gl.is_framebuffer(framebuffer) != 0
    }

    fn check_frame_buffer_status(&self, target: GLenum) -> GLenum {
        self.gl.check_frame_buffer_status(target)
    }

    fn framebuffer_renderbuffer(
        &self,
        target: GLenum,
        attachment: GLenum,
        renderbuffer_target: GLenum,
        renderbuffer: GLuint,
    ) {
        self.gl
            .framebuffer_renderbuffer(target, attachment, renderbuffer_target, renderbuffer)
    }

    fn framebuffer_texture_2d(
        &self,
        target: GLenum,
        attachment: GLenum,
        tex_target: GLenum,
        texture: GLuint,
        level: GLint,
    ) {
        self.gl
            .framebuffer_texture_2d(target, attachment, tex_target, texture, level)
    }

    fn framebuffer_texture_layer(
        &self,
        target: GLenum,
        attachment: GLenum,
        texture: GLuint,
        level: GLint,
        layer: GLint,
    ) {
        self.gl
            .framebuffer_texture_layer(target, attachment, texture, level, layer)
    }

    fn get_framebuffer_attachment_parameter_iv(
        &self,
        target: GLenum,
        attachment: GLenum,
        pname: GLenum,
    ) -> GLint {
        self.gl
            .get_framebuffer_attachment_parameter_iv(target, attachment, pname)
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
        self.gl.blit_framebuffer(
            src_x0, src_y0, src_x1, src_y1, dst_x0, dst_y0, dst_x1, dst_y1, mask, filter,
        )
    }

    fn invalidate_framebuffer(&self, target: GLenum, attachments: &[GLenum]) {
        self.gl.invalidate_framebuffer(target, attachments)
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
        self.gl
            .invalidate_sub_framebuffer(target, attachments, x, y, width, height)
    }

    fn read_buffer(&self, mode: GLenum) {
        self.gl.read_buffer(mode)
    }

    fn read_pixels(
        &self,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        ty: GLenum,
    ) -> Vec<u8> {
        self.gl.read_pixels(x, y, width, height, format, ty)
    }

    fn gen_renderbuffers(&self, n: GLsizei) -> Vec<GLuint> {
        self.gl.gen_renderbuffers(n)
    }

    fn delete_renderbuffers(&self, renderbuffers: &[GLuint]) {
        self.gl.delete_renderbuffers(renderbuffers)
    }

    fn bind_renderbuffer(&self, target: GLenum, renderbuffer: GLuint) {
        self.gl.bind_renderbuffer(target, renderbuffer)
    }

    fn is_renderbuffer(&self, renderbuffer: GLuint) -> bool {
        self.gl.is_renderbuffer(renderbuffer) != 0
    }

    fn renderbuffer_storage(
        &self,
        target: GLenum,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        self.gl
            .renderbuffer_storage(target, internal_format, width, height)
    }

    fn get_renderbuffer_parameter_iv(&self, target: GLenum, pname: GLenum) -> GLint {
        self.gl.get_renderbuffer_parameter_iv(target, pname)
    }

    fn gen_textures(&self, n: GLsizei) -> Vec<GLuint> {
        self.gl.gen_textures(n)
    }

    fn delete_textures(&self, textures: &[GLuint]) {
        self.gl.delete_textures(textures)
    }

    fn bind_texture(&self, target: GLenum, texture: GLuint) {
        self.gl.bind_texture(target, texture)
    }

    fn is_texture(&self, texture: GLuint) -> bool {
        self.gl.is_texture(texture) != 0
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
        self.gl.tex_image_2d(
            target,
            level,
            internal_format,
            width,
            height,
            border,
            format,
            ty,
            data,
        )
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
        self.gl
            .tex_sub_image_2d(target, level, x, y, width, height, format, ty, data)
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
        self.gl.tex_image_3d(
            target,
            level,
            internal_format,
            width,
            height,
            depth,
            border,
            format,
            ty,
            data,
        )
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
        self.gl.tex_sub_image_3d(
            target, level, x, y, z, width, height, depth, format, ty, data,
        )
    }

    fn tex_storage_2d(
        &self,
        target: GLenum,
        levels: GLint,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        self.gl
            .tex_storage_2d(target, levels, internal_format, width, height)
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
        self.gl
            .tex_storage_3d(target, levels, internal_format, width, height, depth)
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
        self.gl.copy_tex_image_2d(
            target,
            level,
            internal_format,
            x,
            y,
            width,
            height,
            border,
        )
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
        self.gl
            .copy_tex_sub_image_2d(target, level, xoffset, yoffset, x, y, width, height)
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
        self.gl.copy_tex_sub_image_3d(
            target, level, xoffset, yoffset, zoffset, x, y, width, height,
        )
    }

    fn generate_mipmap(&self, target: GLenum) {
        self.gl.generate_mipmap(target)
    }

    fn tex_parameter_i(&self, target: GLenum, pname: GLenum, param: GLint) {
        self.gl.tex_parameter_i(target, pname, param)
    }

    fn tex_parameter_f(&self, target: GLenum, pname: GLenum, param: GLfloat) {
        self.gl.tex_parameter_f(target, pname, param)
    }

    fn get_tex_parameter_iv(&self, target: GLenum, pname: GLenum) -> GLint {
        self.gl.get_tex_parameter_iv(target, pname)
    }

    fn get_tex_parameter_fv(&self, target: GLenum, pname: GLenum) -> GLfloat {
        self.gl.get_tex_parameter_fv(target, pname)
    }

    fn create_program(&self) -> GLuint {
        self.gl.create_program()
    }

    fn delete_program(&self, program: GLuint) {
        self.gl.delete_program(program)
    }

    fn is_program(&self, program: GLuint) -> bool {
        IsObjectFns::call(self.is_object.program, program)
    }

    fn create_shader(&self, shader_type: GLenum) -> GLuint {
        self.gl.create_shader(shader_type)
    }

    fn delete_shader(&self, shader: GLuint) {
        self.gl.delete_shader(shader)
    }

    fn is_shader(&self, shader: GLuint) -> bool {
        self.gl.is_shader(shader) != 0
    }

    fn shader_source(&self, shader: GLuint, source: &str) {
        self.gl.shader_source(shader, &[source.as_bytes()])
    }

    fn compile_shader(&self, shader: GLuint) {
        self.gl.compile_shader(shader)
    }

    fn attach_shader(&self, program: GLuint, shader: GLuint) {
        self.gl.attach_shader(program, shader)
    }

    fn detach_shader(&self, program: GLuint, shader: GLuint) {
        self.gl.detach_shader(program, shader)
    }

    fn link_program(&self, program: GLuint) {
        self.gl.link_program(program)
    }

    fn validate_program(&self, program: GLuint) {
        self.gl.validate_program(program)
    }

    fn use_program(&self, program: GLuint) {
        self.gl.use_program(program)
    }

    fn bind_attrib_location(&self, program: GLuint, index: GLuint, name: &str) {
        self.gl.bind_attrib_location(program, index, name)
    }

    fn get_program_iv(&self, program: GLuint, pname: GLenum) -> GLint {
        let mut result = [0];
        unsafe { self.gl.get_program_iv(program, pname, &mut result) };
        result[0]
    }

    fn get_shader_iv(&self, shader: GLuint, pname: GLenum) -> GLint {
        let mut result = [0];
        unsafe { self.gl.get_shader_iv(shader, pname, &mut result) };
        result[0]
    }

    fn get_program_info_log(&self, program: GLuint) -> String {
        self.gl.get_program_info_log(program)
    }

    fn get_shader_info_log(&self, shader: GLuint) -> String {
        self.gl.get_shader_info_log(shader)
    }

    fn get_shader_precision_format(
        &self,
        shader_type: GLenum,
        precision_type: GLenum,
    ) -> (GLint, GLint, GLint) {
        self.gl
            .get_shader_precision_format(shader_type, precision_type)
    }

    fn get_active_attrib(&self, program: GLuint, index: GLuint) -> (GLint, GLenum, String) {
        self.gl.get_active_attrib(program, index)
    }

    fn get_active_uniform(&self, program: GLuint, index: GLuint) -> (GLint, GLenum, String) {
        self.gl.get_active_uniform(program, index)
    }

    fn get_attrib_location(&self, program: GLuint, name: &str) -> GLint {
        self.gl.get_attrib_location(program, name)
    }

    fn get_uniform_location(&self, program: GLuint, name: &str) -> GLint {
        self.gl.get_uniform_location(program, name)
    }

    fn get_frag_data_location(&self, program: GLuint, name: &str) -> GLint {
        self.gl.get_frag_data_location(program, name)
    }

    fn uniform_fv(&self, dim: usize, location: GLint, values: &[GLfloat]) {
        match dim {
            1 => self.gl.uniform_1fv(location, values),
            2 => self.gl.uniform_2fv(location, values),
            3 => self.gl.uniform_3fv(location, values),
            4 => self.gl.uniform_4fv(location, values),
            _ => warn!("uniform_fv: unsupported dimension {dim}"),
        }
    }

    fn uniform_iv(&self, dim: usize, location: GLint, values: &[GLint]) {
        match dim {
            1 => self.gl.uniform_1iv(location, values),
            2 => self.gl.uniform_2iv(location, values),
            3 => self.gl.uniform_3iv(location, values),
            4 => self.gl.uniform_4iv(location, values),
            _ => warn!("uniform_iv: unsupported dimension {dim}"),
        }
    }

    fn uniform_ui(&self, dim: usize, location: GLint, values: &[GLuint]) {
        match (dim, values) {
            (1, &[x, ..]) => self.gl.uniform_1ui(location, x),
            (2, &[x, y, ..]) => self.gl.uniform_2ui(location, x, y),
            (3, &[x, y, z, ..]) => self.gl.uniform_3ui(location, x, y, z),
            (4, &[x, y, z, w, ..]) => self.gl.uniform_4ui(location, x, y, z, w),
            _ => warn!("uniform_ui: {} values for dimension {dim}", values.len()),
        }
    }

    fn uniform_matrix_fv(&self, dim: usize, location: GLint, transpose: bool, values: &[GLfloat]) {
        match dim {
            2 => self.gl.uniform_matrix_2fv(location, transpose, values),
            3 => self.gl.uniform_matrix_3fv(location, transpose, values),
            4 => self.gl.uniform_matrix_4fv(location, transpose, values),
            _ => warn!("uniform_matrix_fv: unsupported dimension {dim}"),
        }
    }

    fn enable_vertex_attrib_array(&self, index: GLuint) {
        self.gl.enable_vertex_attrib_array(index)
    }

    fn disable_vertex_attrib_array(&self, index: GLuint) {
        self.gl.disable_vertex_attrib_array(index)
    }

    fn vertex_attrib_4f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) {
        self.gl.vertex_attrib_4f(index, x, y, z, w)
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
        self.gl
            .vertex_attrib_pointer(index, size, ty, normalized, stride, offset)
    }

    fn vertex_attrib_i_pointer(
        &self,
        index: GLuint,
        size: GLint,
        ty: GLenum,
        stride: GLsizei,
        offset: GLuint,
    ) {
        self.gl
            .vertex_attrib_i_pointer(index, size, ty, stride, offset)
    }

    fn vertex_attrib_divisor(&self, index: GLuint, divisor: GLuint) {
        self.gl.vertex_attrib_divisor(index, divisor)
    }

    fn clear(&self, mask: GLenum) {
        self.gl.clear(mask)
    }

    fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLsizei) {
        self.gl.draw_arrays(mode, first, count)
    }

    fn draw_elements(&self, mode: GLenum, count: GLsizei, ty: GLenum, offset: GLuint) {
        self.gl.draw_elements(mode, count, ty, offset)
    }

    fn draw_arrays_instanced(
        &self,
        mode: GLenum,
        first: GLint,
        count: GLsizei,
        instances: GLsizei,
    ) {
        self.gl.draw_arrays_instanced(mode, first, count, instances)
    }

    fn draw_elements_instanced(
        &self,
        mode: GLenum,
        count: GLsizei,
        ty: GLenum,
        offset: GLuint,
        instances: GLsizei,
    ) {
        self.gl
            .draw_elements_instanced(mode, count, ty, offset, instances)
    }

    fn draw_buffers(&self, buffers: &[GLenum]) {
        self.gl.draw_buffers(buffers)
    }

    fn flush(&self) {
        self.gl.flush()
    }

    fn finish(&self) {
        self.gl.finish()
    }

    fn gen_vertex_arrays(&self, n: GLsizei) -> Vec<GLuint> {
        self.gl.gen_vertex_arrays(n)
    }

    fn delete_vertex_arrays(&self, arrays: &[GLuint]) {
        self.gl.delete_vertex_arrays(arrays)
    }

    fn bind_vertex_array(&self, array: GLuint) {
        self.gl.bind_vertex_array(array)
    }

    fn is_vertex_array(&self, array: GLuint) -> bool {
        IsObjectFns::call(self.is_object.vertex_array, array)
    }

    fn gen_queries(&self, n: GLsizei) -> Vec<GLuint> {
        self.gl.gen_queries(n)
    }

    fn delete_queries(&self, queries: &[GLuint]) {
        self.gl.delete_queries(queries)
    }

    fn is_query(&self, query: GLuint) -> bool {
        IsObjectFns::call(self.is_object.query, query)
    }

    fn begin_query(&self, target: GLenum, query: GLuint) {
        self.gl.begin_query(target, query)
    }

    fn end_query(&self, target: GLenum) {
        self.gl.end_query(target)
    }

    fn get_query_object_uiv(&self, query: GLuint, pname: GLenum) -> GLuint {
        self.gl.get_query_object_uiv(query, pname)
    }

    fn bind_buffer_base(&self, target: GLenum, index: GLuint, buffer: GLuint) {
        self.gl.bind_buffer_base(target, index, buffer)
    }

    fn bind_buffer_range(
        &self,
        target: GLenum,
        index: GLuint,
        buffer: GLuint,
        offset: isize,
        size: isize,
    ) {
        self.gl
            .bind_buffer_range(target, index, buffer, offset, size)
    }

    fn get_uniform_block_index(&self, program: GLuint, name: &str) -> GLuint {
        self.gl.get_uniform_block_index(program, name)
    }

    fn get_uniform_indices(&self, program: GLuint, names: &[&str]) -> Vec<GLuint> {
        self.gl.get_uniform_indices(program, names)
    }

    fn get_active_uniforms_iv(
        &self,
        program: GLuint,
        indices: Vec<GLuint>,
        pname: GLenum,
    ) -> Vec<GLint> {
        self.gl.get_active_uniforms_iv(program, indices, pname)
    }

    fn get_active_uniform_block_name(&self, program: GLuint, index: GLuint) -> String {
        self.gl.get_active_uniform_block_name(program, index)
    }

    fn uniform_block_binding(&self, program: GLuint, block_index: GLuint, binding: GLuint) {
        self.gl.uniform_block_binding(program, block_index, binding)
    }
}
