//! ### English
//! The GL entry points queued operations are allowed to touch.
//!
//! Operations never talk to a GL loader directly; they receive a `&dyn GlApi` for the duration of
//! a flush. Production code hands in [`GleamBackend`]; unit tests hand in a software fake.
//!
//! Method names follow `gleam::gl::Gl`. Uniform uploads are folded into one method per element
//! type with an explicit vector dimension.
//!
//! ### 中文
//! 队列中的操作可以调用的 GL 入口。
//!
//! 操作从不直接访问 GL loader，而是在 flush 期间拿到一个 `&dyn GlApi`。生产环境传入
//! [`GleamBackend`]，单元测试传入软件实现的 fake。
//!
//! 方法名沿用 `gleam::gl::Gl`；uniform 上传按元素类型合并为单个方法，并显式给出向量维度。

mod gleam_backend;

pub use gleam_backend::GleamBackend;

use gleam::gl::{GLboolean, GLenum, GLfloat, GLint, GLsizei, GLuint};

/// ### English
/// Graphics API used by the GL thread.
///
/// Implementations are only ever called on the thread owning the current GL context.
///
/// ### 中文
/// GL 线程使用的图形 API。
///
/// 实现只会在持有当前 GL 上下文的线程上被调用。
pub trait GlApi {
    // Context information.
    fn get_error(&self) -> GLenum;
    fn get_string(&self, name: GLenum) -> String;
    /// ### English
    /// Reads up to four integer values of a state parameter (unused slots stay 0).
    ///
    /// ### 中文
    /// 读取状态参数的最多四个整数值（未使用的槽位保持 0）。
    fn get_integer_v(&self, name: GLenum) -> [GLint; 4];
    fn get_float_v(&self, name: GLenum) -> [GLfloat; 4];
    fn get_boolean_v(&self, name: GLenum) -> [GLboolean; 4];
    fn is_enabled(&self, cap: GLenum) -> bool;

    // Fixed-function state.
    fn active_texture(&self, texture: GLenum);
    fn blend_color(&self, r: GLfloat, g: GLfloat, b: GLfloat, a: GLfloat);
    fn blend_equation(&self, mode: GLenum);
    fn blend_equation_separate(&self, mode_rgb: GLenum, mode_alpha: GLenum);
    fn blend_func(&self, sfactor: GLenum, dfactor: GLenum);
    fn blend_func_separate(
        &self,
        src_rgb: GLenum,
        dst_rgb: GLenum,
        src_alpha: GLenum,
        dst_alpha: GLenum,
    );
    fn clear_color(&self, r: GLfloat, g: GLfloat, b: GLfloat, a: GLfloat);
    fn clear_depth(&self, depth: f64);
    fn clear_stencil(&self, s: GLint);
    fn color_mask(&self, r: bool, g: bool, b: bool, a: bool);
    fn cull_face(&self, mode: GLenum);
    fn depth_func(&self, func: GLenum);
    fn depth_mask(&self, flag: bool);
    fn depth_range(&self, near: f64, far: f64);
    fn disable(&self, cap: GLenum);
    fn enable(&self, cap: GLenum);
    fn front_face(&self, mode: GLenum);
    fn hint(&self, target: GLenum, mode: GLenum);
    fn line_width(&self, width: GLfloat);
    fn pixel_store_i(&self, name: GLenum, param: GLint);
    fn polygon_offset(&self, factor: GLfloat, units: GLfloat);
    fn sample_coverage(&self, value: GLfloat, invert: bool);
    fn scissor(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn stencil_func(&self, func: GLenum, reference: GLint, mask: GLuint);
    fn stencil_func_separate(&self, face: GLenum, func: GLenum, reference: GLint, mask: GLuint);
    fn stencil_mask(&self, mask: GLuint);
    fn stencil_mask_separate(&self, face: GLenum, mask: GLuint);
    fn stencil_op(&self, sfail: GLenum, dpfail: GLenum, dppass: GLenum);
    fn stencil_op_separate(&self, face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum);
    fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei);

    // Buffers.
    fn gen_buffers(&self, n: GLsizei) -> Vec<GLuint>;
    fn delete_buffers(&self, buffers: &[GLuint]);
    fn bind_buffer(&self, target: GLenum, buffer: GLuint);
    fn is_buffer(&self, buffer: GLuint) -> bool;
    /// ### English
    /// Allocates `size` bytes; `data`, when present, holds exactly `size` bytes.
    ///
    /// ### 中文
    /// 分配 `size` 字节；若提供 `data`，其长度恰为 `size`。
    fn buffer_data(&self, target: GLenum, size: isize, data: Option<&[u8]>, usage: GLenum);
    fn buffer_sub_data(&self, target: GLenum, offset: isize, data: &[u8]);
    fn get_buffer_parameter_iv(&self, target: GLenum, pname: GLenum) -> GLint;

    // Framebuffers and renderbuffers.
    fn gen_framebuffers(&self, n: GLsizei) -> Vec<GLuint>;
    fn delete_framebuffers(&self, framebuffers: &[GLuint]);
    fn bind_framebuffer(&self, target: GLenum, framebuffer: GLuint);
    fn is_framebuffer(&self, framebuffer: GLuint) -> bool;
    fn check_frame_buffer_status(&self, target: GLenum) -> GLenum;
    fn framebuffer_renderbuffer(
        &self,
        target: GLenum,
        attachment: GLenum,
        renderbuffer_target: GLenum,
        renderbuffer: GLuint,
    );
    fn framebuffer_texture_2d(
        &self,
        target: GLenum,
        attachment: GLenum,
        tex_target: GLenum,
        texture: GLuint,
        level: GLint,
    );
    fn framebuffer_texture_layer(
        &self,
        target: GLenum,
        attachment: GLenum,
        texture: GLuint,
        level: GLint,
        layer: GLint,
    );
    fn get_framebuffer_attachment_parameter_iv(
        &self,
        target: GLenum,
        attachment: GLenum,
        pname: GLenum,
    ) -> GLint;
    #[allow(clippy::too_many_arguments)]
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
    );
    fn invalidate_framebuffer(&self, target: GLenum, attachments: &[GLenum]);
    fn invalidate_sub_framebuffer(
        &self,
        target: GLenum,
        attachments: &[GLenum],
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    );
    fn read_buffer(&self, mode: GLenum);
    fn read_pixels(
        &self,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        ty: GLenum,
    ) -> Vec<u8>;
    fn gen_renderbuffers(&self, n: GLsizei) -> Vec<GLuint>;
    fn delete_renderbuffers(&self, renderbuffers: &[GLuint]);
    fn bind_renderbuffer(&self, target: GLenum, renderbuffer: GLuint);
    fn is_renderbuffer(&self, renderbuffer: GLuint) -> bool;
    fn renderbuffer_storage(
        &self,
        target: GLenum,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
    );
    fn get_renderbuffer_parameter_iv(&self, target: GLenum, pname: GLenum) -> GLint;

    // Textures.
    fn gen_textures(&self, n: GLsizei) -> Vec<GLuint>;
    fn delete_textures(&self, textures: &[GLuint]);
    fn bind_texture(&self, target: GLenum, texture: GLuint);
    fn is_texture(&self, texture: GLuint) -> bool;
    #[allow(clippy::too_many_arguments)]
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
    );
    #[allow(clippy::too_many_arguments)]
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
    );
    #[allow(clippy::too_many_arguments)]
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
    );
    #[allow(clippy::too_many_arguments)]
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
    );
    fn tex_storage_2d(
        &self,
        target: GLenum,
        levels: GLint,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
    );
    fn tex_storage_3d(
        &self,
        target: GLenum,
        levels: GLint,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
    );
    #[allow(clippy::too_many_arguments)]
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
    );
    #[allow(clippy::too_many_arguments)]
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
    );
    #[allow(clippy::too_many_arguments)]
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
    );
    fn generate_mipmap(&self, target: GLenum);
    fn tex_parameter_i(&self, target: GLenum, pname: GLenum, param: GLint);
    fn tex_parameter_f(&self, target: GLenum, pname: GLenum, param: GLfloat);
    fn get_tex_parameter_iv(&self, target: GLenum, pname: GLenum) -> GLint;
    fn get_tex_parameter_fv(&self, target: GLenum, pname: GLenum) -> GLfloat;

    // Programs and shaders.
    fn create_program(&self) -> GLuint;
    fn delete_program(&self, program: GLuint);
    fn is_program(&self, program: GLuint) -> bool;
    fn create_shader(&self, shader_type: GLenum) -> GLuint;
    fn delete_shader(&self, shader: GLuint);
    fn is_shader(&self, shader: GLuint) -> bool;
    fn shader_source(&self, shader: GLuint, source: &str);
    fn compile_shader(&self, shader: GLuint);
    fn attach_shader(&self, program: GLuint, shader: GLuint);
    fn detach_shader(&self, program: GLuint, shader: GLuint);
    fn link_program(&self, program: GLuint);
    fn validate_program(&self, program: GLuint);
    fn use_program(&self, program: GLuint);
    fn bind_attrib_location(&self, program: GLuint, index: GLuint, name: &str);
    fn get_program_iv(&self, program: GLuint, pname: GLenum) -> GLint;
    fn get_shader_iv(&self, shader: GLuint, pname: GLenum) -> GLint;
    fn get_program_info_log(&self, program: GLuint) -> String;
    fn get_shader_info_log(&self, shader: GLuint) -> String;
    /// ### English
    /// Returns `(range_min, range_max, precision)`.
    ///
    /// ### 中文
    /// 返回 `(range_min, range_max, precision)`。
    fn get_shader_precision_format(
        &self,
        shader_type: GLenum,
        precision_type: GLenum,
    ) -> (GLint, GLint, GLint);
    /// ### English
    /// Returns `(size, type, name)`; an empty name means the index is out of range.
    ///
    /// ### 中文
    /// 返回 `(size, type, name)`；name 为空表示索引越界。
    fn get_active_attrib(&self, program: GLuint, index: GLuint) -> (GLint, GLenum, String);
    fn get_active_uniform(&self, program: GLuint, index: GLuint) -> (GLint, GLenum, String);
    fn get_attrib_location(&self, program: GLuint, name: &str) -> GLint;
    fn get_uniform_location(&self, program: GLuint, name: &str) -> GLint;
    fn get_frag_data_location(&self, program: GLuint, name: &str) -> GLint;

    // Uniforms. `dim` is the vector (or square matrix) dimension.
    fn uniform_fv(&self, dim: usize, location: GLint, values: &[GLfloat]);
    fn uniform_iv(&self, dim: usize, location: GLint, values: &[GLint]);
    fn uniform_ui(&self, dim: usize, location: GLint, values: &[GLuint]);
    fn uniform_matrix_fv(&self, dim: usize, location: GLint, transpose: bool, values: &[GLfloat]);

    // Vertex attributes and drawing.
    fn enable_vertex_attrib_array(&self, index: GLuint);
    fn disable_vertex_attrib_array(&self, index: GLuint);
    fn vertex_attrib_4f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
    fn vertex_attrib_pointer(
        &self,
        index: GLuint,
        size: GLint,
        ty: GLenum,
        normalized: bool,
        stride: GLsizei,
        offset: GLuint,
    );
    fn vertex_attrib_i_pointer(
        &self,
        index: GLuint,
        size: GLint,
        ty: GLenum,
        stride: GLsizei,
        offset: GLuint,
    );
    fn vertex_attrib_divisor(&self, index: GLuint, divisor: GLuint);
    fn clear(&self, mask: GLenum);
    fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLsizei);
    fn draw_elements(&self, mode: GLenum, count: GLsizei, ty: GLenum, offset: GLuint);
    fn draw_arrays_instanced(
        &self,
        mode: GLenum,
        first: GLint,
        count: GLsizei,
        instances: GLsizei,
    );
    fn draw_elements_instanced(
        &self,
        mode: GLenum,
        count: GLsizei,
        ty: GLenum,
        offset: GLuint,
        instances: GLsizei,
    );
    fn draw_buffers(&self, buffers: &[GLenum]);
    fn flush(&self);
    fn finish(&self);

    // Vertex arrays and queries.
    fn gen_vertex_arrays(&self, n: GLsizei) -> Vec<GLuint>;
    fn delete_vertex_arrays(&self, arrays: &[GLuint]);
    fn bind_vertex_array(&self, array: GLuint);
    fn is_vertex_array(&self, array: GLuint) -> bool;
    fn gen_queries(&self, n: GLsizei) -> Vec<GLuint>;
    fn delete_queries(&self, queries: &[GLuint]);
    fn is_query(&self, query: GLuint) -> bool;
    fn begin_query(&self, target: GLenum, query: GLuint);
    fn end_query(&self, target: GLenum);
    fn get_query_object_uiv(&self, query: GLuint, pname: GLenum) -> GLuint;

    // Uniform buffers.
    fn bind_buffer_base(&self, target: GLenum, index: GLuint, buffer: GLuint);
    fn bind_buffer_range(
        &self,
        target: GLenum,
        index: GLuint,
        buffer: GLuint,
        offset: isize,
        size: isize,
    );
    fn get_uniform_block_index(&self, program: GLuint, name: &str) -> GLuint;
    fn get_uniform_indices(&self, program: GLuint, names: &[&str]) -> Vec<GLuint>;
    fn get_active_uniforms_iv(
        &self,
        program: GLuint,
        indices: Vec<GLuint>,
        pname: GLenum,
    ) -> Vec<GLint>;
    fn get_active_uniform_block_name(&self, program: GLuint, index: GLuint) -> String;
    fn uniform_block_binding(&self, program: GLuint, block_index: GLuint, binding: GLuint);
}
