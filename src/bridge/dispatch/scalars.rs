//! ### English
//! Fire-and-forget methods whose arguments are all numbers.
//!
//! ### 中文
//! 参数全为数值的即发即弃方法。

use super::MethodTable;

pub(super) fn register(t: &mut MethodTable) {
    // Viewing and clipping.
    t.scalar("scissor", 4, |gl, s| gl.scissor(s.i(0), s.i(1), s.i(2), s.i(3)));
    t.scalar("viewport", 4, |gl, s| gl.viewport(s.i(0), s.i(1), s.i(2), s.i(3)));

    // State.
    t.scalar("activeTexture", 1, |gl, s| gl.active_texture(s.e(0)));
    t.scalar("blendColor", 4, |gl, s| {
        gl.blend_color(s.f(0), s.f(1), s.f(2), s.f(3))
    });
    t.scalar("blendEquation", 1, |gl, s| gl.blend_equation(s.e(0)));
    t.scalar("blendEquationSeparate", 2, |gl, s| {
        gl.blend_equation_separate(s.e(0), s.e(1))
    });
    t.scalar("blendFunc", 2, |gl, s| gl.blend_func(s.e(0), s.e(1)));
    t.scalar("blendFuncSeparate", 4, |gl, s| {
        gl.blend_func_separate(s.e(0), s.e(1), s.e(2), s.e(3))
    });
    t.scalar("clearColor", 4, |gl, s| {
        gl.clear_color(s.f(0), s.f(1), s.f(2), s.f(3))
    });
    t.scalar("clearDepth", 1, |gl, s| gl.clear_depth(s.d(0)));
    t.scalar("clearStencil", 1, |gl, s| gl.clear_stencil(s.i(0)));
    t.scalar("colorMask", 4, |gl, s| gl.color_mask(s.b(0), s.b(1), s.b(2), s.b(3)));
    t.scalar("cullFace", 1, |gl, s| gl.cull_face(s.e(0)));
    t.scalar("depthFunc", 1, |gl, s| gl.depth_func(s.e(0)));
    t.scalar("depthMask", 1, |gl, s| gl.depth_mask(s.b(0)));
    t.scalar("depthRange", 2, |gl, s| gl.depth_range(s.d(0), s.d(1)));
    t.scalar("disable", 1, |gl, s| gl.disable(s.e(0)));
    t.scalar("enable", 1, |gl, s| gl.enable(s.e(0)));
    t.scalar("frontFace", 1, |gl, s| gl.front_face(s.e(0)));
    t.scalar("hint", 2, |gl, s| gl.hint(s.e(0), s.e(1)));
    t.scalar("lineWidth", 1, |gl, s| gl.line_width(s.f(0)));
    t.scalar("polygonOffset", 2, |gl, s| gl.polygon_offset(s.f(0), s.f(1)));
    t.scalar("sampleCoverage", 2, |gl, s| gl.sample_coverage(s.f(0), s.b(1)));
    t.scalar("stencilFunc", 3, |gl, s| gl.stencil_func(s.e(0), s.i(1), s.u(2)));
    t.scalar("stencilFuncSeparate", 4, |gl, s| {
        gl.stencil_func_separate(s.e(0), s.e(1), s.i(2), s.u(3))
    });
    t.scalar("stencilMask", 1, |gl, s| gl.stencil_mask(s.u(0)));
    t.scalar("stencilMaskSeparate", 2, |gl, s| {
        gl.stencil_mask_separate(s.e(0), s.u(1))
    });
    t.scalar("stencilOp", 3, |gl, s| gl.stencil_op(s.e(0), s.e(1), s.e(2)));
    t.scalar("stencilOpSeparate", 4, |gl, s| {
        gl.stencil_op_separate(s.e(0), s.e(1), s.e(2), s.e(3))
    });

    // Framebuffers and renderbuffers.
    t.scalar("renderbufferStorage", 4, |gl, s| {
        gl.renderbuffer_storage(s.e(0), s.e(1), s.i(2), s.i(3))
    });
    t.scalar2("blitFramebuffer", 10, |gl, s| {
        gl.blit_framebuffer(
            s.i(0),
            s.i(1),
            s.i(2),
            s.i(3),
            s.i(4),
            s.i(5),
            s.i(6),
            s.i(7),
            s.e(8),
            s.e(9),
        )
    });
    t.scalar2("readBuffer", 1, |gl, s| gl.read_buffer(s.e(0)));

    // Textures.
    t.scalar("copyTexImage2D", 8, |gl, s| {
        gl.copy_tex_image_2d(s.e(0), s.i(1), s.e(2), s.i(3), s.i(4), s.i(5), s.i(6), s.i(7))
    });
    t.scalar("copyTexSubImage2D", 8, |gl, s| {
        gl.copy_tex_sub_image_2d(s.e(0), s.i(1), s.i(2), s.i(3), s.i(4), s.i(5), s.i(6), s.i(7))
    });
    t.scalar("generateMipmap", 1, |gl, s| gl.generate_mipmap(s.e(0)));
    t.scalar("texParameterf", 3, |gl, s| gl.tex_parameter_f(s.e(0), s.e(1), s.f(2)));
    t.scalar("texParameteri", 3, |gl, s| gl.tex_parameter_i(s.e(0), s.e(1), s.i(2)));
    t.scalar2("texStorage2D", 5, |gl, s| {
        gl.tex_storage_2d(s.e(0), s.i(1), s.e(2), s.i(3), s.i(4))
    });
    t.scalar2("texStorage3D", 6, |gl, s| {
        gl.tex_storage_3d(s.e(0), s.i(1), s.e(2), s.i(3), s.i(4), s.i(5))
    });
    t.scalar2("copyTexSubImage3D", 9, |gl, s| {
        gl.copy_tex_sub_image_3d(
            s.e(0),
            s.i(1),
            s.i(2),
            s.i(3),
            s.i(4),
            s.i(5),
            s.i(6),
            s.i(7),
            s.i(8),
        )
    });

    // Uniforms.
    t.scalar("uniform1f", 2, |gl, s| gl.uniform_fv(1, s.location(0), &[s.f(1)]));
    t.scalar("uniform2f", 3, |gl, s| {
        gl.uniform_fv(2, s.location(0), &[s.f(1), s.f(2)])
    });
    t.scalar("uniform3f", 4, |gl, s| {
        gl.uniform_fv(3, s.location(0), &[s.f(1), s.f(2), s.f(3)])
    });
    t.scalar("uniform4f", 5, |gl, s| {
        gl.uniform_fv(4, s.location(0), &[s.f(1), s.f(2), s.f(3), s.f(4)])
    });
    t.scalar("uniform1i", 2, |gl, s| gl.uniform_iv(1, s.location(0), &[s.i(1)]));
    t.scalar("uniform2i", 3, |gl, s| {
        gl.uniform_iv(2, s.location(0), &[s.i(1), s.i(2)])
    });
    t.scalar("uniform3i", 4, |gl, s| {
        gl.uniform_iv(3, s.location(0), &[s.i(1), s.i(2), s.i(3)])
    });
    t.scalar("uniform4i", 5, |gl, s| {
        gl.uniform_iv(4, s.location(0), &[s.i(1), s.i(2), s.i(3), s.i(4)])
    });
    t.scalar2("uniform1ui", 2, |gl, s| gl.uniform_ui(1, s.location(0), &[s.u(1)]));
    t.scalar2("uniform2ui", 3, |gl, s| {
        gl.uniform_ui(2, s.location(0), &[s.u(1), s.u(2)])
    });
    t.scalar2("uniform3ui", 4, |gl, s| {
        gl.uniform_ui(3, s.location(0), &[s.u(1), s.u(2), s.u(3)])
    });
    t.scalar2("uniform4ui", 5, |gl, s| {
        gl.uniform_ui(4, s.location(0), &[s.u(1), s.u(2), s.u(3), s.u(4)])
    });

    // Vertex attributes.
    t.scalar("enableVertexAttribArray", 1, |gl, s| {
        gl.enable_vertex_attrib_array(s.u(0))
    });
    t.scalar("disableVertexAttribArray", 1, |gl, s| {
        gl.disable_vertex_attrib_array(s.u(0))
    });
    t.scalar("vertexAttrib1f", 2, |gl, s| {
        gl.vertex_attrib_4f(s.u(0), s.f(1), 0.0, 0.0, 1.0)
    });
    t.scalar("vertexAttrib2f", 3, |gl, s| {
        gl.vertex_attrib_4f(s.u(0), s.f(1), s.f(2), 0.0, 1.0)
    });
    t.scalar("vertexAttrib3f", 4, |gl, s| {
        gl.vertex_attrib_4f(s.u(0), s.f(1), s.f(2), s.f(3), 1.0)
    });
    t.scalar("vertexAttrib4f", 5, |gl, s| {
        gl.vertex_attrib_4f(s.u(0), s.f(1), s.f(2), s.f(3), s.f(4))
    });
    t.scalar("vertexAttribPointer", 6, |gl, s| {
        gl.vertex_attrib_pointer(s.u(0), s.i(1), s.e(2), s.b(3), s.i(4), s.u(5))
    });
    t.scalar2("vertexAttribIPointer", 5, |gl, s| {
        gl.vertex_attrib_i_pointer(s.u(0), s.i(1), s.e(2), s.i(3), s.u(4))
    });
    t.scalar2("vertexAttribDivisor", 2, |gl, s| {
        gl.vertex_attrib_divisor(s.u(0), s.u(1))
    });

    // Drawing.
    t.scalar("clear", 1, |gl, s| gl.clear(s.e(0)));
    t.scalar("drawArrays", 3, |gl, s| gl.draw_arrays(s.e(0), s.i(1), s.i(2)));
    t.scalar("drawElements", 4, |gl, s| {
        gl.draw_elements(s.e(0), s.i(1), s.e(2), s.u(3))
    });
    t.scalar2("drawArraysInstanced", 4, |gl, s| {
        gl.draw_arrays_instanced(s.e(0), s.i(1), s.i(2), s.i(3))
    });
    t.scalar2("drawElementsInstanced", 5, |gl, s| {
        gl.draw_elements_instanced(s.e(0), s.i(1), s.e(2), s.u(3), s.i(4))
    });
    t.scalar("finish", 0, |gl, _| gl.finish());
    t.scalar("flush", 0, |gl, _| gl.flush());

    // Queries.
    t.scalar2("endQuery", 1, |gl, s| gl.end_query(s.e(0)));
}
