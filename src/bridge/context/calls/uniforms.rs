//! ### English
//! Array-valued uniform and vertex-attribute uploads.
//!
//! Scalar forms (`uniform1f`, `vertexAttrib3f`, ...) go through the method table directly.
//!
//! ### 中文
//! 数组形式的 uniform 与顶点属性上传。
//!
//! 标量形式（`uniform1f`、`vertexAttrib3f` 等）直接经由方法表处理。

use gleam::gl::{GLfloat, GLint, GLuint};

use crate::bridge::context::BridgeContext;

/// Default `(x, y, z, w)` of a generic vertex attribute.
const ATTRIB_DEFAULTS: [GLfloat; 4] = [0.0, 0.0, 0.0, 1.0];

impl BridgeContext {
    /// ### English
    /// `uniform{1,2,3,4}fv`.
    ///
    /// #### Parameters
    /// - `dim`: vector dimension, 1 to 4.
    /// - `location`: uniform location; `-1` is ignored by GL.
    /// - `values`: `dim * count` floats.
    ///
    /// ### 中文
    /// `uniform{1,2,3,4}fv`。
    ///
    /// #### 参数
    /// - `dim`：向量维度，1 到 4。
    /// - `location`：uniform 位置；GL 会忽略 `-1`。
    /// - `values`：`dim * count` 个浮点数。
    pub fn uniform_fv(&self, dim: usize, location: GLint, values: Vec<GLfloat>) {
        self.enqueue(move |session| {
            session.gl.uniform_fv(dim, location, &values);
            Ok(())
        });
    }

    pub fn uniform_iv(&self, dim: usize, location: GLint, values: Vec<GLint>) {
        self.enqueue(move |session| {
            session.gl.uniform_iv(dim, location, &values);
            Ok(())
        });
    }

    pub fn uniform_ui(&self, dim: usize, location: GLint, values: Vec<GLuint>) {
        self.enqueue(move |session| {
            session.gl.uniform_ui(dim, location, &values);
            Ok(())
        });
    }

    /// `uniformMatrix{2,3,4}fv`; `dim` is the side of the square matrix.
    pub fn uniform_matrix_fv(
        &self,
        dim: usize,
        location: GLint,
        transpose: bool,
        values: Vec<GLfloat>,
    ) {
        self.enqueue(move |session| {
            session
                .gl
                .uniform_matrix_fv(dim, location, transpose, &values);
            Ok(())
        });
    }

    /// ### English
    /// `vertexAttrib{1,2,3,4}fv`. Missing components take the GL defaults `(0, 0, 0, 1)`.
    ///
    /// ### 中文
    /// `vertexAttrib{1,2,3,4}fv`。缺失的分量取 GL 默认值 `(0, 0, 0, 1)`。
    pub fn vertex_attrib_fv(&self, dim: usize, index: GLuint, values: &[GLfloat]) {
        let mut v = ATTRIB_DEFAULTS;
        for (slot, &value) in v.iter_mut().zip(values).take(dim.min(4)) {
            *slot = value;
        }
        self.enqueue(move |session| {
            session.gl.vertex_attrib_4f(index, v[0], v[1], v[2], v[3]);
            Ok(())
        });
    }
}
