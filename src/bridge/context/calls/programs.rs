//! ### English
//! Shaders, programs, their introspection and uniform blocks.
//!
//! ### 中文
//! 着色器、程序及其内省和 uniform block。

use gleam::gl::{GLenum, GLint, GLuint};

use super::bool_param;
use crate::bridge::constants::{
    COMPILE_STATUS, DELETE_STATUS, FRAGMENT_SHADER, LINK_STATUS, VALIDATE_STATUS, VERTEX_SHADER,
};
use crate::bridge::context::BridgeContext;
use crate::bridge::error::{BridgeError, Result};
use crate::bridge::object_table::{ObjectId, ObjectKind};
use crate::bridge::value::Value;

/// ### English
/// Result of `getActiveAttrib` / `getActiveUniform`.
///
/// ### 中文
/// `getActiveAttrib` / `getActiveUniform` 的结果。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveInfo {
    pub name: String,
    pub size: GLint,
    pub ty: GLenum,
}

impl From<ActiveInfo> for Value {
    fn from(info: ActiveInfo) -> Self {
        Value::object([
            ("name", info.name.into()),
            ("size", info.size.into()),
            ("type", info.ty.into()),
        ])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrecisionFormat {
    pub range_min: GLint,
    pub range_max: GLint,
    pub precision: GLint,
}

impl From<PrecisionFormat> for Value {
    fn from(format: PrecisionFormat) -> Self {
        Value::object([
            ("rangeMin", format.range_min.into()),
            ("rangeMax", format.range_max.into()),
            ("precision", format.precision.into()),
        ])
    }
}

fn active_info((size, ty, name): (GLint, GLenum, String)) -> Option<ActiveInfo> {
    (!name.is_empty()).then_some(ActiveInfo { name, size, ty })
}

impl BridgeContext {
    // Object lifecycle.

    pub fn create_program(&self) -> Result<ObjectId> {
        self.enqueue_future(ObjectKind::Program, |gl| gl.create_program())
    }

    pub fn delete_program(&self, id: Option<ObjectId>) {
        let Some(id) = id else { return };
        self.enqueue(move |session| {
            if let Some(handle) = session.forget(id, ObjectKind::Program) {
                session.state.attached_shaders.remove(&handle);
                session.gl.delete_program(handle);
            }
            Ok(())
        });
    }

    pub fn is_program(&self, id: Option<ObjectId>) -> Result<bool> {
        self.enqueue_blocking(move |session| Ok(session.is_object(id, ObjectKind::Program)))
    }

    /// ### English
    /// Creates a shader; any type other than vertex or fragment yields `None` and queues nothing.
    ///
    /// ### 中文
    /// 创建着色器；顶点与片元以外的类型返回 `None`，且不会排入任何操作。
    pub fn create_shader(&self, shader_type: GLenum) -> Result<Option<ObjectId>> {
        if shader_type != VERTEX_SHADER && shader_type != FRAGMENT_SHADER {
            return Ok(None);
        }
        self.enqueue_future(ObjectKind::Shader, move |gl| gl.create_shader(shader_type))
            .map(Some)
    }

    pub fn delete_shader(&self, id: Option<ObjectId>) {
        let Some(id) = id else { return };
        self.enqueue(move |session| {
            if let Some(handle) = session.forget(id, ObjectKind::Shader) {
                session.state.shader_sources.remove(&handle);
                session.gl.delete_shader(handle);
            }
            Ok(())
        });
    }

    pub fn is_shader(&self, id: Option<ObjectId>) -> Result<bool> {
        self.enqueue_blocking(move |session| Ok(session.is_object(id, ObjectKind::Shader)))
    }

    // Shaders.

    pub fn shader_source(&self, shader: Option<ObjectId>, source: String) {
        self.enqueue(move |session| {
            let handle = session.resolve(shader);
            session.gl.shader_source(handle, &source);
            if handle != 0 {
                session.state.shader_sources.insert(handle, source);
            }
            Ok(())
        });
    }

    /// ### English
    /// The last source passed to `shaderSource`, or `None` if there was none.
    ///
    /// ### 中文
    /// 最近一次传给 `shaderSource` 的源码；若从未设置则为 `None`。
    pub fn get_shader_source(&self, shader: Option<ObjectId>) -> Result<Option<String>> {
        self.enqueue_blocking(move |session| {
            let handle = session.resolve(shader);
            Ok(session.state.shader_sources.get(&handle).cloned())
        })
    }

    pub fn compile_shader(&self, shader: Option<ObjectId>) {
        self.enqueue(move |session| {
            let handle = session.resolve(shader);
            session.gl.compile_shader(handle);
            Ok(())
        });
    }

    pub fn get_shader_parameter(&self, shader: Option<ObjectId>, pname: GLenum) -> Result<Value> {
        self.enqueue_blocking(move |session| {
            let value = session.gl.get_shader_iv(session.resolve(shader), pname);
            Ok(match pname {
                DELETE_STATUS | COMPILE_STATUS => bool_param(value),
                _ => value.into(),
            })
        })
    }

    pub fn get_shader_info_log(&self, shader: Option<ObjectId>) -> Result<String> {
        self.enqueue_blocking(move |session| {
            Ok(session.gl.get_shader_info_log(session.resolve(shader)))
        })
    }

    pub fn get_shader_precision_format(
        &self,
        shader_type: GLenum,
        precision_type: GLenum,
    ) -> Result<PrecisionFormat> {
        self.enqueue_blocking(move |session| {
            let (range_min, range_max, precision) = session
                .gl
                .get_shader_precision_format(shader_type, precision_type);
            Ok(PrecisionFormat {
                range_min,
                range_max,
                precision,
            })
        })
    }

    // Programs.

    pub fn attach_shader(&self, program: Option<ObjectId>, shader: Option<ObjectId>) {
        self.enqueue(move |session| {
            let (program, shader) = (session.resolve(program), session.resolve(shader));
            session.gl.attach_shader(program, shader);
            if program != 0 && shader != 0 {
                let attached = session.state.attached_shaders.entry(program).or_default();
                if !attached.contains(&shader) {
                    attached.push(shader);
                }
            }
            Ok(())
        });
    }

    pub fn detach_shader(&self, program: Option<ObjectId>, shader: Option<ObjectId>) {
        self.enqueue(move |session| {
            let (program, shader) = (session.resolve(program), session.resolve(shader));
            session.gl.detach_shader(program, shader);
            if let Some(attached) = session.state.attached_shaders.get_mut(&program) {
                attached.retain(|&handle| handle != shader);
            }
            Ok(())
        });
    }

    /// ### English
    /// Ids of the shaders attached to `program`, in attach order.
    ///
    /// Fails with `UnknownGlObject` if an attached shader has no id (it was created outside the
    /// bridge or its id was destroyed).
    ///
    /// ### 中文
    /// 附着到 `program` 的着色器 ID，按附着顺序排列。
    ///
    /// 若某个已附着的着色器没有对应 ID（在桥接层之外创建，或其 ID 已被销毁），则以
    /// `UnknownGlObject` 失败。
    pub fn get_attached_shaders(&self, program: Option<ObjectId>) -> Result<Vec<ObjectId>> {
        self.enqueue_blocking(move |session| {
            let handle = session.resolve(program);
            let Some(attached) = session.state.attached_shaders.get(&handle) else {
                return Ok(Vec::new());
            };
            attached
                .iter()
                .map(|&shader| {
                    session
                        .state
                        .objects
                        .find(shader, ObjectKind::Shader)
                        .ok_or(BridgeError::UnknownGlObject(shader))
                })
                .collect()
        })
    }

    pub fn link_program(&self, program: Option<ObjectId>) {
        self.enqueue(move |session| {
            session.gl.link_program(session.resolve(program));
            Ok(())
        });
    }

    pub fn validate_program(&self, program: Option<ObjectId>) {
        self.enqueue(move |session| {
            session.gl.validate_program(session.resolve(program));
            Ok(())
        });
    }

    pub fn use_program(&self, program: Option<ObjectId>) {
        self.enqueue(move |session| {
            session.gl.use_program(session.resolve(program));
            Ok(())
        });
    }

    pub fn get_program_parameter(
        &self,
        program: Option<ObjectId>,
        pname: GLenum,
    ) -> Result<Value> {
        self.enqueue_blocking(move |session| {
            let value = session.gl.get_program_iv(session.resolve(program), pname);
            Ok(match pname {
                DELETE_STATUS | LINK_STATUS | VALIDATE_STATUS => bool_param(value),
                _ => value.into(),
            })
        })
    }

    pub fn get_program_info_log(&self, program: Option<ObjectId>) -> Result<String> {
        self.enqueue_blocking(move |session| {
            Ok(session.gl.get_program_info_log(session.resolve(program)))
        })
    }

    // Attributes and uniforms.

    pub fn bind_attrib_location(&self, program: Option<ObjectId>, index: GLuint, name: String) {
        self.enqueue(move |session| {
            session
                .gl
                .bind_attrib_location(session.resolve(program), index, &name);
            Ok(())
        });
    }

    pub fn get_attrib_location(&self, program: Option<ObjectId>, name: String) -> Result<GLint> {
        self.enqueue_blocking(move |session| {
            Ok(session.gl.get_attrib_location(session.resolve(program), &name))
        })
    }

    /// ### English
    /// Uniform location, or `None` when the name does not resolve (`-1`).
    ///
    /// ### 中文
    /// uniform 位置；名称无法解析（`-1`）时为 `None`。
    pub fn get_uniform_location(
        &self,
        program: Option<ObjectId>,
        name: String,
    ) -> Result<Option<GLint>> {
        self.enqueue_blocking(move |session| {
            let location = session
                .gl
                .get_uniform_location(session.resolve(program), &name);
            Ok((location != -1).then_some(location))
        })
    }

    pub fn get_frag_data_location(
        &self,
        program: Option<ObjectId>,
        name: String,
    ) -> Result<Option<GLint>> {
        self.enqueue_blocking(move |session| {
            let location = session
                .gl
                .get_frag_data_location(session.resolve(program), &name);
            Ok((location != -1).then_some(location))
        })
    }

    pub fn get_active_attrib(
        &self,
        program: Option<ObjectId>,
        index: GLuint,
    ) -> Result<Option<ActiveInfo>> {
        self.enqueue_blocking(move |session| {
            let handle = session.resolve(program);
            if handle == 0 {
                return Ok(None);
            }
            Ok(active_info(session.gl.get_active_attrib(handle, index)))
        })
    }

    pub fn get_active_uniform(
        &self,
        program: Option<ObjectId>,
        index: GLuint,
    ) -> Result<Option<ActiveInfo>> {
        self.enqueue_blocking(move |session| {
            let handle = session.resolve(program);
            if handle == 0 {
                return Ok(None);
            }
            Ok(active_info(session.gl.get_active_uniform(handle, index)))
        })
    }

    // Uniform blocks.

    pub fn get_uniform_block_index(&self, program: Option<ObjectId>, name: String) -> Result<GLuint> {
        self.enqueue_blocking(move |session| {
            Ok(session
                .gl
                .get_uniform_block_index(session.resolve(program), &name))
        })
    }

    pub fn get_uniform_indices(
        &self,
        program: Option<ObjectId>,
        names: Vec<String>,
    ) -> Result<Vec<GLuint>> {
        self.enqueue_blocking(move |session| {
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            Ok(session
                .gl
                .get_uniform_indices(session.resolve(program), &names))
        })
    }

    pub fn get_active_uniforms(
        &self,
        program: Option<ObjectId>,
        indices: Vec<GLuint>,
        pname: GLenum,
    ) -> Result<Vec<GLint>> {
        self.enqueue_blocking(move |session| {
            Ok(session
                .gl
                .get_active_uniforms_iv(session.resolve(program), indices, pname))
        })
    }

    pub fn get_active_uniform_block_name(
        &self,
        program: Option<ObjectId>,
        index: GLuint,
    ) -> Result<String> {
        self.enqueue_blocking(move |session| {
            Ok(session
                .gl
                .get_active_uniform_block_name(session.resolve(program), index))
        })
    }

    pub fn uniform_block_binding(&self, program: Option<ObjectId>, block: GLuint, binding: GLuint) {
        self.enqueue(move |session| {
            session
                .gl
                .uniform_block_binding(session.resolve(program), block, binding);
            Ok(())
        });
    }
}
