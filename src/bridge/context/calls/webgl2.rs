//! ### English
//! WebGL2 object types: vertex array objects and queries, plus `drawBuffers`.
//!
//! ### 中文
//! WebGL2 对象类型：顶点数组对象与查询对象，以及 `drawBuffers`。

use gleam::gl::{GLenum, GLuint};

use super::first_handle;
use crate::bridge::context::BridgeContext;
use crate::bridge::error::Result;
use crate::bridge::object_table::{ObjectId, ObjectKind};

impl BridgeContext {
    pub fn draw_buffers(&self, buffers: Vec<GLenum>) {
        self.enqueue(move |session| {
            session.gl.draw_buffers(&buffers);
            Ok(())
        });
    }

    pub fn create_vertex_array(&self) -> Result<ObjectId> {
        self.enqueue_future(ObjectKind::VertexArray, |gl| {
            first_handle(gl.gen_vertex_arrays(1))
        })
    }

    pub fn delete_vertex_array(&self, id: Option<ObjectId>) {
        let Some(id) = id else { return };
        self.enqueue(move |session| {
            if let Some(handle) = session.forget(id, ObjectKind::VertexArray) {
                session.gl.delete_vertex_arrays(&[handle]);
            }
            Ok(())
        });
    }

    pub fn is_vertex_array(&self, id: Option<ObjectId>) -> Result<bool> {
        self.enqueue_blocking(move |session| Ok(session.is_object(id, ObjectKind::VertexArray)))
    }

    pub fn bind_vertex_array(&self, id: Option<ObjectId>) {
        self.enqueue(move |session| {
            session.gl.bind_vertex_array(session.resolve(id));
            Ok(())
        });
    }

    pub fn create_query(&self) -> Result<ObjectId> {
        self.enqueue_future(ObjectKind::Query, |gl| first_handle(gl.gen_queries(1)))
    }

    pub fn delete_query(&self, id: Option<ObjectId>) {
        let Some(id) = id else { return };
        self.enqueue(move |session| {
            if let Some(handle) = session.forget(id, ObjectKind::Query) {
                session.gl.delete_queries(&[handle]);
            }
            Ok(())
        });
    }

    pub fn is_query(&self, id: Option<ObjectId>) -> Result<bool> {
        self.enqueue_blocking(move |session| Ok(session.is_object(id, ObjectKind::Query)))
    }

    pub fn begin_query(&self, target: GLenum, id: Option<ObjectId>) {
        self.enqueue(move |session| {
            session.gl.begin_query(target, session.resolve(id));
            Ok(())
        });
    }

    /// ### English
    /// `getQueryParameter`; a zero result (not yet available, or no samples) reads as `None`.
    ///
    /// ### 中文
    /// `getQueryParameter`；结果为零（尚不可用或没有样本）时为 `None`。
    pub fn get_query_parameter(&self, id: Option<ObjectId>, pname: GLenum) -> Result<Option<GLuint>> {
        self.enqueue_blocking(move |session| {
            let value = session.gl.get_query_object_uiv(session.resolve(id), pname);
            Ok((value != 0).then_some(value))
        })
    }
}
