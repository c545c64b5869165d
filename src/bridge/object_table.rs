//! ### English
//! Virtual object ids and their GL-thread mapping to real GL handles.
//!
//! Ids are reserved on the calling thread (lock-free, never reused) so scripts can reference an
//! object before the GL thread has created it. The id → handle table itself is only touched by the
//! GL thread.
//!
//! ### 中文
//! 虚拟对象 ID 以及其在 GL 线程上到真实 GL 句柄的映射。
//!
//! ID 在调用线程上无锁预留（永不复用），因此脚本可以在 GL 线程真正创建对象之前引用它。
//! ID → 句柄表只由 GL 线程访问。

use std::fmt;
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU32, Ordering};

use gleam::gl::GLuint;

use super::error::{BridgeError, Result};
use super::u32_hash::U32HashMap;

/// ### English
/// Script-visible object handle. Never 0; 0 on the wire means "null".
///
/// ### 中文
/// 脚本可见的对象句柄；永不为 0，线上的 0 表示 "null"。
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(NonZeroU32);

impl ObjectId {
    /// ### English
    /// Wraps a raw id; returns `None` for 0.
    ///
    /// ### 中文
    /// 包装原始 ID；0 返回 `None`。
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match NonZeroU32::new(raw) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }

    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.0)
    }
}

/// ### English
/// Lock-free monotonically increasing id source.
///
/// The counter stores the next id to hand out; it becomes 0 once `u32::MAX` was handed out, which
/// marks exhaustion.
///
/// ### 中文
/// 无锁单调递增的 ID 来源。
///
/// 计数器保存下一个要分配的 ID；分配出 `u32::MAX` 后回绕为 0，表示耗尽。
pub(crate) struct ObjectIdAllocator {
    next: AtomicU32,
}

impl ObjectIdAllocator {
    pub(crate) const fn new() -> Self {
        Self::starting_at(1)
    }

    pub(crate) const fn starting_at(first: u32) -> Self {
        Self {
            next: AtomicU32::new(first),
        }
    }

    /// ### English
    /// Reserves the next id.
    ///
    /// ### 中文
    /// 预留下一个 ID。
    pub(crate) fn allocate(&self) -> Result<ObjectId> {
        let raw = self
            .next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |next| {
                (next != 0).then(|| next.wrapping_add(1))
            })
            .map_err(|_| BridgeError::ObjectIdsExhausted)?;
        ObjectId::from_raw(raw).ok_or(BridgeError::ObjectIdsExhausted)
    }
}

/// ### English
/// Process-wide id source shared by every context.
///
/// ### 中文
/// 所有上下文共享的进程级 ID 来源。
static OBJECT_IDS: ObjectIdAllocator = ObjectIdAllocator::new();

pub(crate) fn allocate_object_id() -> Result<ObjectId> {
    OBJECT_IDS.allocate()
}

/// ### English
/// Which GL object family an id was realized as.
///
/// ### 中文
/// ID 被实现为哪一类 GL 对象。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Buffer,
    Framebuffer,
    Program,
    Query,
    Renderbuffer,
    Shader,
    Texture,
    VertexArray,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Entry {
    handle: GLuint,
    /// `None` for ids mapped directly by the embedder.
    kind: Option<ObjectKind>,
}

/// ### English
/// GL-thread-only `ObjectId -> GLuint` table.
///
/// ### 中文
/// 仅 GL 线程访问的 `ObjectId -> GLuint` 表。
#[derive(Default)]
pub(crate) struct ObjectIdTable {
    entries: U32HashMap<Entry>,
}

impl ObjectIdTable {
    /// ### English
    /// Maps an id to a handle without recording its kind (embedder-provided objects).
    ///
    /// ### 中文
    /// 将 ID 映射到句柄但不记录类型（宿主提供的对象）。
    pub(crate) fn map(&mut self, id: ObjectId, handle: GLuint) {
        self.entries.insert(id.get(), Entry { handle, kind: None });
    }

    pub(crate) fn map_kind(&mut self, id: ObjectId, kind: ObjectKind, handle: GLuint) {
        self.entries.insert(
            id.get(),
            Entry {
                handle,
                kind: Some(kind),
            },
        );
    }

    /// ### English
    /// Resolves an id to its handle; unmapped or deleted ids resolve to 0.
    ///
    /// ### 中文
    /// 将 ID 解析为句柄；未映射或已删除的 ID 解析为 0。
    pub(crate) fn resolve(&self, id: ObjectId) -> GLuint {
        self.entries.get(&id.get()).map_or(0, |entry| entry.handle)
    }

    pub(crate) fn resolve_opt(&self, id: Option<ObjectId>) -> GLuint {
        id.map_or(0, |id| self.resolve(id))
    }

    /// ### English
    /// Resolves an id only if it was realized as `kind`.
    ///
    /// ### 中文
    /// 仅当 ID 被实现为 `kind` 时才解析。
    pub(crate) fn resolve_kind(&self, id: ObjectId, kind: ObjectKind) -> Option<GLuint> {
        self.entries
            .get(&id.get())
            .filter(|entry| entry.kind.is_none_or(|k| k == kind))
            .map(|entry| entry.handle)
    }

    pub(crate) fn kind(&self, id: ObjectId) -> Option<ObjectKind> {
        self.entries.get(&id.get()).and_then(|entry| entry.kind)
    }

    /// ### English
    /// Removes a mapping and returns the handle it held; missing ids are a no-op.
    ///
    /// ### 中文
    /// 移除映射并返回其句柄；ID 不存在时为 no-op。
    pub(crate) fn erase(&mut self, id: ObjectId) -> Option<GLuint> {
        self.entries.remove(&id.get()).map(|entry| entry.handle)
    }

    /// ### English
    /// Reverse lookup: finds the id currently mapped to `handle` for the given kind.
    ///
    /// ### 中文
    /// 反向查找：找到当前映射到指定类型 `handle` 的 ID。
    pub(crate) fn find(&self, handle: GLuint, kind: ObjectKind) -> Option<ObjectId> {
        if handle == 0 {
            return None;
        }
        self.entries
            .iter()
            .filter(|(_, entry)| entry.handle == handle && entry.kind.is_none_or(|k| k == kind))
            .map(|(&raw, _)| raw)
            .min()
            .and_then(ObjectId::from_raw)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
