//! ### English
//! Process-wide table of live contexts, keyed by the ids handed to the embedder.
//!
//! ### 中文
//! 进程级的存活上下文表，以交给宿主的 ID 为键。

use std::sync::{Arc, LazyLock, Mutex};

use log::debug;

use super::backend::GlApi;
use super::context::BridgeContext;
use super::error::{BridgeError, Result};
use super::flags::ContextOptions;
use super::queue::lock;
use super::u32_hash::U32HashMap;

/// ### English
/// Context id as seen by the embedder; `0` means "no context".
///
/// ### 中文
/// 宿主看到的上下文 ID；`0` 表示"无上下文"。
pub type ContextId = u32;

struct Contexts {
    live: U32HashMap<Arc<BridgeContext>>,
    /// Next id to hand out; 0 once the id space is used up.
    next_id: ContextId,
}

/// ### English
/// Owns every context created through it. Ids start at 1, only grow and are never reused.
///
/// ### 中文
/// 持有经由它创建的全部上下文。ID 从 1 开始单调递增，永不复用。
pub struct ContextRegistry {
    contexts: Mutex<Contexts>,
}

impl Default for ContextRegistry {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl ContextRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn starting_at(first: ContextId) -> Self {
        Self {
            contexts: Mutex::new(Contexts {
                live: U32HashMap::default(),
                next_id: first,
            }),
        }
    }

    /// ### English
    /// Creates a context and returns its id.
    ///
    /// #### Parameters
    /// - `options`: Per-context configuration.
    ///
    /// ### 中文
    /// 创建上下文并返回其 ID。
    ///
    /// #### 参数
    /// - `options`：每个上下文的配置。
    pub fn create(&self, options: ContextOptions) -> Result<ContextId> {
        let mut contexts = lock(&self.contexts);
        let id = contexts.next_id;
        if id == 0 {
            return Err(BridgeError::ContextIdsExhausted);
        }
        contexts.next_id = id.wrapping_add(1);
        contexts
            .live
            .insert(id, Arc::new(BridgeContext::new(options)));
        debug!("created context {id} ({options:?})");
        Ok(id)
    }

    /// ### English
    /// Removes a context and drops its queued work. Blocking calls still waiting on it fail with
    /// `ContextLost`. Returns `false` if the id was unknown.
    ///
    /// ### 中文
    /// 移除上下文并丢弃其排队的工作；仍在等待的阻塞调用以 `ContextLost` 失败。ID 未知时返回
    /// `false`。
    pub fn destroy(&self, id: ContextId) -> bool {
        let removed = lock(&self.contexts).live.remove(&id);
        match removed {
            Some(context) => {
                let dropped = context.discard_pending();
                debug!("destroyed context {id}, {dropped} operations dropped");
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: ContextId) -> Option<Arc<BridgeContext>> {
        lock(&self.contexts).live.get(&id).cloned()
    }

    /// ### English
    /// Flushes one context on the GL thread. Unknown ids flush nothing.
    ///
    /// The registry lock is released before any operation runs.
    ///
    /// ### 中文
    /// 在 GL 线程上 flush 指定上下文；未知 ID 不执行任何操作。
    ///
    /// 在执行任何操作之前会先释放注册表锁。
    pub fn flush(&self, id: ContextId, gl: &dyn GlApi) -> Result<usize> {
        match self.get(id) {
            Some(context) => context.flush(gl),
            None => Ok(0),
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.contexts).live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static REGISTRY: LazyLock<ContextRegistry> = LazyLock::new(ContextRegistry::new);

/// The registry behind the C ABI.
pub fn registry() -> &'static ContextRegistry {
    &REGISTRY
}
