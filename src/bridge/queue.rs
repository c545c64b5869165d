//! ### English
//! Batching command queue between the calling thread and the GL thread.
//!
//! The calling thread appends operations to the *next batch*; ending the batch moves it into the
//! *backlog*. The GL thread swaps the whole backlog out under the lock and runs it outside the lock.
//!
//! ### 中文
//! 调用线程与 GL 线程之间的批处理命令队列。
//!
//! 调用线程向*下一批*追加操作；结束批次时将其移入*积压队列*。GL 线程在锁内整体换出积压队列，
//! 并在锁外执行。

use std::mem;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crossbeam_channel as channel;
use log::warn;

use super::error::{BridgeError, Result};
use super::session::GlSession;

/// ### English
/// One deferred GL operation. Captures all of its arguments by value.
///
/// ### 中文
/// 一个延迟执行的 GL 操作；以值方式捕获全部参数。
pub(crate) type Op = Box<dyn FnOnce(&mut GlSession<'_>) -> Result<()> + Send>;

/// ### English
/// Operations that execute together, in insertion order.
///
/// ### 中文
/// 按插入顺序一起执行的一组操作。
pub(crate) type Batch = Vec<Op>;

/// ### English
/// Embedder callback asking for a GL-thread flush to be scheduled.
///
/// ### 中文
/// 宿主回调：请求调度一次 GL 线程 flush。
pub type FlushHook = Arc<dyn Fn() + Send + Sync>;

/// ### English
/// Locks a mutex, recovering the data if a previous holder panicked.
///
/// ### 中文
/// 加锁；若之前的持有者 panic，则恢复并继续使用其数据。
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// ### English
/// Calling-thread batch builder plus the backlog shared with the GL thread.
///
/// ### 中文
/// 调用线程的批次构建器，以及与 GL 线程共享的积压队列。
pub(crate) struct CommandQueue {
    /// ### English
    /// Batch currently being filled. Only the calling thread touches it, so the lock is
    /// uncontended.
    ///
    /// ### 中文
    /// 正在填充的批次；只有调用线程访问，因此该锁无竞争。
    next: Mutex<Batch>,
    /// ### English
    /// Completed batches waiting for the GL thread, oldest first.
    ///
    /// ### 中文
    /// 等待 GL 线程执行的已完成批次，最早的在前。
    backlog: Mutex<Vec<Batch>>,
    flush_hook: Mutex<Option<FlushHook>>,
    /// ### English
    /// Set once the queue is discarded; later operations are dropped instead of queued.
    ///
    /// ### 中文
    /// 队列被丢弃后置位；之后的操作直接丢弃而不入队。
    closed: AtomicBool,
}

impl CommandQueue {
    pub(crate) fn new() -> Self {
        Self {
            next: Mutex::new(Vec::new()),
            backlog: Mutex::new(Vec::new()),
            flush_hook: Mutex::new(None),
            closed: AtomicBool::new(false),
        }
    }

    /// ### English
    /// Appends an operation to the next batch. Never blocks on the GL thread.
    ///
    /// Once the queue is discarded the operation is dropped unrun.
    ///
    /// ### 中文
    /// 向下一批追加操作；不会等待 GL 线程。
    ///
    /// 队列被丢弃后，操作不会执行而是直接丢弃。
    pub(crate) fn enqueue(&self, op: Op) {
        let mut next = lock(&self.next);
        if self.is_closed() {
            return;
        }
        next.push(op);
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// ### English
    /// Moves the next batch into the backlog and starts a fresh one.
    ///
    /// ### 中文
    /// 将下一批移入积压队列并开始新批次。
    pub(crate) fn end_batch(&self) {
        let batch = mem::take(&mut *lock(&self.next));
        if batch.is_empty() {
            return;
        }
        lock(&self.backlog).push(batch);
    }

    pub(crate) fn set_flush_hook(&self, hook: Option<FlushHook>) {
        *lock(&self.flush_hook) = hook;
    }

    /// ### English
    /// Invokes the flush hook, if any. The hook runs without any queue lock held.
    ///
    /// ### 中文
    /// 调用 flush 回调（若存在）；回调执行时不持有任何队列锁。
    pub(crate) fn request_flush(&self) {
        let hook = lock(&self.flush_hook).clone();
        if let Some(hook) = hook {
            hook();
        }
    }

    /// ### English
    /// Enqueues `f`, ends the batch, asks for a flush and waits until the GL thread has run it.
    ///
    /// Everything enqueued earlier runs first. If the operation is discarded before it runs (the
    /// context was destroyed) this returns [`BridgeError::ContextLost`].
    ///
    /// #### Parameters
    /// - `f`: Operation whose result is handed back to the caller.
    ///
    /// ### 中文
    /// 入队 `f`、结束批次、请求 flush，并等待 GL 线程执行完毕。
    ///
    /// 之前入队的所有操作都会先执行。若操作在执行前被丢弃（上下文已销毁），返回
    /// [`BridgeError::ContextLost`]。
    ///
    /// #### 参数
    /// - `f`：其结果会返回给调用方的操作。
    pub(crate) fn enqueue_blocking<R, F>(&self, f: F) -> Result<R>
    where
        R: Send + 'static,
        F: FnOnce(&mut GlSession<'_>) -> Result<R> + Send + 'static,
    {
        if self.is_closed() {
            return Err(BridgeError::ContextLost);
        }
        let (response_tx, response_rx) = channel::bounded(1);
        self.enqueue(Box::new(move |session| {
            let _ = response_tx.send(f(session));
            Ok(())
        }));
        self.end_batch();
        self.request_flush();
        response_rx.recv().unwrap_or(Err(BridgeError::ContextLost))
    }

    /// ### English
    /// Swaps out the whole backlog. Batches ended after this call wait for the next flush.
    ///
    /// ### 中文
    /// 整体换出积压队列；此后结束的批次等待下一次 flush。
    pub(crate) fn take_backlog(&self) -> Vec<Batch> {
        mem::take(&mut *lock(&self.backlog))
    }

    /// ### English
    /// Drops every queued operation, including the unfinished next batch, and closes the queue.
    ///
    /// Dropping a blocking operation releases its waiter with [`BridgeError::ContextLost`]; blocking
    /// calls made after this fail the same way.
    ///
    /// ### 中文
    /// 丢弃所有排队中的操作（包括未结束的下一批）并关闭队列。
    ///
    /// 丢弃阻塞操作会以 [`BridgeError::ContextLost`] 唤醒其等待者；此后的阻塞调用同样失败。
    pub(crate) fn discard(&self) -> usize {
        let next = {
            let mut next = lock(&self.next);
            self.closed.store(true, Ordering::Release);
            mem::take(&mut *next)
        };
        let backlog = self.take_backlog();
        let dropped = next.len() + backlog.iter().map(Vec::len).sum::<usize>();
        if dropped > 0 {
            warn!("discarding {dropped} queued GL operations");
        }
        dropped
    }

    #[cfg(test)]
    pub(crate) fn backlog_len(&self) -> usize {
        lock(&self.backlog).len()
    }
}

/// ### English
/// Runs drained batches in order, stopping at the first failing operation.
///
/// Operations after a failure are dropped; the error is returned to the flush caller.
///
/// ### 中文
/// 依次执行换出的批次，遇到第一个失败的操作即停止。
///
/// 失败之后的操作会被丢弃，错误返回给 flush 的调用方。
pub(crate) fn run_batches(batches: Vec<Batch>, session: &mut GlSession<'_>) -> Result<usize> {
    let total: usize = batches.iter().map(Vec::len).sum();
    let mut executed = 0;
    for op in batches.into_iter().flatten() {
        if let Err(err) = op(session) {
            let skipped = total - executed - 1;
            if skipped > 0 {
                warn!("GL operation failed, dropping {skipped} remaining operations: {err}");
            }
            return Err(err);
        }
        executed += 1;
    }
    Ok(executed)
}
