//! ### English
//! Identity-hashed map for object ids and GL handles.
//!
//! Both key spaces are small dense integers handed out sequentially, so hashing them through
//! SipHash buys nothing.
//!
//! ### 中文
//! 以恒等哈希索引对象 ID 与 GL 句柄的 map。
//!
//! 两类 key 都是顺序分配的小整数，走 SipHash 没有收益。

use std::collections::HashMap;
use std::hash::{BuildHasherDefault, Hasher};

#[derive(Default)]
pub(crate) struct U32IdentityHasher(u64);

impl Hasher for U32IdentityHasher {
    fn write(&mut self, bytes: &[u8]) {
        // Only reached for non-`u32` keys; fold bytes so the map still works.
        for &byte in bytes {
            self.0 = self.0.rotate_left(8) ^ u64::from(byte);
        }
    }

    fn write_u32(&mut self, i: u32) {
        self.0 = u64::from(i);
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

/// ### English
/// `u32 -> V` map using the identity hasher.
///
/// ### 中文
/// 使用恒等哈希的 `u32 -> V` map。
pub(crate) type U32HashMap<V> = HashMap<u32, V, BuildHasherDefault<U32IdentityHasher>>;
