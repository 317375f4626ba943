//! 并发执行工具
//!
//! 依赖型的逐项请求 (例如每门课的作业列表) 通过 `fan_out` 并发执行，
//! 同时在途的数量受上限约束，结果保持输入顺序。

use futures::stream::{self, StreamExt};
use std::future::Future;

/// 以最多 `limit` 个并发执行 `f(item)`
///
/// `limit` 为 0 时按 1 处理。返回值与输入一一对应。
pub async fn fan_out<I, F, Fut>(items: I, limit: usize, f: F) -> Vec<Fut::Output>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future,
{
    stream::iter(items)
        .map(f)
        .buffered(limit.max(1))
        .collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[tokio::test]
    async fn test_empty_input() {
        let out: Vec<u32> = fan_out(Vec::<u32>::new(), 4, |x| async move { x }).await;
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_preserves_order_and_bounds_concurrency() {
        let active = Rc::new(Cell::new(0usize));
        let peak = Rc::new(Cell::new(0usize));

        let out = fan_out(0..10u64, 3, |i| {
            let active = active.clone();
            let peak = peak.clone();
            async move {
                active.set(active.get() + 1);
                peak.set(peak.get().max(active.get()));
                // 后面的任务让出更少次数，先完成
                for _ in 0..(10 - i) {
                    tokio::task::yield_now().await;
                }
                active.set(active.get() - 1);
                i * 2
            }
        })
        .await;

        assert_eq!(out, (0..10).map(|i| i * 2).collect::<Vec<_>>());
        assert_eq!(peak.get(), 3);
    }

    #[tokio::test]
    async fn test_zero_limit_runs_sequentially() {
        let active = Rc::new(Cell::new(0usize));
        let peak = Rc::new(Cell::new(0usize));
        fan_out(0..4, 0, |_| {
            let active = active.clone();
            let peak = peak.clone();
            async move {
                active.set(active.get() + 1);
                peak.set(peak.get().max(active.get()));
                tokio::task::yield_now().await;
                active.set(active.get() - 1);
            }
        })
        .await;
        assert_eq!(peak.get(), 1);
    }
}
