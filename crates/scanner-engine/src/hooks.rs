//! 스캔 진행 상황 관찰자.
//!
//! 두 콜백 모두 스캔 루프 안에서 동기적으로 호출됩니다.
//! 콜백 내부의 동기화는 호출자가 책임집니다.

use scanner_core::ScanProgress;

type ProgressSink<'a> = Box<dyn Fn(ScanProgress) + Send + Sync + 'a>;
type UniverseSizeSink<'a> = Box<dyn Fn(usize) + Send + Sync + 'a>;

/// 진행률/상품 수 콜백 묶음. 둘 다 선택 사항입니다.
#[derive(Default)]
pub struct ScanHooks<'a> {
    on_progress: Option<ProgressSink<'a>>,
    on_universe_size: Option<UniverseSizeSink<'a>>,
}

impl<'a> ScanHooks<'a> {
    /// 콜백이 없는 훅.
    pub fn new() -> Self {
        Self::default()
    }

    /// 상품 하나를 처리할 때마다 호출됩니다 (성공/실패 무관).
    pub fn on_progress(mut self, sink: impl Fn(ScanProgress) + Send + Sync + 'a) -> Self {
        self.on_progress = Some(Box::new(sink));
        self
    }

    /// `limit` 적용 후 스캔할 상품 수가 정해지면 한 번 호출됩니다.
    pub fn on_universe_size(mut self, sink: impl Fn(usize) + Send + Sync + 'a) -> Self {
        self.on_universe_size = Some(Box::new(sink));
        self
    }

    pub(crate) fn progress(&self, progress: ScanProgress) {
        if let Some(sink) = &self.on_progress {
            sink(progress);
        }
    }

    pub(crate) fn universe_size(&self, size: usize) {
        if let Some(sink) = &self.on_universe_size {
            sink(size);
        }
    }
}

impl std::fmt::Debug for ScanHooks<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanHooks")
            .field("on_progress", &self.on_progress.is_some())
            .field("on_universe_size", &self.on_universe_size.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_hooks_are_optional() {
        let hooks = ScanHooks::new();
        hooks.progress(ScanProgress::new(1, 2));
        hooks.universe_size(2);
    }

    #[test]
    fn test_hooks_forward_values() {
        let last = AtomicUsize::new(0);
        let size = AtomicUsize::new(0);

        let hooks = ScanHooks::new()
            .on_progress(|p| last.store(p.current, Ordering::SeqCst))
            .on_universe_size(|n| size.store(n, Ordering::SeqCst));

        hooks.universe_size(7);
        hooks.progress(ScanProgress::new(3, 7));

        assert_eq!(size.load(Ordering::SeqCst), 7);
        assert_eq!(last.load(Ordering::SeqCst), 3);
    }
}
