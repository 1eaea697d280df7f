use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Флаг "форма ещё открыта".
///
/// Сбрасывается в `on_cleanup` компонента; обработчики завершения
/// асинхронных запросов проверяют его перед записью в состояние.
#[derive(Clone, Debug)]
pub struct ViewLifetime {
    active: Arc<AtomicBool>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn deactivate(&self) {
        self.active.store(false, Ordering::Release);
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}
