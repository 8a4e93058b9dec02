use parking_lot::Mutex;
use std::sync::Arc;

pub fn with_arc<T, F, R>(handle: &Arc<Mutex<T>>, f: F) -> R
where
    F: FnOnce(&T) -> R,
{
    let guard = handle.lock();
    f(&*guard)
}
