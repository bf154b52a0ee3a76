//! Thread-local current context, for code that cannot thread a `&mut Context`
//! through (callbacks, free-function widgets).

use std::cell::RefCell;

use super::Context;

thread_local! {
    static CURRENT: RefCell<Option<Context>> = const { RefCell::new(None) };
}

/// Makes `ctx` the current context of this thread, returning the one it replaces.
pub fn install_context(ctx: Context) -> Option<Context> {
    CURRENT.with(|cell| cell.borrow_mut().replace(ctx))
}

/// Removes and returns the current context.
pub fn take_context() -> Option<Context> {
    CURRENT.with(|cell| cell.borrow_mut().take())
}

/// Runs `f` with the current context. Returns `None` when none is installed.
///
/// # Panics
/// Panics when called re-entrantly from inside `f`.
pub fn with_context<R>(f: impl FnOnce(&mut Context) -> R) -> Option<R> {
    CURRENT.with(|cell| {
        let mut slot = cell.borrow_mut();
        slot.as_mut().map(f)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_engine::text::FixedMetrics;

    #[test]
    fn install_with_take_round_trip() {
        assert!(with_context(|_| ()).is_none());
        assert!(install_context(Context::new(Box::new(FixedMetrics::default()))).is_none());

        let frames = with_context(|ctx| {
            ctx.new_frame(0.016);
            ctx.render();
            ctx.frame_count()
        });
        assert_eq!(frames, Some(1));

        let ctx = take_context().expect("context was installed");
        assert_eq!(ctx.frame_count(), 1);
        assert!(take_context().is_none());
    }
}
