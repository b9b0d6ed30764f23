//! reporting of [`Error::AbsentValueAccess`] failures
//!
//! before [`Optional::unwrap`](crate::Optional::unwrap) or
//! [`Optional::expect`](crate::Optional::expect) panic on an absent value, they hand a
//! [`FailureContext`] to the active [`FailureReporter`]
//!
//! the reporter is looked up in this order:
//! 1. the innermost [`with_reporter`] scope on the current thread
//! 2. the process wide reporter installed with [`set_reporter`]
//! 3. a default [`LogReporter`]
//!
//! reporters only observe: a reporter that panics is contained, and a failure raised while the
//! thread is already reporting (a reporter that itself unwraps) skips the reporter, so the panic
//! that follows always carries the original [`Error`]

use std::backtrace::{Backtrace, BacktraceStatus};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::panic::{self, AssertUnwindSafe, Location};
use std::sync::{Arc, PoisonError, RwLock};

use crate::Error;

/// the `log` target used by [`LogReporter`]
pub const LOG_TARGET: &str = "optional::report";

static GLOBAL: RwLock<Option<Arc<dyn FailureReporter>>> = RwLock::new(None);

thread_local! {
    static SCOPED: RefCell<Vec<Arc<dyn FailureReporter>>> = const { RefCell::new(Vec::new()) };
    static REPORTING: Cell<bool> = const { Cell::new(false) };
}

/// everything known about a failed unwrap at the moment it happens
#[derive(Debug, Clone, Copy)]
pub struct FailureContext<'a> {
    error: &'a Error,
    location: &'static Location<'static>,
    type_name: &'static str,
}

impl<'a> FailureContext<'a> {
    /// the error the panic will carry
    pub fn error(&self) -> &'a Error {
        self.error
    }
    /// where `unwrap` or `expect` was called
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
    /// the name of the contained type, as given by [`std::any::type_name`]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Display for FailureContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Optional<{}>) at {}",
            self.error, self.type_name, self.location
        )
    }
}

/// receives failed unwraps before the panic
///
/// implemented for any `Fn(&FailureContext)` closure that is `Send + Sync`
pub trait FailureReporter: Send + Sync {
    fn report(&self, context: &FailureContext<'_>);
}

impl<F> FailureReporter for F
where
    F: Fn(&FailureContext<'_>) + Send + Sync,
{
    fn report(&self, context: &FailureContext<'_>) {
        self(context)
    }
}

/// a reporter that discards every report
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl FailureReporter for Silent {
    fn report(&self, _: &FailureContext<'_>) {}
}

/// whether [`LogReporter`] attaches a backtrace to its record
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BacktraceMode {
    /// never capture
    Disabled,
    /// capture when `RUST_BACKTRACE` or `RUST_LIB_BACKTRACE` ask for it
    #[default]
    Capture,
    /// always capture
    Force,
}

/// writes one `log` record per failure, under [`LOG_TARGET`]
#[derive(Debug, Clone, Copy)]
pub struct LogReporter {
    level: log::Level,
    backtrace: BacktraceMode,
}

impl Default for LogReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogReporter {
    pub const fn new() -> Self {
        Self {
            level: log::Level::Error,
            backtrace: BacktraceMode::Capture,
        }
    }
    pub const fn level(mut self, level: log::Level) -> Self {
        self.level = level;
        self
    }
    pub const fn backtrace(mut self, mode: BacktraceMode) -> Self {
        self.backtrace = mode;
        self
    }
    fn capture(&self) -> Option<Backtrace> {
        let backtrace = match self.backtrace {
            BacktraceMode::Disabled => return None,
            BacktraceMode::Capture => Backtrace::capture(),
            BacktraceMode::Force => Backtrace::force_capture(),
        };
        (backtrace.status() == BacktraceStatus::Captured).then_some(backtrace)
    }
}

impl FailureReporter for LogReporter {
    fn report(&self, context: &FailureContext<'_>) {
        if !log::log_enabled!(target: LOG_TARGET, self.level) {
            return;
        }
        match self.capture() {
            Some(backtrace) => {
                log::log!(target: LOG_TARGET, self.level, "{context}\n{backtrace}")
            }
            None => log::log!(target: LOG_TARGET, self.level, "{context}"),
        }
    }
}

/// installs `reporter` for the whole process, replacing the previous one
pub fn set_reporter(reporter: impl FailureReporter + 'static) {
    let mut global = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    *global = Some(Arc::new(reporter));
}

/// goes back to the default [`LogReporter`]
pub fn reset_reporter() {
    let mut global = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    *global = None;
}

/// runs `f` with `reporter` taking precedence over the process wide reporter on this thread
///
/// scopes nest, and the scope is left even if `f` panics
pub fn with_reporter<R>(reporter: impl FailureReporter + 'static, f: impl FnOnce() -> R) -> R {
    struct Pop;
    impl Drop for Pop {
        fn drop(&mut self) {
            let _ = SCOPED.try_with(|stack| stack.borrow_mut().pop());
        }
    }

    SCOPED.with(|stack| stack.borrow_mut().push(Arc::new(reporter)));
    let _pop = Pop;
    f()
}

fn active() -> Option<Arc<dyn FailureReporter>> {
    // cloned out so a reporter can open its own scope
    let scoped = SCOPED
        .try_with(|stack| stack.borrow().last().cloned())
        .ok()
        .flatten();
    scoped.or_else(|| {
        GLOBAL
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    })
}

/// reports `error` for an `Optional<T>` accessed at the caller's location, then panics with it
///
/// the panic payload is the [`Error`] itself, so `catch_unwind` callers can downcast it
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn fail<T>(error: Error) -> ! {
    let context = FailureContext {
        error: &error,
        location: Location::caller(),
        type_name: std::any::type_name::<T>(),
    };
    let reentered = REPORTING.try_with(|flag| flag.replace(true)).unwrap_or(true);
    if !reentered {
        let _ = panic::catch_unwind(AssertUnwindSafe(|| match active() {
            Some(reporter) => reporter.report(&context),
            None => LogReporter::new().report(&context),
        }));
        let _ = REPORTING.try_with(|flag| flag.set(false));
    }
    panic::panic_any(error)
}
