// Logging shims: `tracing` events under the `pagewindow` target, or nothing at all without the
// `tracing` feature (so call sites need no `cfg`).

#[cfg(feature = "tracing")]
macro_rules! vlog {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "pagewindow", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! vlog {
    ($($tt:tt)*) => {};
}

macro_rules! vtrace {
    ($($tt:tt)*) => { vlog!(trace, $($tt)*) };
}

macro_rules! vdebug {
    ($($tt:tt)*) => { vlog!(debug, $($tt)*) };
}

macro_rules! vwarn {
    ($($tt:tt)*) => { vlog!(warn, $($tt)*) };
}
