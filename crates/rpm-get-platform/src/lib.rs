//! Platform helpers for rpm-get.
//!
//! Everything here is consumed by the fetch pipeline and the CLI through
//! narrow interfaces: user directories, the host architecture used in the
//! `User-Agent`, token lookup, the PATH probe and the logging sink.

pub mod arch;
pub mod dir;
pub mod env;
pub mod log;
pub mod probe;

pub use log::{ConsoleSink, LogSink, NullSink, Severity};
pub use probe::is_executable_on_path;
