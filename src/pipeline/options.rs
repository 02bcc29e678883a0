//! Construction-time settings of a [`Pipeline`](super::Pipeline).

/// Initial write and logging modes of a pipeline.
///
/// `save` selects whether writes append a snapshot (`true`) or overwrite the
/// current one (`false`). `debug` logs every written snapshot through
/// `tracing` at `DEBUG` level.
///
/// # Examples
///
/// ```rust
/// use pipekit::pipeline::PipelineOptions;
///
/// let options = PipelineOptions::default().with_save(false).with_debug(true);
/// assert!(!options.save);
/// assert!(options.debug);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PipelineOptions {
    /// Append (`true`) or overwrite (`false`) on each write.
    pub save: bool,
    /// Log written snapshots.
    pub debug: bool,
}

impl PipelineOptions {
    /// Options with saving on and debug logging off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            save: true,
            debug: false,
        }
    }

    /// Replaces the save mode.
    #[must_use]
    pub const fn with_save(self, save: bool) -> Self {
        Self { save, ..self }
    }

    /// Replaces the debug mode.
    #[must_use]
    pub const fn with_debug(self, debug: bool) -> Self {
        Self { debug, ..self }
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self::new()
    }
}
