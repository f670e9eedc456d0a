//! Per-call context: seeded random source and diagnostic output sink.
//!
//! Every entry point takes a `&mut CallContext` instead of touching
//! process-wide state, so independent contexts can be used from different
//! threads at the same time. Output suppression is scoped: [`Diagnostics::capture`]
//! returns an [`OutputGuard`] that puts the previous sink back when it is
//! dropped, whichever way the call exits.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::fmt;
use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

/// Destination for human-readable progress lines.
pub struct Diagnostics {
    sink: Box<dyn Write + Send>,
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics").finish_non_exhaustive()
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Diagnostics {
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }

    pub fn silent() -> Self {
        Self::from_writer(io::sink())
    }

    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            sink: Box::new(writer),
        }
    }

    /// Write one line. Sink failures are logged and otherwise ignored.
    pub fn report(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.sink.write_fmt(args).and_then(|_| self.sink.write_all(b"\n")) {
            log::warn!("diagnostic sink write failed: {e}");
        }
    }

    /// Redirect output to `io::sink()` while the returned guard lives when
    /// `suppress` is set; otherwise the guard passes output through.
    pub fn capture(&mut self, suppress: bool) -> OutputGuard<'_> {
        let saved = suppress.then(|| std::mem::replace(&mut self.sink, Box::new(io::sink())));
        OutputGuard { diag: self, saved }
    }
}

/// Scoped output redirection; restores the previous sink on drop.
pub struct OutputGuard<'a> {
    diag: &'a mut Diagnostics,
    saved: Option<Box<dyn Write + Send>>,
}

impl Deref for OutputGuard<'_> {
    type Target = Diagnostics;
    fn deref(&self) -> &Diagnostics {
        &*self.diag
    }
}

impl DerefMut for OutputGuard<'_> {
    fn deref_mut(&mut self) -> &mut Diagnostics {
        &mut *self.diag
    }
}

impl Drop for OutputGuard<'_> {
    fn drop(&mut self) {
        if let Some(sink) = self.saved.take() {
            let _ = self.diag.sink.flush();
            self.diag.sink = sink;
        }
    }
}

/// State owned by one call: the random source and the diagnostic sink.
#[derive(Debug)]
pub struct CallContext {
    pub rng: SmallRng,
    pub diagnostics: Diagnostics,
}

impl Default for CallContext {
    fn default() -> Self {
        Self::new(Diagnostics::stdout())
    }
}

impl CallContext {
    pub fn new(diagnostics: Diagnostics) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(0),
            diagnostics,
        }
    }

    pub fn silent() -> Self {
        Self::new(Diagnostics::silent())
    }

    /// Reset the random source; entry points call this with the request seed.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use rand::RngCore;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);
    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
    impl Shared {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    #[test]
    fn reseed_matches_fresh_seed() {
        let mut ctx = CallContext::silent();
        ctx.rng.next_u64();
        ctx.reseed(11);
        let mut fresh = SmallRng::seed_from_u64(11);
        for _ in 0..4 {
            assert_eq!(ctx.rng.next_u64(), fresh.next_u64());
        }
    }

    #[test]
    fn suppression_is_scoped() {
        let buf = Shared::default();
        let mut diag = Diagnostics::from_writer(buf.clone());
        {
            let mut out = diag.capture(true);
            out.report(format_args!("hidden"));
        }
        diag.report(format_args!("visible"));
        assert_eq!(buf.text(), "visible\n");
    }

    #[test]
    fn passthrough_guard_writes() {
        let buf = Shared::default();
        let mut diag = Diagnostics::from_writer(buf.clone());
        {
            let mut out = diag.capture(false);
            out.report(format_args!("line {}", 1));
        }
        assert_eq!(buf.text(), "line 1\n");
    }

    #[test]
    fn sink_restored_after_early_return() {
        fn fails(diag: &mut Diagnostics) -> Result<(), ()> {
            let mut out = diag.capture(true);
            out.report(format_args!("hidden"));
            Err(())
        }
        let buf = Shared::default();
        let mut diag = Diagnostics::from_writer(buf.clone());
        assert!(fails(&mut diag).is_err());
        diag.report(format_args!("after"));
        assert_eq!(buf.text(), "after\n");
    }
}
