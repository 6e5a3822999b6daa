use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use log::warn;

use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers once the process receives one of the termination
/// signals (`SIGINT`, `SIGTERM` or `SIGQUIT` on unix). The search then stops at the next step
/// instead of the process being killed, so the best effort so far can still be reported.
#[derive(Clone, Debug)]
pub struct OsSignal {
    signal_received: Arc<AtomicBool>,
}

impl OsSignal {
    /// Registers the signal handlers.
    pub fn install() -> OsSignal {
        let signal_received = Arc::new(AtomicBool::new(false));

        for signal in signal_hook::consts::TERM_SIGNALS {
            if let Err(error) = signal_hook::flag::register(*signal, Arc::clone(&signal_received))
            {
                warn!("Failed to register a handler for signal {signal}: {error}");
            }
        }

        OsSignal { signal_received }
    }
}

impl TerminationCondition for OsSignal {
    fn should_stop(&mut self) -> bool {
        self.signal_received.load(Ordering::Relaxed)
    }
}
