//! Printing of solver statistics in a machine-readable `<prefix><name>=<value>` format.
//!
//! Statistics are only printed once [`configure`] has been called with `log_statistics` set; until
//! then every call to [`log_statistic`] is a no-op, which keeps library users and tests quiet.

use std::fmt::Display;

use once_cell::sync::OnceCell;

#[derive(Debug, Clone, Copy)]
struct StatisticOptions {
    log_statistics: bool,
    statistic_prefix: &'static str,
    after_statistics: Option<&'static str>,
}

static STATISTIC_OPTIONS: OnceCell<StatisticOptions> = OnceCell::new();

/// Configures the logging of statistics. Only the first call has an effect.
///
/// - `log_statistics` turns the output on or off.
/// - `statistic_prefix` is printed in front of every statistic.
/// - `after_statistics` is an optional line printed once all statistics have been logged.
pub fn configure(
    log_statistics: bool,
    statistic_prefix: &'static str,
    after_statistics: Option<&'static str>,
) {
    let _ = STATISTIC_OPTIONS.set(StatisticOptions {
        log_statistics,
        statistic_prefix,
        after_statistics,
    });
}

pub(crate) fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS
        .get()
        .is_some_and(|options| options.log_statistics)
}

pub(crate) fn log_statistic(name: impl Display, value: impl Display) {
    if let Some(options) = STATISTIC_OPTIONS.get() {
        if options.log_statistics {
            println!("{}{name}={value}", options.statistic_prefix);
        }
    }
}

pub(crate) fn log_statistic_postfix() {
    if let Some(options) = STATISTIC_OPTIONS.get() {
        if let (true, Some(after)) = (options.log_statistics, options.after_statistics) {
            println!("{after}");
        }
    }
}
