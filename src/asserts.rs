//! Levelled assertions. Cheap checks run at every level, the expensive ones (such as a full
//! consistency check after every flip) only when the level is raised by `test` or the
//! `debug-checks` feature.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const CARDWALK_ASSERT_LEVEL_DEFINITION: u8 = CARDWALK_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const CARDWALK_ASSERT_LEVEL_DEFINITION: u8 = CARDWALK_ASSERT_EXTREME;

pub const CARDWALK_ASSERT_SIMPLE: u8 = 1;
pub const CARDWALK_ASSERT_MODERATE: u8 = 2;
pub const CARDWALK_ASSERT_ADVANCED: u8 = 3;
pub const CARDWALK_ASSERT_EXTREME: u8 = 4;

#[macro_export]
#[doc(hidden)]
macro_rules! print_cardwalk_assert_warning_message {
    () => {
        if $crate::asserts::CARDWALK_ASSERT_LEVEL_DEFINITION
            >= $crate::asserts::CARDWALK_ASSERT_MODERATE
        {
            log::warn!("Potential performance degradation: the cardwalk assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.", $crate::asserts::CARDWALK_ASSERT_LEVEL_DEFINITION);
        };
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! cardwalk_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::CARDWALK_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CARDWALK_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! cardwalk_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::CARDWALK_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CARDWALK_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! cardwalk_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::CARDWALK_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CARDWALK_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! cardwalk_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::CARDWALK_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CARDWALK_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! cardwalk_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::CARDWALK_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CARDWALK_ASSERT_EXTREME {
            assert!($($arg)*);
        }
    };
}
