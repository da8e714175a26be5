//! Fatal precondition checks. A failed check is a logic bug in the caller, so these panic
//! instead of returning an error.

pub fn assert_partial_ord<T: PartialOrd>(_: &T) {}
pub fn assert_same_type<T, U>(_: &T, _: &U) {}
pub fn assert_type<T>(_: &T) {}

#[allow(unused_macros)]
#[macro_export]
macro_rules! current_location {
    () => {
        format!("{}:{}", file!(), line!())
    };
}
#[allow(unused_imports)]
pub use current_location;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check {
    ($lhs:expr) => {{
        let value = $lhs;
        $crate::util::assert::assert_type::<bool>(&value);
        if !value {
            panic!(
                "check failed: {}: {}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
            );
        }
    }};
    ($lhs:expr, $extra:expr) => {{
        let value = $lhs;
        $crate::util::assert::assert_type::<bool>(&value);
        if !value {
            panic!(
                "check failed: {}: {}: {}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                $extra
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check_lt {
    ($lhs:expr, $rhs:expr) => {{
        let lhs = $lhs;
        let rhs = $rhs;
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_partial_ord(&lhs);
        if !(lhs < rhs) {
            panic!(
                "check failed: {}: {} < {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check_lt;

// Written as `!(lhs > rhs)` rather than `lhs <= rhs` so that NaN fails the check.
#[allow(unused_macros)]
#[macro_export]
macro_rules! check_gt {
    ($lhs:expr, $rhs:expr) => {{
        let lhs = $lhs;
        let rhs = $rhs;
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_partial_ord(&lhs);
        if !(lhs > rhs) {
            panic!(
                "check failed: {}: {} > {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs
            );
        }
    }};
    ($lhs:expr, $rhs:expr, $extra:expr) => {{
        let lhs = $lhs;
        let rhs = $rhs;
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_partial_ord(&lhs);
        if !(lhs > rhs) {
            panic!(
                "check failed: {}: {} > {}: {:?} vs. {:?}: {}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs,
                $extra
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check_gt;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check_ge {
    ($lhs:expr, $rhs:expr) => {{
        let lhs = $lhs;
        let rhs = $rhs;
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_partial_ord(&lhs);
        if !(lhs >= rhs) {
            panic!(
                "check failed: {}: {} >= {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check_ge;
