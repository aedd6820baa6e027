//! Tag for tests you are currently trying to pass.
//!
//! Wrap the tests in [`wip!`](crate::wip!) to isolate them, then run only those
//! with libtest's name filter:
//!
//! ```text
//! cargo test -- ::wip::
//! ```
//!
//! A plain `cargo test` still runs them along with everything else.

/// Path segment that tagged tests carry in their names
pub const WIP_TAG: &str = "wip";

/// Name filter that matches the tag segment and nothing that merely ends in `wip`
pub const WIP_FILTER: &str = "::wip::";

/// Moves the given items into a `wip` submodule so their test names contain `::wip::`.
///
/// Works once per module since it always declares `mod wip`.
///
/// ```
/// mod parser_tests {
///     dart_utils::wip! {
///         #[test]
///         fn test_still_failing() {}
///     }
/// }
/// # fn main() {}
/// ```
#[macro_export]
macro_rules! wip {
    ($($item:item)*) => {
        #[allow(unused_imports)]
        mod wip {
            use super::*;

            $($item)*
        }
    };
}

#[cfg(test)]
mod test {
    use crate::id_generator::md5_hash;

    use super::WIP_FILTER;

    fn module_tail(path: &str) -> &str {
        path.rsplit("::").next().unwrap_or(path)
    }

    // libtest names tests by module path without the crate name
    fn test_name(module: &str, name: &str) -> String {
        let path = module.split_once("::").map(|(_, rest)| rest).unwrap_or("");
        format!("{}::{}", path, name)
    }

    #[test]
    fn test_untagged_path() {
        assert_ne!(module_tail(module_path!()), super::WIP_TAG);
        assert!(!test_name(module_path!(), "test_untagged_path").contains(WIP_FILTER));
    }

    #[test]
    fn test_filter_skips_modules_ending_in_wip() {
        assert!(!"parser::swip::test_x".contains(WIP_FILTER));
        assert!(!"unwip::test_x".contains(WIP_FILTER));
        assert!(!"wip::test::test_x".contains(WIP_FILTER));
        assert!("parser::tests::wip::test_x".contains(WIP_FILTER));
    }

    crate::wip! {
        #[test]
        fn test_tagged_path() {
            assert_eq!(module_path!(), "dart_utils::wip::test::wip");
            assert_eq!(module_tail(module_path!()), crate::wip::WIP_TAG);
            assert!(test_name(module_path!(), "test_tagged_path").contains(WIP_FILTER));
        }

        #[test]
        fn test_tagged_test_behaves_the_same() {
            assert_eq!(md5_hash(b""), "d41d8cd98f00b204e9800998ecf8427e");
        }
    }
}
