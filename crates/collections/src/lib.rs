//! Higher-order operations over slices and hash maps whose callbacks may fail.
//!
//! Every operation takes one or more callbacks returning `Result<_, E>` for a
//! caller-chosen `E`. The first callback that returns `Err` stops the
//! operation: no later element is visited, nothing collected so far is
//! returned, and the error reaches the caller exactly as the callback produced
//! it.
//!
//! ```
//! use lotry_collections::{find, map, uniq_by};
//!
//! let doubled = map(&[1, 2, 3], |x, _| Ok::<_, String>(x * 2))?;
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let even = find(&[1, 2, 3], |x| Ok::<_, String>(x % 2 == 0))?;
//! assert_eq!(even, Some(2));
//!
//! let parsed = map(&["1", "two"], |s, _| s.parse::<i32>());
//! assert!(parsed.is_err());
//!
//! let unique = uniq_by(&[1, 2, 2, 3, 3, 3], |x| Ok::<_, String>(*x))?;
//! assert_eq!(unique, vec![1, 2, 3]);
//! # Ok::<(), String>(())
//! ```
//!
//! ## Modules
//!
//! - **`transform`**: `map`, `filter`, `reject`, `filter_map`, `flat_map`,
//!   `reduce`, `reduce_right`, `for_each`, `times`, `repeat_by`.
//! - **`search`**: `find` and friends, `contains_by`, `some_by`, `every_by`,
//!   `none_by`, `find_key_by`.
//! - **`dedup`**: `uniq_by`, `find_uniques_by`, `find_duplicates_by`.
//! - **`group`**: `group_by`, `partition_by`, `key_by`, `associate`,
//!   `slice_to_map`, `drop_while`, `drop_right_while`, `count_by`,
//!   `count_values_by`.
//! - **`entries`**: `map_keys`, `map_values`, `map_entries`, `map_to_slice`.

mod iteration;

pub mod dedup;
pub mod entries;
pub mod group;
pub mod search;
pub mod transform;

pub use self::{
    dedup::{find_duplicates_by, find_uniques_by, uniq_by},
    entries::{map_entries, map_keys, map_to_slice, map_values},
    group::{
        associate, count_by, count_values_by, drop_right_while, drop_while, group_by, key_by,
        partition_by, slice_to_map,
    },
    search::{
        contains_by, every_by, find, find_index_of, find_key_by, find_last_index_of,
        find_or_default, find_or_else, none_by, some_by, Located, LocatedExt,
    },
    transform::{
        filter, filter_map, flat_map, for_each, map, reduce, reduce_right, reject, repeat_by,
        times,
    },
};
pub use lotry_core::{empty, functional, Error, ResultExt, NOT_FOUND_INDEX};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        dedup::*, entries::*, group::*, search::*, transform::*, Error, ResultExt,
    };
    pub use lotry_core::functional::prelude::*;
}
