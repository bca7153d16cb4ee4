//! Client-side shaping of fetched routine entries: filtering, ordering,
//! and the two groupings used by the admin table and the public grid.
//!
//! Nothing here performs I/O or returns errors. Malformed records are
//! ordered last and otherwise passed through untouched.

pub mod filter;
pub mod group;
pub mod page;
pub mod sort;
pub mod view;

pub use filter::{FilterOptions, RoutineFilter, filter_options};
pub use group::{DayGrid, RoomRow, RowGroup, SlotCell, TimetableGrid, group_rows, natural_cmp};
pub use page::{Page, paginate};
pub use sort::{CANONICAL_DAYS, DayOrder, clock_minutes, sort_entries, start_minutes};
pub use view::{RoutineTableView, TimetableView};
