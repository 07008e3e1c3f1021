//! Calendar module - stateless grid helpers consuming schedule output.

mod month_grid;

pub use month_grid::{GridCell, MonthGrid, GRID_CELLS};
