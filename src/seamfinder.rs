use crate::error::Result;
use crate::seam::Seam;

/// How seams are requested from a grid.  It's a primitive interface,
/// just enough to make room for a second search strategy or for
/// caching later.
pub trait SeamFinder {
    /// Once a SeamFinder has a grid, request a horizontal seam: one row
    /// index per column.
    fn find_horizontal_seam(&self) -> Result<Seam>;

    /// Request a vertical seam: one column index per row.
    fn find_vertical_seam(&self) -> Result<Seam>;
}
