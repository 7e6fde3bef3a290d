use gridpath_core::Map;

use crate::error::SearchError;
use crate::path::Path;
use crate::strategy::Algorithm;

/// A search strategy over a [`Map`].
///
/// `Ok(Some(path))` is a complete start-to-end route, `Ok(None)` means the
/// end is unreachable, and `Err` is reserved for contract failures. The map
/// is only read.
pub trait PathFinder {
    /// Which registered algorithm this is.
    fn algorithm(&self) -> Algorithm;

    /// Search `map` from its start to its end.
    fn find_path(&self, map: &Map) -> Result<Option<Path>, SearchError>;
}
