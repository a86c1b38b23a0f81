//! The seam between the game loop and whatever supplies random names.

use std::future::Future;

use crate::client::NameClient;
use crate::types::NameResolution;

/// Something that can come up with a random pet name.
///
/// Implementations must be `Send + Sync` because lookups run on their own
/// task while the game loop keeps going.
pub trait NameLookup: Send + Sync + 'static {
    /// Produce a name, or the reason there is none.
    fn resolve(&self) -> impl Future<Output = NameResolution> + Send;
}

impl NameLookup for NameClient {
    fn resolve(&self) -> impl Future<Output = NameResolution> + Send {
        NameClient::resolve(self)
    }
}
