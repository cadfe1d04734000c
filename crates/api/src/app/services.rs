use std::sync::Arc;

use boxoffice_inventory::{seed, InventoryService};

/// Shared application state, one per process.
#[derive(Debug)]
pub struct AppServices {
    pub inventory: InventoryService,
}

impl AppServices {
    pub fn new(inventory: InventoryService) -> Self {
        Self { inventory }
    }
}

/// Wire services with the bootstrap theater (three screens, three shows).
pub fn build_services() -> Arc<AppServices> {
    Arc::new(AppServices::new(seed::default_theater()))
}
