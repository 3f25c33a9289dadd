//! Application state for the web layer.

use std::sync::Arc;

use crate::board::Clock;
use crate::config::Settings;
use crate::rejseplanen::TripClient;

/// Shared application state.
///
/// Immutable after startup; per-visitor state travels in the request URL.
#[derive(Clone)]
pub struct AppState {
    /// Rejseplanen trip client
    pub trips: Arc<TripClient>,

    /// Validated board settings
    pub settings: Arc<Settings>,

    /// Source of "now" for trip selection
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(trips: TripClient, settings: Settings, clock: impl Clock + 'static) -> Self {
        Self {
            trips: Arc::new(trips),
            settings: Arc::new(settings),
            clock: Arc::new(clock),
        }
    }
}
