use kanjigo_core::details::DetailsService;
use kanjigo_core::lookup::LookupService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable; both services share their collaborators
/// behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Read-through kanji lookup over the injected store and provider.
    pub lookup: LookupService,
    /// Uncached detail lookup against the provider.
    pub details: DetailsService,
}
