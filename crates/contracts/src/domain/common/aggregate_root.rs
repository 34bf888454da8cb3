/// Trait implemented by every aggregate exposed by the remote API.
///
/// Instance methods describe a concrete record, the associated functions
/// describe the aggregate class (REST collection, UI names).
pub trait AggregateRoot {
    // ============================================================================
    // Instance methods
    // ============================================================================

    /// Backend identifier of the record, if it has been assigned one
    fn id(&self) -> Option<&str>;

    /// Human readable caption of the record
    fn description(&self) -> &str;

    // ============================================================================
    // Aggregate class metadata
    // ============================================================================

    /// Aggregate index (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// REST collection name (e.g. "orders")
    fn collection_name() -> &'static str;

    /// UI name of a single element (e.g. "Order")
    fn element_name() -> &'static str;

    /// UI name of the list (e.g. "Orders")
    fn list_name() -> &'static str;

    // ============================================================================
    // Default implementations
    // ============================================================================

    /// Full aggregate name (e.g. "a001_orders")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Collection path relative to the API base (e.g. "/api/orders")
    fn collection_path() -> String {
        format!("/api/{}", Self::collection_name())
    }
}
