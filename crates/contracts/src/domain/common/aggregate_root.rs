/// Trait for an aggregate root
///
/// Defines the identity accessor and the class-level metadata shared by
/// every aggregate: its index, its storage collection and its UI names.
pub trait AggregateRoot {
    /// Aggregate identifier type
    type Id;

    /// Record ID
    fn id(&self) -> Self::Id;

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name used as the storage key (e.g. "site_content")
    fn collection_name() -> &'static str;

    /// Element name for the UI, as a dictionary key
    fn element_name() -> &'static str;

    /// List name for the UI, as a dictionary key
    fn list_name() -> &'static str;
}
