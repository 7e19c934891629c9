use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use super::EntityMetadata;

/// A configuration record managed under `/api/configuration/{collection}`.
///
/// Instance methods expose what the generic list/toggle/delete flows need;
/// the static ones name the collection for URLs and UI captions.
pub trait AggregateRoot: Clone + Serialize + DeserializeOwned + 'static {
    /// Request body for create/update
    type Dto: Serialize + Clone + Default + PartialEq + Send + Sync + 'static;

    fn id(&self) -> Uuid;

    /// Name shown in lists and confirmation dialogs
    fn display_name(&self) -> &str;

    fn is_active(&self) -> bool;

    fn metadata(&self) -> &EntityMetadata;

    /// Number of dependent records, when the list endpoint reports it
    fn usage_count(&self) -> Option<i64>;

    /// Build the edit form from an existing record
    fn to_dto(&self) -> Self::Dto;

    /// Index of the aggregate in the system (for example "a001")
    fn aggregate_index() -> &'static str;

    /// Path segment under `/api/configuration/`
    fn collection_name() -> &'static str;

    /// Singular UI name, for example "Farm Type"
    fn element_name() -> &'static str;

    /// Plural UI name, for example "Farm Types"
    fn list_name() -> &'static str;
}
