//! Persistence for user loadouts.
//!
//! [`LoadoutStore`] owns the in-memory collection and writes it through an
//! injected [`LoadoutRepository`] after every mutation. Persisted records pass
//! through the [`migration`] chain before they are decoded, and [`transfer`]
//! handles the JSON export/import formats.

pub mod migration;
pub mod repository;
pub mod store;
pub mod transfer;

pub use migration::{MIGRATIONS, MigrationStep, decode_record, migrate_record};
pub use repository::{
    FileLoadoutRepository, InMemoryLoadoutRepo, LoadoutRepository, RepositoryError,
};
pub use store::{LoadoutStore, new_loadout_id};
pub use transfer::{
    BulkImport, ImportError, bulk_export_file_name, export_all, export_single, import_all,
    import_single, single_export_file_name,
};
