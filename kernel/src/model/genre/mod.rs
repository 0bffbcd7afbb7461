use super::id::GenreId;

pub mod event;

/// Name uniqueness is best-effort: creation looks an existing genre up by
/// name before inserting, there is no storage-level constraint.
#[derive(Debug, Clone)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}
