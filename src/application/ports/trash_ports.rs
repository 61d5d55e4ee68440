use crate::application::dtos::trash_dto::{ListOptions, TrashListReport};
use crate::common::errors::Result;

/// Port for trash listing use cases
pub trait TrashListUseCase: Send + Sync {
    /// Discover trash directories, decode their metadata and return the
    /// listable entries together with any non-fatal warnings
    fn list_trash(&self, options: &ListOptions) -> Result<TrashListReport>;
}
