use crate::error::Result;

/// Validate structural integrity of a geometric or scene entity.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
