use crate::image_pipeline::common::error::{ConversionError, Result};

/// Allocates a zero-initialised buffer, reporting failure instead of aborting.
pub(crate) fn try_alloc<T: Clone + Default>(len: usize) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len).map_err(|e| {
        ConversionError::AllocationError(format!(
            "{} elements of {} bytes: {}",
            len,
            std::mem::size_of::<T>(),
            e
        ))
    })?;
    buffer.resize(len, T::default());
    Ok(buffer)
}
