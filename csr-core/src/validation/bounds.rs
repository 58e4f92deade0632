//! Byte buffer bounds validation for component arrays

use crate::{Component, CsrError, Result};

/// Validate that a component buffer of `byte_len` bytes holds whole `T` elements
///
/// Returns the element count. Performs overflow-safe arithmetic only; the
/// buffer itself is never touched.
pub const fn validate_array_bounds<T>(byte_len: usize, component: Component) -> Result<usize> {
    let element_size = core::mem::size_of::<T>();

    if element_size == 0 || byte_len % element_size != 0 {
        return Err(CsrError::MalformedComponent(component));
    }

    let count = byte_len / element_size;

    // Conservative overflow protection for downstream offset arithmetic
    if count > isize::MAX as usize / 8 {
        return Err(CsrError::MalformedComponent(component));
    }

    Ok(count)
}

/// Validate that a decoded array holds exactly `expected` elements
pub const fn validate_element_count(
    actual: usize,
    expected: usize,
    component: Component,
) -> Result<()> {
    if actual != expected {
        return Err(CsrError::MalformedComponent(component));
    }
    Ok(())
}
