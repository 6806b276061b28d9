use std::collections::TryReserveError;

/// The error raised while building suites and runners.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// A suite was created with an empty name.
    #[error("the suite name must not be empty")]
    EmptySuiteName,

    /// The storage of a suite or a runner could not grow.
    #[error("failed to allocate registry storage: {0}")]
    Alloc(#[from] TryReserveError),
}

/// Append `item` without aborting the process on allocation failure.
///
/// `items` is unchanged when this returns an error.
pub(crate) fn try_push<T>(items: &mut Vec<T>, item: T) -> Result<(), RegistryError> {
    try_push_reserving(items, item, 1)
}

fn try_push_reserving<T>(
    items: &mut Vec<T>,
    item: T,
    additional: usize,
) -> Result<(), RegistryError> {
    items.try_reserve(additional)?;
    items.push(item);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_appends_at_the_end() {
        let mut items = vec![1, 2];
        try_push(&mut items, 3).unwrap();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn failed_growth_keeps_existing_items() {
        let mut items = vec![1u8, 2, 3];
        let err = try_push_reserving(&mut items, 4, usize::MAX).unwrap_err();
        assert!(matches!(err, RegistryError::Alloc(..)));
        assert_eq!(items, vec![1, 2, 3]);

        try_push(&mut items, 4).unwrap();
        assert_eq!(items, vec![1, 2, 3, 4]);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            RegistryError::EmptySuiteName.to_string(),
            "the suite name must not be empty"
        );
    }
}
