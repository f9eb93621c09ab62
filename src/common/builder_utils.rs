use super::error::TableError;

pub(crate) fn validate_configurations(
    initial_capacity: usize,
    max_load_factor: f64,
    tombstone_compaction: Option<f64>,
) -> Result<(), TableError> {
    if initial_capacity == 0 {
        return Err(TableError::InvalidCapacity);
    }
    if !is_valid_ratio(max_load_factor) {
        return Err(TableError::InvalidLoadFactor(max_load_factor));
    }
    if let Some(ratio) = tombstone_compaction {
        if !is_valid_ratio(ratio) {
            return Err(TableError::InvalidCompactionRatio(ratio));
        }
    }
    Ok(())
}

pub(crate) fn ensure_configurations_or_panic(
    initial_capacity: usize,
    max_load_factor: f64,
    tombstone_compaction: Option<f64>,
) {
    if let Err(e) = validate_configurations(initial_capacity, max_load_factor, tombstone_compaction)
    {
        panic!("{e}");
    }
}

// Also rejects NaN, as every comparison against it is false.
fn is_valid_ratio(ratio: f64) -> bool {
    ratio > 0.0 && ratio <= 1.0
}
