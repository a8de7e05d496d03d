/*
[INPUT]:  Caller-supplied identifiers, amounts and collections
[OUTPUT]: Early ValidationError before any request is built
[POS]:    HTTP layer - local precondition checks shared by feature modules
[UPDATE]: When a new kind of precondition appears
*/

use rust_decimal::Decimal;

use crate::http::ValidationError;

/// Rejects empty or whitespace-only text
pub(crate) fn require_text(value: &str, error: ValidationError) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error);
    }
    Ok(())
}

pub(crate) fn require_positive(amount: Decimal, error: ValidationError) -> Result<(), ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(error);
    }
    Ok(())
}

pub(crate) fn require_items<T>(items: &[T], error: ValidationError) -> Result<(), ValidationError> {
    if items.is_empty() {
        return Err(error);
    }
    Ok(())
}
