//! Field checks shared by every collection.
//!
//! Services run these in a fixed order: required fields, then formats, then
//! uniqueness, then singleton flags. The first failure is reported and nothing
//! after it is evaluated.

use rust_decimal::Decimal;

use crate::{
    domain::errors::RegistryError,
    store::{Collection, Record},
    uuids::TypedUuid,
};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Trims `value`, rejecting it when nothing is left.
pub(crate) fn required(field: &'static str, value: &str) -> Result<String, RegistryError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(RegistryError::MissingField { field });
    }

    Ok(trimmed.to_string())
}

/// Trims an optional value; blank input clears it.
pub(crate) fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

pub(crate) fn email(field: &'static str, value: &str) -> Result<(), RegistryError> {
    let invalid = |reason| RegistryError::InvalidField { field, reason };

    if value.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain whitespace"));
    }

    let Some((local, domain)) = value.split_once('@') else {
        return Err(invalid("must contain '@'"));
    };

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("must contain exactly one '@' after a local part"));
    }

    let has_dotted_domain =
        domain.contains('.') && domain.split('.').all(|label| !label.is_empty());

    if !has_dotted_domain {
        return Err(invalid("must end with a domain such as example.com"));
    }

    Ok(())
}

/// Checks an ISO-style three-letter code and returns it upper-cased.
pub(crate) fn currency_code(field: &'static str, value: &str) -> Result<String, RegistryError> {
    if value.len() != 3 || !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(RegistryError::InvalidField {
            field,
            reason: "must be exactly three letters",
        });
    }

    Ok(value.to_ascii_uppercase())
}

pub(crate) fn percentage(field: &'static str, rate: Decimal) -> Result<(), RegistryError> {
    if rate < Decimal::ZERO || rate > HUNDRED {
        return Err(RegistryError::InvalidField {
            field,
            reason: "must be between 0 and 100",
        });
    }

    Ok(())
}

pub(crate) fn non_negative(field: &'static str, amount: Decimal) -> Result<(), RegistryError> {
    if amount < Decimal::ZERO {
        return Err(RegistryError::InvalidField {
            field,
            reason: "must not be negative",
        });
    }

    Ok(())
}

/// Checks that `parent` can hold `child` in a forest: the parent must exist,
/// must not be the child itself and must not sit below the child.
pub(crate) fn parent<T, F>(
    field: &'static str,
    records: &Collection<T>,
    child: Option<TypedUuid<T>>,
    parent: TypedUuid<T>,
    parent_of: F,
) -> Result<(), RegistryError>
where
    T: Record,
    F: Fn(&T) -> Option<TypedUuid<T>>,
{
    let invalid = |reason| RegistryError::InvalidField { field, reason };

    if Some(parent) == child {
        return Err(invalid("cannot be its own parent"));
    }

    if !records.contains(parent) {
        return Err(invalid("parent does not exist"));
    }

    let Some(child) = child else {
        return Ok(());
    };

    let mut cursor = records.get(parent).and_then(&parent_of);

    for _ in 0..records.len() {
        match cursor {
            Some(ancestor) if ancestor == child => {
                return Err(invalid("would make the record its own ancestor"));
            }
            Some(ancestor) => cursor = records.get(ancestor).and_then(&parent_of),
            None => return Ok(()),
        }
    }

    Err(invalid("would make the record its own ancestor"))
}
