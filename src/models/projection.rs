use rust_decimal::Decimal;
use serde::Serialize;

/// Maps a stored record onto its wire representation.
///
/// `FIELDS` is the declared output table for the entity, in emission order.
/// Any renaming between storage columns and JSON keys is fixed here at
/// compile time rather than resolved per request.
pub trait Projection {
    type Output: Serialize;

    const FIELDS: &'static [&'static str];

    fn project(self) -> Self::Output;
}

pub fn project_all<T: Projection>(records: Vec<T>) -> Vec<T::Output> {
    records.into_iter().map(Projection::project).collect()
}

/// Money columns are NUMERIC(10, 2); always emit two decimal places.
pub(crate) fn money(mut value: Decimal) -> Decimal {
    value.rescale(2);
    value
}
