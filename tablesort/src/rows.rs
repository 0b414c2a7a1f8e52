use std::cmp::Ordering;

use crate::collate::collate;
use crate::value::{SortKey, ValueType};

/// Order two keys. Unordered keys go last regardless of direction.
pub fn compare_keys(a: &SortKey, b: &SortKey, ascending: bool) -> Ordering {
    let ord = match (a, b) {
        (SortKey::Unordered, SortKey::Unordered) => return Ordering::Equal,
        (SortKey::Unordered, _) => return Ordering::Greater,
        (_, SortKey::Unordered) => return Ordering::Less,
        (SortKey::Text(a), SortKey::Text(b)) => collate(a, b),
        (SortKey::Number(a), SortKey::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
        _ => Ordering::Equal,
    };
    if ascending { ord } else { ord.reverse() }
}

/// Stable in-place sort of `rows` by one column.
///
/// `cell` returns the text of a row's cell at a column index, or `None` when
/// the row is too short. Keys are parsed once per row. Rows with equal keys
/// keep their relative order in both directions.
pub fn sort_rows<R, S, F>(
    rows: &mut Vec<R>,
    column: usize,
    value_type: ValueType,
    ascending: bool,
    cell: F,
) where
    S: AsRef<str>,
    F: Fn(&R, usize) -> Option<S>,
{
    let mut keyed: Vec<(SortKey, R)> = rows
        .drain(..)
        .map(|row| {
            let text = cell(&row, column);
            let key = SortKey::parse(text.as_ref().map(|s| s.as_ref()), value_type);
            (key, row)
        })
        .collect();

    log::trace!(
        "[sort] {} rows by column {} as {}, ascending={}, {} unordered",
        keyed.len(),
        column,
        value_type,
        ascending,
        keyed.iter().filter(|(key, _)| key.is_unordered()).count()
    );

    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, ascending));

    rows.extend(keyed.into_iter().map(|(_, row)| row));
}
