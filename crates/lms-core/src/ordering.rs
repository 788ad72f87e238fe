//! Topic ordering within a course.
//!
//! Topics carry a `number` field that defines their position in the course.
//! The field is loosely typed in storage: legacy exports from the original
//! document store persisted it as a number, a string, or not at all. All
//! reads go through [`coerce_number`] so the rest of the system only ever
//! sees a clean `Option<i64>`.
//!
//! Invariant: after any successful append or reorder, the coerced numbers of
//! a course's topics form a dense `1..=N` sequence (no gaps, no duplicates).
//! Stored numbers are a cache of the sorted order; [`is_dense`] detects when
//! that cache has drifted and needs repair.

/// Coerce a stored topic number into a positive integer.
///
/// Returns `None` for a missing field, an unparsable string, zero, or a
/// negative value. Surrounding whitespace is tolerated.
///
/// # Examples
/// ```
/// use lms_core::ordering::coerce_number;
///
/// assert_eq!(coerce_number(Some("3")), Some(3));
/// assert_eq!(coerce_number(Some(" 12 ")), Some(12));
/// assert_eq!(coerce_number(Some("abc")), None);
/// assert_eq!(coerce_number(Some("0")), None);
/// assert_eq!(coerce_number(None), None);
/// ```
pub fn coerce_number(raw: Option<&str>) -> Option<i64> {
    let parsed = raw?.trim().parse::<i64>().ok()?;
    (parsed >= 1).then_some(parsed)
}

/// Sort key for a stored topic number.
///
/// Malformed or missing numbers sort as `0`, i.e. before every well-formed
/// topic, so they stay visible instead of disappearing to the end of the
/// list.
pub fn sort_key(raw: Option<&str>) -> i64 {
    coerce_number(raw).unwrap_or(0)
}

/// Compute the number for a topic appended to a course.
///
/// Returns `1` when the course has no topics, otherwise `max + 1` over the
/// coerced numbers. Malformed values contribute nothing to the max, so a
/// course whose only topic has `number = "abc"` still yields `1`. The result
/// is never below `1`.
pub fn next_number<'a, I>(existing: I) -> i64
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let max = existing
        .into_iter()
        .filter_map(coerce_number)
        .max()
        .unwrap_or(0);
    max + 1
}

/// Assign dense numbers to an explicitly ordered list of topic ids.
///
/// The id at index `i` gets number `i + 1`. Reapplying the same list
/// produces the same assignment, so a reorder is idempotent.
pub fn renumber<T: Copy>(ordered_ids: &[T]) -> Vec<(T, i64)> {
    ordered_ids
        .iter()
        .enumerate()
        .map(|(index, &id)| (id, index as i64 + 1))
        .collect()
}

/// Whether a course's stored numbers form the dense sequence `1..=N`.
///
/// Any missing, malformed, duplicated, or out-of-range number makes the
/// sequence non-dense and eligible for lazy repair on read.
pub fn is_dense<'a, I>(raw_numbers: I) -> bool
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut seen: Vec<i64> = Vec::new();
    for raw in raw_numbers {
        match coerce_number(raw) {
            Some(n) => seen.push(n),
            None => return false,
        }
    }
    let expected = seen.len() as i64;
    seen.sort_unstable();
    seen.iter()
        .zip(1..=expected)
        .all(|(&actual, wanted)| actual == wanted)
}

/// Extract the integer embedded at the start of a course name.
///
/// Course listings sort by this value ("2 - Data Structures" before
/// "10 - Capstone"); names without a leading number sort as `0`. Non-digit
/// prefixes are skipped, matching how the original listing treated names
/// like "Unit 3: Memory".
pub fn leading_number(name: &str) -> i64 {
    let digits: String = name
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(Some("1")), Some(1));
        assert_eq!(coerce_number(Some("42")), Some(42));
        assert_eq!(coerce_number(Some("  7\n")), Some(7));

        assert_eq!(coerce_number(None), None);
        assert_eq!(coerce_number(Some("")), None);
        assert_eq!(coerce_number(Some("abc")), None);
        assert_eq!(coerce_number(Some("3.5")), None);
        assert_eq!(coerce_number(Some("0")), None);
        assert_eq!(coerce_number(Some("-2")), None);
    }

    #[test]
    fn test_sort_key_puts_malformed_first() {
        assert_eq!(sort_key(Some("abc")), 0);
        assert_eq!(sort_key(None), 0);
        assert!(sort_key(Some("1")) > sort_key(Some("oops")));
    }

    #[test]
    fn test_next_number_empty_course() {
        assert_eq!(next_number(std::iter::empty::<Option<&str>>()), 1);
    }

    #[test]
    fn test_next_number_increments_max() {
        assert_eq!(next_number([Some("1")]), 2);
        assert_eq!(next_number([Some("1"), Some("2"), Some("3")]), 4);
        // Order of the stored values does not matter.
        assert_eq!(next_number([Some("3"), Some("1"), Some("2")]), 4);
    }

    #[test]
    fn test_next_number_ignores_malformed_values() {
        // A non-empty course whose only number is malformed still yields 1.
        assert_eq!(next_number([Some("abc")]), 1);
        assert_eq!(next_number([None, Some("abc"), Some("2")]), 3);
        // Malformed values never decrease the computed next value.
        assert_eq!(next_number([Some("5"), Some("not-a-number")]), 6);
    }

    #[test]
    fn test_renumber_assigns_positions() {
        // Course with topics A(1), B(2), C(3) reordered to [C, A, B]:
        // C gets 1, A gets 2, B gets 3.
        let assignment = renumber(&["c", "a", "b"]);
        assert_eq!(assignment, vec![("c", 1), ("a", 2), ("b", 3)]);
    }

    #[test]
    fn test_renumber_is_idempotent() {
        let ids = ["x", "y", "z"];
        assert_eq!(renumber(&ids), renumber(&ids));
    }

    #[test]
    fn test_renumber_empty() {
        assert!(renumber::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_is_dense() {
        assert!(is_dense(std::iter::empty::<Option<&str>>()));
        assert!(is_dense([Some("1")]));
        assert!(is_dense([Some("2"), Some("1"), Some("3")]));

        // Gap.
        assert!(!is_dense([Some("1"), Some("3")]));
        // Duplicate.
        assert!(!is_dense([Some("1"), Some("1"), Some("2")]));
        // Does not start at 1.
        assert!(!is_dense([Some("2"), Some("3")]));
        // Malformed member.
        assert!(!is_dense([Some("1"), Some("abc")]));
        assert!(!is_dense([Some("1"), None]));
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("2 - Data Structures"), 2);
        assert_eq!(leading_number("Unit 3: Memory"), 3);
        assert_eq!(leading_number("10 Capstone"), 10);
        assert_eq!(leading_number("Introduction"), 0);
        assert_eq!(leading_number(""), 0);
    }
}
