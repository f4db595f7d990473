//! Bereichsauswahl: alle Items zwischen zwei Ankern (inklusive).

use std::ops::RangeInclusive;

/// Inklusiver Positionsbereich zwischen zwei Ankerpositionen.
///
/// Fehlt einer der beiden Anker (`None`), gibt es keinen Bereich.
#[inline]
pub fn span_between(a: Option<usize>, b: Option<usize>) -> Option<RangeInclusive<usize>> {
    let (a, b) = (a?, b?);
    Some(a.min(b)..=a.max(b))
}

/// Liefert den zusammenhängenden Ausschnitt zwischen den Items mit den
/// Schlüsseln `a` und `b` (inklusive, in Listenreihenfolge).
///
/// Die Reihenfolge der Anker spielt keine Rolle. Ist einer der Anker nicht
/// enthalten, ist das Ergebnis leer.
pub fn items_in_between_by<'a, T, K, F>(items: &'a [T], a: &K, b: &K, key: F) -> &'a [T]
where
    K: PartialEq + ?Sized,
    F: Fn(&T) -> &K,
{
    let pos_a = items.iter().position(|item| key(item) == a);
    let pos_b = items.iter().position(|item| key(item) == b);

    match span_between(pos_a, pos_b) {
        Some(span) => &items[span],
        None => &[],
    }
}

/// Wie [`items_in_between_by`], vergleicht aber die Items selbst.
pub fn items_in_between<'a, T: PartialEq>(items: &'a [T], a: &T, b: &T) -> &'a [T] {
    items_in_between_by(items, a, b, |item| item)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: [&str; 5] = ["A", "B", "C", "D", "E"];

    #[test]
    fn returns_inclusive_slice_in_list_order() {
        assert_eq!(items_in_between(&LIST, &"B", &"D"), &["B", "C", "D"]);
    }

    #[test]
    fn anchor_order_does_not_matter() {
        for a in LIST {
            for b in LIST {
                assert_eq!(
                    items_in_between(&LIST, &a, &b),
                    items_in_between(&LIST, &b, &a),
                    "Bereich {a}..{b} muss symmetrisch sein"
                );
            }
        }
    }

    #[test]
    fn identical_anchors_return_single_item() {
        assert_eq!(items_in_between(&LIST, &"C", &"C"), &["C"]);
    }

    #[test]
    fn missing_anchor_returns_empty() {
        assert!(items_in_between(&LIST, &"X", &"C").is_empty());
        assert!(items_in_between(&LIST, &"A", &"X").is_empty());
        assert!(items_in_between::<&str>(&[], &"A", &"A").is_empty());
    }

    #[test]
    fn compares_by_projected_key() {
        let rows = [(1, "eins"), (2, "zwei"), (3, "drei"), (4, "vier")];
        let between = items_in_between_by(&rows, &3, &1, |row| &row.0);
        assert_eq!(between, &[(1, "eins"), (2, "zwei"), (3, "drei")]);
    }

    #[test]
    fn span_requires_both_positions() {
        assert_eq!(span_between(Some(4), Some(1)), Some(1..=4));
        assert_eq!(span_between(None, Some(1)), None);
    }
}
