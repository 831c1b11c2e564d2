//! Page behaviors outside the snippet tabs: the fixed navbar and the
//! exclusive "checked" button inside filter button groups.

/// Whether the navbar should be pinned at this scroll offset.
pub fn navbar_is_fixed(scroll_top: f64, threshold: f64) -> bool {
    scroll_top > threshold
}

/// Elements of a button group that must lose the checked marker when
/// `clicked` is checked: every currently marked element except `clicked`.
pub fn stale_checks<'a, T: PartialEq>(marked: &'a [T], clicked: &T) -> Vec<&'a T> {
    marked.iter().filter(|m| *m != clicked).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_threshold() {
        assert!(!navbar_is_fixed(0.0, 50.0));
        assert!(!navbar_is_fixed(50.0, 50.0));
        assert!(navbar_is_fixed(50.5, 50.0));
    }

    #[test]
    fn test_every_other_marked_button_is_cleared() {
        // two buttons marked in markup, the third one clicked
        let marked = ["A", "B"];
        assert_eq!(stale_checks(&marked, &"C"), vec![&"A", &"B"]);
    }

    #[test]
    fn test_clicked_button_keeps_its_mark() {
        let marked = ["A", "C"];
        assert_eq!(stale_checks(&marked, &"C"), vec![&"A"]);
        assert!(stale_checks(&["C"], &"C").is_empty());
    }

    #[test]
    fn test_nothing_marked() {
        let marked: [&str; 0] = [];
        assert!(stale_checks(&marked, &"A").is_empty());
    }
}
