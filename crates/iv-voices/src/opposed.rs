//! The static opposed-skill table.
//!
//! Some voices fundamentally disagree about how to read the world: cold
//! deduction versus gut feeling, persuasion versus understanding. When two
//! opposed voices trigger in the same pass they argue instead of speaking
//! separately.

/// Pairs of skills that argue rather than interject together.
pub const OPPOSED_PAIRS: &[(&str, &str)] = &[
    ("Deduction", "Intuition"),
    ("Rhetoric", "Empathy"),
    ("Menace", "Composure"),
];

/// Whether two skills are an opposed pair, in either order.
pub fn are_opposed(a: &str, b: &str) -> bool {
    OPPOSED_PAIRS
        .iter()
        .any(|(x, y)| (a == *x && b == *y) || (a == *y && b == *x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_does_not_matter() {
        assert!(are_opposed("Deduction", "Intuition"));
        assert!(are_opposed("Intuition", "Deduction"));
    }

    #[test]
    fn unrelated_skills_are_not_opposed() {
        assert!(!are_opposed("Deduction", "Empathy"));
        assert!(!are_opposed("Lore", "Grit"));
        assert!(!are_opposed("Deduction", "Deduction"));
    }
}
