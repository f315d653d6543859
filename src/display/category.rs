//! Category display formatting

use crate::models::{CategoryTaxonomy, TransactionType};

/// Format category names, one type or both
pub fn format_category_list(taxonomy: &CategoryTaxonomy, kind: Option<TransactionType>) -> String {
    let kinds: Vec<TransactionType> = match kind {
        Some(kind) => vec![kind],
        None => TransactionType::ALL.to_vec(),
    };

    let mut output = String::new();
    for (i, kind) in kinds.into_iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("{}:\n", kind));

        let names = taxonomy.names(kind);
        if names.is_empty() {
            output.push_str("  (none)\n");
        }
        for name in names {
            output.push_str(&format!("  {}\n", name));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_types() {
        let text = format_category_list(&CategoryTaxonomy::starter(), None);
        assert!(text.starts_with("Expense:\n  Food\n"));
        assert!(text.contains("Income:\n  Salary\n"));
    }

    #[test]
    fn test_single_type_and_empty() {
        let text = format_category_list(&CategoryTaxonomy::empty(), Some(TransactionType::Income));
        assert_eq!(text, "Income:\n  (none)\n");
    }
}
