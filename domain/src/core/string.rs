//! String utilities for the domain layer.

/// Derive the canonical tool name for a model: `create_{category}_{model}`,
/// both parts lowercased.
pub fn tool_name(category: &str, model: &str) -> String {
    format!("create_{}_{}", category.to_lowercase(), model.to_lowercase())
}

/// First non-empty line of a docstring, trimmed.
pub fn summary_line(doc: &str) -> &str {
    doc.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_name_is_lowercased() {
        assert_eq!(tool_name("Transaction", "Payment"), "create_transaction_payment");
        assert_eq!(tool_name("Currency", "XRP"), "create_currency_xrp");
        assert_eq!(tool_name("Amount", "MPTAmount"), "create_amount_mptamount");
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(summary_line("\n   Sends value.\n  More text."), "Sends value.");
        assert_eq!(summary_line(""), "");
        assert_eq!(summary_line("  \n \n"), "");
    }
}
