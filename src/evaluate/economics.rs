use crate::catalog::Variant;
use crate::schema::Economics;

/// Extract the earnings snapshot, `None` when the variant has no usable block.
pub fn evaluate_economics(variant: &Variant) -> Option<Economics> {
    variant
        .economics
        .as_ref()
        .filter(|economics| !economics.is_empty())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_variants;

    #[test]
    fn passes_through_present_block() {
        let variants = builtin_variants();
        let economics = evaluate_economics(&variants[1]).expect("economics present");
        assert_eq!(economics.net_range_eur, vec![200, 700]);
        assert_eq!(economics.time_to_first_money_range_weeks, vec![2, 4]);
        assert_eq!(economics.confidence.as_deref(), Some("low"));
    }

    #[test]
    fn absent_and_empty_blocks_yield_none() {
        let variants = builtin_variants();
        assert!(evaluate_economics(&variants[2]).is_none());
        let mut empty = variants[0].clone();
        empty.economics = Some(Economics::default());
        assert!(evaluate_economics(&empty).is_none());
    }
}
