use crate::models::Carrier;

/// USPS 运单号长度
const USPS_TRACKING_LEN: usize = 22;

/// 按运单号前缀/长度判断承运商, 先匹配先得
pub fn classify_carrier(tracking: &str) -> Carrier {
    let tracking = tracking.trim();
    if tracking.starts_with("96") || tracking.starts_with("797") {
        Carrier::FedEx
    } else if tracking.starts_with("1Z") {
        Carrier::Ups
    } else if tracking.chars().count() == USPS_TRACKING_LEN {
        Carrier::Usps
    } else {
        Carrier::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fedex_prefixes() {
        assert_eq!(classify_carrier("961234567890"), Carrier::FedEx);
        assert_eq!(classify_carrier("797000111222"), Carrier::FedEx);
        // 22 位但前缀优先
        assert_eq!(classify_carrier("9612345678901234567890"), Carrier::FedEx);
    }

    #[test]
    fn test_ups_prefix_is_case_sensitive() {
        assert_eq!(classify_carrier("1Z999AA10123456784"), Carrier::Ups);
        assert_eq!(classify_carrier("1z999AA10123456784"), Carrier::Other);
    }

    #[test]
    fn test_usps_by_length() {
        assert_eq!(classify_carrier("9400111899223197428490"), Carrier::Usps);
        assert_eq!(classify_carrier("4201234567890123456789"), Carrier::Usps);
        assert_eq!(classify_carrier("420123456789012345678"), Carrier::Other);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(classify_carrier("  1Z123  "), Carrier::Ups);
        assert_eq!(classify_carrier(" 4201234567890123456789\t"), Carrier::Usps);
    }

    #[test]
    fn test_rules_apply_in_order_for_every_length() {
        for len in 0..40 {
            let tail = "0".repeat(len);
            for (prefix, expected) in [
                ("96", Carrier::FedEx),
                ("797", Carrier::FedEx),
                ("1Z", Carrier::Ups),
            ] {
                let tracking = format!("{}{}", prefix, tail);
                assert_eq!(classify_carrier(&tracking), expected, "{:?}", tracking);
            }

            for prefix in ["", "A", "95", "79", "1z", "Z1", "42"] {
                let tracking = format!("{}{}", prefix, "5".repeat(len));
                if tracking.starts_with("96") || tracking.starts_with("797") {
                    continue;
                }
                let expected = if tracking.chars().count() == 22 {
                    Carrier::Usps
                } else {
                    Carrier::Other
                };
                assert_eq!(classify_carrier(&tracking), expected, "{:?}", tracking);
            }
        }
    }

    #[test]
    fn test_usps_length_counts_characters() {
        // 22 个字符, 但超过 22 字节
        let tracking = "é".repeat(22);
        assert_eq!(classify_carrier(&tracking), Carrier::Usps);
        assert_eq!(classify_carrier(&"é".repeat(11)), Carrier::Other);
    }

    #[test]
    fn test_empty_and_unknown_are_other() {
        assert_eq!(classify_carrier(""), Carrier::Other);
        assert_eq!(classify_carrier("   "), Carrier::Other);
        assert_eq!(classify_carrier("ABC"), Carrier::Other);
    }
}
