use crate::models::{Row, Summary};
use crate::service::{classify_carrier, parse_multiplier};
use indexmap::IndexMap;

const RETURN_LABEL: &str = "return label";
const PACKING_SLIP: &str = "packing slip";

/// 是否为运单级扫描 (退货面单 / 装箱单)
pub fn is_scan_row(classification: &str) -> bool {
    let normalized = classification.trim().to_lowercase();
    normalized == RETURN_LABEL || normalized == PACKING_SLIP
}

/// 汇总一批扫描行
/// 纯函数: 不持有状态, 相同输入得到相同结果
pub fn aggregate<'a, I>(rows: I) -> Summary
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut summary = Summary::default();
    // 运单号 -> 累计料号数量 (只用于多件箱判定)
    let mut parts_by_tracking: IndexMap<String, u64> = IndexMap::new();
    let mut row_count = 0usize;

    for row in rows {
        row_count += 1;
        let tracking = row.tracking.trim();

        if is_scan_row(&row.classification) {
            summary.total_scans += 1;
            summary.unique_tracking.insert(tracking.to_string());
            summary.carriers.increment(classify_carrier(tracking));
        } else {
            let qty = parse_multiplier(&row.part_number);
            summary.total_parts += qty;
            *parts_by_tracking.entry(tracking.to_string()).or_insert(0) += qty;
        }
    }

    summary.multi_part_boxes = parts_by_tracking.values().filter(|&&qty| qty > 1).count() as u64;

    tracing::debug!(
        "汇总完成: {} 行, 扫描 {}, 运单 {}, 料号 {}, 多件箱 {}",
        row_count,
        summary.total_scans,
        summary.unique_tracking.len(),
        summary.total_parts,
        summary.multi_part_boxes
    );

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Carrier;

    fn assert_carriers_match_scans(summary: &Summary) {
        assert_eq!(summary.carriers.total(), summary.total_scans);
    }

    #[test]
    fn test_single_fedex_label() {
        let rows = vec![Row::new("961234567890", "Return Label", "")];
        let summary = aggregate(&rows);
        assert_eq!(summary.carriers.get(Carrier::FedEx), 1);
        assert_eq!(summary.total_scans, 1);
        assert_eq!(summary.unique_tracking.len(), 1);
        assert_eq!(summary.total_parts, 0);
        assert_eq!(summary.multi_part_boxes, 0);
        assert_carriers_match_scans(&summary);
    }

    #[test]
    fn test_parts_sum_into_one_multi_part_box() {
        let rows = vec![
            Row::new("ABC", "Part", "PN-x3"),
            Row::new("ABC", "Part", "PN-x2"),
        ];
        let summary = aggregate(&rows);
        assert_eq!(summary.total_parts, 5);
        assert_eq!(summary.multi_part_boxes, 1);
        assert_eq!(summary.total_scans, 0);
        assert_carriers_match_scans(&summary);
    }

    #[test]
    fn test_lowercase_packing_slip_is_ups() {
        let rows = vec![Row::new("1Z999", "packing slip", "")];
        let summary = aggregate(&rows);
        assert_eq!(summary.carriers.get(Carrier::Ups), 1);
        assert_eq!(summary.total_scans, 1);
    }

    #[test]
    fn test_duplicate_tracking_collapses() {
        let rows = vec![
            Row::new("1Z1", "Return Label", ""),
            Row::new(" 1Z1 ", "PACKING SLIP", ""),
            Row::new("XYZ", "return label", ""),
        ];
        let summary = aggregate(&rows);
        assert_eq!(summary.total_scans, 3);
        assert_eq!(summary.unique_tracking.len(), 2);
        assert_eq!(summary.carriers.get(Carrier::Ups), 2);
        assert_eq!(summary.carriers.get(Carrier::Other), 1);
        assert_carriers_match_scans(&summary);
    }

    #[test]
    fn test_single_unit_boxes_are_not_multi_part() {
        let rows = vec![
            Row::new("A", "Part", "PN-1"),
            Row::new("B", "Part", "PN-2"),
            Row::new("C", "part", "x1"),
        ];
        let summary = aggregate(&rows);
        assert_eq!(summary.total_parts, 3);
        assert_eq!(summary.multi_part_boxes, 0);
    }

    #[test]
    fn test_separate_part_lines_make_multi_part_box() {
        let rows = vec![Row::new("A", "Part", "PN-1"), Row::new(" A", "Part", "PN-2")];
        let summary = aggregate(&rows);
        assert_eq!(summary.multi_part_boxes, 1);
    }

    #[test]
    fn test_empty_fields_flow_through_rules() {
        let rows = vec![Row::default(), Row::new("", "Return Label", "")];
        let summary = aggregate(&rows);
        // 空分类 -> 料号行, 数量 1
        assert_eq!(summary.total_parts, 1);
        assert_eq!(summary.multi_part_boxes, 0);
        assert_eq!(summary.total_scans, 1);
        assert!(summary.unique_tracking.contains(""));
        assert_eq!(summary.carriers.get(Carrier::Other), 1);
    }

    #[test]
    fn test_empty_input() {
        let summary = aggregate(&Vec::<Row>::new());
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let rows = vec![
            Row::new("961234567890", "Return Label", ""),
            Row::new("4201234567890123456789", "Packing Slip", ""),
            Row::new("961234567890", "Part", "3x widget"),
            Row::new("Q", "Part", "x999"),
        ];
        let first = aggregate(&rows);
        let second = aggregate(&rows);
        assert_eq!(first, second);
        assert_eq!(first.total_parts, 53);
        assert_eq!(first.multi_part_boxes, 2);
        assert_carriers_match_scans(&first);
    }

    #[test]
    fn test_is_scan_row() {
        assert!(is_scan_row("Return Label"));
        assert!(is_scan_row(" packing slip "));
        assert!(!is_scan_row("Part"));
        assert!(!is_scan_row("return-label"));
        assert!(!is_scan_row(""));
    }
}
