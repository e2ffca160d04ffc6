use crate::error::Result;
use crate::models::{Carrier, Summary};
use std::io::Write;

/// 汇总结果导出为格式化 JSON
pub fn export_json(summary: &Summary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// 导出为 `metric,value` 两列 CSV
pub fn write_csv<W: Write>(summary: &Summary, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["metric", "value"])?;

    for carrier in Carrier::ALL {
        writer.write_record([
            format!("carrier.{}", carrier),
            summary.carriers.get(carrier).to_string(),
        ])?;
    }
    writer.write_record(["totalScans".to_string(), summary.total_scans.to_string()])?;
    writer.write_record([
        "uniqueTracking".to_string(),
        summary.unique_tracking.len().to_string(),
    ])?;
    writer.write_record(["totalParts".to_string(), summary.total_parts.to_string()])?;
    writer.write_record([
        "multiPartBoxes".to_string(),
        summary.multi_part_boxes.to_string(),
    ])?;

    writer.flush()?;
    Ok(())
}

/// 纯文本报表
pub fn render_text<W: Write>(summary: &Summary, out: &mut W) -> Result<()> {
    writeln!(out, "Returns summary")?;
    writeln!(out, "===============")?;
    writeln!(out, "Carriers:")?;
    for carrier in Carrier::ALL {
        writeln!(out, "  {:<6} {:>6}", carrier.as_str(), summary.carriers.get(carrier))?;
    }
    writeln!(out, "Total scans:       {}", summary.total_scans)?;
    writeln!(out, "Unique tracking:   {}", summary.unique_tracking.len())?;
    writeln!(out, "Total parts:       {}", summary.total_parts)?;
    writeln!(out, "Multi-part boxes:  {}", summary.multi_part_boxes)?;
    Ok(())
}
