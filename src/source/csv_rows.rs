use crate::error::Result;
use crate::models::Row;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 表头中各字段所在列
struct ColumnIndex {
    tracking: Option<usize>,
    classification: Option<usize>,
    part_number: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        Self {
            tracking: find("tracking"),
            classification: find("classification"),
            part_number: find("part_number"),
        }
    }

    fn cell(record: &StringRecord, idx: Option<usize>) -> String {
        idx.and_then(|i| record.get(i)).unwrap_or_default().to_string()
    }

    fn to_row(&self, record: &StringRecord) -> Row {
        Row {
            tracking: Self::cell(record, self.tracking),
            classification: Self::cell(record, self.classification),
            part_number: Self::cell(record, self.part_number),
        }
    }
}

/// 解析导出的 CSV: 首行为表头, 空行跳过, 多余列忽略, 缺失单元格为空串
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Row>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnIndex::from_headers(reader.headers()?);
    if columns.tracking.is_none() {
        tracing::warn!("CSV 表头缺少 tracking 列, 所有运单号按空串处理");
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        // 只有空白单元格的行视为空行
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(columns.to_row(&record));
    }

    tracing::info!("CSV 解析完成, {} 行", rows.len());
    Ok(rows)
}

pub fn read_rows_from_path(path: &Path) -> Result<Vec<Row>> {
    let file = File::open(path)?;
    read_rows(file)
}
