use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 承运商
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Carrier {
    FedEx,
    #[serde(rename = "UPS")]
    Ups,
    #[serde(rename = "USPS")]
    Usps,
    Other,
}

impl Carrier {
    pub const ALL: [Carrier; 4] = [Carrier::FedEx, Carrier::Ups, Carrier::Usps, Carrier::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Carrier::FedEx => "FedEx",
            Carrier::Ups => "UPS",
            Carrier::Usps => "USPS",
            Carrier::Other => "Other",
        }
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 各承运商计数, 四个键始终存在
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierCounts {
    #[serde(rename = "FedEx")]
    pub fedex: u64,
    #[serde(rename = "UPS")]
    pub ups: u64,
    #[serde(rename = "USPS")]
    pub usps: u64,
    #[serde(rename = "Other")]
    pub other: u64,
}

impl CarrierCounts {
    pub fn get(&self, carrier: Carrier) -> u64 {
        match carrier {
            Carrier::FedEx => self.fedex,
            Carrier::Ups => self.ups,
            Carrier::Usps => self.usps,
            Carrier::Other => self.other,
        }
    }

    pub fn increment(&mut self, carrier: Carrier) {
        let slot = match carrier {
            Carrier::FedEx => &mut self.fedex,
            Carrier::Ups => &mut self.ups,
            Carrier::Usps => &mut self.usps,
            Carrier::Other => &mut self.other,
        };
        *slot += 1;
    }

    pub fn total(&self) -> u64 {
        self.fedex + self.ups + self.usps + self.other
    }
}

/// 一次处理 (一次 CSV 上传或一次接口拉取) 的汇总结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub carriers: CarrierCounts,
    pub total_scans: u64,
    pub unique_tracking: IndexSet<String>,
    pub total_parts: u64,
    pub multi_part_boxes: u64,
}
