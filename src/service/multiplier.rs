use regex::Regex;
use std::sync::OnceLock;

/// 单行料号倍数上限
pub const MAX_MULTIPLIER: u64 = 50;

fn prefix_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)x(\d+)").expect("regex is valid"))
}

fn suffix_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d+)x").expect("regex is valid"))
}

/// 解析料号中的数量标记 (`x3` / `3x`), 上限 50, 无标记返回 1
/// 显式的零标记 (`x0`, `00x`) 按 0 件计, 不回退为 1
pub fn parse_multiplier(part_number: &str) -> u64 {
    let digits = prefix_pattern()
        .captures(part_number)
        .or_else(|| suffix_pattern().captures(part_number))
        .and_then(|caps| caps.get(1));

    match digits {
        // 全是数字, 解析失败只可能是溢出, 直接封顶
        Some(m) => m.as_str().parse::<u64>().map_or(MAX_MULTIPLIER, |n| n.min(MAX_MULTIPLIER)),
        None => 1,
    }
}
