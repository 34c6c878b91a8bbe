//! 篇目名称规范化
//!
//! 去掉书名号与括号注释，再把少数历史别名映射为统一名称。

/// 已知别名 → 统一名称
static TITLE_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "庄子两则" => "逍遥游",
    "子路、曾晳、冉有、公西华侍坐" => "子路、曾晳、冉有、公西华侍坐",
    "论语十二章" => "论语",
};

/// 规范化篇目名称
///
/// 1. 删除所有 `《` `》`
/// 2. 截断到第一个全角括号 `（` 之前
/// 3. 截断到第一个半角括号 `(` 之前
/// 4. 去掉首尾空白
/// 5. 命中别名表时返回统一名称
///
/// 结果满足幂等性：`normalize_title(&normalize_title(t)) == normalize_title(t)`。
pub fn normalize_title(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !matches!(c, '《' | '》')).collect();

    let title = truncate_at(&stripped, '（');
    let title = truncate_at(title, '(');
    let title = title.trim();

    TITLE_ALIASES.get(title).copied().unwrap_or(title).to_string()
}

fn truncate_at(text: &str, marker: char) -> &str {
    match text.find(marker) {
        Some(pos) => &text[..pos],
        None => text,
    }
}
