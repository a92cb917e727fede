pub const KEYWORDS: &[&str] = &["null", "true", "false"];

pub const DEFAULT_INDENT: usize = 2;

pub const MAX_DEPTH: usize = 256;

#[inline]
pub fn is_keyword(s: &str) -> bool {
    KEYWORDS.contains(&s)
}
