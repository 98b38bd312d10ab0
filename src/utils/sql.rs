use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};

/// LIKE 模式使用的转义字符
pub const LIKE_ESCAPE: char = '\\';

/// 转义 LIKE 通配符，使用户输入按字面匹配
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// 不区分大小写的包含匹配：`LOWER(col) LIKE '%keyword%' ESCAPE '\'`
pub fn icontains<C>(column: C, keyword: &str) -> SimpleExpr
where
    C: sea_orm::sea_query::IntoColumnRef,
{
    let pattern = format!("%{}%", escape_like_pattern(&keyword.to_lowercase()));
    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain() {
        assert_eq!(escape_like_pattern("rust"), "rust");
    }

    #[test]
    fn test_escape_wildcards() {
        assert_eq!(escape_like_pattern("100%"), "100\\%");
        assert_eq!(escape_like_pattern("a_b"), "a\\_b");
        assert_eq!(escape_like_pattern("c:\\x"), "c:\\\\x");
    }
}
