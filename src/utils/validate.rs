use once_cell::sync::Lazy;
use regex::Regex;

// 分:秒，分钟位数不限
static DURATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,4}):([0-5]\d)$").expect("Invalid duration regex"));

pub const DEFAULT_DURATION: &str = "00:00";

/// 校验视频时长格式 `MM:SS`
pub fn validate_duration(duration: &str) -> Result<(), &'static str> {
    if !DURATION_RE.is_match(duration) {
        return Err("Duration must be in MM:SS format");
    }
    Ok(())
}

/// `MM:SS` 转为秒数，格式不对时为 0
pub fn duration_to_seconds(duration: &str) -> i64 {
    DURATION_RE
        .captures(duration)
        .and_then(|caps| {
            let minutes = caps.get(1)?.as_str().parse::<i64>().ok()?;
            let seconds = caps.get(2)?.as_str().parse::<i64>().ok()?;
            Some(minutes * 60 + seconds)
        })
        .unwrap_or(0)
}

/// 名称/标题校验：非空且不超过上限
pub fn validate_title(title: &str, max_chars: usize) -> Result<(), String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err("Title must not be empty".to_string());
    }
    if trimmed.chars().count() > max_chars {
        return Err(format!("Title must be at most {max_chars} characters"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_duration() {
        assert!(validate_duration("00:00").is_ok());
        assert!(validate_duration("12:59").is_ok());
        assert!(validate_duration("125:07").is_ok());
    }

    #[test]
    fn test_invalid_duration() {
        assert!(validate_duration("12:60").is_err());
        assert!(validate_duration("1:2").is_err());
        assert!(validate_duration("abc").is_err());
        assert!(validate_duration("").is_err());
    }

    #[test]
    fn test_duration_to_seconds() {
        assert_eq!(duration_to_seconds("02:30"), 150);
        assert_eq!(duration_to_seconds("00:00"), 0);
        assert_eq!(duration_to_seconds("broken"), 0);
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Rust 入门", 100).is_ok());
        assert!(validate_title("   ", 100).is_err());
        assert!(validate_title(&"x".repeat(101), 100).is_err());
    }
}
