use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct Homework {
    // 唯一 ID
    pub id: i64,
    // 所属分类 ID
    pub category_id: i64,
    // 作业标题
    pub title: String,
    // 作业描述
    pub description: Option<String>,
    // 作业截止时间
    pub deadline: chrono::DateTime<chrono::Utc>,
}

// 题目类型
//
// 只有单选与多选参与判分，其他类型原样保存、判分时计 0 分。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionType {
    Single,
    Multi,
    Other(String),
}

impl QuestionType {
    pub const SINGLE: &'static str = "single";
    pub const MULTI: &'static str = "multi";

    pub fn as_str(&self) -> &str {
        match self {
            QuestionType::Single => QuestionType::SINGLE,
            QuestionType::Multi => QuestionType::MULTI,
            QuestionType::Other(s) => s,
        }
    }
}

impl From<&str> for QuestionType {
    fn from(s: &str) -> Self {
        match s {
            QuestionType::SINGLE => QuestionType::Single,
            QuestionType::MULTI => QuestionType::Multi,
            other => QuestionType::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for QuestionType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for QuestionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(QuestionType::from(s.as_str()))
    }
}

// 题目选项，存储格式为 [{"text": "...", "isCorrect": true}]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct QuestionOption {
    pub text: String,
    #[serde(rename = "isCorrect", default)]
    pub is_correct: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct Question {
    pub id: i64,
    pub homework_id: i64,
    #[serde(rename = "type")]
    #[ts(type = "string")]
    pub question_type: QuestionType,
    pub content: String,
    pub options: Vec<QuestionOption>,
    pub score: i32,
}

impl Question {
    /// 标记为正确的选项文本
    pub fn correct_texts(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .filter(|o| o.is_correct)
            .map(|o| o.text.as_str())
    }
}

// 成绩记录，每次提交追加一条
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct Score {
    pub id: i64,
    pub homework_id: i64,
    pub user_id: i64,
    pub score: i64,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_type_roundtrip_keeps_unknown() {
        let t: QuestionType = serde_json::from_str("\"essay\"").unwrap();
        assert_eq!(t, QuestionType::Other("essay".to_string()));
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"essay\"");
        assert_eq!(QuestionType::from("multi"), QuestionType::Multi);
    }

    #[test]
    fn test_option_wire_format() {
        let a: QuestionOption = serde_json::from_str(r#"{"text":"A","isCorrect":true}"#).unwrap();
        assert!(a.is_correct);
        let b: QuestionOption = serde_json::from_str(r#"{"text":"B"}"#).unwrap();
        assert!(!b.is_correct);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            r#"{"text":"A","isCorrect":true}"#
        );
    }
}
