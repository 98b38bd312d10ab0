//! 作业判分
//!
//! 单选：提交的文本属于正确选项集合即得满分；
//! 多选：提交集合与正确集合完全相同才得满分，没有部分得分；
//! 其他题型一律 0 分。任一题目 ID 不属于该作业或重复作答时整次判分失败。

use std::collections::{HashMap, HashSet};

use crate::errors::{Result, VideoOneError};
use crate::models::homeworks::{
    entities::{Question, QuestionType},
    requests::{AnswerValue, SubmittedAnswer},
};

/// 计算一次提交的总分
pub fn grade(questions: &[Question], answers: &[SubmittedAnswer]) -> Result<i64> {
    let by_id: HashMap<i64, &Question> = questions.iter().map(|q| (q.id, q)).collect();

    let mut answered = HashSet::with_capacity(answers.len());
    let mut total = 0i64;
    for answer in answers {
        let question = by_id.get(&answer.question_id).ok_or_else(|| {
            VideoOneError::not_found(format!("Question {} not found", answer.question_id))
        })?;
        if !answered.insert(answer.question_id) {
            return Err(VideoOneError::invalid_input(format!(
                "Question {} answered more than once",
                answer.question_id
            )));
        }

        if let Some(value) = &answer.answer
            && is_correct(question, value)
        {
            total += i64::from(question.score);
        }
    }

    Ok(total)
}

fn is_correct(question: &Question, answer: &AnswerValue) -> bool {
    match (&question.question_type, answer) {
        (QuestionType::Single, AnswerValue::Single(text)) => {
            question.correct_texts().any(|c| c == text.as_str())
        }
        // 列表答案不能匹配单选题
        (QuestionType::Single, AnswerValue::Multi(_)) => false,
        (QuestionType::Multi, submitted) => {
            let correct: HashSet<&str> = question.correct_texts().collect();
            let submitted: HashSet<&str> = match submitted {
                AnswerValue::Single(text) => HashSet::from([text.as_str()]),
                AnswerValue::Multi(texts) => texts.iter().map(String::as_str).collect(),
            };
            submitted == correct
        }
        (QuestionType::Other(_), _) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::homeworks::entities::QuestionOption;

    fn option(text: &str, is_correct: bool) -> QuestionOption {
        QuestionOption {
            text: text.to_string(),
            is_correct,
        }
    }

    fn question(id: i64, question_type: QuestionType, correct: &[&str], score: i32) -> Question {
        let options = ["A", "B", "C", "D"]
            .iter()
            .map(|t| option(t, correct.contains(t)))
            .collect();
        Question {
            id,
            homework_id: 1,
            question_type,
            content: format!("Question {id}"),
            options,
            score,
        }
    }

    fn single(question_id: i64, text: &str) -> SubmittedAnswer {
        SubmittedAnswer {
            question_id,
            answer: Some(AnswerValue::Single(text.to_string())),
        }
    }

    fn multi(question_id: i64, texts: &[&str]) -> SubmittedAnswer {
        SubmittedAnswer {
            question_id,
            answer: Some(AnswerValue::Multi(
                texts.iter().map(|t| t.to_string()).collect(),
            )),
        }
    }

    fn sample_homework() -> Vec<Question> {
        vec![
            question(1, QuestionType::Single, &["B"], 10),
            question(2, QuestionType::Multi, &["A", "C"], 5),
        ]
    }

    #[test]
    fn test_all_correct_scores_full() {
        let answers = vec![single(1, "B"), multi(2, &["A", "C"])];
        assert_eq!(grade(&sample_homework(), &answers).unwrap(), 15);
    }

    #[test]
    fn test_repeated_question_is_rejected() {
        let answers = vec![single(1, "B"), single(1, "B"), single(1, "B")];
        let err = grade(&sample_homework(), &answers).unwrap_err();
        assert!(matches!(err, VideoOneError::InvalidInput(_)));
        assert!(err.message().contains("Question 1"));
    }

    #[test]
    fn test_all_wrong_scores_zero() {
        let answers = vec![single(1, "A"), multi(2, &["A"])];
        assert_eq!(grade(&sample_homework(), &answers).unwrap(), 0);
    }

    #[test]
    fn test_multi_requires_exact_set() {
        let questions = sample_homework();
        assert_eq!(grade(&questions, &[multi(2, &["C", "A"])]).unwrap(), 5);
        assert_eq!(grade(&questions, &[multi(2, &["A"])]).unwrap(), 0);
        assert_eq!(grade(&questions, &[multi(2, &["A", "B", "C"])]).unwrap(), 0);
        assert_eq!(grade(&questions, &[multi(2, &["B", "D"])]).unwrap(), 0);
        assert_eq!(grade(&questions, &[multi(2, &[])]).unwrap(), 0);
    }

    #[test]
    fn test_answer_order_does_not_matter() {
        let questions = sample_homework();
        let forward = vec![single(1, "B"), multi(2, &["A", "C"])];
        let backward = vec![multi(2, &["A", "C"]), single(1, "B")];
        assert_eq!(
            grade(&questions, &forward).unwrap(),
            grade(&questions, &backward).unwrap()
        );
    }

    #[test]
    fn test_unknown_question_fails_whole_submission() {
        let answers = vec![single(1, "B"), single(99, "A")];
        let err = grade(&sample_homework(), &answers).unwrap_err();
        assert_eq!(err.code(), "E008");
        assert!(err.message().contains("99"));
    }

    #[test]
    fn test_unanswered_questions_contribute_zero() {
        let answers = vec![single(1, "B")];
        assert_eq!(grade(&sample_homework(), &answers).unwrap(), 10);

        let blank = vec![SubmittedAnswer {
            question_id: 2,
            answer: None,
        }];
        assert_eq!(grade(&sample_homework(), &blank).unwrap(), 0);
        assert_eq!(grade(&sample_homework(), &[]).unwrap(), 0);
    }

    #[test]
    fn test_answer_shape_mismatch() {
        let questions = sample_homework();
        // 单选题收到列表
        assert_eq!(grade(&questions, &[multi(1, &["B"])]).unwrap(), 0);
        // 多选题收到单个文本，按单元素集合比较
        let one = vec![question(3, QuestionType::Multi, &["D"], 4)];
        assert_eq!(grade(&one, &[single(3, "D")]).unwrap(), 4);
        assert_eq!(grade(&questions, &[single(2, "A")]).unwrap(), 0);
    }

    #[test]
    fn test_other_question_types_score_zero() {
        let questions = vec![question(5, QuestionType::Other("essay".into()), &["A"], 20)];
        assert_eq!(grade(&questions, &[single(5, "A")]).unwrap(), 0);
    }

    #[test]
    fn test_single_with_several_correct_options() {
        let questions = vec![question(6, QuestionType::Single, &["A", "D"], 3)];
        assert_eq!(grade(&questions, &[single(6, "D")]).unwrap(), 3);
        assert_eq!(grade(&questions, &[single(6, "B")]).unwrap(), 0);
    }
}
