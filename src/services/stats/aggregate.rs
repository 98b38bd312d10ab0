//! 课程学习进度统计
//!
//! 每个视频满分 100，学员完成度 = 进度总和 / (视频数 × 100) × 100。
//! 没有任何播放记录的学员不参与统计。

use std::collections::HashMap;

use crate::models::{
    collections::responses::VideoStatsResponse,
    playback::entities::PlaybackStat,
    stats::{
        entities::CourseProgressRecord,
        responses::{CourseProgressStats, LearnerProgress, PieSlice},
    },
};

/// 排行榜长度
pub const RANKING_SIZE: usize = 10;
/// 饼图分界线（百分比）
pub const COMPLETION_THRESHOLD: f64 = 80.0;

pub const PIE_HIGH_LABEL: &str = "≥80%";
pub const PIE_LOW_LABEL: &str = "<80%";

pub fn aggregate(video_count: i64, records: &[CourseProgressRecord]) -> CourseProgressStats {
    if video_count <= 0 {
        return CourseProgressStats {
            top_10: Vec::new(),
            bottom_10: Vec::new(),
            pie_data: pie_data(0, 0),
        };
    }

    let denominator = (video_count * 100) as f64;

    let mut per_user: HashMap<i64, (&str, i64)> = HashMap::new();
    for record in records {
        let entry = per_user
            .entry(record.user_id)
            .or_insert((record.username.as_str(), 0));
        entry.1 += i64::from(record.progress);
    }

    let mut ranked: Vec<LearnerProgress> = per_user
        .into_iter()
        .map(|(user_id, (username, sum))| LearnerProgress {
            user_id,
            username: username.to_string(),
            progress: sum as f64 / denominator * 100.0,
        })
        .collect();

    // 进度降序，同分按用户名、ID 升序
    ranked.sort_by(|a, b| {
        b.progress
            .total_cmp(&a.progress)
            .then_with(|| a.username.cmp(&b.username))
            .then_with(|| a.user_id.cmp(&b.user_id))
    });

    let high = ranked
        .iter()
        .filter(|p| p.progress >= COMPLETION_THRESHOLD)
        .count() as i64;
    let total = ranked.len() as i64;

    let top_10 = ranked.iter().take(RANKING_SIZE).cloned().collect();
    // 反转整个列表后取前 10，人数不足 10 时与 top_10 重叠
    let bottom_10 = ranked.iter().rev().take(RANKING_SIZE).cloned().collect();

    CourseProgressStats {
        top_10,
        bottom_10,
        pie_data: pie_data(high, total - high),
    }
}

fn pie_data(high: i64, low: i64) -> Vec<PieSlice> {
    vec![
        PieSlice {
            value: high,
            name: PIE_HIGH_LABEL.to_string(),
        },
        PieSlice {
            value: low,
            name: PIE_LOW_LABEL.to_string(),
        },
    ]
}

/// 用户在某课程内的视频完成情况
pub fn video_stats(total_videos: i64, playback: &[PlaybackStat]) -> VideoStatsResponse {
    let completed = playback.iter().filter(|p| p.progress >= 100).count() as i64;
    let in_progress = playback
        .iter()
        .filter(|p| p.progress > 0 && p.progress < 100)
        .count() as i64;

    VideoStatsResponse {
        total: total_videos,
        completed,
        in_progress,
        not_started: (total_videos - completed - in_progress).max(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(user_id: i64, username: &str, video_id: i64, progress: i32) -> CourseProgressRecord {
        CourseProgressRecord {
            user_id,
            username: username.to_string(),
            video_id,
            progress,
        }
    }

    fn playback(video_id: i64, progress: i32) -> PlaybackStat {
        PlaybackStat {
            id: video_id,
            video_id,
            user_id: 1,
            progress,
            duration: 0,
            last_played_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_two_video_example() {
        let records = vec![
            record(1, "x", 10, 100),
            record(1, "x", 11, 50),
            record(2, "y", 10, 0),
            record(2, "y", 11, 0),
        ];
        let stats = aggregate(2, &records);

        assert_eq!(stats.top_10.len(), 2);
        assert_eq!(stats.top_10[0].username, "x");
        assert!((stats.top_10[0].progress - 75.0).abs() < f64::EPSILON);
        assert_eq!(stats.top_10[1].username, "y");
        assert_eq!(stats.top_10[1].progress, 0.0);
    }

    #[test]
    fn test_users_without_rows_are_absent() {
        let records = vec![record(1, "x", 10, 100), record(1, "x", 11, 50)];
        let stats = aggregate(2, &records);
        assert_eq!(stats.top_10.len(), 1);
        assert!(stats.top_10.iter().all(|p| p.user_id == 1));
    }

    #[test]
    fn test_small_course_lists_overlap() {
        let records: Vec<_> = (1..=4)
            .map(|i| record(i, &format!("user{i}"), 1, (i * 20) as i32))
            .collect();
        let stats = aggregate(1, &records);

        assert_eq!(stats.top_10.len(), 4);
        assert_eq!(stats.bottom_10.len(), 4);
        assert_eq!(stats.top_10[0].user_id, 4);
        assert_eq!(stats.bottom_10[0].user_id, 1);

        let mut top: Vec<_> = stats.top_10.iter().map(|p| p.user_id).collect();
        let mut bottom: Vec<_> = stats.bottom_10.iter().map(|p| p.user_id).collect();
        top.sort();
        bottom.sort();
        assert_eq!(top, bottom);
    }

    #[test]
    fn test_large_course_rankings() {
        let records: Vec<_> = (1..=25)
            .map(|i| record(i, &format!("user{i:02}"), 1, (i * 4) as i32))
            .collect();
        let stats = aggregate(1, &records);

        assert_eq!(stats.top_10.len(), RANKING_SIZE);
        assert_eq!(stats.bottom_10.len(), RANKING_SIZE);
        assert_eq!(stats.top_10[0].user_id, 25);
        assert_eq!(stats.top_10[9].user_id, 16);
        assert_eq!(stats.bottom_10[0].user_id, 1);
        assert_eq!(stats.bottom_10[9].user_id, 10);
    }

    #[test]
    fn test_pie_sums_to_total_users() {
        let records: Vec<_> = (1..=7)
            .map(|i| record(i, &format!("u{i}"), 1, (i * 15) as i32))
            .collect();
        let stats = aggregate(1, &records);

        assert_eq!(stats.pie_data.len(), 2);
        assert_eq!(stats.pie_data[0].name, PIE_HIGH_LABEL);
        assert_eq!(stats.pie_data[1].name, PIE_LOW_LABEL);
        // 90 和 105 达到 80%
        assert_eq!(stats.pie_data[0].value, 2);
        assert_eq!(stats.pie_data[0].value + stats.pie_data[1].value, 7);
    }

    #[test]
    fn test_exact_threshold_counts_as_high() {
        let stats = aggregate(1, &[record(1, "a", 1, 80)]);
        assert_eq!(stats.pie_data[0].value, 1);
        assert_eq!(stats.pie_data[1].value, 0);
    }

    #[test]
    fn test_empty_course() {
        let stats = aggregate(0, &[record(1, "a", 1, 50)]);
        assert!(stats.top_10.is_empty());
        assert!(stats.bottom_10.is_empty());
        assert_eq!(stats.pie_data[0].value, 0);
        assert_eq!(stats.pie_data[1].value, 0);

        let no_rows = aggregate(3, &[]);
        assert!(no_rows.top_10.is_empty());
        assert_eq!(no_rows.pie_data[0].value + no_rows.pie_data[1].value, 0);
    }

    #[test]
    fn test_ties_break_by_username() {
        let records = vec![
            record(3, "carol", 1, 50),
            record(1, "alice", 1, 50),
            record(2, "bob", 1, 50),
        ];
        let stats = aggregate(1, &records);
        let names: Vec<_> = stats.top_10.iter().map(|p| p.username.as_str()).collect();
        assert_eq!(names, ["alice", "bob", "carol"]);
    }

    #[test]
    fn test_video_stats_buckets() {
        let rows = vec![playback(1, 100), playback(2, 40), playback(3, 0)];
        let stats = video_stats(5, &rows);
        assert_eq!(
            stats,
            VideoStatsResponse {
                total: 5,
                completed: 1,
                in_progress: 1,
                not_started: 3,
            }
        );
        assert_eq!(video_stats(0, &[]).not_started, 0);
    }
}
