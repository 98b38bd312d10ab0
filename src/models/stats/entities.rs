/// 课程进度统计的输入行：某学员在某课程视频上的播放进度
#[derive(Debug, Clone, PartialEq)]
pub struct CourseProgressRecord {
    pub user_id: i64,
    pub username: String,
    pub video_id: i64,
    pub progress: i32,
}
