/// 进度表整体序列化后存放的固定键。全量覆盖写，没有增量键。
pub const PROGRESS_STATE: &str = "progress";
