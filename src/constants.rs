/// 队列全部完成后的状态栏文案
pub const WELL_DONE: &str = "Well done!";

/// 默认词汇文件路径
pub const DEFAULT_WORD_FILE: &str = "./words.json";

/// 默认 sled 数据目录
pub const DEFAULT_SLED_PATH: &str = "./data/vocab-drill.sled";

/// REPL 输入提示符
pub const PROMPT: &str = "> ";
