use std::path::PathBuf;

/// 数据库路径环境变量
pub const DB_PATH_ENV: &str = "BOTTLING_OVERTIME_DB_PATH";

/// 获取默认配置数据库路径
///
/// # 返回
/// - 环境变量 `BOTTLING_OVERTIME_DB_PATH`（非空时优先）
/// - 开发环境: 用户数据目录/bottling-overtime-dev/bottling_overtime.db
/// - 生产环境: 用户数据目录/bottling-overtime/bottling_overtime.db
/// - 取不到用户数据目录时: ./bottling_overtime.db
pub fn get_default_db_path() -> String {
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./bottling_overtime.db");

    if let Some(data_dir) = dirs::data_dir() {
        #[cfg(debug_assertions)]
        let dir = data_dir.join("bottling-overtime-dev");

        #[cfg(not(debug_assertions))]
        let dir = data_dir.join("bottling-overtime");

        // best-effort: 建目录失败时回退到当前目录
        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("bottling_overtime.db");
        }
    }

    path.to_string_lossy().to_string()
}
