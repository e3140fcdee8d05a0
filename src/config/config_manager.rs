// ==========================================
// 灌装线产量报表 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、写入、快照
// 存储: config_kv 表 (key-value + scope)
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::shift_config_trait::ShiftConfigReader;
use crate::db::{configure_sqlite_connection, ensure_config_schema, open_sqlite_connection};
use crate::i18n::DEFAULT_LOCALE;
use async_trait::async_trait;
use chrono::NaiveTime;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

const GLOBAL_SCOPE: &str = "global";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例（不存在时自动建表）
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> ConfigResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        ensure_config_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager
    ///
    /// 说明：会对传入连接再次应用统一 PRAGMA 并建表（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> ConfigResult<Self> {
        {
            let guard = lock(&conn)?;
            configure_sqlite_connection(&guard)?;
            ensure_config_schema(&guard)?;
        }

        Ok(Self { conn })
    }

    /// 从 config_kv 表读取配置值（scope_id='global'）
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    pub fn get_config_value(&self, key: &str) -> ConfigResult<Option<String>> {
        let conn = lock(&self.conn)?;

        let value = conn
            .query_row(
                "SELECT value FROM config_kv WHERE scope_id = ?1 AND key = ?2",
                params![GLOBAL_SCOPE, key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    /// 写入配置值（UPSERT）
    pub fn set_config_value(&self, key: &str, value: &str) -> ConfigResult<()> {
        let conn = lock(&self.conn)?;

        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES (?1, ?2, ?3)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?3, updated_at = datetime('now')",
            params![GLOBAL_SCOPE, key, value],
        )?;

        debug!(key = key, value = value, "配置已写入");
        Ok(())
    }

    /// 从 config_kv 表读取配置值，带默认值
    fn get_config_or_default(&self, key: &str, default: &str) -> ConfigResult<String> {
        Ok(self
            .get_config_value(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// 报表语言（告警文本与表头）
    pub fn get_report_locale(&self) -> ConfigResult<String> {
        self.get_config_or_default(config_keys::REPORT_LOCALE, DEFAULT_LOCALE)
    }

    /// 获取所有配置的快照（JSON格式）
    ///
    /// # 用途
    /// - 随报表记录生成时使用的配置
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        let conn = lock(&self.conn)?;

        let mut stmt =
            conn.prepare("SELECT key, value FROM config_kv WHERE scope_id = ?1 ORDER BY key")?;
        let rows = stmt.query_map(params![GLOBAL_SCOPE], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut config_map: BTreeMap<String, String> = BTreeMap::new();
        for row in rows {
            let (key, value) = row?;
            config_map.insert(key, value);
        }

        Ok(serde_json::to_string(&json!(config_map))?)
    }

    /// 从配置快照恢复配置
    ///
    /// # 返回
    /// - Ok(usize): 恢复的配置项数量
    ///
    /// # 注意
    /// - 此方法会覆盖现有的同名 global 配置
    pub fn restore_config_from_snapshot(&self, snapshot_json: &str) -> ConfigResult<usize> {
        let config_map: BTreeMap<String, String> = serde_json::from_str(snapshot_json)?;

        let mut conn = lock(&self.conn)?;
        let tx = conn.transaction()?;

        let mut count = 0;
        for (key, value) in &config_map {
            count += tx.execute(
                "INSERT INTO config_kv (scope_id, key, value) VALUES (?1, ?2, ?3)
                 ON CONFLICT(scope_id, key) DO UPDATE SET value = ?3, updated_at = datetime('now')",
                params![GLOBAL_SCOPE, key, value],
            )?;
        }

        tx.commit()?;
        Ok(count)
    }
}

fn lock(conn: &Arc<Mutex<Connection>>) -> ConfigResult<MutexGuard<'_, Connection>> {
    conn.lock()
        .map_err(|e| ConfigError::LockError(e.to_string()))
}

/// 解析 HH:MM 或 HH:MM:SS
fn parse_time(key: &str, value: &str) -> ConfigResult<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|e| ConfigError::ValueFormat {
            key: key.to_string(),
            value: value.to_string(),
            message: e.to_string(),
        })
}

fn parse_bool(key: &str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(ConfigError::ValueFormat {
            key: key.to_string(),
            value: value.to_string(),
            message: "期望 true/false".to_string(),
        }),
    }
}

// ==========================================
// ShiftConfigReader trait 实现
// ==========================================
#[async_trait]
impl ShiftConfigReader for ConfigManager {
    async fn get_shift_start_time(&self) -> ConfigResult<NaiveTime> {
        let value = self.get_config_or_default(config_keys::SHIFT_START_TIME, "08:00")?;
        parse_time(config_keys::SHIFT_START_TIME, &value)
    }

    async fn get_shift_end_time(&self) -> ConfigResult<NaiveTime> {
        let value = self.get_config_or_default(config_keys::SHIFT_END_TIME, "17:00")?;
        parse_time(config_keys::SHIFT_END_TIME, &value)
    }

    async fn get_treat_saturday_as_non_working(&self) -> ConfigResult<bool> {
        let value =
            self.get_config_or_default(config_keys::TREAT_SATURDAY_AS_NON_WORKING, "false")?;
        parse_bool(config_keys::TREAT_SATURDAY_AS_NON_WORKING, &value)
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 班次
    pub const SHIFT_START_TIME: &str = "shift_start_time";
    pub const SHIFT_END_TIME: &str = "shift_end_time";
    pub const TREAT_SATURDAY_AS_NON_WORKING: &str = "treat_saturday_as_non_working";

    // 报表
    pub const REPORT_LOCALE: &str = "report_locale";
}
