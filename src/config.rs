// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use rusqlite::{Connection, OptionalExtension, params};

pub const KEYS: &[&str] = &[
    "backend",
    "rest_url",
    "rest_key",
    "webhook_url",
    "goal_mode",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Rest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalMode {
    Local,
    Remote,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: Backend,
    pub rest_url: Option<String>,
    pub rest_key: Option<String>,
    pub webhook_url: Option<String>,
    pub goal_mode: GoalMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            backend: Backend::Sqlite,
            rest_url: None,
            rest_key: None,
            webhook_url: None,
            goal_mode: GoalMode::Local,
        }
    }
}

fn env_key(key: &str) -> String {
    format!("FINBOARD_{}", key.to_uppercase())
}

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key=?1",
            params![key],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    if !KEYS.contains(&key) {
        return Err(anyhow!(
            "Unknown setting '{}' (expected one of: {})",
            key,
            KEYS.join(", ")
        ));
    }
    // reject values that would fail to load later
    match key {
        "backend" => {
            parse_backend(value)?;
        }
        "goal_mode" => {
            parse_goal_mode(value)?;
        }
        _ => {}
    }
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value.trim()],
    )?;
    Ok(())
}

fn parse_backend(s: &str) -> Result<Backend> {
    match s.trim().to_lowercase().as_str() {
        "sqlite" => Ok(Backend::Sqlite),
        "rest" => Ok(Backend::Rest),
        other => Err(anyhow!("Invalid backend '{}' (use sqlite|rest)", other)),
    }
}

fn parse_goal_mode(s: &str) -> Result<GoalMode> {
    match s.trim().to_lowercase().as_str() {
        "local" => Ok(GoalMode::Local),
        "remote" => Ok(GoalMode::Remote),
        other => Err(anyhow!("Invalid goal mode '{}' (use local|remote)", other)),
    }
}

/// Environment first, then the settings table.
fn lookup(conn: &Connection, key: &str) -> Result<Option<String>> {
    if let Ok(v) = std::env::var(env_key(key)) {
        if !v.trim().is_empty() {
            return Ok(Some(v.trim().to_string()));
        }
    }
    Ok(get_setting(conn, key)?.filter(|v| !v.is_empty()))
}

impl Config {
    pub fn load(conn: &Connection) -> Result<Config> {
        let mut cfg = Config::default();
        if let Some(v) = lookup(conn, "backend")? {
            cfg.backend = parse_backend(&v)?;
        }
        if let Some(v) = lookup(conn, "goal_mode")? {
            cfg.goal_mode = parse_goal_mode(&v)?;
        }
        cfg.rest_url = lookup(conn, "rest_url")?;
        cfg.rest_key = lookup(conn, "rest_key")?;
        cfg.webhook_url = lookup(conn, "webhook_url")?;
        Ok(cfg)
    }
}
