//! # Editor Test Runner Library / 编辑器测试运行器库
//!
//! This library provides the core functionality for the Editor Test Runner tool,
//! which downloads a Unity editor build and runs its automated tests in batch
//! mode, one target platform after another.
//!
//! 此库为编辑器测试运行器工具提供核心功能，
//! 它下载 Unity 编辑器构建，并按目标平台依次以批处理模式运行其自动化测试。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, settings, component selection and the platform loop
//! - `infra` - Process execution and file system layout
//! - `reporting` - Console and JSON run summaries
//! - `cli` - Command-line interface
//! - `commands` - Top-level command entry points
//!
//! - `core` - 数据模型、配置、组件选择和平台循环
//! - `infra` - 进程执行和文件系统布局
//! - `reporting` - 控制台和 JSON 运行摘要
//! - `cli` - 命令行接口
//! - `commands` - 顶层命令入口

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::config;
pub use core::error::RunnerError;
pub use core::models;

/// Picks the UI language from an explicit request or the system locale.
///
/// It attempts to match the full locale (e.g., "zh-CN"), then just the
/// language code (e.g., "zh"), and finally falls back to "en".
pub fn resolve_locale(requested: Option<&str>) -> String {
    let locale = requested
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&locale.as_str()) {
        return locale;
    }
    let lang = locale.split('-').next().unwrap_or("en");
    available_locales
        .iter()
        .find(|available| **available == lang || available.split('-').next() == Some(lang))
        .map(|available| available.to_string())
        .unwrap_or_else(|| "en".to_string())
}

/// Sets the process-wide UI language.
pub fn init(requested: Option<&str>) -> String {
    let lang = resolve_locale(requested);
    rust_i18n::set_locale(&lang);
    lang
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
