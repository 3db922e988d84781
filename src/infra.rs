//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the Editor Test Runner,
//! including external process execution, file system layout, and i18n support.
//!
//! 此模块为编辑器测试运行器提供基础设施服务，
//! 包括外部进程执行、文件系统布局和国际化支持。

pub mod command;
pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
