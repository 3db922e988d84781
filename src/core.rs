//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the Editor Test Runner,
//! including data models, settings, component selection, editor installation
//! and the per-platform test loop.
//!
//! 此模块包含编辑器测试运行器的核心功能，
//! 包括数据模型、配置、组件选择、编辑器安装和按平台的测试循环。

pub mod components;
pub mod config;
pub mod error;
pub mod execution;
pub mod install;
pub mod models;

// Re-exports
pub use components::{download_component_args, select_components};
pub use config::RunnerSettings;
pub use error::RunnerError;
pub use execution::run_platforms;
pub use models::RunConfiguration;
