//! # Reporting Module / 报告模块
//!
//! This module reports on a run: the header printed before installation, a
//! colorful summary table printed after the platform loop, and a JSON summary
//! written next to the editor's own artifacts.
//!
//! 此模块负责运行报告：安装前打印的头部信息、平台循环结束后打印的彩色摘要表格，
//! 以及与编辑器自身产物放在一起的 JSON 摘要。

pub mod console;
pub mod json;

// Re-export common reporting functions
pub use console::{print_header, print_summary};
pub use json::{RunSummary, write_run_summary};
