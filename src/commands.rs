//! # Commands Module / 命令模块
//!
//! Top-level entry points invoked by the CLI.
//!
//! CLI 调用的顶层入口。

pub mod run;
