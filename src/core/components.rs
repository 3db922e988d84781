//! # Component Selection / 组件选择
//!
//! Maps the requested platforms onto the smallest set of installable editor
//! components that can build and test them.
//!
//! 将请求的平台映射为能够构建并测试它们的最小可安装编辑器组件集合。

use crate::core::models::Platform;
use std::fmt;

/// An installable unit of the editor distribution.
/// 编辑器发行版中的可安装单元。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Editor,
    StandaloneSupportMono,
}

impl Component {
    pub fn as_str(self) -> &'static str {
        match self {
            Component::Editor => "Editor",
            Component::StandaloneSupportMono => "StandaloneSupport-Mono",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the components required for `platforms`.
///
/// `Editor` always comes first. Any platform whose name contains
/// `Standalone` adds `StandaloneSupport-Mono`, at most once. Android and iOS
/// currently need no extra component.
///
/// 返回 `platforms` 所需的组件。
/// `Editor` 始终排在首位。名称中包含 `Standalone` 的平台会添加
/// `StandaloneSupport-Mono`，且最多添加一次。Android 和 iOS 目前不需要额外组件。
pub fn select_components(platforms: &[Platform]) -> Vec<Component> {
    let mut components = vec![Component::Editor];
    for platform in platforms {
        if platform.as_str().contains("Standalone")
            && !components.contains(&Component::StandaloneSupportMono)
        {
            components.push(Component::StandaloneSupportMono);
        }
    }
    components
}

/// Flattens the selected components into the downloader's `-c <component>` pairs.
pub fn download_component_args(platforms: &[Platform]) -> Vec<String> {
    select_components(platforms)
        .into_iter()
        .flat_map(|component| ["-c".to_string(), component.to_string()])
        .collect()
}
