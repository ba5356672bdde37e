//! 패턴/그룹 목록.

use scanner_analytics::PatternRegistry;

/// 등록된 패턴과 그룹을 표 형식으로 변환합니다.
pub fn format_patterns(registry: &PatternRegistry) -> String {
    let mut output = String::from("\n📋 Available patterns:\n");

    for kind in registry.patterns() {
        output.push_str(&format!("  {:<20} | {}\n", kind.name(), kind.display_name()));
    }

    output.push_str("\n📦 Pattern groups (evaluated in order, first match wins):\n");
    for group in registry.groups() {
        let members: Vec<&str> = group.members.iter().map(|k| k.name()).collect();
        output.push_str(&format!("  {:<20} | {}\n", group.name, members.join(" → ")));
    }

    output
}
