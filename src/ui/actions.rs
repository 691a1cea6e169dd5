//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 对局控制
    Restart, // r（仅在对局结束后映射）
    Submit,  // Enter

    // 输入框编辑
    Input(char), // 输入字符
    DeleteChar,  // Backspace
}
