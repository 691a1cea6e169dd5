//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action。某个操作在当前模式下没有映射，
//! 就等价于对应控件被禁用。

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, AppMode};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: &AppMode, key: KeyCode) -> Option<Action> {
    match mode {
        // 对局进行中：字符进入输入框（包括 'r'），重新开始不可用
        AppMode::Playing => match key {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        // 对局结束：输入与提交不可用，重新开始可用
        AppMode::Won | AppMode::Lost(_) => match key {
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        },
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(&app.mode, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}
