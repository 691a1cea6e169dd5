//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件。纯函数：只读 App 状态，
//! 失败弹窗与彩带是否出现完全由当前模式决定。

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::state::{App, AppMode};
use components::{confetti_lines, render_input_widget};
use layouts::centered_rect;

const X_ART: [&str; 5] = [
    "██   ██",
    " ██ ██ ",
    "  ███  ",
    " ██ ██ ",
    "██   ██",
];

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(6),    // 消息区（含彩带）
            Constraint::Length(3), // 输入框
            Constraint::Length(3), // 计数器
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_message(frame, app, chunks[1]);
    render_input(frame, app, chunks[2]);
    render_counter(frame, app, chunks[3]);
    render_help(frame, app, chunks[4]);

    // 失败弹窗
    if let AppMode::Lost(_) = app.mode {
        render_game_over_dialog(frame, app);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("🎲 Adivina el Número")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_message(frame: &mut Frame, app: &App, area: Rect) {
    let style = match app.mode {
        AppMode::Playing => Style::default(),
        AppMode::Won => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        AppMode::Lost(_) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let mut lines = vec![Line::styled(app.message.clone(), style)];
    if !app.confetti.is_empty() {
        lines.push(Line::from(""));
        lines.extend(confetti_lines(&app.confetti, area.width.saturating_sub(2)));
    }

    let message = Paragraph::new(lines)
        .block(Block::default().title("Mensaje").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(message, area);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    render_input_widget(
        frame,
        area,
        "Tu número (1-10)",
        &app.input_buffer,
        app.mode == AppMode::Playing,
        Color::Yellow,
    );
}

fn render_counter(frame: &mut Frame, app: &App, area: Rect) {
    let counter = Paragraph::new(app.attempts_label())
        .block(Block::default().title("Marcador").borders(Borders::ALL));
    frame.render_widget(counter, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.mode {
        AppMode::Playing => "[1-10] escribe tu número  [Enter] intentar  [Esc] salir",
        AppMode::Won | AppMode::Lost(_) => "[r] jugar de nuevo  [q] salir",
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn render_game_over_dialog(frame: &mut Frame, app: &App) {
    let area = centered_rect(40, 60, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    lines.extend(X_ART.iter().map(|row| {
        Line::styled(
            *row,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(app.message.clone()));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "[r] jugar de nuevo  [q] salir",
        Style::default().fg(Color::Gray),
    ));

    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("Game Over")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(dialog, area);
}
