//! 通用 UI 组件
//!
//! 输入框、彩带行等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::effects::{CONFETTI_ROWS, Particle};

/// [组件] 带有标题和样式的输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_focused: bool,
    active_color: Color,
) {
    let style = if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let input = Paragraph::new(value)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(input, area);
}

/// [组件] 把彩带粒子铺到固定行数的文本行里
///
/// 超出可用宽度的粒子直接丢弃。
pub fn confetti_lines(particles: &[Particle], width: u16) -> Vec<Line<'static>> {
    let cols = width as usize;
    let mut grid: Vec<Vec<Option<Particle>>> = vec![vec![None; cols]; CONFETTI_ROWS as usize];

    for p in particles {
        if (p.col as usize) < cols {
            grid[p.row as usize][p.col as usize] = Some(*p);
        }
    }

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .map(|cell| match cell {
                    Some(p) => {
                        Span::styled(p.glyph.to_string(), Style::default().fg(p.color))
                    }
                    None => Span::raw(" "),
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}
