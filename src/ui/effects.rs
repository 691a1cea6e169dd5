//! 胜利效果 (Effects)
//!
//! 彩带粒子生成（视觉）与终端响铃（音效）。
//! 两者都是即发即忘：完成与否不影响对局状态。

use std::io;

use crossterm::{execute, style::Print};
use rand::Rng;
use ratatui::style::Color;

/// 彩带覆盖的虚拟网格宽度
pub const CONFETTI_COLS: u16 = 72;
/// 彩带覆盖的虚拟网格高度
pub const CONFETTI_ROWS: u16 = 4;
/// 一次爆发的粒子数量
pub const PARTICLE_COUNT: usize = 120;

const GLYPHS: [char; 4] = ['*', '•', '✦', 'o'];
const COLORS: [Color; 5] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
];

/// 单个彩带粒子
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub col: u16,
    pub row: u16,
    pub glyph: char,
    pub color: Color,
}

/// 生成一次彩带爆发
pub fn confetti_burst(rng: &mut impl Rng) -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|_| Particle {
            col: rng.gen_range(0..CONFETTI_COLS),
            row: rng.gen_range(0..CONFETTI_ROWS),
            glyph: GLYPHS[rng.gen_range(0..GLYPHS.len())],
            color: COLORS[rng.gen_range(0..COLORS.len())],
        })
        .collect()
}

/// 终端响铃（BEL）
pub fn ring_bell() {
    let _ = execute!(io::stdout(), Print("\x07"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_burst_stays_inside_grid() {
        let mut rng = StdRng::seed_from_u64(1);
        let particles = confetti_burst(&mut rng);

        assert_eq!(particles.len(), PARTICLE_COUNT);
        for p in particles {
            assert!(p.col < CONFETTI_COLS);
            assert!(p.row < CONFETTI_ROWS);
            assert!(GLYPHS.contains(&p.glyph));
            assert!(COLORS.contains(&p.color));
        }
    }
}
