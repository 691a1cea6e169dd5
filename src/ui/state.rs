//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::effects::Particle;
use crate::config::Config;
use crate::game::Game;

/// 应用状态
pub struct App {
    pub game: Game,
    pub rng: StdRng,
    pub config: Config,
    pub mode: AppMode,
    pub input_buffer: String,
    pub message: String,
    pub confetti: Vec<Particle>,
}

/// 应用模式（局面状态）
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    /// 对局进行中：输入与提交可用，重新开始不可用
    Playing,
    /// 已猜中：只剩重新开始与退出
    Won,
    /// 已用尽尝试次数，携带揭晓的秘密数字
    Lost(u8),
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// 使用指定随机源创建（确定性入口）
    pub fn with_rng(config: Config, mut rng: StdRng) -> Self {
        let game = Game::start(&mut rng);
        let mut app = Self {
            game,
            rng,
            config,
            mode: AppMode::Playing,
            input_buffer: String::new(),
            message: String::new(),
            confetti: Vec::new(),
        };
        app.restart();
        app
    }

    /// 计数器显示文本
    pub fn attempts_label(&self) -> String {
        format!("Intentos: {}", self.game.attempts())
    }
}
