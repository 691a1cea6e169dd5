//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑：把 Action 委托给对局状态，
//! 再把判定结果落成可渲染的界面状态。

use super::actions::Action;
use super::effects;
use super::state::{App, AppMode};
use crate::game::{Game, Outcome};

/// 开局欢迎语
pub const MSG_WELCOME: &str = "¡Bienvenido! Ingresa un número en el cuadro.";
/// 输入校验失败提示
pub const MSG_INVALID: &str = "Por favor ingresa un número válido entre 1 y 10.";
/// 秘密数字更大
pub const MSG_HIGHER: &str = "El número es más grande";
/// 秘密数字更小
pub const MSG_LOWER: &str = "El número es más pequeño";
/// 猜中
pub const MSG_WIN: &str = "¡Acertaste!";

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Restart => self.restart(),
            Action::Submit => self.submit_guess(),

            Action::Input(c) => {
                if self.mode == AppMode::Playing {
                    self.input_buffer.push(c);
                }
            }
            Action::DeleteChar => {
                if self.mode == AppMode::Playing {
                    self.input_buffer.pop();
                }
            }
        }
        false
    }

    // ============ 对局控制 ============

    /// 开始或重新开始一局
    ///
    /// 整体替换对局状态：新的秘密数字、清空输入框、收起失败弹窗
    /// 与彩带、恢复欢迎语与计数器。
    pub fn restart(&mut self) {
        self.game = Game::start(&mut self.rng);
        self.mode = AppMode::Playing;
        self.input_buffer.clear();
        self.confetti.clear();
        self.message = MSG_WELCOME.to_string();
        log::info!("nueva partida");
    }

    /// 提交当前输入框内容作为一次猜测
    pub fn submit_guess(&mut self) {
        if self.mode != AppMode::Playing {
            // 结束后提交没有按键映射，到这里说明调用方出错
            log::warn!("submit_guess con la partida terminada");
            return;
        }

        let (outcome, attempts) = self.game.evaluate(&self.input_buffer);
        match outcome {
            Outcome::Invalid => {
                self.message = MSG_INVALID.to_string();
            }
            Outcome::TooLow => {
                self.message = MSG_HIGHER.to_string();
            }
            Outcome::TooHigh => {
                self.message = MSG_LOWER.to_string();
            }
            Outcome::Win => {
                self.message = MSG_WIN.to_string();
                self.mode = AppMode::Won;
                if self.config.effects.confetti {
                    self.confetti = effects::confetti_burst(&mut self.rng);
                }
                if self.config.effects.sound {
                    effects::ring_bell();
                }
                log::info!("partida ganada en {} intentos", attempts);
            }
            Outcome::Lose(secret) => {
                self.message = format!("Game Over. El número era {}", secret);
                self.mode = AppMode::Lost(secret);
                log::info!("partida perdida tras {} intentos", attempts);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn test_app() -> App {
        App::with_rng(Config::default(), StdRng::seed_from_u64(7))
    }

    fn type_and_submit(app: &mut App, input: &str) {
        app.input_buffer.clear();
        for c in input.chars() {
            app.dispatch(Action::Input(c));
        }
        app.dispatch(Action::Submit);
    }

    #[test]
    fn test_startup_shows_welcome() {
        let app = test_app();
        assert_eq!(app.mode, AppMode::Playing);
        assert_eq!(app.message, MSG_WELCOME);
        assert_eq!(app.attempts_label(), "Intentos: 0");
        assert!(app.input_buffer.is_empty());
        assert!(app.confetti.is_empty());
    }

    #[test]
    fn test_directional_feedback() {
        let mut app = test_app();
        app.game = Game::with_secret(7);

        type_and_submit(&mut app, "3");
        assert_eq!(app.message, MSG_HIGHER);
        assert_eq!(app.attempts_label(), "Intentos: 1");
        assert_eq!(app.mode, AppMode::Playing);

        type_and_submit(&mut app, "9");
        assert_eq!(app.message, MSG_LOWER);
        assert_eq!(app.attempts_label(), "Intentos: 2");
        assert_eq!(app.mode, AppMode::Playing);
    }

    #[test]
    fn test_invalid_input_keeps_counter() {
        let mut app = test_app();
        app.game = Game::with_secret(7);

        type_and_submit(&mut app, "abc");
        assert_eq!(app.message, MSG_INVALID);
        assert_eq!(app.attempts_label(), "Intentos: 0");
        assert_eq!(app.mode, AppMode::Playing);

        type_and_submit(&mut app, "15");
        assert_eq!(app.message, MSG_INVALID);
        assert_eq!(app.attempts_label(), "Intentos: 0");
        assert_eq!(app.mode, AppMode::Playing);
    }

    #[test]
    fn test_win_flow() {
        let mut app = test_app();
        app.game = Game::with_secret(7);

        type_and_submit(&mut app, "3");
        type_and_submit(&mut app, "9");
        type_and_submit(&mut app, "7");

        assert_eq!(app.message, MSG_WIN);
        assert_eq!(app.mode, AppMode::Won);
        assert_eq!(app.attempts_label(), "Intentos: 3");
        assert!(!app.confetti.is_empty());
    }

    #[test]
    fn test_win_without_effects() {
        let mut config = Config::default();
        config.effects.confetti = false;
        config.effects.sound = false;

        let mut app = App::with_rng(config, StdRng::seed_from_u64(7));
        app.game = Game::with_secret(7);

        type_and_submit(&mut app, "7");
        assert_eq!(app.mode, AppMode::Won);
        assert!(app.confetti.is_empty());
    }

    #[test]
    fn test_lose_flow() {
        let mut app = test_app();
        app.game = Game::with_secret(4);

        for _ in 0..4 {
            type_and_submit(&mut app, "10");
            assert_eq!(app.message, MSG_LOWER);
            assert_eq!(app.mode, AppMode::Playing);
        }

        type_and_submit(&mut app, "10");
        assert_eq!(app.message, "Game Over. El número era 4");
        assert_eq!(app.mode, AppMode::Lost(4));
        assert_eq!(app.attempts_label(), "Intentos: 5");
        assert!(app.confetti.is_empty());
    }

    #[test]
    fn test_editing_ignored_after_game_over() {
        let mut app = test_app();
        app.game = Game::with_secret(7);
        type_and_submit(&mut app, "7");
        assert_eq!(app.mode, AppMode::Won);

        let buffer_before = app.input_buffer.clone();
        app.dispatch(Action::Input('5'));
        app.dispatch(Action::DeleteChar);
        assert_eq!(app.input_buffer, buffer_before);
    }

    #[test]
    fn test_restart_after_win() {
        let mut app = test_app();
        app.game = Game::with_secret(7);
        type_and_submit(&mut app, "7");
        assert_eq!(app.mode, AppMode::Won);

        app.dispatch(Action::Restart);
        assert_eq!(app.mode, AppMode::Playing);
        assert_eq!(app.message, MSG_WELCOME);
        assert_eq!(app.attempts_label(), "Intentos: 0");
        assert!(app.input_buffer.is_empty());
        assert!(app.confetti.is_empty());
        assert!(app.game.is_active());
    }

    #[test]
    fn test_restart_hides_loss_overlay() {
        let mut app = test_app();
        app.game = Game::with_secret(4);
        for _ in 0..5 {
            type_and_submit(&mut app, "10");
        }
        assert!(matches!(app.mode, AppMode::Lost(4)));

        app.dispatch(Action::Restart);
        assert_eq!(app.mode, AppMode::Playing);
        assert_eq!(app.message, MSG_WELCOME);
    }

    #[test]
    fn test_restart_twice_is_idempotent() {
        let mut app = test_app();
        app.dispatch(Action::Restart);
        app.dispatch(Action::Restart);

        assert_eq!(app.mode, AppMode::Playing);
        assert_eq!(app.attempts_label(), "Intentos: 0");
        assert!(app.game.is_active());
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn test_quit_action_exits() {
        let mut app = test_app();
        assert!(app.dispatch(Action::Quit));
        assert!(!app.dispatch(Action::Input('1')));
    }
}
