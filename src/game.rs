use rand::Rng;

/// 秘密数字范围下限
pub const SECRET_MIN: u8 = 1;
/// 秘密数字范围上限
pub const SECRET_MAX: u8 = 10;
/// 每局最大尝试次数
pub const MAX_ATTEMPTS: u8 = 5;

/// 一次猜测的分类结果
///
/// `Lose` 携带揭晓的秘密数字；其余变体不携带任何展示文案，
/// 文案由 UI 层决定。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 输入无法解析为 [1,10] 内的整数，未计入尝试
    Invalid,
    /// 猜的数字比秘密数字小
    TooLow,
    /// 猜的数字比秘密数字大
    TooHigh,
    /// 猜中
    Win,
    /// 用尽尝试次数，揭晓秘密数字
    Lose(u8),
}

/// 对局状态快照（不暴露秘密数字）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub attempts: u8,
    pub max_attempts: u8,
    pub active: bool,
}

/// 一局猜数字游戏的完整状态
///
/// 只包含规则与判定，对渲染层一无所知。
#[derive(Debug)]
pub struct Game {
    secret: u8,
    attempts: u8,
    active: bool,
}

impl Game {
    /// 开始新的一局，秘密数字由注入的随机源在 [1,10] 内均匀抽取
    pub fn start(rng: &mut impl Rng) -> Self {
        Self::with_secret(rng.gen_range(SECRET_MIN..=SECRET_MAX))
    }

    /// 以指定秘密数字开始一局（确定性入口）
    pub fn with_secret(secret: u8) -> Self {
        debug_assert!((SECRET_MIN..=SECRET_MAX).contains(&secret));
        Self {
            secret,
            attempts: 0,
            active: true,
        }
    }

    /// 当前状态快照
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            attempts: self.attempts,
            max_attempts: MAX_ATTEMPTS,
            active: self.active,
        }
    }

    pub fn attempts(&self) -> u8 {
        self.attempts
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// 解析原始输入为 [1,10] 内的整数
    fn parse_guess(input: &str) -> Option<u8> {
        let number = input.trim().parse::<u8>().ok()?;
        (SECRET_MIN..=SECRET_MAX).contains(&number).then_some(number)
    }

    /// 评估一次猜测，返回结果和更新后的尝试次数
    ///
    /// 无效输入不改变任何状态。对局结束后的调用属于调用方约定违规
    /// （控件映射应当已阻止），记录警告并按无效输入拒绝，同样不改变状态。
    pub fn evaluate(&mut self, input: &str) -> (Outcome, u8) {
        let Some(guess) = Self::parse_guess(input) else {
            return (Outcome::Invalid, self.attempts);
        };

        if !self.active {
            log::warn!("evaluate llamado con la partida terminada (guess: {})", guess);
            return (Outcome::Invalid, self.attempts);
        }

        self.attempts += 1;

        let outcome = if guess == self.secret {
            self.active = false;
            Outcome::Win
        } else if self.attempts == MAX_ATTEMPTS {
            self.active = false;
            Outcome::Lose(self.secret)
        } else if guess < self.secret {
            Outcome::TooLow
        } else {
            Outcome::TooHigh
        };

        log::debug!("intento #{}: {} -> {:?}", self.attempts, guess, outcome);
        (outcome, self.attempts)
    }
}
