mod config;
mod game;
mod ui;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use simplelog::WriteLogger;

use crate::config::load_config;
use crate::ui::{App, render};

/// 获取数据目录路径 (~/.local/share/adivina/)
fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户数据目录"))?
        .join("adivina");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// 获取配置目录路径 (~/.config/adivina/)
fn get_config_dir() -> io::Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户配置目录"))?
        .join("adivina");

    fs::create_dir_all(&config_dir)?;

    Ok(config_dir)
}

/// 初始化文件日志（TUI 下不能写 stdout）
fn init_logging(data_dir: &Path) -> io::Result<()> {
    let log_file = fs::File::create(data_dir.join("adivina.log"))?;
    WriteLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        log_file,
    )
    .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))?;

    Ok(())
}

fn main() -> io::Result<()> {
    init_logging(&get_data_dir()?)?;

    // 配置文件路径 (~/.config/adivina/config.toml)
    let config_path = get_config_dir()?.join("config.toml");
    let config = load_config(&config_path)?;

    // 创建应用状态
    let mut app = App::new(config);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if key.kind == crossterm::event::KeyEventKind::Press {
                if ui::handle_key_event(app, key.code)? {
                    break;
                }
            }
        }
    }
    Ok(())
}
