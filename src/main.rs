mod app;
mod error;
mod event;
mod form;
mod model;
mod storage;
mod store;
mod theme;
mod ui;

use std::io;
use std::panic;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::App;

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(version)]
#[command(about = "Terminal task list manager")]
struct Cli {
    /// Theme to start with (overrides the saved config)
    #[arg(long)]
    theme: Option<String>,
}

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();

    // 加载配置（--theme 覆盖持久化的主题选择）
    let mut config = storage::config::load_config();
    if let Some(name) = cli.theme {
        config.theme.name = name;
    }

    // 初始化终端
    let mut terminal = ratatui::init();

    // 创建应用
    let mut app = App::new(&config);

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();

    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 渲染界面
        terminal.draw(|frame| ui::tasks::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
