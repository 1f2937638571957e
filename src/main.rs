//! Spire Advisor 伺服器入口
//!
//! 從 stdin 逐行讀取上游轉接層的訊息信封，對每次戰鬥內更新執行
//! 計分與廣播；`Act` 決策寫到 stdout 回給遊戲，`Idle` 時不送任何
//! 指令並閒置等待。廣播監聽器在獨立任務上接受 UI 客戶端連線。

use std::error::Error;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::TcpListener;

// 核心模組
mod game;
mod service;

use service::{accept_loop, new_slot, Decision, Session, SessionConfig};

/// auto_play 關閉時每次 Idle 的等待，避免 CPU 空轉
const IDLE_PAUSE: Duration = Duration::from_millis(500);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let mut config = SessionConfig::default();
    if let Some(port) = std::env::args().nth(1) {
        config.port = port.parse()?;
    }

    // 綁定失敗是唯一的程序級致命錯誤
    let listener = TcpListener::bind(config.bind_addr()).await?;
    let slot = new_slot();
    tokio::spawn(accept_loop(listener, slot.clone()));

    // stdout 是遊戲協定通道，狀態訊息一律走 stderr
    eprintln!(
        "Spire Advisor listening on {} for UI connections",
        config.bind_addr()
    );

    let session = Session::new(config, slot);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    // 向遊戲端宣告就緒
    println!("ready");

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match session.handle_line(&line).await {
            Decision::Act(command) => println!("{command}"),
            // Idle 不送任何東西，只做閒置等待
            Decision::Idle => tokio::time::sleep(IDLE_PAUSE).await,
        }
    }

    Ok(())
}
