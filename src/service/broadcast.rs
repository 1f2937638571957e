//! 快照廣播與連線接受
//!
//! 單一連線槽設計：至多一個下游 UI 客戶端接收資料。接受迴圈在
//! 獨立的 tokio 任務上無限執行，與計分節奏完全解耦；每個新連線
//! 無條件取代槽中現有連線（舊客戶端被隱式遺棄，不主動關閉）。
//!
//! 連線槽是兩個執行脈絡唯一共享的可變資源，以 `Arc<Mutex<...>>`
//! 原子交換，接受端的寫入與廣播端的讀寫不會交錯。
//!
//! 純推流協定：一則訊息一行 JSON（UTF-8，單一換行符結尾），沒有
//! 回覆或確認。寫入走非阻塞路徑，計分過程從不等待網路 I/O：送出
//! 緩衝區滿視為客戶端停滯，與其他傳輸失敗一樣就地記錄並丟棄連線
//! 引用，等待接受迴圈補上新連線；失敗從不回傳到計分路徑。

use std::io;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;

use super::snapshot::Snapshot;

/// 當前客戶端連線槽
pub type ClientSlot = Arc<Mutex<Option<TcpStream>>>;

/// 建立空的連線槽
pub fn new_slot() -> ClientSlot {
    Arc::new(Mutex::new(None))
}

/// 快照廣播器
#[derive(Clone)]
pub struct Broadcaster {
    slot: ClientSlot,
}

impl Broadcaster {
    pub fn new(slot: ClientSlot) -> Self {
        Self { slot }
    }

    /// 將快照以一行 JSON 推送給當前客戶端
    ///
    /// 沒有客戶端時靜默返回（不是錯誤）。寫入全程非阻塞：送出
    /// 緩衝區滿表示客戶端已停止讀取，與寫入錯誤一樣記錄並清空
    /// 連線槽，下一次計分過程視為無客戶端。正常讀取的客戶端在
    /// 一行一快照的節奏下不會填滿緩衝區。
    pub async fn send(&self, snapshot: &Snapshot) {
        let line = match snapshot.encode_line() {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to encode snapshot: {e}");
                return;
            }
        };

        let mut guard = self.slot.lock().await;
        let Some(stream) = guard.as_mut() else {
            return;
        };

        let mut written = 0;
        while written < line.len() {
            match stream.try_write(&line[written..]) {
                Ok(n) => written += n,
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => {
                    eprintln!("UI client stopped reading, dropping connection");
                    *guard = None;
                    return;
                }
                Err(e) => {
                    eprintln!("Failed to send state: {e}");
                    *guard = None;
                    return;
                }
            }
        }
    }
}

/// 無限接受迴圈
///
/// 每個接受的連線無條件取代槽中現有連線。接受失敗記錄後繼續，
/// 從不致命；短暫停頓避免錯誤狀態下的忙迴圈。
pub async fn accept_loop(listener: TcpListener, slot: ClientSlot) {
    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                eprintln!("UI client connected from {addr}");
                *slot.lock().await = Some(stream);
            }
            Err(e) => {
                eprintln!("Socket accept error: {e}");
                tokio::time::sleep(Duration::from_millis(200)).await;
            }
        }
    }
}
