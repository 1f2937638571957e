//! 會話層 - 每次狀態更新的入口
//!
//! 串起一次完整的更新處理：戰場分析 -> 傷害估算 -> 逐卡計分 ->
//! 快照廣播，嚴格依序執行，不與下一次更新重疊（更新由外部序列化
//! 的事件源驅動）。
//!
//! 自動打牌 / 自動開局以 `SessionConfig` 的顯式欄位建模，不使用
//! 環境可變旗標；暫停狀態以 `Decision::Idle` 表達，呼叫端解讀為
//! 「不送任何指令」並自行套用閒置等待。

use serde::Deserialize;

use crate::game::{recommend, GameState, DEFAULT_HOST, DEFAULT_PORT};

use super::broadcast::{Broadcaster, ClientSlot};
use super::snapshot::Snapshot;

/// 會話配置
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub host: String,
    pub port: u16,
    /// 是否自動送出打牌指令；關閉時引擎只計分與廣播
    pub auto_play: bool,
    /// 是否在遊戲外畫面自動開局
    pub auto_start: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            auto_play: false,
            auto_start: false,
        }
    }
}

impl SessionConfig {
    /// 廣播服務的綁定位址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 一次更新的處理結果
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// 向遊戲送出一條指令
    Act(String),
    /// 不送任何指令（呼叫端套用閒置等待）
    Idle,
}

/// 上游轉接層的訊息信封
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub in_game: bool,
    #[serde(default)]
    pub ready_for_command: bool,
    #[serde(default)]
    pub game_state: Option<GameState>,
    #[serde(default)]
    pub available_commands: Vec<String>,
}

/// 推薦引擎會話
pub struct Session {
    config: SessionConfig,
    broadcaster: Broadcaster,
}

impl Session {
    pub fn new(config: SessionConfig, slot: ClientSlot) -> Self {
        Self {
            config,
            broadcaster: Broadcaster::new(slot),
        }
    }

    /// 處理一行上游訊息
    ///
    /// 格式錯誤的行記錄後跳過（回傳 `Idle`），不影響後續更新。
    pub async fn handle_line(&self, line: &str) -> Decision {
        let envelope: Envelope = match serde_json::from_str(line) {
            Ok(envelope) => envelope,
            Err(e) => {
                eprintln!("Malformed upstream message: {e}");
                return Decision::Idle;
            }
        };
        self.handle_envelope(&envelope).await
    }

    /// 處理一個已解析的信封
    pub async fn handle_envelope(&self, envelope: &Envelope) -> Decision {
        match (envelope.in_game, &envelope.game_state) {
            (true, Some(state)) => {
                let decision = self.handle_update(state).await;
                // 遊戲尚未就緒時不送指令（計分與廣播照常執行）
                if envelope.ready_for_command {
                    decision
                } else {
                    Decision::Idle
                }
            }
            // 遊戲外畫面（選單等）
            _ => self.handle_out_of_game(),
        }
    }

    /// 處理一次戰鬥內狀態更新：計分、廣播、決定是否行動
    pub async fn handle_update(&self, state: &GameState) -> Decision {
        // 嚴格依序：分析 + 估算 + 計分（recommend 內部依序執行）
        let recommendations = recommend(state);

        // 廣播快照；傳輸失敗在廣播器內部吸收，從不中斷本過程
        let snapshot = Snapshot::build(state, &recommendations);
        self.broadcaster.send(&snapshot).await;

        if self.config.auto_play {
            // 自動模式的佔位決策：結束回合
            Decision::Act("end".to_string())
        } else {
            Decision::Idle
        }
    }

    /// 遊戲外畫面的決策
    fn handle_out_of_game(&self) -> Decision {
        if self.config.auto_start {
            Decision::Act("start ironclad".to_string())
        } else {
            Decision::Idle
        }
    }
}
