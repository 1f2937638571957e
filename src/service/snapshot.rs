//! 狀態快照構建
//!
//! 將當前實體與推薦分數表組裝成外發的線路實體。快照只複製原始
//! 欄位，不持有任何實體引用，生命週期與遊戲狀態物件完全脫鉤。

use serde::Serialize;

use crate::game::{GameState, RecommendationMap};

/// 外發快照：手牌 + 玩家摘要 + 怪物摘要
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    pub hand: Vec<HandEntry>,
    pub player: PlayerSummary,
    pub monsters: Vec<MonsterSummary>,
}

/// 手牌條目，附帶推薦分數
#[derive(Clone, Debug, Serialize)]
pub struct HandEntry {
    pub uuid: String,
    pub name: String,
    pub cost: i32,
    #[serde(rename = "type")]
    pub card_type: String,
    pub recommendation_score: i32,
}

/// 玩家摘要
#[derive(Clone, Debug, Serialize)]
pub struct PlayerSummary {
    pub energy: i32,
    pub block: i32,
    pub hp: i32,
    pub max_hp: i32,
}

/// 怪物摘要
#[derive(Clone, Debug, Serialize)]
pub struct MonsterSummary {
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub intent: String,
    pub damage: Option<i32>,
}

impl Snapshot {
    /// 從當前狀態與推薦分數表構建快照
    ///
    /// 已離場（is_gone）的怪物不出現在快照中；分數表查不到的卡
    /// 回報 0 分。
    pub fn build(state: &GameState, recommendations: &RecommendationMap) -> Snapshot {
        Snapshot {
            hand: state
                .hand
                .iter()
                .map(|card| HandEntry {
                    uuid: card.uuid.clone(),
                    name: card.name.clone(),
                    cost: card.cost,
                    card_type: card.card_type.as_str().to_string(),
                    recommendation_score: recommendations.get(&card.uuid).copied().unwrap_or(0),
                })
                .collect(),
            player: PlayerSummary {
                energy: state.player.energy,
                block: state.player.block,
                hp: state.player.current_hp,
                max_hp: state.player.max_hp,
            },
            monsters: state
                .monsters
                .iter()
                .filter(|m| !m.is_gone)
                .map(|m| MonsterSummary {
                    name: m.name.clone(),
                    hp: m.current_hp,
                    max_hp: m.max_hp,
                    intent: m.intent.as_str().to_string(),
                    damage: m.move_adjusted_damage,
                })
                .collect(),
        }
    }

    /// 編碼為一行 UTF-8 JSON（以單一換行符結尾）
    pub fn encode_line(&self) -> serde_json::Result<Vec<u8>> {
        let mut line = serde_json::to_vec(self)?;
        line.push(b'\n');
        Ok(line)
    }
}

// ============================================================================
// 單元測試
// ============================================================================
