//! 戰鬥實體定義
//!
//! 對應上游 spirecomm 轉接層輸出的 JSON 結構（player / monsters / hand）。
//! 引擎只讀取這些實體，從不修改；所有可選欄位以 `serde(default)` 容錯，
//! 缺失時退化為 0 / false / 空列表，不視為錯誤。

use serde::Deserialize;

/// 卡牌類型
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardType {
    Attack,
    Skill,
    Power,
    Status,
    Curse,
    #[default]
    #[serde(other)]
    Other,
}

impl CardType {
    /// 轉換為線路字串（用於 snapshot）
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Attack => "ATTACK",
            CardType::Skill => "SKILL",
            CardType::Power => "POWER",
            CardType::Status => "STATUS",
            CardType::Curse => "CURSE",
            CardType::Other => "OTHER",
        }
    }
}

/// 怪物意圖
///
/// 只有攻擊類意圖參與受傷計算，其餘一律視為「其他」。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    Attack,
    AttackBuff,
    AttackDebuff,
    AttackDefend,
    Buff,
    Debuff,
    StrongDebuff,
    Defend,
    DefendBuff,
    DefendDebuff,
    Escape,
    Magic,
    Sleep,
    Stun,
    None,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Intent {
    /// 是否為攻擊意圖
    pub fn is_attack(&self) -> bool {
        matches!(
            self,
            Intent::Attack | Intent::AttackBuff | Intent::AttackDebuff | Intent::AttackDefend
        )
    }

    /// 轉換為線路字串（用於 snapshot）
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Attack => "ATTACK",
            Intent::AttackBuff => "ATTACK_BUFF",
            Intent::AttackDebuff => "ATTACK_DEBUFF",
            Intent::AttackDefend => "ATTACK_DEFEND",
            Intent::Buff => "BUFF",
            Intent::Debuff => "DEBUFF",
            Intent::StrongDebuff => "STRONG_DEBUFF",
            Intent::Defend => "DEFEND",
            Intent::DefendBuff => "DEFEND_BUFF",
            Intent::DefendDebuff => "DEFEND_DEBUFF",
            Intent::Escape => "ESCAPE",
            Intent::Magic => "MAGIC",
            Intent::Sleep => "SLEEP",
            Intent::Stun => "STUN",
            Intent::None => "NONE",
            Intent::Unknown => "UNKNOWN",
        }
    }
}

/// 手牌中的一張卡
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub card_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub card_type: CardType,
    /// 能量費用；X 費牌由上游回報為 -1
    #[serde(default)]
    pub cost: i32,
    /// 卡牌實例識別碼，在手牌生命週期內穩定
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub is_playable: bool,
}

/// 一個具名 power（buff / debuff）
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Power {
    #[serde(rename = "id", default)]
    pub power_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: i32,
}

/// 玩家狀態
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub max_hp: i32,
    #[serde(default)]
    pub current_hp: i32,
    #[serde(default)]
    pub block: i32,
    #[serde(default)]
    pub energy: i32,
    #[serde(default)]
    pub powers: Vec<Power>,
}

/// 怪物狀態
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Monster {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "id", default)]
    pub monster_id: String,
    #[serde(default)]
    pub max_hp: i32,
    #[serde(default)]
    pub current_hp: i32,
    #[serde(default)]
    pub block: i32,
    #[serde(default)]
    pub intent: Intent,
    /// 本次行動的單次傷害；None 視為 0
    #[serde(default)]
    pub move_adjusted_damage: Option<i32>,
    /// 本次行動的攻擊段數；None 視為 1
    #[serde(default)]
    pub move_hits: Option<i32>,
    #[serde(default)]
    pub is_gone: bool,
    #[serde(default)]
    pub half_dead: bool,
    #[serde(default)]
    pub powers: Vec<Power>,
}

impl Monster {
    /// 是否參與戰鬥計算（is_gone / half_dead 的怪物一律排除）
    pub fn in_combat(&self) -> bool {
        !self.is_gone && !self.half_dead
    }
}

/// 一次遊戲狀態更新
///
/// 由上游轉接層每個事件建構一次；引擎在單次計分過程中視為凍結快照。
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GameState {
    #[serde(default)]
    pub player: Player,
    #[serde(default)]
    pub monsters: Vec<Monster>,
    #[serde(default)]
    pub hand: Vec<Card>,
    #[serde(default)]
    pub turn: i32,
}

impl GameState {
    /// 參與戰鬥計算的怪物列表（保持原始順序）
    pub fn combat_monsters(&self) -> Vec<&Monster> {
        self.monsters.iter().filter(|m| m.in_combat()).collect()
    }
}

// ============================================================================
// 單元測試
// ============================================================================
