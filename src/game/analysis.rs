//! 戰場分析
//!
//! 從當前玩家與怪物實體導出聚合戰鬥事實。純函數，無副作用；
//! 缺失的數值一律退化為 0 / false，沒有錯誤路徑。

use super::constants::STRENGTH_POWER_ID;
use super::entities::{Monster, Player};

/// 一次計分過程的聚合戰鬥事實
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BattleFacts {
    /// 參與計算的怪物數量
    pub monster_count: usize,
    /// 本回合即將受到的總傷害（單次傷害 x 段數，對攻擊意圖加總）
    pub incoming_damage: i32,
    /// 是否有任何怪物意圖攻擊
    pub is_attacked: bool,
    /// 即將受到的傷害是否超過現有格擋
    pub is_in_danger: bool,
    /// 即將受到的傷害是否足以致死
    pub is_critical: bool,
    /// 玩家是否持有力量 buff
    pub has_strength: bool,
    /// 力量數值（只取第一個命中的 buff，假設玩家至多持有一個）
    pub strength_amount: i32,
}

/// 分析戰場形勢
///
/// `monsters` 應已排除 is_gone / half_dead 的怪物
/// （見 [`GameState::combat_monsters`](super::entities::GameState::combat_monsters)）。
pub fn analyze_battle(player: &Player, monsters: &[&Monster]) -> BattleFacts {
    let mut incoming_damage = 0;
    let mut is_attacked = false;

    for monster in monsters {
        if monster.intent.is_attack() {
            is_attacked = true;
            // 單次傷害缺失視為 0，段數缺失視為 1
            let damage = monster.move_adjusted_damage.unwrap_or(0);
            let hits = monster.move_hits.unwrap_or(1);
            incoming_damage += damage * hits;
        }
    }

    let (has_strength, strength_amount) = player
        .powers
        .iter()
        .find(|p| p.power_id == STRENGTH_POWER_ID)
        .map(|p| (true, p.amount))
        .unwrap_or((false, 0));

    BattleFacts {
        monster_count: monsters.len(),
        incoming_damage,
        is_attacked,
        is_in_danger: incoming_damage > player.block,
        is_critical: player.current_hp <= incoming_damage,
        has_strength,
        strength_amount,
    }
}

// ============================================================================
// 單元測試
// ============================================================================
