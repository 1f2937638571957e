//! 傷害估算
//!
//! 估算當前手牌在能量預算內本回合可打出的最大總傷害，用於判斷
//! 「沒有單卡斬殺，但組合可以殺」的情況。
//!
//! 兩種貪婪裝填策略取較大值：
//! - **易傷優先**：若有可負擔的易傷來源牌則先打出，之後的傷害
//!   乘 1.5（向下取整）近似易傷增幅
//! - **純傷害**：全部攻擊牌按估算傷害由高到低裝填，不乘增幅
//!
//! 兩個總和都再扣除怪物的捲曲類護盾（保守修正：假設護盾吸收本回合
//! 第一次打擊的一部分）。這是啟發式近似，不是規則引擎。

use super::card_db;
use super::constants::{
    CURL_UP_POWER_ID, DEFAULT_ATTACK_DAMAGE, VULNERABLE_MULT_DEN, VULNERABLE_MULT_NUM,
};
use super::entities::{Card, CardType, Monster};

/// 傷害估算結果
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DamageProjection {
    /// 本回合可達成的最佳總傷害
    pub total_hand_damage: i32,
    /// 逐怪斬殺表，與傳入的怪物列表同序；手牌無攻擊牌時為空
    pub killable: Vec<bool>,
}

impl DamageProjection {
    /// 是否有任何怪物可被組合斬殺
    pub fn any_killable(&self) -> bool {
        self.killable.iter().any(|&k| k)
    }
}

/// 單張攻擊牌的裝填候選
#[derive(Clone, Copy, Debug)]
struct AttackEstimate {
    cost: i32,
    damage: i32,
    vulnerability: bool,
}

/// 從手牌構建攻擊牌候選列表（保持手牌順序）
fn attack_estimates(hand: &[Card], strength: i32) -> Vec<AttackEstimate> {
    hand.iter()
        .filter(|c| c.card_type == CardType::Attack)
        .map(|c| {
            let profile = card_db::profile(&c.card_id, &c.name);
            AttackEstimate {
                // X 費牌回報為 -1，裝填時視為 0 費
                cost: c.cost.max(0),
                damage: profile.base_damage.unwrap_or(DEFAULT_ATTACK_DAMAGE) + strength,
                vulnerability: profile.vulnerability,
            }
        })
        .collect()
}

/// 純傷害策略：按估算傷害由高到低貪婪裝填
fn pack_pure(estimates: &[AttackEstimate], energy: i32) -> i32 {
    let mut ordered: Vec<&AttackEstimate> = estimates.iter().collect();
    // 穩定排序：平手時保持手牌順序，結果確定
    ordered.sort_by(|a, b| b.damage.cmp(&a.damage));

    let mut remaining = energy;
    let mut total = 0;
    for estimate in ordered {
        if estimate.cost <= remaining {
            remaining -= estimate.cost;
            total += estimate.damage;
        }
    }
    total
}

/// 易傷優先策略：先打出第一張可負擔的易傷來源，其後傷害乘 1.5
///
/// 沒有可負擔的易傷來源時退化為純傷害策略。
fn pack_vulnerable_first(estimates: &[AttackEstimate], energy: i32) -> i32 {
    let Some(source_idx) = estimates
        .iter()
        .position(|e| e.vulnerability && e.cost <= energy)
    else {
        return pack_pure(estimates, energy);
    };

    let source = estimates[source_idx];
    let mut remaining = energy - source.cost;

    let mut rest: Vec<&AttackEstimate> = estimates
        .iter()
        .enumerate()
        .filter(|&(idx, _)| idx != source_idx)
        .map(|(_, e)| e)
        .collect();
    rest.sort_by(|a, b| b.damage.cmp(&a.damage));

    let mut followup = 0;
    for estimate in rest {
        if estimate.cost <= remaining {
            remaining -= estimate.cost;
            followup += estimate.damage;
        }
    }

    // 易傷增幅只作用於來源之後的傷害，整數乘法向下取整
    source.damage + followup * VULNERABLE_MULT_NUM / VULNERABLE_MULT_DEN
}

/// 怪物捲曲類護盾總量
fn curl_up_shield(monsters: &[&Monster]) -> i32 {
    monsters
        .iter()
        .flat_map(|m| m.powers.iter())
        .filter(|p| p.power_id == CURL_UP_POWER_ID)
        .map(|p| p.amount)
        .sum()
}

/// 估算本回合最大總傷害並導出逐怪斬殺表
pub fn project_damage(
    hand: &[Card],
    monsters: &[&Monster],
    energy: i32,
    strength: i32,
) -> DamageProjection {
    let estimates = attack_estimates(hand, strength);
    if estimates.is_empty() {
        return DamageProjection::default();
    }

    let shield = curl_up_shield(monsters);
    let vulnerable_total = (pack_vulnerable_first(&estimates, energy) - shield).max(0);
    let pure_total = (pack_pure(&estimates, energy) - shield).max(0);
    let total_hand_damage = vulnerable_total.max(pure_total);

    let killable = monsters
        .iter()
        .map(|m| m.current_hp <= total_hand_damage)
        .collect();

    DamageProjection {
        total_hand_damage,
        killable,
    }
}

// ============================================================================
// 單元測試
// ============================================================================
