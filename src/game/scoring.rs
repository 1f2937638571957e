//! 推薦計分引擎
//!
//! 為手牌中的每張卡計算 [0, 100] 的戰術優先分。
//!
//! 優先邏輯：
//! 1. 斬殺 (Lethal)：單卡斬殺 > 易傷組合斬殺 > 普通組合斬殺
//! 2. 保命 (Survival)：致命傷害必須防住
//! 3. 高效 (Efficiency)：0 費牌加分、高費牌扣分
//! 4. AOE 識別：多怪時 AOE 牌按怪物數加分
//! 5. 力量加成：多段攻擊受力量放大
//!
//! 純函數：相同輸入必得相同輸出，分數只回傳、從不寫回卡牌。

use std::collections::HashMap;

use super::analysis::{analyze_battle, BattleFacts};
use super::card_db;
use super::constants::*;
use super::entities::{Card, CardType, GameState, Monster};
use super::projection::{project_damage, DamageProjection};

/// 推薦分數表：卡牌實例識別碼 -> [0, 100] 分數
///
/// 每次計分過程完整重算，鍵集合恰等於當前手牌的識別碼集合。
pub type RecommendationMap = HashMap<String, i32>;

/// 對整個遊戲狀態執行一次完整計分過程
///
/// 依序執行：戰場分析 -> 傷害估算 -> 逐卡計分。
pub fn recommend(state: &GameState) -> RecommendationMap {
    let monsters = state.combat_monsters();
    let facts = analyze_battle(&state.player, &monsters);
    let projection = project_damage(
        &state.hand,
        &monsters,
        state.player.energy,
        facts.strength_amount,
    );
    score_hand(&state.hand, state.player.energy, &monsters, &facts, &projection)
}

/// 以既有的分析 / 估算結果為手牌逐卡計分
pub fn score_hand(
    hand: &[Card],
    energy: i32,
    monsters: &[&Monster],
    facts: &BattleFacts,
    projection: &DamageProjection,
) -> RecommendationMap {
    let mut recommendations = RecommendationMap::with_capacity(hand.len());
    let attack_count = hand
        .iter()
        .filter(|c| c.card_type == CardType::Attack)
        .count();

    for card in hand {
        let score = score_card(card, energy, attack_count, monsters, facts, projection);
        recommendations.insert(card.uuid.clone(), score);
    }

    recommendations
}

/// 為單張卡計分
fn score_card(
    card: &Card,
    energy: i32,
    attack_count: usize,
    monsters: &[&Monster],
    facts: &BattleFacts,
    projection: &DamageProjection,
) -> i32 {
    let mut score = BASE_SCORE;

    // --- 費用修正 ---
    if card.cost == 0 {
        score += ZERO_COST_BONUS;
    } else if card.cost >= HIGH_COST_THRESHOLD {
        score -= HIGH_COST_PENALTY;
    }

    // 能量不足直接 0 分（X 費牌回報 -1，不觸發此門檻）
    if card.cost > energy {
        return 0;
    }

    let profile = card_db::profile(&card.card_id, &card.name);

    match card.card_type {
        // --- 攻擊牌 ---
        CardType::Attack => {
            if profile.aoe && facts.monster_count > 1 {
                // 怪物越多越強
                score += AOE_BONUS_PER_MONSTER * facts.monster_count as i32;
            }

            if facts.has_strength && profile.multi_hit {
                // 力量越高，多段攻擊價值越高
                score += MULTI_HIT_BASE_BONUS + MULTI_HIT_STRENGTH_FACTOR * facts.strength_amount;
            }

            // 單卡估算傷害：資料表基礎值 + 力量
            let estimated_damage =
                profile.base_damage.unwrap_or(DEFAULT_ATTACK_DAMAGE) + facts.strength_amount;
            let single_card_lethal = monsters.iter().any(|m| m.current_hp <= estimated_damage);
            let combo_lethal = projection.any_killable();
            let has_combo_partner = attack_count > 1;

            if single_card_lethal {
                score += SINGLE_LETHAL_BONUS;
            } else if combo_lethal {
                score += COMBO_LETHAL_BONUS;
                if profile.vulnerability && has_combo_partner {
                    // 易傷來源是組合斬殺的序曲，必須排在普通斬殺貢獻者之前
                    score += COMBO_VULN_BONUS;
                    if card.cost >= HIGH_COST_THRESHOLD {
                        score += COMBO_VULN_COST_OFFSET;
                    }
                }
            } else {
                score += PLAIN_ATTACK_BONUS;
                if profile.vulnerability && has_combo_partner {
                    // 非斬殺回合的易傷鋪墊仍有獨立價值
                    score += VULN_SETUP_BONUS;
                }
            }
        }

        // --- 防禦牌 ---
        CardType::Skill => {
            if profile.defense {
                if !facts.is_attacked {
                    // 敵人不攻擊時防禦牌毫無價值
                    return 0;
                } else if facts.is_in_danger {
                    score += BLOCK_NEEDED_BONUS;
                    if facts.is_critical {
                        score += BLOCK_CRITICAL_BONUS;
                    }
                } else {
                    score -= BLOCK_WASTED_PENALTY;
                }
            }
        }

        // --- 能力牌 ---
        CardType::Power => {
            score += POWER_CARD_BONUS;
        }

        CardType::Status | CardType::Curse | CardType::Other => {}
    }

    score.clamp(SCORE_MIN, SCORE_MAX)
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::{Intent, Player};

    fn card(card_id: &str, card_type: CardType, cost: i32, uuid: &str) -> Card {
        Card {
            card_id: card_id.into(),
            name: card_id.into(),
            card_type,
            cost,
            uuid: uuid.into(),
            is_playable: true,
        }
    }

    fn attacker(hp: i32, damage: i32) -> Monster {
        Monster {
            name: "Cultist".into(),
            monster_id: "Cultist".into(),
            current_hp: hp,
            max_hp: hp,
            intent: Intent::Attack,
            move_adjusted_damage: Some(damage),
            move_hits: Some(1),
            ..Monster::default()
        }
    }

    fn state(monsters: Vec<Monster>, hand: Vec<Card>, energy: i32) -> GameState {
        GameState {
            player: Player {
                max_hp: 80,
                current_hp: 80,
                block: 0,
                energy,
                powers: Vec::new(),
            },
            monsters,
            hand,
            turn: 1,
        }
    }

    /// Scenario A：兩張 Strike 組合斬殺 11 HP 怪物，攻擊應勝過防禦
    #[test]
    fn test_strike_outscores_defend_on_combo_lethal() {
        let state = state(
            vec![attacker(11, 10)],
            vec![
                card("Strike_R", CardType::Attack, 1, "strike_1"),
                card("Strike_R", CardType::Attack, 1, "strike_2"),
                card("Defend_R", CardType::Skill, 1, "defend_1"),
            ],
            3,
        );
        let rec = recommend(&state);
        let strike = rec["strike_1"];
        let defend = rec["defend_1"];
        assert!(
            strike > defend,
            "strike ({strike}) should outscore defend ({defend}) in combo lethal"
        );
    }

    /// Scenario B：組合傷害 12 < 20 HP 且正在挨打，防禦應勝過攻擊
    #[test]
    fn test_defend_outscores_strike_when_not_lethal() {
        let state = state(
            vec![attacker(20, 10)],
            vec![
                card("Strike_R", CardType::Attack, 1, "strike_1"),
                card("Strike_R", CardType::Attack, 1, "strike_2"),
                card("Defend_R", CardType::Skill, 1, "defend_1"),
            ],
            3,
        );
        let rec = recommend(&state);
        let strike = rec["strike_1"];
        let defend = rec["defend_1"];
        assert!(
            defend > strike,
            "defend ({defend}) should outscore strike ({strike}) when not lethal"
        );
    }

    /// Scenario C：無怪物攻擊時，防禦牌必須恰為 0 分
    #[test]
    fn test_defend_is_zero_without_threat() {
        let mut m = attacker(20, 10);
        m.intent = Intent::Buff;
        let state = state(
            vec![m],
            vec![
                card("Defend_R", CardType::Skill, 1, "defend_1"),
                card("Defend_R", CardType::Skill, 0, "defend_free"),
            ],
            3,
        );
        let rec = recommend(&state);
        assert_eq!(rec["defend_1"], 0);
        // 0 費也一樣歸零
        assert_eq!(rec["defend_free"], 0);
    }

    /// Scenario D：能量不足的牌無條件 0 分，即使它能斬殺
    #[test]
    fn test_unaffordable_card_scores_zero() {
        let state = state(
            vec![attacker(5, 10)],
            vec![card("Bludgeon", CardType::Attack, 3, "bludgeon_1")],
            1,
        );
        let rec = recommend(&state);
        assert_eq!(rec["bludgeon_1"], 0);
    }

    #[test]
    fn test_single_card_lethal_beats_combo_contributor() {
        // Bludgeon 32 傷單卡斬殺 30 HP；Strike 只是組合貢獻者
        let state = state(
            vec![attacker(30, 10)],
            vec![
                card("Bludgeon", CardType::Attack, 3, "bludgeon_1"),
                card("Strike_R", CardType::Attack, 1, "strike_1"),
            ],
            4,
        );
        let rec = recommend(&state);
        assert!(rec["bludgeon_1"] > rec["strike_1"]);
    }

    #[test]
    fn test_vulnerability_source_outscores_plain_combo_contributor() {
        // Bash + Strike 組合斬殺：易傷來源必須排在普通貢獻者之前
        let state = state(
            vec![attacker(17, 10)],
            vec![
                card("Bash", CardType::Attack, 2, "bash_1"),
                card("Strike_R", CardType::Attack, 1, "strike_1"),
            ],
            3,
        );
        let rec = recommend(&state);
        let bash = rec["bash_1"];
        let strike = rec["strike_1"];
        assert!(
            bash > strike,
            "vulnerability source ({bash}) should outscore plain contributor ({strike})"
        );
    }

    #[test]
    fn test_vulnerability_setup_value_without_lethal() {
        // 非斬殺回合：Bash 的易傷鋪墊仍應勝過普通攻擊
        let state = state(
            vec![attacker(100, 0)],
            vec![
                card("Bash", CardType::Attack, 2, "bash_1"),
                card("Strike_R", CardType::Attack, 1, "strike_1"),
            ],
            3,
        );
        let rec = recommend(&state);
        assert!(rec["bash_1"] > rec["strike_1"]);
    }

    #[test]
    fn test_lone_vulnerability_source_gets_no_setup_bonus() {
        // 手上沒有其他攻擊牌時，易傷鋪墊沒有後續可放大
        let state = state(
            vec![attacker(100, 0)],
            vec![card("Bash", CardType::Attack, 2, "bash_1")],
            3,
        );
        let rec = recommend(&state);
        // 50 - 5 (高費) + 10 (普通攻擊) = 55
        assert_eq!(rec["bash_1"], 55);
    }

    #[test]
    fn test_aoe_bonus_scales_with_monster_count() {
        let state = state(
            vec![attacker(100, 0), attacker(100, 0), attacker(100, 0)],
            vec![
                card("Cleave", CardType::Attack, 1, "cleave_1"),
                card("Strike_R", CardType::Attack, 1, "strike_1"),
            ],
            3,
        );
        let rec = recommend(&state);
        // Cleave: 50 + 20*3 + 10 = 120 -> clamp 100
        assert_eq!(rec["cleave_1"], 100);
        assert!(rec["cleave_1"] > rec["strike_1"]);

        // 單怪時沒有 AOE 加分
        let solo = self::state(
            vec![attacker(100, 0)],
            vec![card("Cleave", CardType::Attack, 1, "cleave_1")],
            3,
        );
        let rec = recommend(&solo);
        assert_eq!(rec["cleave_1"], 60);
    }

    #[test]
    fn test_multi_hit_scales_with_strength() {
        let mut state = state(
            vec![attacker(100, 0)],
            vec![
                card("Twin Strike", CardType::Attack, 1, "twin_1"),
                card("Strike_R", CardType::Attack, 1, "strike_1"),
            ],
            3,
        );
        state.player.powers.push(crate::game::entities::Power {
            power_id: "Strength".into(),
            name: "Strength".into(),
            amount: 3,
        });
        let rec = recommend(&state);
        // Twin Strike: 50 + (10 + 2*3) + 10 = 76
        assert_eq!(rec["twin_1"], 76);
        assert_eq!(rec["strike_1"], 60);

        // 沒有力量時不加分
        let mut state_no_str = state.clone();
        state_no_str.player.powers.clear();
        let rec = recommend(&state_no_str);
        assert_eq!(rec["twin_1"], 60);
    }

    #[test]
    fn test_power_card_bonus() {
        let state = state(
            vec![attacker(100, 0)],
            vec![
                card("Inflame", CardType::Power, 1, "power_1"),
                card("Slimed", CardType::Status, 1, "status_1"),
            ],
            3,
        );
        let rec = recommend(&state);
        assert_eq!(rec["power_1"], 70);
        // Status 牌只有基礎分
        assert_eq!(rec["status_1"], 50);
    }

    #[test]
    fn test_cost_shaping() {
        let state = state(
            vec![attacker(100, 0)],
            vec![
                card("Anger", CardType::Attack, 0, "free_1"),
                card("Strike_R", CardType::Attack, 1, "one_1"),
                card("Carnage", CardType::Attack, 2, "two_1"),
            ],
            3,
        );
        let rec = recommend(&state);
        // 0 費 +10，1 費無修正，2 費 -5
        assert_eq!(rec["free_1"], 70);
        assert_eq!(rec["one_1"], 60);
        assert_eq!(rec["two_1"], 55);
    }

    #[test]
    fn test_defense_in_danger_and_critical() {
        // 在危險中：+30
        let state_danger = state(
            vec![attacker(100, 10)],
            vec![card("Defend_R", CardType::Skill, 1, "defend_1")],
            3,
        );
        let rec = recommend(&state_danger);
        assert_eq!(rec["defend_1"], 80);

        // 致命：+30 +100 -> clamp 100
        let mut state_critical = state_danger.clone();
        state_critical.player.current_hp = 8;
        let rec = recommend(&state_critical);
        assert_eq!(rec["defend_1"], 100);

        // 格擋已足夠：-10
        let mut state_covered = state_danger;
        state_covered.player.block = 15;
        let rec = recommend(&state_covered);
        assert_eq!(rec["defend_1"], 40);
    }

    #[test]
    fn test_defense_score_monotonic_when_entering_danger() {
        // 同一張防禦牌：從「格擋足夠」轉為「格擋不足」分數不得下降
        let mut covered = state(
            vec![attacker(100, 5)],
            vec![card("Defend_R", CardType::Skill, 1, "defend_1")],
            3,
        );
        covered.player.block = 10;
        let low = recommend(&covered)["defend_1"];

        let mut in_danger = covered.clone();
        in_danger.monsters[0].move_adjusted_damage = Some(15);
        let high = recommend(&in_danger)["defend_1"];

        assert!(high >= low, "entering danger must not lower defend score");
    }

    #[test]
    fn test_non_defense_skill_untouched_by_threat_rules() {
        let mut m = attacker(100, 0);
        m.intent = Intent::Buff;
        let state = state(
            vec![m],
            vec![card("Battle Trance", CardType::Skill, 0, "skill_1")],
            3,
        );
        let rec = recommend(&state);
        // 非防禦技能只吃基礎分與費用修正，不被歸零
        assert_eq!(rec["skill_1"], 60);
    }

    #[test]
    fn test_recommendation_keys_match_hand_exactly() {
        let state = state(
            vec![attacker(20, 10)],
            vec![
                card("Strike_R", CardType::Attack, 1, "a"),
                card("Defend_R", CardType::Skill, 1, "b"),
                card("Bash", CardType::Attack, 2, "c"),
            ],
            3,
        );
        let rec = recommend(&state);
        let mut keys: Vec<&str> = rec.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_hand_yields_empty_map() {
        let state = state(vec![attacker(20, 10)], vec![], 3);
        assert!(recommend(&state).is_empty());
    }

    #[test]
    fn test_recommend_is_idempotent() {
        let state = state(
            vec![attacker(11, 10), attacker(40, 6)],
            vec![
                card("Strike_R", CardType::Attack, 1, "a"),
                card("Bash", CardType::Attack, 2, "b"),
                card("Defend_R", CardType::Skill, 1, "c"),
                card("Inflame", CardType::Power, 1, "d"),
            ],
            3,
        );
        assert_eq!(recommend(&state), recommend(&state));
    }

    #[test]
    fn test_x_cost_card_is_playable() {
        // X 費牌 cost = -1：不觸發能量門檻，也不吃 0 費加分
        let state = state(
            vec![attacker(100, 0)],
            vec![card("Whirlwind", CardType::Attack, -1, "x_1")],
            0,
        );
        let rec = recommend(&state);
        assert_eq!(rec["x_1"], 60);
    }
}

// ============================================================================
// 性質測試
// ============================================================================
