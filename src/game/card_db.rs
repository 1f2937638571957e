//! 卡牌啟發式資料表 - 宣告式關鍵字定義
//!
//! 本模組提供卡牌傷害 / 標籤的宣告式查找表，取代散落在計分邏輯中的
//! 內嵌字串常量。啟發式本質上是近似：基礎傷害是小型字面表，不是
//! 規則引擎，估算誤差是可接受的設計取捨。
//!
//! # 添加新卡
//!
//! 只需在 `CARD_HEURISTICS` 添加一個條目：
//!
//! ```rust,ignore
//! CardHeuristic {
//!     keyword: "cleave",
//!     base_damage: Some(8),
//!     aoe: true,
//!     ..BLANK
//! }
//! ```
//!
//! 關鍵字以小寫子字串同時比對卡牌識別碼與顯示名稱；一張卡可命中多個
//! 條目（例如 "twin strike" 也包含 "strike"），標籤取聯集，基礎傷害
//! 取最長關鍵字的條目。

/// 一個關鍵字條目
#[derive(Clone, Copy, Debug)]
pub struct CardHeuristic {
    /// 小寫關鍵字（子字串比對）
    pub keyword: &'static str,
    /// 啟發式基礎傷害；None 表示不提供估算（用預設值）
    pub base_damage: Option<i32>,
    /// 打擊全體怪物
    pub aoe: bool,
    /// 多段攻擊（受力量加成放大）
    pub multi_hit: bool,
    /// 施加易傷類 debuff
    pub vulnerability: bool,
    /// 格擋 / 防禦牌
    pub defense: bool,
}

/// 空白模板，條目只需覆寫相關欄位
const BLANK: CardHeuristic = CardHeuristic {
    keyword: "",
    base_damage: None,
    aoe: false,
    multi_hit: false,
    vulnerability: false,
    defense: false,
};

/// 全部關鍵字條目
pub static CARD_HEURISTICS: &[CardHeuristic] = &[
    // ------------------------------------------------------------------
    // 基礎攻擊
    // ------------------------------------------------------------------
    CardHeuristic { keyword: "strike", base_damage: Some(6), ..BLANK },
    CardHeuristic { keyword: "pommel strike", base_damage: Some(9), ..BLANK },
    CardHeuristic { keyword: "wild strike", base_damage: Some(12), ..BLANK },
    CardHeuristic { keyword: "anger", base_damage: Some(6), ..BLANK },
    CardHeuristic { keyword: "iron wave", base_damage: Some(5), ..BLANK },
    CardHeuristic { keyword: "headbutt", base_damage: Some(9), ..BLANK },
    CardHeuristic { keyword: "clash", base_damage: Some(14), ..BLANK },
    CardHeuristic { keyword: "carnage", base_damage: Some(20), ..BLANK },
    CardHeuristic { keyword: "bludgeon", base_damage: Some(32), ..BLANK },
    // ------------------------------------------------------------------
    // 易傷來源
    // ------------------------------------------------------------------
    CardHeuristic { keyword: "bash", base_damage: Some(8), vulnerability: true, ..BLANK },
    CardHeuristic { keyword: "uppercut", base_damage: Some(13), vulnerability: true, ..BLANK },
    CardHeuristic { keyword: "shockwave", vulnerability: true, ..BLANK },
    CardHeuristic { keyword: "terror", vulnerability: true, ..BLANK },
    // ------------------------------------------------------------------
    // AOE
    // ------------------------------------------------------------------
    CardHeuristic { keyword: "cleave", base_damage: Some(8), aoe: true, ..BLANK },
    CardHeuristic { keyword: "whirlwind", base_damage: Some(5), aoe: true, ..BLANK },
    CardHeuristic { keyword: "dagger spray", base_damage: Some(4), aoe: true, ..BLANK },
    CardHeuristic { keyword: "immolate", base_damage: Some(21), aoe: true, ..BLANK },
    CardHeuristic { keyword: "combust", aoe: true, ..BLANK },
    CardHeuristic { keyword: "thunderclap", base_damage: Some(4), aoe: true, vulnerability: true, ..BLANK },
    CardHeuristic { keyword: "consecrate", base_damage: Some(5), aoe: true, ..BLANK },
    CardHeuristic { keyword: "sweeping beam", base_damage: Some(6), aoe: true, ..BLANK },
    CardHeuristic { keyword: "blizzard", aoe: true, ..BLANK },
    CardHeuristic { keyword: "electrodynamics", aoe: true, ..BLANK },
    CardHeuristic { keyword: "hyperbeam", base_damage: Some(26), aoe: true, ..BLANK },
    CardHeuristic { keyword: "all for one", base_damage: Some(10), aoe: true, ..BLANK },
    // ------------------------------------------------------------------
    // 多段攻擊
    // ------------------------------------------------------------------
    CardHeuristic { keyword: "twin strike", base_damage: Some(10), multi_hit: true, ..BLANK },
    CardHeuristic { keyword: "pummel", base_damage: Some(8), multi_hit: true, ..BLANK },
    CardHeuristic { keyword: "sword boomerang", base_damage: Some(9), multi_hit: true, ..BLANK },
    CardHeuristic { keyword: "riddle with holes", multi_hit: true, ..BLANK },
    CardHeuristic { keyword: "tantrum", base_damage: Some(9), multi_hit: true, ..BLANK },
    CardHeuristic { keyword: "barrage", multi_hit: true, ..BLANK },
    CardHeuristic { keyword: "fiend fire", multi_hit: true, ..BLANK },
    // ------------------------------------------------------------------
    // 防禦牌
    // ------------------------------------------------------------------
    CardHeuristic { keyword: "defend", defense: true, ..BLANK },
    CardHeuristic { keyword: "block", defense: true, ..BLANK },
    CardHeuristic { keyword: "wall", defense: true, ..BLANK },
    CardHeuristic { keyword: "shrug it off", defense: true, ..BLANK },
    CardHeuristic { keyword: "impervious", defense: true, ..BLANK },
    CardHeuristic { keyword: "flame barrier", defense: true, ..BLANK },
];

/// 一張卡合併後的啟發式特徵
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeuristicProfile {
    pub base_damage: Option<i32>,
    pub aoe: bool,
    pub multi_hit: bool,
    pub vulnerability: bool,
    pub defense: bool,
}

/// 查找一張卡的啟發式特徵
///
/// 同時比對識別碼與顯示名稱（不分大小寫）。命中多個條目時標籤取
/// 聯集，基礎傷害取最長關鍵字的條目（確定性的平手裁決）。
pub fn profile(card_id: &str, name: &str) -> HeuristicProfile {
    let id = card_id.to_lowercase();
    let name = name.to_lowercase();

    let mut merged = HeuristicProfile::default();
    let mut best_keyword_len = 0;

    for entry in CARD_HEURISTICS {
        if !id.contains(entry.keyword) && !name.contains(entry.keyword) {
            continue;
        }
        merged.aoe |= entry.aoe;
        merged.multi_hit |= entry.multi_hit;
        merged.vulnerability |= entry.vulnerability;
        merged.defense |= entry.defense;
        if let Some(damage) = entry.base_damage {
            if entry.keyword.len() > best_keyword_len {
                merged.base_damage = Some(damage);
                best_keyword_len = entry.keyword.len();
            }
        }
    }

    merged
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strike_base_damage() {
        let p = profile("Strike_R", "Strike");
        assert_eq!(p.base_damage, Some(6));
        assert!(!p.aoe);
        assert!(!p.vulnerability);
    }

    #[test]
    fn test_bash_is_vulnerability_source() {
        let p = profile("Bash", "Bash");
        assert_eq!(p.base_damage, Some(8));
        assert!(p.vulnerability);
    }

    #[test]
    fn test_longest_keyword_wins_base_damage() {
        // "Twin Strike" 同時命中 "strike" (6) 和 "twin strike" (10)
        let p = profile("Twin Strike", "Twin Strike");
        assert_eq!(p.base_damage, Some(10));
        assert!(p.multi_hit);

        // 條目順序不影響結果："Pommel Strike" 一樣取較長關鍵字
        let p = profile("Pommel Strike", "Pommel Strike");
        assert_eq!(p.base_damage, Some(9));
    }

    #[test]
    fn test_matching_is_case_insensitive_on_id_and_name() {
        let p = profile("CLEAVE", "");
        assert!(p.aoe);
        let p = profile("", "Cleave+");
        assert!(p.aoe);
    }

    #[test]
    fn test_thunderclap_merges_tags() {
        let p = profile("Thunderclap", "Thunderclap");
        assert!(p.aoe);
        assert!(p.vulnerability);
        assert_eq!(p.base_damage, Some(4));
    }

    #[test]
    fn test_defense_keywords() {
        assert!(profile("Defend_R", "Defend").defense);
        assert!(profile("", "Ghostly Wall").defense);
        assert!(profile("Impervious", "Impervious").defense);
        assert!(!profile("Strike_R", "Strike").defense);
    }

    #[test]
    fn test_unknown_card_has_empty_profile() {
        let p = profile("Mystery", "Mystery Card");
        assert_eq!(p, HeuristicProfile::default());
    }
}
