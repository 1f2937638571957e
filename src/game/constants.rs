//! 計分常量定義

// ============================================================================
// 推薦分數範圍
// ============================================================================

pub const SCORE_MIN: i32 = 0;        // 分數下限
pub const SCORE_MAX: i32 = 100;      // 分數上限
pub const BASE_SCORE: i32 = 50;      // 每張牌的基礎分

// ============================================================================
// 費用修正
// ============================================================================

pub const ZERO_COST_BONUS: i32 = 10;     // 0 費牌是好的潤滑劑
pub const HIGH_COST_THRESHOLD: i32 = 2;  // 費用 >= 2 視為高費
pub const HIGH_COST_PENALTY: i32 = 5;    // 高費牌扣分

// ============================================================================
// 攻擊牌加分
// ============================================================================

pub const AOE_BONUS_PER_MONSTER: i32 = 20;      // AOE：每隻怪物加分
pub const MULTI_HIT_BASE_BONUS: i32 = 10;       // 有力量時多段攻擊基礎加分
pub const MULTI_HIT_STRENGTH_FACTOR: i32 = 2;   // 每點力量的額外加分

// 斬殺優先序：單卡斬殺 > 易傷組合斬殺 > 普通組合斬殺 > 易傷鋪墊 > 普通攻擊
pub const SINGLE_LETHAL_BONUS: i32 = 50;    // 單卡斬殺
pub const COMBO_LETHAL_BONUS: i32 = 40;     // 組合斬殺
pub const COMBO_VULN_BONUS: i32 = 25;       // 組合斬殺中的易傷來源
pub const COMBO_VULN_COST_OFFSET: i32 = 5;  // 抵銷易傷來源的高費扣分
pub const PLAIN_ATTACK_BONUS: i32 = 10;     // 普通攻擊
pub const VULN_SETUP_BONUS: i32 = 15;       // 非斬殺回合的易傷鋪墊

// ============================================================================
// 防禦牌與能力牌
// ============================================================================

pub const BLOCK_NEEDED_BONUS: i32 = 30;     // 格擋不足時防禦牌加分
pub const BLOCK_CRITICAL_BONUS: i32 = 100;  // 致命傷害必須防住
pub const BLOCK_WASTED_PENALTY: i32 = 10;   // 格擋已足夠時扣分
pub const POWER_CARD_BONUS: i32 = 20;       // 能力牌越早打越好

// ============================================================================
// 傷害估算
// ============================================================================

pub const DEFAULT_ATTACK_DAMAGE: i32 = 6;   // 資料表查不到時的攻擊牌預設傷害
pub const VULNERABLE_MULT_NUM: i32 = 3;     // 易傷乘數 1.5x（整數運算，向下取整）
pub const VULNERABLE_MULT_DEN: i32 = 2;

// ============================================================================
// Power 識別
// ============================================================================

pub const STRENGTH_POWER_ID: &str = "Strength";  // 玩家力量 buff
pub const CURL_UP_POWER_ID: &str = "Curl Up";    // 怪物捲曲護盾（首次受擊時消耗）

// ============================================================================
// 廣播服務
// ============================================================================

pub const DEFAULT_HOST: &str = "127.0.0.1";  // 預設監聽位址
pub const DEFAULT_PORT: u16 = 9999;          // 預設監聽埠
