//! 決策引擎核心模組
//!
//! 包含啟發式推薦引擎的核心定義：
//! - `constants`: 計分常量
//! - `entities`: 戰鬥實體（上游轉接層的只讀輸入）
//! - `card_db`: 卡牌啟發式資料表（關鍵字 -> 傷害 / 標籤）
//! - `analysis`: 戰場分析（受傷估算、危險旗標、力量 buff）
//! - `projection`: 本回合最大傷害估算與斬殺表
//! - `scoring`: 逐卡推薦計分
//!
//! 注意：本層全部為純函數，不做任何 I/O；廣播由 service 層處理

pub mod analysis;
pub mod card_db;
pub mod constants;
pub mod entities;
pub mod projection;
pub mod scoring;

// Re-export 服務層實際取用的類型
pub use constants::{DEFAULT_HOST, DEFAULT_PORT};
pub use entities::GameState;
pub use scoring::{recommend, RecommendationMap};
