use super::*;

// [Rule]
// 対局ルール. JSONの設定ファイルから読み込む場合, 省略した項目はデフォルト値
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rule {
    pub round: usize,         // 場数 (1: 東風戦, 2: 半荘戦)
    pub initial_score: Score, // 配給原点
    pub red5: bool,           // 赤5 (各色1枚)
    pub bust: bool,           // 飛びあり
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            round: 1,
            initial_score: 25000,
            red5: true,
            bust: true,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "round: {}, initial_score: {}, red5: {}, bust: {}",
            self.round, self.initial_score, self.red5, self.bust
        )
    }
}
