use super::*;

// [Action]
// 座席と組で提出する. 牌は手牌のTileIdで指定する.
// Chi, Pon, 大明槓の標的の牌はstage.last_discardを参照する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Start,                              // 局開始 (配牌)
    Discard { tile: TileId },           // 打牌
    Chi { tiles: [TileId; 2] },         // チー
    Pon { tiles: [TileId; 2] },         // ポン
    Kan { tiles: Vec<TileId> },         // 3枚: 大明槓, 4枚: 暗槓, 1枚: 加槓
    Riichi { tile: TileId },            // リーチ宣言牌を指定
    Tsumo,                              // ツモ和了
    Ron,                                // ロン和了
    SkipCall,                           // 鳴き,ロンの見送り
    NextRound,                          // 次局へ
}

impl Action {
    #[inline]
    pub fn discard(tile: TileId) -> Self {
        Self::Discard { tile }
    }

    #[inline]
    pub fn riichi(tile: TileId) -> Self {
        Self::Riichi { tile }
    }

    #[inline]
    pub fn chi(a: TileId, b: TileId) -> Self {
        Self::Chi { tiles: [a, b] }
    }

    #[inline]
    pub fn pon(a: TileId, b: TileId) -> Self {
        Self::Pon { tiles: [a, b] }
    }

    #[inline]
    pub fn kan(tiles: Vec<TileId>) -> Self {
        Self::Kan { tiles }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Start => write!(f, "Start"),
            Action::Discard { tile } => write!(f, "Discard({})", tile),
            Action::Chi { tiles } => write!(f, "Chi({}, {})", tiles[0], tiles[1]),
            Action::Pon { tiles } => write!(f, "Pon({}, {})", tiles[0], tiles[1]),
            Action::Kan { tiles } => {
                let v: Vec<String> = tiles.iter().map(|t| t.to_string()).collect();
                write!(f, "Kan({})", v.join(", "))
            }
            Action::Riichi { tile } => write!(f, "Riichi({})", tile),
            Action::Tsumo => write!(f, "Tsumo"),
            Action::Ron => write!(f, "Ron"),
            Action::SkipCall => write!(f, "SkipCall"),
            Action::NextRound => write!(f, "NextRound"),
        }
    }
}

// [CallType]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallType {
    Ron,
    Kan,
    Pon,
    Chi,
}

impl CallType {
    // 鳴きの優先順位 ロン > ポン = 槓 > チー
    #[inline]
    pub fn priority(&self) -> usize {
        match self {
            CallType::Ron => 3,
            CallType::Kan | CallType::Pon => 2,
            CallType::Chi => 1,
        }
    }
}

// [CallOpportunity]
// 打牌に対して可能な鳴き,ロン. 優先順位は含まない.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallOpportunity {
    pub call_type: CallType,
    pub seat: Seat,
    pub tiles: Vec<TileInstance>, // 手牌から消費される牌 (ロンは空)
    pub target: TileInstance,     // 打牌
}

impl CallOpportunity {
    pub fn tile_ids(&self) -> Vec<TileId> {
        self.tiles.iter().map(|t| t.id).collect()
    }

    // 同じ鳴きを表すアクション
    pub fn to_action(&self) -> Action {
        let ids = self.tile_ids();
        match self.call_type {
            CallType::Ron => Action::Ron,
            CallType::Kan => Action::kan(ids),
            CallType::Pon => Action::pon(ids[0], ids[1]),
            CallType::Chi => Action::chi(ids[0], ids[1]),
        }
    }
}

impl fmt::Display for CallOpportunity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v: Vec<String> = self.tiles.iter().map(|t| t.to_string()).collect();
        write!(
            f,
            "{:?}(seat: {}, tiles: [{}], target: {})",
            self.call_type,
            self.seat,
            v.join(", "),
            self.target
        )
    }
}

// [ActionResult]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    pub error: Option<String>,
    pub events: Vec<Event>,
}

impl ActionResult {
    pub fn ok(events: Vec<Event>) -> Self {
        Self {
            success: true,
            error: None,
            events,
        }
    }

    pub fn err(e: &ActionError) -> Self {
        Self {
            success: false,
            error: Some(e.to_string()),
            events: vec![],
        }
    }
}

impl From<Result<Vec<Event>, ActionError>> for ActionResult {
    fn from(r: Result<Vec<Event>, ActionError>) -> Self {
        match r {
            Ok(events) => Self::ok(events),
            Err(e) => Self::err(&e),
        }
    }
}
