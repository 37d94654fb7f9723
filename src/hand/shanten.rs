use crate::control::common::count_tile_table;
use crate::model::*;

// [向聴数]
// -1: 和了形, 0: 聴牌, 1以上: 聴牌までに必要な交換枚数
// 手牌は鳴いた牌を含まない. 副露数は枚数から (14 - n) / 3 として扱う

pub const SHANTEN_WIN: i32 = -1;
pub const SHANTEN_TENPAI: i32 = 0;

pub fn calc_shanten(hand: &TileTable) -> i32 {
    let n = count_tile_table(hand);
    let mut s = calc_normal_shanten(hand);
    if n >= HAND {
        s = s.min(calc_chiitoitsu_shanten(hand));
        s = s.min(calc_kokushimusou_shanten(hand));
    }
    s
}

// 通常形 (4面子1雀頭)
pub fn calc_normal_shanten(hand: &TileTable) -> i32 {
    let n = count_tile_table(hand);
    let n_meld = (14usize.saturating_sub(n)) / 3;
    let mut tt = *hand;

    // 雀頭なし
    let mut best = 8 - calc_sets_value(&mut tt, n_meld);

    // 雀頭候補ごとに面子,塔子の組み合わせを探索
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            if tt[ti][ni] < 2 {
                continue;
            }
            tt[ti][ni] -= 2;
            best = best.min(7 - calc_sets_value(&mut tt, n_meld));
            tt[ti][ni] += 2;
        }
    }
    best
}

// 2 * 面子数 + 塔子数 の最大値 (面子 + 塔子は4まで)
fn calc_sets_value(tt: &mut TileTable, n_meld: usize) -> i32 {
    let mut rows = vec![];
    for ti in 0..TYPE {
        let mut opts = vec![];
        search_row(&mut tt[ti], ti == TZ, 1, 0, 0, &mut opts);
        rows.push(pareto(opts));
    }

    let mut best = 0;
    for &(m0, t0) in &rows[0] {
        for &(m1, t1) in &rows[1] {
            for &(m2, t2) in &rows[2] {
                for &(m3, t3) in &rows[3] {
                    let m = (n_meld + m0 + m1 + m2 + m3).min(4);
                    let t = (t0 + t1 + t2 + t3).min(4 - m);
                    best = best.max(2 * m + t);
                }
            }
        }
    }
    best as i32
}

// 1種類の牌について取り出せる (面子数, 塔子数) の組をすべて列挙
fn search_row(
    tr: &mut TileRow,
    is_honor: bool,
    n: Tnum,
    m: usize,
    t: usize,
    res: &mut Vec<(usize, usize)>,
) {
    let mut n = n;
    while n < TNUM && tr[n] == 0 {
        n += 1;
    }
    if n >= TNUM {
        res.push((m, t));
        return;
    }

    let seq = !is_honor && n <= 7;
    let adj = !is_honor && n <= 8;

    // 刻子
    if tr[n] >= 3 {
        tr[n] -= 3;
        search_row(tr, is_honor, n, m + 1, t, res);
        tr[n] += 3;
    }
    // 順子
    if seq && tr[n + 1] > 0 && tr[n + 2] > 0 {
        tr[n] -= 1;
        tr[n + 1] -= 1;
        tr[n + 2] -= 1;
        search_row(tr, is_honor, n, m + 1, t, res);
        tr[n] += 1;
        tr[n + 1] += 1;
        tr[n + 2] += 1;
    }
    // 対子
    if tr[n] >= 2 {
        tr[n] -= 2;
        search_row(tr, is_honor, n, m, t + 1, res);
        tr[n] += 2;
    }
    // 両面,辺張
    if adj && tr[n + 1] > 0 {
        tr[n] -= 1;
        tr[n + 1] -= 1;
        search_row(tr, is_honor, n, m, t + 1, res);
        tr[n] += 1;
        tr[n + 1] += 1;
    }
    // 嵌張
    if seq && tr[n + 2] > 0 {
        tr[n] -= 1;
        tr[n + 2] -= 1;
        search_row(tr, is_honor, n, m, t + 1, res);
        tr[n] += 1;
        tr[n + 2] += 1;
    }
    // 孤立牌
    tr[n] -= 1;
    search_row(tr, is_honor, n, m, t, res);
    tr[n] += 1;
}

// 他の組に劣る (面子数,塔子数ともに以下) 組を除外
fn pareto(mut opts: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    opts.sort_unstable_by(|a, b| b.cmp(a));
    opts.dedup();
    let mut res: Vec<(usize, usize)> = vec![];
    for o in opts {
        if !res.iter().any(|r| r.0 >= o.0 && r.1 >= o.1) {
            res.push(o);
        }
    }
    res
}

// 七対子 (同じ牌の3枚目以降は対子として数えない)
pub fn calc_chiitoitsu_shanten(hand: &TileTable) -> i32 {
    let mut n_pair = 0;
    let mut n_kind = 0;
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            match hand[ti][ni] {
                0 => {}
                1 => n_kind += 1,
                _ => {
                    n_kind += 1;
                    n_pair += 1;
                }
            }
        }
    }
    6 - n_pair + (7 - n_kind).max(0)
}

// 国士無双
pub fn calc_kokushimusou_shanten(hand: &TileTable) -> i32 {
    let mut n_kind = 0;
    let mut has_pair = false;
    for t in Tile::all().filter(|t| t.is_end()) {
        let c = hand[t.0][t.1];
        if c > 0 {
            n_kind += 1;
        }
        if c >= 2 {
            has_pair = true;
        }
    }
    13 - n_kind - if has_pair { 1 } else { 0 }
}
