//! 手牌解析の性質テスト

use proptest::prelude::*;

use riichi_engine::control::common::{dec_tile, inc_tile, tiles_to_tile_table};
use riichi_engine::control::string::tile_table_from_string;
use riichi_engine::control::wall::{all_instances, create_wall};
use riichi_engine::hand::*;
use riichi_engine::model::*;

// 136枚から重複なしにn枚を選び, 順序をシャッフル
fn hand_strategy(n: usize) -> impl Strategy<Value = Vec<Tile>> {
    prop::sample::subsequence((0..TOTAL_TILES).collect::<Vec<usize>>(), n)
        .prop_shuffle()
        .prop_map(|v| v.into_iter().map(|i| Tile::from_index(i / TILE)).collect())
}

// 4面子1雀頭の和了形 (同じ牌は4枚まで)
fn complete_hand_strategy() -> impl Strategy<Value = TileTable> {
    let set = (0..KIND, any::<bool>()).prop_map(|(i, is_run)| {
        let t = Tile::from_index(i);
        if is_run && t.is_suit() {
            let n = t.1.min(7);
            vec![Tile(t.0, n), Tile(t.0, n + 1), Tile(t.0, n + 2)]
        } else {
            vec![t, t, t]
        }
    });
    (prop::collection::vec(set, 4), 0..KIND)
        .prop_map(|(sets, pair)| {
            let mut tiles: Vec<Tile> = sets.into_iter().flatten().collect();
            let p = Tile::from_index(pair);
            tiles.push(p);
            tiles.push(p);
            tiles_to_tile_table(&tiles)
        })
        .prop_filter("at most 4 copies", |tt| {
            tt.iter().flatten().all(|&c| c <= TILE)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn order_does_not_matter(tiles in hand_strategy(13)) {
        let mut sorted = tiles.clone();
        sorted.sort();
        let a = analyze_hand(&tiles_to_tile_table(&tiles));
        let b = analyze_hand(&tiles_to_tile_table(&sorted));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn shanten_is_bounded(tiles13 in hand_strategy(13), tiles14 in hand_strategy(14)) {
        let s13 = calc_shanten(&tiles_to_tile_table(&tiles13));
        prop_assert!((SHANTEN_TENPAI..=6).contains(&s13), "{}", s13);
        let s14 = calc_shanten(&tiles_to_tile_table(&tiles14));
        prop_assert!((SHANTEN_WIN..=6).contains(&s14), "{}", s14);
    }

    // 1枚加えると向聴数は変わらないか1減る
    #[test]
    fn adding_a_tile_improves_at_most_one(tiles in hand_strategy(13), i in 0..KIND) {
        let mut tt = tiles_to_tile_table(&tiles);
        let s = calc_shanten(&tt);
        let t = Tile::from_index(i);
        inc_tile(&mut tt, t);
        let s2 = calc_shanten(&tt);
        prop_assert!(s2 == s || s2 == s - 1, "{} -> {}", s, s2);
    }

    // 和了牌を加えると和了形, それ以外は和了形にならない
    #[test]
    fn waits_round_trip(tiles in hand_strategy(13)) {
        let mut tt = tiles_to_tile_table(&tiles);
        let waits = calc_waits(&tt);
        for t in Tile::all() {
            inc_tile(&mut tt, t);
            prop_assert_eq!(is_win(&tt), waits.contains(&t), "{}", t);
            dec_tile(&mut tt, t);
        }
    }

    // 和了形から1枚抜くと, その牌が和了牌に含まれる
    #[test]
    fn complete_hand_minus_one_waits_on_it(tt in complete_hand_strategy(), k in 0..14usize) {
        prop_assert!(is_win(&tt));
        let t = Tile::all()
            .flat_map(|t| std::iter::repeat(t).take(tt[t.0][t.1]))
            .nth(k)
            .unwrap();
        let mut tt2 = tt;
        dec_tile(&mut tt2, t);
        prop_assert!(is_tenpai(&tt2));
        prop_assert!(calc_waits(&tt2).contains(&t));

        let discards = calc_discards_to_tenpai(&tt);
        prop_assert!(discards.iter().any(|d| d.discard_tile == t));
    }

    // 聴牌打牌の一覧は各打牌後の聴牌判定と一致
    #[test]
    fn discards_to_tenpai_match(tiles in hand_strategy(14)) {
        let tt = tiles_to_tile_table(&tiles);
        let discards = calc_discards_to_tenpai(&tt);
        for t in Tile::all() {
            if tt[t.0][t.1] == 0 {
                continue;
            }
            let mut tt2 = tt;
            dec_tile(&mut tt2, t);
            let found = discards.iter().find(|d| d.discard_tile == t);
            prop_assert_eq!(found.is_some(), is_tenpai(&tt2));
            if let Some(d) = found {
                prop_assert_eq!(&d.waits, &calc_waits(&tt2));
            }
        }
    }
}

fn table(exp: &str) -> TileTable {
    tile_table_from_string(exp).unwrap()
}

#[test]
fn test_special_forms() {
    // 七対子
    let tt = table("m1133p2244s5566z77");
    assert!(is_win(&tt));
    assert_eq!(calc_chiitoitsu_shanten(&tt), SHANTEN_WIN);

    // 国士無双
    let tt = table("m19p19s19z12345677");
    assert!(is_win(&tt));
    assert_eq!(calc_kokushimusou_shanten(&tt), SHANTEN_WIN);

    // 国士無双13面待ち
    let tt = table("m19p19s19z1234567");
    assert_eq!(calc_waits(&tt).len(), 13);

    // 4面子1雀頭
    let tt = table("m123p456s789z11122");
    assert!(is_win(&tt));
    assert_eq!(calc_chiitoitsu_shanten(&tt), 4);
}

#[test]
fn test_tile_set() {
    let tiles = all_instances(true);
    assert_eq!(tiles.len(), TOTAL_TILES);
    assert_eq!(tiles.iter().filter(|t| t.is_red).count(), 3);
    assert_eq!(all_instances(false).iter().filter(|t| t.is_red).count(), 0);

    let wall = create_wall(1, true);
    assert_eq!(wall.tile_count(), TOTAL_TILES);
    assert_eq!(wall.remaining(), TOTAL_TILES - DEAD_WALL);
    assert_eq!(wall.dora_indicators().len(), 1);
    assert_eq!(wall.tiles().filter(|t| t.is_red).count(), 3);
}
